//! Table assembly.
//!
//! [`TableBuilder`] gathers contributed slices into a single ordered
//! [`ErrorTable`]. Storage order is the order in which slices were added,
//! and within a slice the declaration order. Lookups rely on that order for
//! their first-match tie-break, so the builder never sorts.

use crate::ErrorEntry;


/// Trait for inventory wrapper types to expose their entries.
///
/// Implement this for a wrapper type collected with `inventory::collect!`
/// so [`TableBuilder::extend_inventory`] can walk its submissions.
pub trait TableReg: 'static {
	/// Returns the contributed entries.
	fn entries(&self) -> &'static [ErrorEntry];
}

/// Read-only, ordered collection of error entries.
///
/// May be empty: a program without any contributing crate still gets a
/// valid table.
pub struct ErrorTable {
	label: &'static str,
	entries: Vec<&'static ErrorEntry>,
}

impl ErrorTable {
	/// Returns a table with no entries.
	pub fn empty(label: &'static str) -> Self {
		Self {
			label,
			entries: Vec::new(),
		}
	}

	/// Returns the label used in diagnostics.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns all entries in storage order.
	#[inline]
	pub fn entries(&self) -> &[&'static ErrorEntry] {
		&self.entries
	}

	/// Returns the first entry in storage order.
	#[inline]
	pub fn first(&self) -> Option<&'static ErrorEntry> {
		self.entries.first().copied()
	}

	/// Returns the last entry in storage order.
	#[inline]
	pub fn last(&self) -> Option<&'static ErrorEntry> {
		self.entries.last().copied()
	}

	/// Returns the number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing was contributed.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns an iterator over all entries in storage order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static ErrorEntry> + '_ {
		self.entries.iter().copied()
	}
}

impl core::fmt::Debug for ErrorTable {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ErrorTable")
			.field("label", &self.label)
			.field("len", &self.entries.len())
			.finish()
	}
}

/// Builder for an [`ErrorTable`].
///
/// # Example
///
/// ```rust,ignore
/// let table = TableBuilder::new("errors")
///     .extend_inventory::<ErrorTableReg>()
///     .build();
/// ```
pub struct TableBuilder {
	label: &'static str,
	entries: Vec<&'static ErrorEntry>,
}

impl TableBuilder {
	/// Creates a new builder with the given label for diagnostics.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			entries: Vec::new(),
		}
	}

	/// Appends a single entry.
	pub fn push(mut self, entry: &'static ErrorEntry) -> Self {
		self.entries.push(entry);
		self
	}

	/// Appends entries from an iterator.
	pub fn extend<I: IntoIterator<Item = &'static ErrorEntry>>(mut self, entries: I) -> Self {
		self.entries.extend(entries);
		self
	}

	/// Appends a whole contributed slice in declaration order.
	pub fn extend_table(self, table: &'static [ErrorEntry]) -> Self {
		self.extend(table.iter())
	}

	/// Appends every slice submitted through the wrapper type `R`.
	///
	/// `R` must be collected via `inventory::collect!(R)`. Slices come out
	/// in inventory's iteration order, which is fixed for a given binary.
	pub fn extend_inventory<R>(mut self) -> Self
	where
		R: TableReg,
		inventory::iter<R>: IntoIterator<Item = &'static R>,
	{
		for reg in inventory::iter::<R> {
			self = self.extend_table(reg.entries());
		}
		self
	}

	/// Builds the table.
	///
	/// The same static entry added twice (for instance a slice submitted
	/// from two places) is kept only at its first position. Distinct entries
	/// that share a code are all kept.
	pub fn build(mut self) -> ErrorTable {
		let mut seen = std::collections::HashSet::with_capacity(self.entries.len());
		self.entries
			.retain(|e| seen.insert(*e as *const ErrorEntry as usize));

		tracing::debug!(
			registry = self.label,
			entries = self.entries.len(),
			"error table built"
		);

		ErrorTable {
			label: self.label,
			entries: self.entries,
		}
	}
}

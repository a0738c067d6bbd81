//! Tiered error code resolution.
//!
//! A code raised deep in a stack often carries more detail than any table
//! describes. The [`Resolver`] therefore tries three tiers, from most to
//! least specific, and returns the first hit:
//!
//! 1. [`Tier::Exact`] compares every bit except the origin flag.
//! 2. [`Tier::Class`] compares the generic class and the sub-code, so a
//!    vendor variant still finds the generic description.
//! 3. [`Tier::Subsystem`] compares the sub-code alone, ignoring class and
//!    origin, so an unknown class with a known subsystem status still says
//!    something useful.
//!
//! Every tier is a linear scan in storage order. When several entries match
//! within a tier the first one stored wins.

use errtab_registry::{ERRORS, ErrorEntry, ErrorTable};

use crate::code::ErrorCode;
use crate::layout::CodeLayout;


/// One level of the fallback matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
	/// Full code match.
	Exact,
	/// Generic class plus sub-code.
	Class,
	/// Sub-code only.
	Subsystem,
}

impl Tier {
	/// All tiers in resolution order.
	pub const ALL: [Tier; 3] = [Tier::Exact, Tier::Class, Tier::Subsystem];
}

impl core::fmt::Display for Tier {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Tier::Exact => write!(f, "exact"),
			Tier::Class => write!(f, "class"),
			Tier::Subsystem => write!(f, "subsystem"),
		}
	}
}

/// Resolves codes against an [`ErrorTable`].
///
/// The resolver borrows its table and holds no other state, so it is cheap
/// to create per lookup.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
	table: &'a ErrorTable,
	layout: CodeLayout,
}

impl<'a> Resolver<'a> {
	/// Creates a resolver over `table` with the default layout.
	pub fn new(table: &'a ErrorTable) -> Self {
		Self {
			table,
			layout: CodeLayout::DEFAULT,
		}
	}

	/// Replaces the tier masks.
	pub fn with_layout(mut self, layout: CodeLayout) -> Self {
		self.layout = layout;
		self
	}

	/// Returns the table being searched.
	pub fn table(&self) -> &'a ErrorTable {
		self.table
	}

	/// Returns the active layout.
	pub fn layout(&self) -> &CodeLayout {
		&self.layout
	}

	/// Finds the most specific entry describing `code`.
	///
	/// Returns `None` when no tier matches, which is a normal outcome.
	pub fn find_closest(&self, code: ErrorCode) -> Option<&'static ErrorEntry> {
		self.find_closest_with_tier(code).map(|(_, entry)| entry)
	}

	/// Like [`find_closest`](Self::find_closest), also reporting which tier hit.
	pub fn find_closest_with_tier(&self, code: ErrorCode) -> Option<(Tier, &'static ErrorEntry)> {
		let hit = Tier::ALL
			.into_iter()
			.find_map(|tier| self.find_in_tier(code, tier).map(|entry| (tier, entry)));

		match hit {
			Some((tier, entry)) => {
				tracing::trace!(%code, %tier, text = entry.text, "resolved error code");
			}
			None => tracing::trace!(%code, "no error description"),
		}
		hit
	}

	/// Scans for the first entry matching `code` under a single tier.
	pub fn find_in_tier(&self, code: ErrorCode, tier: Tier) -> Option<&'static ErrorEntry> {
		let mask = self.layout.mask(tier);
		// The subsystem tier drops the class and origin bits from the query.
		let query = match tier {
			Tier::Subsystem => code.bits() & mask,
			Tier::Exact | Tier::Class => code.bits(),
		};
		self.table
			.iter()
			.find(|entry| (entry.bits() ^ query) & mask == 0)
	}
}

/// Finds the closest entry for `code` in the process-wide table.
pub fn find_closest(code: ErrorCode) -> Option<&'static ErrorEntry> {
	Resolver::new(&ERRORS).find_closest(code)
}

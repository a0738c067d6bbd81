//! Error description registry.
//!
//! Any crate in the build may contribute `(code, text)` pairs without knowing
//! about the others. Contributions are submitted through `inventory` with the
//! [`error_table!`] macro and assembled into one read-only [`ErrorTable`] the
//! first time [`ERRORS`] is touched:
//!
//! ```rust,ignore
//! errtab_registry::error_table!(DISK_ERRORS, [
//!     (0x2331, "Disk not ready"),
//!     (0x2332, "Sector not found"),
//! ]);
//!
//! let entry = ERRORS.iter().find(|e| e.code() == 0x2331);
//! ```
//!
//! A built table has no insertion, removal or mutation API. Lookups by code
//! live in the `errtab` crate; this crate only owns the storage.

use std::sync::LazyLock;

mod index;
mod macros;

pub use index::{ErrorTable, TableBuilder, TableReg};
#[doc(hidden)]
pub use inventory;

/// Represents where an error entry was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Shipped with errtab itself.
	Builtin,
	/// Contributed by another crate.
	Crate(&'static str),
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
		}
	}
}

/// A single error description.
///
/// The code is kept in its raw signed form; matching only ever looks at its
/// bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorEntry {
	/// Composite error code.
	pub code: i32,
	/// Human-readable description.
	pub text: &'static str,
	/// Crate that contributed this entry.
	pub source: RegistrySource,
}

impl ErrorEntry {
	/// Creates an entry tagged with the given source.
	pub const fn new(code: i32, text: &'static str, source: RegistrySource) -> Self {
		Self { code, text, source }
	}

	/// Creates an entry shipped with errtab itself.
	pub const fn builtin(code: i32, text: &'static str) -> Self {
		Self::new(code, text, RegistrySource::Builtin)
	}

	/// Returns the raw code.
	#[inline]
	pub const fn code(&self) -> i32 {
		self.code
	}

	/// Returns the code as an unsigned bit pattern.
	#[inline]
	pub const fn bits(&self) -> u32 {
		self.code as u32
	}

	/// Returns the description text.
	#[inline]
	pub const fn text(&self) -> &'static str {
		self.text
	}
}

/// One contributed slice of entries, collected via `inventory`.
pub struct ErrorTableReg(pub &'static [ErrorEntry]);
inventory::collect!(ErrorTableReg);

impl TableReg for ErrorTableReg {
	fn entries(&self) -> &'static [ErrorEntry] {
		self.0
	}
}

/// Every entry contributed anywhere in the program.
pub static ERRORS: LazyLock<ErrorTable> = LazyLock::new(|| {
	TableBuilder::new("errors")
		.extend_inventory::<ErrorTableReg>()
		.build()
});

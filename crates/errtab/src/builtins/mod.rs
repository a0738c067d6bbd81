//! Error tables shipped with errtab.
//!
//! Each table is gated by its own cargo feature so size-constrained builds
//! can leave it out; without any table, every code renders as
//! `"Error 0x%08x"`.
//!
//! - `common-builtins`: the most common generic errors.
//! - `pxe-builtins`: bare PXE statuses, resolved through the subsystem tier.

#[cfg(feature = "common-builtins")]
mod common;
#[cfg(feature = "pxe-builtins")]
mod pxe;

#[cfg(feature = "common-builtins")]
pub use common::COMMON_ERRORS;
#[cfg(feature = "pxe-builtins")]
pub use pxe::PXE_ERRORS;

//! Human-readable descriptions for composite error codes.
//!
//! Crates contribute `(code, text)` tables with [`error_table!`]; errtab
//! assembles them into one table and resolves codes against it with a tiered
//! fallback, so a code carrying vendor-specific detail still finds the
//! closest generic description.
//!
//! ```rust,ignore
//! errtab::error_table!(NIC_ERRORS, [
//!     (0x0007_3106, "Receive ring allocation failed"),
//! ]);
//!
//! assert_eq!(errtab::describe(-0x3106), "Out of memory (0x00003106)");
//! assert_eq!(errtab::describe(0x4c7f), "Error 0x00004c7f");
//! ```
//!
//! # Modules
//!
//! - [`code`] - bitfield layout of a composite code
//! - [`layout`] - per-tier comparison masks
//! - [`resolve`] - tiered lookup
//! - [`render`] - message formatting
//! - [`errno`] - well-known codes
//! - [`builtins`] - tables shipped with errtab

pub mod builtins;
pub mod code;
pub mod errno;
pub mod layout;
pub mod render;
pub mod resolve;

pub use code::ErrorCode;
pub use errtab_registry as registry;
pub use errtab_registry::{ERRORS, ErrorEntry, ErrorTable, RegistrySource, error_table};
pub use layout::{CodeLayout, LayoutError};
pub use render::{Description, MessageBuf, RENDER_CAPACITY, Renderer, describe, describe_into};
pub use resolve::{Resolver, Tier, find_closest};

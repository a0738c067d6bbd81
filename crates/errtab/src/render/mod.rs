//! Error message rendering.
//!
//! Turns a status (or its negated return-code form) into text:
//!
//! - `"<description> (0x%08x)"` when some tier resolves the code;
//! - `"Error 0x%08x"` otherwise.
//!
//! The hex part always shows the normalized input code, not the code of the
//! entry that matched, so a fallback match still reports what was raised.
//!
//! [`describe`] returns an owned string. Callers that need bounded, reusable
//! storage render into their own [`MessageBuf`] with [`describe_into`]; each
//! call overwrites what the previous one left there.

use core::fmt::{self, Write as _};

use errtab_registry::{ERRORS, ErrorEntry, ErrorTable};

use crate::code::ErrorCode;
use crate::layout::CodeLayout;
use crate::resolve::Resolver;

mod buf;
#[cfg(test)]
mod tests;

pub use buf::{MessageBuf, RENDER_CAPACITY};

/// A resolved (or unresolved) code, ready to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description {
	/// The normalized code that was looked up.
	pub code: ErrorCode,
	/// The closest entry, if any tier matched.
	pub entry: Option<&'static ErrorEntry>,
}

impl fmt::Display for Description {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.entry {
			Some(entry) => write!(f, "{} ({})", entry.text, self.code),
			None => write!(f, "Error {}", self.code),
		}
	}
}

/// Renders codes against a table.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
	resolver: Resolver<'a>,
}

impl<'a> Renderer<'a> {
	pub fn new(table: &'a ErrorTable) -> Self {
		Self {
			resolver: Resolver::new(table),
		}
	}

	/// Replaces the tier masks used for resolution.
	pub fn with_layout(self, layout: CodeLayout) -> Self {
		Self {
			resolver: self.resolver.with_layout(layout),
		}
	}

	pub fn resolver(&self) -> &Resolver<'a> {
		&self.resolver
	}

	/// Normalizes the sign of `status` and resolves it.
	pub fn resolve(&self, status: i32) -> Description {
		let code = ErrorCode::normalized(status);
		Description {
			code,
			entry: self.resolver.find_closest(code),
		}
	}

	/// Renders `status` into a new string.
	pub fn describe(&self, status: i32) -> String {
		self.resolve(status).to_string()
	}

	/// Renders `status` into `buf`, replacing its contents.
	///
	/// Output longer than the buffer keeps its leading part.
	pub fn describe_into<'b, const N: usize>(
		&self,
		status: i32,
		buf: &'b mut MessageBuf<N>,
	) -> &'b str {
		buf.clear();
		let written = write!(buf, "{}", self.resolve(status));
		debug_assert!(written.is_ok());
		buf.as_str()
	}
}

/// Renders `status` using every entry contributed to the program.
///
/// `describe(c)` and `describe(-c)` give the same text.
pub fn describe(status: i32) -> String {
	Renderer::new(&ERRORS).describe(status)
}

/// Renders `status` into caller-owned storage using every contributed entry.
pub fn describe_into<const N: usize>(status: i32, buf: &mut MessageBuf<N>) -> &str {
	Renderer::new(&ERRORS).describe_into(status, buf)
}

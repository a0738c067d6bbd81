use core::fmt;
use core::ops::Deref;

/// Default capacity of a [`MessageBuf`].
pub const RENDER_CAPACITY: usize = 64;

/// Fixed-capacity inline text buffer for rendered messages.
///
/// Writes past the capacity are dropped at a character boundary, and once a
/// write has been cut every later write is dropped too, so the contents are
/// always a prefix of the full message. Writing never fails and never
/// allocates.
pub struct MessageBuf<const N: usize = RENDER_CAPACITY> {
	bytes: [u8; N],
	len: usize,
	truncated: bool,
}

impl<const N: usize> MessageBuf<N> {
	pub const fn new() -> Self {
		Self {
			bytes: [0; N],
			len: 0,
			truncated: false,
		}
	}

	/// Returns the maximum length in bytes.
	#[inline]
	pub const fn capacity(&self) -> usize {
		N
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		// Writes only ever stop at char boundaries.
		core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
	}

	/// Returns true if any write since the last clear was cut short.
	#[inline]
	pub fn is_truncated(&self) -> bool {
		self.truncated
	}

	/// Discards the current contents.
	pub fn clear(&mut self) {
		self.len = 0;
		self.truncated = false;
	}
}

impl<const N: usize> fmt::Write for MessageBuf<N> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		if self.truncated {
			return Ok(());
		}

		let room = N - self.len;
		let mut cut = s.len().min(room);
		while !s.is_char_boundary(cut) {
			cut -= 1;
		}
		self.bytes[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
		self.len += cut;
		self.truncated = cut < s.len();
		Ok(())
	}
}

impl<const N: usize> Default for MessageBuf<N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<const N: usize> Deref for MessageBuf<N> {
	type Target = str;

	fn deref(&self) -> &str {
		self.as_str()
	}
}

impl<const N: usize> fmt::Display for MessageBuf<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl<const N: usize> fmt::Debug for MessageBuf<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MessageBuf")
			.field("capacity", &N)
			.field("text", &self.as_str())
			.field("truncated", &self.truncated)
			.finish()
	}
}

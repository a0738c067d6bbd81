//! Composite error codes.
//!
//! A code packs several layers of information into 32 bits:
//!
//! | bits    | field                                  |
//! |---------|----------------------------------------|
//! | `7:0`   | subsystem sub-code (e.g. a PXE status) |
//! | `15:8`  | generic portable error class           |
//! | `30:16` | reserved, carries vendor variants      |
//! | `31`    | origin flag                            |

/// Bits holding the subsystem sub-code.
pub const SUB_CODE_MASK: u32 = 0x0000_00ff;
/// Bits holding the generic error class.
pub const CLASS_MASK: u32 = 0x0000_ff00;
/// Bits reserved for vendor-specific variants.
pub const RESERVED_MASK: u32 = 0x7fff_0000;
/// The origin flag.
pub const ORIGIN_FLAG: u32 = 0x8000_0000;

const CLASS_SHIFT: u32 = 8;
const RESERVED_SHIFT: u32 = 16;

/// A 32-bit composite error code.
///
/// Displays as `0x` followed by exactly eight lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
	/// Composes a code from a generic class and a subsystem sub-code.
	pub const fn compose(class: u8, sub_code: u8) -> Self {
		Self(((class as u32) << CLASS_SHIFT) | sub_code as u32)
	}

	/// Normalizes a status or its negated return-code form.
	///
	/// `-c` and `c` produce the same code. `i32::MIN` maps to `0x80000000`.
	pub const fn normalized(status: i32) -> Self {
		Self(status.unsigned_abs())
	}

	/// Returns the raw bit pattern.
	#[inline]
	pub const fn bits(self) -> u32 {
		self.0
	}

	/// Returns the bit pattern reinterpreted as a signed status.
	#[inline]
	pub const fn as_i32(self) -> i32 {
		self.0 as i32
	}

	#[inline]
	pub const fn sub_code(self) -> u8 {
		(self.0 & SUB_CODE_MASK) as u8
	}

	#[inline]
	pub const fn class(self) -> u8 {
		((self.0 & CLASS_MASK) >> CLASS_SHIFT) as u8
	}

	/// Returns the reserved vendor bits, shifted down.
	#[inline]
	pub const fn reserved(self) -> u16 {
		((self.0 & RESERVED_MASK) >> RESERVED_SHIFT) as u16
	}

	#[inline]
	pub const fn has_origin(self) -> bool {
		self.0 & ORIGIN_FLAG != 0
	}

	/// Returns this code with the reserved vendor bits replaced.
	///
	/// Only the low 15 bits of `variant` fit.
	pub const fn with_reserved(self, variant: u16) -> Self {
		let reserved = ((variant as u32) << RESERVED_SHIFT) & RESERVED_MASK;
		Self((self.0 & !RESERVED_MASK) | reserved)
	}

	/// Returns this code with the origin flag set.
	pub const fn with_origin(self) -> Self {
		Self(self.0 | ORIGIN_FLAG)
	}
}

impl From<u32> for ErrorCode {
	fn from(bits: u32) -> Self {
		Self(bits)
	}
}

/// Reinterprets the bits; use [`ErrorCode::normalized`] for return codes.
impl From<i32> for ErrorCode {
	fn from(code: i32) -> Self {
		Self(code as u32)
	}
}

impl core::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{:#010x}", self.0)
	}
}

impl core::fmt::LowerHex for ErrorCode {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		core::fmt::LowerHex::fmt(&self.0, f)
	}
}

//! Tier masks.
//!
//! [`CodeLayout`] holds the mask each resolution tier compares under. The
//! defaults match the field boundaries in [`crate::code`]; deployments that
//! pack their codes differently can supply their own masks, either in code or
//! through serde:
//!
//! ```rust,ignore
//! let layout: CodeLayout = serde_json::from_str(r#"{ "class": 65535 }"#)?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::code::{CLASS_MASK, ORIGIN_FLAG, SUB_CODE_MASK};
use crate::resolve::Tier;

/// Errors from building a [`CodeLayout`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
	/// A tier would compare no bits at all.
	#[error("{0} mask must not be zero")]
	EmptyMask(Tier),
	/// A later tier compares bits an earlier tier ignores.
	#[error("{inner} mask {inner_mask:#010x} is not contained in {outer} mask {outer_mask:#010x}")]
	NotNested {
		inner: Tier,
		inner_mask: u32,
		outer: Tier,
		outer_mask: u32,
	},
}

/// Masks used by the three resolution tiers.
///
/// Invariant: every mask is non-zero and
/// `subsystem ⊆ class ⊆ exact`, so each tier is at most as strict as the one
/// before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct CodeLayout {
	exact: u32,
	class: u32,
	subsystem: u32,
}

impl CodeLayout {
	/// Every bit except the origin flag; sub-code plus class; sub-code only.
	pub const DEFAULT: Self = Self {
		exact: !ORIGIN_FLAG,
		class: CLASS_MASK | SUB_CODE_MASK,
		subsystem: SUB_CODE_MASK,
	};

	/// Builds a layout, validating the mask invariants.
	pub fn new(exact: u32, class: u32, subsystem: u32) -> Result<Self, LayoutError> {
		for (tier, mask) in [
			(Tier::Exact, exact),
			(Tier::Class, class),
			(Tier::Subsystem, subsystem),
		] {
			if mask == 0 {
				return Err(LayoutError::EmptyMask(tier));
			}
		}
		if class & !exact != 0 {
			return Err(LayoutError::NotNested {
				inner: Tier::Class,
				inner_mask: class,
				outer: Tier::Exact,
				outer_mask: exact,
			});
		}
		if subsystem & !class != 0 {
			return Err(LayoutError::NotNested {
				inner: Tier::Subsystem,
				inner_mask: subsystem,
				outer: Tier::Class,
				outer_mask: class,
			});
		}
		Ok(Self {
			exact,
			class,
			subsystem,
		})
	}

	/// Returns the mask compared under `tier`.
	#[inline]
	pub const fn mask(&self, tier: Tier) -> u32 {
		match tier {
			Tier::Exact => self.exact,
			Tier::Class => self.class,
			Tier::Subsystem => self.subsystem,
		}
	}
}

impl Default for CodeLayout {
	fn default() -> Self {
		Self::DEFAULT
	}
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLayout {
	exact: u32,
	class: u32,
	subsystem: u32,
}

impl Default for RawLayout {
	fn default() -> Self {
		let CodeLayout {
			exact,
			class,
			subsystem,
		} = CodeLayout::DEFAULT;
		Self {
			exact,
			class,
			subsystem,
		}
	}
}

impl TryFrom<RawLayout> for CodeLayout {
	type Error = LayoutError;

	fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
		Self::new(raw.exact, raw.class, raw.subsystem)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn default_masks() {
		let layout = CodeLayout::default();
		assert_eq!(layout.mask(Tier::Exact), 0x7fff_ffff);
		assert_eq!(layout.mask(Tier::Class), 0x0000_ffff);
		assert_eq!(layout.mask(Tier::Subsystem), 0x0000_00ff);
		assert_eq!(
			CodeLayout::new(0x7fff_ffff, 0xffff, 0xff),
			Ok(CodeLayout::DEFAULT)
		);
	}

	#[test]
	fn rejects_empty_mask() {
		assert_eq!(
			CodeLayout::new(0x7fff_ffff, 0, 0),
			Err(LayoutError::EmptyMask(Tier::Class))
		);
	}

	#[test]
	fn rejects_widening_tiers() {
		let err = CodeLayout::new(0x0000_ffff, 0x00ff_ffff, 0xff).unwrap_err();
		assert_eq!(
			err.to_string(),
			"class mask 0x00ffffff is not contained in exact mask 0x0000ffff"
		);

		let err = CodeLayout::new(0x7fff_ffff, 0xff00, 0xff).unwrap_err();
		assert!(matches!(
			err,
			LayoutError::NotNested {
				inner: Tier::Subsystem,
				..
			}
		));
	}

	#[test]
	fn deserializes_with_defaults() {
		let layout: CodeLayout = serde_json::from_str(r#"{ "subsystem": 15 }"#).unwrap();
		assert_eq!(layout.mask(Tier::Subsystem), 0x0f);
		assert_eq!(layout.mask(Tier::Class), 0xffff);
	}

	#[test]
	fn deserialize_validates() {
		let err = serde_json::from_str::<CodeLayout>(r#"{ "exact": 255 }"#).unwrap_err();
		assert!(err.to_string().contains("not contained in exact mask"));
	}

	#[test]
	fn serializes_fields() {
		let json = serde_json::to_string(&CodeLayout::DEFAULT).unwrap();
		assert_eq!(
			json,
			r#"{"exact":2147483647,"class":65535,"subsystem":255}"#
		);
	}
}

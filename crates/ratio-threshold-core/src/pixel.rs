//! Sample types supported by the buffer model.

use serde::{Deserialize, Serialize};
use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// A single-channel greyscale sample.
///
/// Implemented for `u8` (8-bit images) and `u16` (16-bit images). All
/// estimators are generic over this trait so one binary handles both depths.
pub trait Pixel:
    sealed::Sealed + Copy + Ord + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Number of significant bits per sample.
    const BIT_DEPTH: u32;
    /// Largest representable sample value (white).
    const MAX: Self;
    /// Smallest representable sample value (black).
    const ZERO: Self;
    /// Number of distinct values, `2^BIT_DEPTH`. This is the histogram size.
    const LEVELS: usize = 1 << Self::BIT_DEPTH;
    /// Runtime tag matching this sample type.
    const DEPTH: BitDepth;

    fn to_usize(self) -> usize;

    fn to_f64(self) -> f64;

    /// Convert a histogram bin index back into a sample.
    ///
    /// Indices past `MAX` saturate.
    fn from_index(index: usize) -> Self;

    /// Truncate toward zero and saturate into `[0, MAX]`. NaN maps to `0`.
    fn from_f64_saturating(value: f64) -> Self;
}

impl Pixel for u8 {
    const BIT_DEPTH: u32 = 8;
    const MAX: Self = u8::MAX;
    const ZERO: Self = 0;
    const DEPTH: BitDepth = BitDepth::Eight;

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index.min(u8::MAX as usize) as u8
    }

    #[inline]
    fn from_f64_saturating(value: f64) -> Self {
        // `as` truncates toward zero and saturates; NaN becomes 0.
        value as u8
    }
}

impl Pixel for u16 {
    const BIT_DEPTH: u32 = 16;
    const MAX: Self = u16::MAX;
    const ZERO: Self = 0;
    const DEPTH: BitDepth = BitDepth::Sixteen;

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index.min(u16::MAX as usize) as u16
    }

    #[inline]
    fn from_f64_saturating(value: f64) -> Self {
        value as u16
    }
}

/// Runtime-selected sample width.
///
/// Serialized as the bit count (`8` or `16`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BitDepth {
    #[default]
    Eight,
    Sixteen,
}

impl BitDepth {
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    /// Largest sample value at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            BitDepth::Eight => u8::MAX as u32,
            BitDepth::Sixteen => u16::MAX as u32,
        }
    }
}

/// Returned when a bit count other than 8 or 16 is requested.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unsupported bit depth {0} (expected 8 or 16)")]
pub struct UnsupportedBitDepth(pub u8);

impl TryFrom<u8> for BitDepth {
    type Error = UnsupportedBitDepth;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            other => Err(UnsupportedBitDepth(other)),
        }
    }
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

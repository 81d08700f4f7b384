//! Target black-pixel fraction.

use crate::InvalidArgument;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of pixels that should end up black, validated to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Ratio(f32);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0.0);
    pub const HALF: Ratio = Ratio(0.5);
    pub const ONE: Ratio = Ratio(1.0);

    pub fn new(value: f32) -> Result<Self, InvalidArgument> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(InvalidArgument::RatioOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Sorted position whose value is the threshold for `len` samples.
    ///
    /// `floor(len * ratio)`, clamped to the last element so that ratio `1.0`
    /// selects the maximum. `len` must be non-zero.
    #[inline]
    pub fn quantile_index(self, len: usize) -> usize {
        debug_assert!(len > 0);
        let n = (len as f64 * self.0 as f64).floor() as usize;
        n.min(len - 1)
    }
}

impl Default for Ratio {
    /// One third black, the classic document-scan setting.
    fn default() -> Self {
        Ratio(0.33)
    }
}

impl TryFrom<f32> for Ratio {
    type Error = InvalidArgument;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Ratio::new(value)
    }
}

impl From<Ratio> for f32 {
    fn from(ratio: Ratio) -> Self {
        ratio.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

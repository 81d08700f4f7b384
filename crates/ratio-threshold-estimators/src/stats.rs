//! Moment-based heuristic estimators.
//!
//! Neither estimator is exact. Both assume the intensity distribution has a
//! particular shape and map the ratio through that assumption, so their
//! results are only comparable to the exact estimators on well-behaved
//! images.

use crate::error::ensure_non_empty;
use crate::{Ratio, ThresholdError};
use ratio_threshold_core::Pixel;
use std::f64::consts::SQRT_2;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Population mean, truncated to a pixel value. `pixels` must be non-empty.
pub(crate) fn mean<P: Pixel>(pixels: &[P]) -> P {
    let total: u64 = pixels.iter().map(|&p| p.to_usize() as u64).sum();
    P::from_index((total / pixels.len() as u64) as usize)
}

/// Population standard deviation (divides by N) around the truncated `mean`.
pub(crate) fn std_dev<P: Pixel>(pixels: &[P], mean: P) -> f64 {
    let mean = mean.to_usize() as i64;
    let sum_sq: u64 = pixels
        .iter()
        .map(|&p| {
            let d = p.to_usize() as i64 - mean;
            (d * d) as u64
        })
        .sum();
    (sum_sq as f64 / pixels.len() as f64).sqrt()
}

/// Rough standard-normal z-score for `r`.
///
/// `sqrt(2) * (r + r^3 + r^5 + r^7)` is the leading terms of an inverse-erf
/// series with the coefficients dropped. It is only close for small `r` and
/// is kept as-is for comparability, not as an inverse CDF.
pub(crate) fn crude_z_score(r: f64) -> f64 {
    let r2 = r * r;
    let r3 = r * r2;
    let r5 = r3 * r2;
    let r7 = r5 * r2;
    SQRT_2 * (r + r3 + r5 + r7)
}

/// Threshold assuming normally distributed intensities: `mean + z * sigma`.
///
/// Two passes over the data, no allocation. The result is truncated and
/// saturated into the pixel range.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pixels), fields(len = pixels.len(), ratio = ratio.get()))
)]
pub fn normal_estimate<P: Pixel>(pixels: &[P], ratio: Ratio) -> Result<P, ThresholdError> {
    ensure_non_empty(pixels)?;
    let mu = mean(pixels);
    let sigma = std_dev(pixels, mu);
    let z = crude_z_score(ratio.get() as f64);
    log::trace!("normal estimate: mean={mu} sigma={sigma:.3} z={z:.4}");
    Ok(P::from_f64_saturating(mu.to_f64() + z * sigma))
}

/// Threshold by linear interpolation around the mean.
///
/// Ratios above one half interpolate from the mean up to `P::MAX` using
/// `(r - 0.5) / 0.5`; otherwise from zero up to the mean using `r / 0.5`.
/// This treats intensities as spread evenly on either side of the mean.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pixels), fields(len = pixels.len(), ratio = ratio.get()))
)]
pub fn weighted_estimate<P: Pixel>(pixels: &[P], ratio: Ratio) -> Result<P, ThresholdError> {
    ensure_non_empty(pixels)?;
    let mu = mean(pixels).to_f64();
    let r = ratio.get() as f64;
    let (lo, hi, fraction) = if r > 0.5 {
        (mu, P::MAX.to_f64(), (r - 0.5) / 0.5)
    } else {
        (0.0, mu, r / 0.5)
    };
    Ok(P::from_f64_saturating(lo + (hi - lo) * fraction))
}

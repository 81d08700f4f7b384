//! In-place estimators. Both reorder the caller's buffer.

use crate::error::ensure_non_empty;
use crate::{Ratio, ThresholdError};
use ratio_threshold_core::Pixel;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Sort `pixels` ascending and return the element at the quantile index.
///
/// Leaves `pixels` fully sorted. O(N log N).
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pixels), fields(len = pixels.len(), ratio = ratio.get()))
)]
pub fn standard_sort<P: Pixel>(pixels: &mut [P], ratio: Ratio) -> Result<P, ThresholdError> {
    ensure_non_empty(pixels)?;
    let n = ratio.quantile_index(pixels.len());
    pixels.sort_unstable();
    Ok(pixels[n])
}

/// Partition `pixels` so the quantile element lands in its sorted position
/// (introselect) and return it.
///
/// Leaves `pixels` partially reordered. O(N) on average.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pixels), fields(len = pixels.len(), ratio = ratio.get()))
)]
pub fn nth_element<P: Pixel>(pixels: &mut [P], ratio: Ratio) -> Result<P, ThresholdError> {
    ensure_non_empty(pixels)?;
    let n = ratio.quantile_index(pixels.len());
    let (_, nth, _) = pixels.select_nth_unstable(n);
    Ok(*nth)
}

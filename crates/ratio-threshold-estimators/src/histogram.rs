//! Counting-sort estimators: full histogram and uniformly sampled histogram.

use crate::error::ensure_non_empty;
use crate::{InvalidArgument, Ratio, ThresholdError};
use ratio_threshold_core::Pixel;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Default stride for [`uniform_sample`]: every 10th pixel.
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;

/// Per-value counts over `[0, P::LEVELS)`.
fn histogram<P: Pixel>(samples: impl Iterator<Item = P>) -> Vec<usize> {
    let mut counts = vec![0usize; P::LEVELS];
    for v in samples {
        counts[v.to_usize()] += 1;
    }
    counts
}

/// First value whose cumulative count exceeds `n`.
///
/// This is the value a full ascending sort would hold at index `n`, which is
/// what keeps the counting estimators in agreement with the sorting ones.
/// `n` must be smaller than the histogram total.
fn value_at_rank<P: Pixel>(counts: &[usize], n: usize) -> P {
    let mut total = 0usize;
    for (value, &count) in counts.iter().enumerate() {
        total += count;
        if total > n {
            return P::from_index(value);
        }
    }
    P::MAX
}

/// Exact ratio threshold via a counting-sort histogram.
///
/// O(N + 2^depth) time, O(2^depth) extra space. Does not modify `pixels`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pixels), fields(len = pixels.len(), ratio = ratio.get()))
)]
pub fn counting_sort<P: Pixel>(pixels: &[P], ratio: Ratio) -> Result<P, ThresholdError> {
    ensure_non_empty(pixels)?;
    let counts = histogram(pixels.iter().copied());
    Ok(value_at_rank(&counts, ratio.quantile_index(pixels.len())))
}

/// Counting-sort threshold over every `stride`-th pixel only.
///
/// Visits indices `0, stride, 2 * stride, ...` and takes the quantile over the
/// number of samples actually visited. A stride of 1 is identical to
/// [`counting_sort`]; larger strides trade accuracy for speed and only work
/// well on large or low-detail images.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pixels), fields(len = pixels.len(), ratio = ratio.get()))
)]
pub fn uniform_sample<P: Pixel>(
    pixels: &[P],
    stride: usize,
    ratio: Ratio,
) -> Result<P, ThresholdError> {
    ensure_non_empty(pixels)?;
    if stride == 0 {
        return Err(InvalidArgument::ZeroStride.into());
    }
    let sampled = pixels.len().div_ceil(stride);
    let counts = histogram(pixels.iter().step_by(stride).copied());
    Ok(value_at_rank(&counts, ratio.quantile_index(sampled)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(v: f32) -> Ratio {
        Ratio::new(v).expect("ratio")
    }

    #[test]
    fn counting_sort_picks_value_at_quantile_index() {
        let px = [50u8, 10, 40, 20, 30];
        assert_eq!(counting_sort(&px, ratio(0.4)), Ok(30));
        assert_eq!(counting_sort(&px, Ratio::ZERO), Ok(10));
        assert_eq!(counting_sort(&px, Ratio::ONE), Ok(50));
    }

    #[test]
    fn counting_sort_handles_repeated_values() {
        let px = [7u8, 7, 7, 7, 200, 200];
        assert_eq!(counting_sort(&px, ratio(0.5)), Ok(7));
        assert_eq!(counting_sort(&px, ratio(0.7)), Ok(200));
    }

    #[test]
    fn counting_sort_covers_sixteen_bit_range() {
        let px = [0u16, 1_000, 65_535, 30_000];
        assert_eq!(counting_sort(&px, ratio(0.75)), Ok(65_535));
        assert_eq!(counting_sort(&px, ratio(0.5)), Ok(30_000));
    }

    #[test]
    fn empty_buffer_is_invalid() {
        let px: [u8; 0] = [];
        assert_eq!(
            counting_sort(&px, Ratio::HALF),
            Err(ThresholdError::InvalidArgument(InvalidArgument::EmptyImage))
        );
        assert_eq!(
            uniform_sample(&px, 4, Ratio::HALF),
            Err(ThresholdError::InvalidArgument(InvalidArgument::EmptyImage))
        );
    }

    #[test]
    fn zero_stride_is_invalid() {
        assert_eq!(
            uniform_sample(&[1u8, 2, 3], 0, Ratio::HALF),
            Err(ThresholdError::InvalidArgument(InvalidArgument::ZeroStride))
        );
    }

    #[test]
    fn uniform_sample_only_reads_strided_pixels() {
        // Samples are indices 0, 3, 6: values 100, 110, 120.
        let px = [100u8, 0, 0, 110, 0, 0, 120, 0];
        assert_eq!(uniform_sample(&px, 3, Ratio::ZERO), Ok(100));
        assert_eq!(uniform_sample(&px, 3, ratio(0.5)), Ok(110));
        assert_eq!(uniform_sample(&px, 3, Ratio::ONE), Ok(120));
    }

    #[test]
    fn stride_larger_than_image_reads_first_pixel() {
        let px = [42u8, 1, 2, 3];
        assert_eq!(uniform_sample(&px, 100, Ratio::ONE), Ok(42));
    }
}

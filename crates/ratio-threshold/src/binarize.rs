//! Apply a threshold to produce a pure black/white image.

use ratio_threshold_core::{GrayImage, GrayImageView, Pixel};
use std::cmp::Ordering;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Map one sample to black (`0`) or white (`P::MAX`).
///
/// Samples above `threshold` become white and samples below become black.
/// A sample equal to the threshold becomes black, except that a sample
/// already at `0` or `P::MAX` is left unchanged.
#[inline]
pub fn binarize_pixel<P: Pixel>(value: P, threshold: P) -> P {
    match value.cmp(&threshold) {
        Ordering::Greater => P::MAX,
        Ordering::Less => P::ZERO,
        Ordering::Equal if value == P::ZERO || value == P::MAX => value,
        Ordering::Equal => P::ZERO,
    }
}

/// Binarize `pixels` in place.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pixels, threshold), fields(len = pixels.len()))
)]
pub fn binarize<P: Pixel>(pixels: &mut [P], threshold: P) {
    for p in pixels.iter_mut() {
        *p = binarize_pixel(*p, threshold);
    }
}

/// Binarized copy of `src`.
pub fn binarized<P: Pixel>(src: &GrayImageView<'_, P>, threshold: P) -> GrayImage<P> {
    let mut out = src.to_owned_image();
    binarize(out.as_mut_slice(), threshold);
    out
}

/// Fraction of samples that are exactly black. `0.0` for an empty buffer.
pub fn black_fraction<P: Pixel>(pixels: &[P]) -> f64 {
    if pixels.is_empty() {
        return 0.0;
    }
    let black = pixels.iter().filter(|&&p| p == P::ZERO).count();
    black as f64 / pixels.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ties_round_to_black_except_at_extremes() {
        let t = 128u8;
        let mut px = [0u8, t, t, 255];
        binarize(&mut px, t);
        assert_eq!(px, [0, 0, 0, 255]);
    }

    #[test]
    fn threshold_at_white_keeps_white_ties() {
        let mut px = [254u8, 255, 0];
        binarize(&mut px, 255);
        assert_eq!(px, [0, 255, 0]);
    }

    #[test]
    fn threshold_at_black_keeps_black_ties() {
        let mut px = [0u16, 1, 65_535];
        binarize(&mut px, 0);
        assert_eq!(px, [0, 65_535, 65_535]);
    }

    #[test]
    fn output_is_always_black_or_white() {
        let src: Vec<u8> = (0..=255).collect();
        for t in [0u8, 1, 100, 254, 255] {
            let mut px = src.clone();
            binarize(&mut px, t);
            assert!(px.iter().all(|&p| p == 0 || p == 255), "threshold {t}");
        }
    }

    #[test]
    fn binarized_leaves_source_untouched() {
        let data = [10u8, 200, 90, 91];
        let view = GrayImageView::new(2, 2, &data).expect("view");
        let out = binarized(&view, 90);
        assert_eq!(out.data, vec![0, 255, 0, 255]);
        assert_eq!(data, [10, 200, 90, 91]);
    }

    #[test]
    fn black_fraction_counts_zeros() {
        assert_relative_eq!(black_fraction(&[0u8, 255, 0, 255]), 0.5);
        assert_relative_eq!(black_fraction::<u8>(&[]), 0.0);
    }
}

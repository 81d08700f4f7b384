//! Image decode/encode via the `image` crate.

use crate::IoError;
use image::{DynamicImage, ImageBuffer, ImageReader, Luma};
use ratio_threshold_core::{BitDepth, BufferError, GrayImage};
use std::path::Path;

/// A greyscale image at a bit depth chosen at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DynGrayImage {
    Luma8(GrayImage<u8>),
    Luma16(GrayImage<u16>),
}

fn dims_u32(width: usize, height: usize) -> Result<(u32, u32), BufferError> {
    let w = u32::try_from(width).ok();
    let h = u32::try_from(height).ok();
    w.zip(h)
        .ok_or(BufferError::InvalidDimensions { width, height })
}

impl DynGrayImage {
    /// Decode `path` (format guessed from content) and convert to single-channel
    /// luma at `depth`. Colour and alpha channels are discarded.
    pub fn open(path: impl AsRef<Path>, depth: BitDepth) -> Result<Self, IoError> {
        let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(Self::from_dynamic(&img, depth))
    }

    pub fn from_dynamic(img: &DynamicImage, depth: BitDepth) -> Self {
        let (width, height) = (img.width() as usize, img.height() as usize);
        match depth {
            BitDepth::Eight => DynGrayImage::Luma8(GrayImage {
                width,
                height,
                data: img.to_luma8().into_raw(),
            }),
            BitDepth::Sixteen => DynGrayImage::Luma16(GrayImage {
                width,
                height,
                data: img.to_luma16().into_raw(),
            }),
        }
    }

    pub fn to_dynamic(&self) -> Result<DynamicImage, IoError> {
        match self {
            DynGrayImage::Luma8(g) => {
                let (w, h) = dims_u32(g.width, g.height)?;
                let buf = ImageBuffer::<Luma<u8>, _>::from_raw(w, h, g.data.clone())
                    .ok_or(BufferError::InvalidLength {
                        expected: g.width * g.height,
                        got: g.data.len(),
                    })?;
                Ok(DynamicImage::ImageLuma8(buf))
            }
            DynGrayImage::Luma16(g) => {
                let (w, h) = dims_u32(g.width, g.height)?;
                let buf = ImageBuffer::<Luma<u16>, _>::from_raw(w, h, g.data.clone())
                    .ok_or(BufferError::InvalidLength {
                        expected: g.width * g.height,
                        got: g.data.len(),
                    })?;
                Ok(DynamicImage::ImageLuma16(buf))
            }
        }
    }

    /// Encode to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        self.to_dynamic()?.save(path)?;
        Ok(())
    }

    pub fn width(&self) -> usize {
        match self {
            DynGrayImage::Luma8(g) => g.width,
            DynGrayImage::Luma16(g) => g.width,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            DynGrayImage::Luma8(g) => g.height,
            DynGrayImage::Luma16(g) => g.height,
        }
    }

    pub fn bit_depth(&self) -> BitDepth {
        match self {
            DynGrayImage::Luma8(_) => BitDepth::Eight,
            DynGrayImage::Luma16(_) => BitDepth::Sixteen,
        }
    }
}

impl From<GrayImage<u8>> for DynGrayImage {
    fn from(img: GrayImage<u8>) -> Self {
        DynGrayImage::Luma8(img)
    }
}

impl From<GrayImage<u16>> for DynGrayImage {
    fn from(img: GrayImage<u16>) -> Self {
        DynGrayImage::Luma16(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_bit_png_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wide.png");
        let img = GrayImage::from_vec(3, 1, vec![0u16, 1_000, 65_535]).expect("image");
        DynGrayImage::from(img.clone()).save(&path).expect("save");

        let loaded = DynGrayImage::open(&path, BitDepth::Sixteen).expect("open");
        assert_eq!(loaded, DynGrayImage::Luma16(img));
    }

    #[test]
    fn colour_sources_are_reduced_to_luma() {
        let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
        let grey = DynGrayImage::from_dynamic(&DynamicImage::ImageRgb8(rgb), BitDepth::Eight);
        assert_eq!(grey.bit_depth(), BitDepth::Eight);
        assert_eq!((grey.width(), grey.height()), (2, 2));
        match grey {
            DynGrayImage::Luma8(g) => assert!(g.data.iter().all(|&v| v == 255)),
            other => panic!("unexpected depth: {:?}", other.bit_depth()),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DynGrayImage::open("/definitely/not/here.png", BitDepth::Eight).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}

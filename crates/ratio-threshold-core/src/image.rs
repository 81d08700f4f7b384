use crate::Pixel;

/// Errors raised when a raw buffer does not describe a valid image.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid grayscale image buffer length (expected {expected} samples, got {got})")]
    InvalidLength { expected: usize, got: usize },
}

fn checked_len(width: usize, height: usize) -> Result<usize, BufferError> {
    width
        .checked_mul(height)
        .ok_or(BufferError::InvalidDimensions { width, height })
}

#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a, P: Pixel> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [P], // row-major, len = w*h
}

impl<'a, P: Pixel> GrayImageView<'a, P> {
    /// Borrow a raw row-major buffer, checking its length against the dimensions.
    pub fn new(width: usize, height: usize, data: &'a [P]) -> Result<Self, BufferError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::InvalidLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn to_owned_image(&self) -> GrayImage<P> {
        GrayImage {
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage<P: Pixel> {
    pub width: usize,
    pub height: usize,
    pub data: Vec<P>,
}

impl<P: Pixel> GrayImage<P> {
    /// Take ownership of a raw row-major buffer, checking its length.
    pub fn from_vec(width: usize, height: usize, data: Vec<P>) -> Result<Self, BufferError> {
        GrayImageView::new(width, height, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_, P> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_rejects_length_mismatch() {
        let data = [0u8; 5];
        let err = GrayImageView::new(2, 3, &data).unwrap_err();
        assert_eq!(
            err,
            BufferError::InvalidLength {
                expected: 6,
                got: 5
            }
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = GrayImage::<u16>::from_vec(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, BufferError::InvalidDimensions { .. }));
    }

    #[test]
    fn get_reads_row_major() {
        let img = GrayImage::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).expect("image");
        assert_eq!(img.get(0, 1), Some(4));
        assert_eq!(img.get(2, 0), Some(3));
        assert_eq!(img.get(3, 0), None);
    }
}

/// Precondition violations detected before an estimator touches the buffer.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    #[error("ratio must be a finite value in [0, 1], got {0}")]
    RatioOutOfRange(f32),
    #[error("image has no pixels")]
    EmptyImage,
    #[error("sample stride must be >= 1")]
    ZeroStride,
}

/// Errors returned by the threshold estimators.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

pub(crate) fn ensure_non_empty<P>(pixels: &[P]) -> Result<(), ThresholdError> {
    if pixels.is_empty() {
        return Err(InvalidArgument::EmptyImage.into());
    }
    Ok(())
}

/// An error type for the image and imgproc modules.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination images differ in size.
    #[error("Invalid image size ({0}x{1}), expected ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a padded, cropped or embedded region exceeds its container.
    #[error("Region ({0}x{1}) exceeds the bounds of ({2}x{3})")]
    InvalidDimension(usize, usize, usize, usize),

    /// Error when a kernel size is not a positive odd integer.
    #[error("Invalid kernel size ({0}), expected a positive odd integer")]
    InvalidKernelSize(usize),

    /// Error when two spectra of different dimensions are combined.
    #[error("Spectrum shape ({0}x{1}) does not match ({2}x{3})")]
    ShapeMismatch(usize, usize, usize, usize),

    /// Error when the image data is empty.
    #[error("Image data is not initialized")]
    ImageDataNotInitialized,

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast the image data")]
    CastError,
}

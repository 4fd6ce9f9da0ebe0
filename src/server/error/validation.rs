use thiserror::Error;

/// Rejections raised while validating an uploaded category icon.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// File name extension is outside the accepted image formats.
    #[error("Unsupported file extension")]
    UnsupportedExtension,

    /// Image is wider or taller than the allowed icon size.
    #[error(
        "The maximum allowed dimensions for the image are {max}x{max} - size of the image you uploaded: ({width}, {height})"
    )]
    ImageTooLarge {
        /// Maximum width and height in pixels
        max: u32,
        /// Width of the uploaded image
        width: u32,
        /// Height of the uploaded image
        height: u32,
    },

    /// Uploaded bytes could not be decoded as an image.
    #[error("Upload a valid image")]
    InvalidImage,
}

//! Category icon checks.
//!
//! Icons must be small raster images: at most 90x90 pixels, stored as JPEG, PNG, or GIF.
//! Both checks run before the category is written so a rejected upload leaves no row
//! behind.

use std::{io::Cursor, path::Path};

use image::ImageReader;

use crate::server::error::validation::ValidationError;

/// Largest accepted icon width and height in pixels.
pub const MAX_ICON_DIMENSION: u32 = 90;

/// File extensions accepted for icons, compared case-insensitively.
pub const VALID_ICON_EXTENSIONS: [&str; 4] = [".jpeg", ".png", ".jpg", ".gif"];

/// Rejects images wider or taller than [`MAX_ICON_DIMENSION`].
///
/// Only the image header is decoded to read its dimensions.
///
/// # Arguments
/// - `bytes` - Raw bytes of the uploaded image
///
/// # Returns
/// - `Ok(())` - Image fits within the allowed dimensions
/// - `Err(ValidationError::ImageTooLarge)` - Width or height exceeds the limit
/// - `Err(ValidationError::InvalidImage)` - Bytes are not a decodable image
pub fn validate_icon_image_size(bytes: &[u8]) -> Result<(), ValidationError> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|_| ValidationError::InvalidImage)?
        .into_dimensions()
        .map_err(|_| ValidationError::InvalidImage)?;

    if width > MAX_ICON_DIMENSION || height > MAX_ICON_DIMENSION {
        return Err(ValidationError::ImageTooLarge {
            max: MAX_ICON_DIMENSION,
            width,
            height,
        });
    }

    Ok(())
}

/// Rejects file names whose extension is not in [`VALID_ICON_EXTENSIONS`].
///
/// # Arguments
/// - `file_name` - Name of the uploaded file
///
/// # Returns
/// - `Ok(())` - Extension is accepted
/// - `Err(ValidationError::UnsupportedExtension)` - Missing or unsupported extension
pub fn validate_image_file_extension(file_name: &str) -> Result<(), ValidationError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()));

    match ext {
        Some(ext) if VALID_ICON_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(ValidationError::UnsupportedExtension),
    }
}

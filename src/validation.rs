use crate::error::{ResizeError, Result};
use crate::formats::SourceFormat;
use crate::geometry::Dimensions;
use image::ImageReader;
use std::path::Path;

/// Parse a `<width>x<height>` size string into dimensions.
///
/// The separator is case-insensitive and both components must be
/// positive integers; anything else is rejected with the offending
/// input echoed back.
pub fn parse_size_pair(value: &str) -> Result<Dimensions> {
    let invalid = || ResizeError::InvalidSizeFormat(value.to_string());

    let lower = value.to_lowercase();
    let mut parts = lower.split('x');
    let (width, height) = match (parts.next(), parts.next(), parts.next()) {
        (Some(w), Some(h), None) => (w, h),
        _ => return Err(invalid()),
    };

    let width: u32 = width.parse().map_err(|_| invalid())?;
    let height: u32 = height.parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok(Dimensions::new(width, height))
}

/// Parse a scale factor, rejecting zero, negative and non-finite
/// values.
pub fn parse_scale(value: &str) -> Result<f64> {
    let scale: f64 = value
        .parse()
        .map_err(|_| ResizeError::InvalidScale(value.to_string()))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ResizeError::InvalidScale(value.to_string()));
    }
    Ok(scale)
}

/// Open the input path and verify it holds a JPEG or PNG image.
///
/// The format is detected from the file content, not the extension.
/// The probe reader is scoped to this function, so no handle outlives
/// the check on either the success or the error path.
pub fn check_image_file(path: &Path) -> Result<SourceFormat> {
    if !path.exists() {
        return Err(ResizeError::FileNotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    match reader.format() {
        Some(format) => SourceFormat::from_image_format(format, path),
        None => Err(ResizeError::NotAnImage(path.to_path_buf())),
    }
}

/// An explicitly supplied output directory must already exist.
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(ResizeError::InvalidOutputDir(path.to_path_buf()));
    }
    Ok(())
}

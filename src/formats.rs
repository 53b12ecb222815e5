//! Type-safe handling of the two accepted source formats.
//!
//! The output file keeps the decoded format of the source, so this is
//! both the input whitelist and the output encoding selector.

use crate::error::{ResizeError, Result};
use image::ImageFormat;
use std::fmt;
use std::path::Path;

/// Image formats the tool accepts as input and writes back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JPEG with lossy compression
    Jpeg,
    /// PNG with lossless compression
    Png,
}

impl SourceFormat {
    /// The lowercase format name used as the output file extension.
    ///
    /// This is the decoder's name for the format, not the input file's
    /// extension: `photo.jpg` resizes to `photo_<w>x<h>.jpeg`.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "jpeg",
            SourceFormat::Png => "png",
        }
    }

    /// Convert to the image crate's ImageFormat for encoding.
    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            SourceFormat::Jpeg => ImageFormat::Jpeg,
            SourceFormat::Png => ImageFormat::Png,
        }
    }

    /// Classify a detected format, rejecting everything that is not
    /// JPEG or PNG.
    pub fn from_image_format(format: ImageFormat, path: &Path) -> Result<Self> {
        match format {
            ImageFormat::Jpeg => Ok(SourceFormat::Jpeg),
            ImageFormat::Png => Ok(SourceFormat::Png),
            other => Err(ResizeError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: format!("{:?}", other),
            }),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Jpeg => "JPEG",
            SourceFormat::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_extension() {
        assert_eq!(SourceFormat::Jpeg.extension(), "jpeg");
        assert_eq!(SourceFormat::Png.extension(), "png");
    }

    #[test]
    fn test_source_format_to_image_format() {
        assert_eq!(SourceFormat::Jpeg.to_image_format(), ImageFormat::Jpeg);
        assert_eq!(SourceFormat::Png.to_image_format(), ImageFormat::Png);
    }

    #[test]
    fn test_from_image_format_accepts_jpeg_and_png() {
        let path = Path::new("test.jpg");
        assert_eq!(
            SourceFormat::from_image_format(ImageFormat::Jpeg, path).unwrap(),
            SourceFormat::Jpeg
        );
        assert_eq!(
            SourceFormat::from_image_format(ImageFormat::Png, path).unwrap(),
            SourceFormat::Png
        );
    }

    #[test]
    fn test_from_image_format_rejects_others() {
        let path = Path::new("test.bmp");
        let result = SourceFormat::from_image_format(ImageFormat::Bmp, path);
        assert!(matches!(
            result,
            Err(ResizeError::UnsupportedFormat { .. })
        ));
        if let Err(err) = result {
            assert!(err.to_string().contains("must be JPEG or PNG"));
        }
    }

    #[test]
    fn test_source_format_display() {
        assert_eq!(format!("{}", SourceFormat::Jpeg), "JPEG");
        assert_eq!(format!("{}", SourceFormat::Png), "PNG");
    }
}

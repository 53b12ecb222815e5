use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("{0}: wrong path to file or invalid image format")]
    NotAnImage(PathBuf),

    #[error("{path}: image must be JPEG or PNG type, got {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    #[error("invalid size value {0}, should be like this: 200x300")]
    InvalidSizeFormat(String),

    #[error("invalid scale value {0}, must be a positive number")]
    InvalidScale(String),

    #[error("{0} is not a valid output directory")]
    InvalidOutputDir(PathBuf),

    #[error("one of --width, --height, --wxh or --scale is required")]
    MissingResizeMode,
}

pub type Result<T> = std::result::Result<T, ResizeError>;

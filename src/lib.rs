pub mod cli;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod logger;
pub mod processing;
pub mod utils;
pub mod validation;

pub use error::{ResizeError, Result};
pub use formats::SourceFormat;
pub use geometry::{aspect_ratio, resolve_size, Dimensions, ResizeRequest};
pub use processing::{derive_output_path, load_source_image, resize_file, ResizeOptions};
pub use validation::{check_image_file, parse_scale, parse_size_pair, validate_output_dir};

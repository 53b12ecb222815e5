use crate::error::{ResizeError, Result};
use crate::geometry::{Dimensions, ResizeRequest};
use crate::processing::ResizeOptions;
use crate::validation::{parse_scale, parse_size_pair};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-resize",
    about = "Re-size .jpg and .png images from the command line",
    long_about = "img-resize scales a single JPEG or PNG image to a new size given as a \
                  target width, a target height, an exact WxH pair, or a scale factor. \
                  When only one dimension is given the other is inferred from the aspect \
                  ratio. The result is written next to the input (or into --output) as \
                  <name>_<width>x<height>.<format>.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-resize photo.jpg --width 200\n  \
    img-resize photo.png --height 480\n  \
    img-resize photo.jpg --wxh 200x300 --output ./thumbs\n  \
    img-resize photo.png --scale 0.5"
)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["width", "height", "wxh", "scale"])
))]
pub struct Args {
    #[arg(help = "Path to a .jpg or .png image file")]
    pub image_file: PathBuf,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Width of the re-sized picture (height follows the aspect ratio)"
    )]
    pub width: Option<u32>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Height of the re-sized picture (width follows the aspect ratio)"
    )]
    pub height: Option<u32>,

    #[arg(
        long,
        alias = "new_size",
        value_name = "WxH",
        value_parser = parse_size_pair,
        help = "Exact new size, format: 200x300",
        long_help = "Exact new size as <width>x<height>, e.g. 200x300. The separator is \
                     case-insensitive and the aspect ratio is not preserved."
    )]
    pub wxh: Option<Dimensions>,

    #[arg(
        long,
        value_parser = parse_scale,
        help = "Scale factor applied to both dimensions, e.g. 0.5"
    )]
    pub scale: Option<f64>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Folder where to put the re-sized picture (must exist)"
    )]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(short, long, help = "Print source dimensions, aspect ratio and file sizes")]
    pub verbose: bool,
}

impl Args {
    /// Fold the mutually exclusive mode flags into the one-variant
    /// request and freeze everything into an immutable options value.
    ///
    /// The "mode" arg group guarantees exactly one flag is present; the
    /// error branch only fires when the struct is built by hand.
    pub fn into_options(self) -> Result<ResizeOptions> {
        let request = if let Some(scale) = self.scale {
            ResizeRequest::Scale(scale)
        } else if let Some(width) = self.width {
            ResizeRequest::Width(width)
        } else if let Some(height) = self.height {
            ResizeRequest::Height(height)
        } else if let Some(pair) = self.wxh {
            ResizeRequest::Pair(pair)
        } else {
            return Err(ResizeError::MissingResizeMode);
        };

        Ok(ResizeOptions::new(self.image_file, request, self.output))
    }
}

use crate::error::Result;
use crate::formats::SourceFormat;
use crate::geometry::{aspect_ratio, resolve_size, Dimensions, ResizeRequest};
use crate::utils::{create_progress_spinner, format_file_size};
use crate::validation::{check_image_file, validate_output_dir};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one invocation needs, populated once from the command
/// line and passed around by reference.
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub input: PathBuf,
    pub request: ResizeRequest,
    pub output_dir: Option<PathBuf>,
}

impl ResizeOptions {
    pub fn new(input: PathBuf, request: ResizeRequest, output_dir: Option<PathBuf>) -> Self {
        Self {
            input,
            request,
            output_dir,
        }
    }
}

/// Decode the input image after confirming it is a JPEG or PNG.
///
/// The format check opens the file once for the header probe; the
/// decode opens it again. Detection goes by content, not extension.
pub fn load_source_image(path: &Path) -> Result<(DynamicImage, SourceFormat)> {
    let format = check_image_file(path)?;
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok((img, format))
}

/// Build the output path: `<dir>/<stem>_<width>x<height>.<ext>`.
///
/// `<dir>` is the explicit output directory if given, else the input's
/// directory, else the current working directory. `<ext>` comes from
/// the decoded format, so `photo.jpg` becomes `photo_200x100.jpeg`.
pub fn derive_output_path(
    input: &Path,
    output_dir: Option<&Path>,
    size: Dimensions,
    format: SourceFormat,
) -> Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()?,
        },
    };

    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = format!("{}_{}.{}", stem, size, format.extension());
    Ok(dir.join(file_name))
}

/// Run the whole resize flow and return the written path.
///
/// The output directory is validated before the image is ever opened,
/// so a bad `--output` performs no image I/O at all. An existing file
/// at the derived path is overwritten.
pub fn resize_file(options: &ResizeOptions) -> Result<PathBuf> {
    if let Some(dir) = &options.output_dir {
        validate_output_dir(dir)?;
    }

    let pb = create_progress_spinner("Loading image...");
    let (img, format) = load_source_image(&options.input)?;
    pb.finish_with_message("✅ Image loaded");

    let original = Dimensions::new(img.width(), img.height());
    crate::verbose!(
        "Source: {} {} (aspect ratio {})",
        format,
        original,
        aspect_ratio(original)
    );

    let target = resolve_size(original, options.request);
    crate::info!("🔄 Resizing {} -> {}", original, target);

    let resized = img.resize_exact(
        target.width,
        target.height,
        image::imageops::FilterType::Lanczos3,
    );

    let output_path = derive_output_path(
        &options.input,
        options.output_dir.as_deref(),
        target,
        format,
    )?;

    let pb = create_progress_spinner("Saving re-sized image...");
    resized.save_with_format(&output_path, format.to_image_format())?;
    pb.finish_with_message("✅ Image saved");

    crate::verbose!(
        "Written {} ({})",
        output_path.display(),
        format_file_size(fs::metadata(&output_path)?.len())
    );

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResizeError;
    use image::ImageFormat;
    use tempfile::TempDir;

    #[test]
    fn test_derive_output_path_uses_input_directory() {
        let path = derive_output_path(
            Path::new("photos/cat.jpg"),
            None,
            Dimensions::new(200, 100),
            SourceFormat::Jpeg,
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("photos/cat_200x100.jpeg"));
    }

    #[test]
    fn test_derive_output_path_bare_filename_uses_cwd() {
        let path = derive_output_path(
            Path::new("cat.png"),
            None,
            Dimensions::new(64, 64),
            SourceFormat::Png,
        )
        .unwrap();
        let expected = std::env::current_dir().unwrap().join("cat_64x64.png");
        assert_eq!(path, expected);
    }

    #[test]
    fn test_derive_output_path_explicit_directory_wins() {
        let path = derive_output_path(
            Path::new("photos/cat.jpg"),
            Some(Path::new("/tmp/out")),
            Dimensions::new(10, 20),
            SourceFormat::Jpeg,
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/out/cat_10x20.jpeg"));
    }

    #[test]
    fn test_derive_output_path_extension_follows_decoded_format() {
        // input extension is .jpg, output carries the decoder's name
        let path = derive_output_path(
            Path::new("pic.jpg"),
            Some(Path::new("out")),
            Dimensions::new(1, 2),
            SourceFormat::Jpeg,
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("out/pic_1x2.jpeg"));
    }

    #[test]
    fn test_derive_output_path_keeps_dotted_stem() {
        let path = derive_output_path(
            Path::new("a.b.png"),
            Some(Path::new("out")),
            Dimensions::new(10, 10),
            SourceFormat::Png,
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("out/a.b_10x10.png"));
    }

    #[test]
    fn test_load_source_image_not_found() {
        let result = load_source_image(Path::new("nonexistent.jpg"));
        assert!(matches!(result, Err(ResizeError::FileNotFound(_))));
    }

    #[test]
    fn test_resize_file_writes_scaled_png() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("square.png");
        DynamicImage::new_rgb8(100, 50)
            .save_with_format(&input, ImageFormat::Png)
            .unwrap();

        let options = ResizeOptions::new(input, ResizeRequest::Width(20), None);
        let written = resize_file(&options).unwrap();

        assert_eq!(written, temp_dir.path().join("square_20x10.png"));
        let out = image::open(&written).unwrap();
        assert_eq!(out.dimensions(), (20, 10));
    }

    #[test]
    fn test_resize_file_rejects_bad_output_dir_before_io() {
        let temp_dir = TempDir::new().unwrap();
        // the input does not even exist; the output check must fire first
        let options = ResizeOptions::new(
            temp_dir.path().join("missing.jpg"),
            ResizeRequest::Scale(0.5),
            Some(temp_dir.path().join("no-such-dir")),
        );

        let result = resize_file(&options);
        assert!(matches!(result, Err(ResizeError::InvalidOutputDir(_))));
    }
}

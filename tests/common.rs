use image::{DynamicImage, ImageFormat};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a real JPEG image of the given size and return its path.
pub fn create_jpeg_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::new_rgb8(width, height)
        .save_with_format(&path, ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Write a real PNG image of the given size and return its path.
pub fn create_png_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::new_rgb8(width, height)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

/// Write a file that content-detection identifies as BMP.
pub fn create_bmp_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"BM\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00")
        .unwrap();
    path
}

/// Write a file that is not an image at all.
pub fn create_text_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"definitely not an image")
        .unwrap();
    path
}

//! Pure size arithmetic for the resize pipeline.
//!
//! Everything here is side-effect free and testable without decoding a
//! single pixel.

use std::fmt;

/// Pixel dimensions of an image. Both components are positive at every
/// construction site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The resize mode selected on the command line. Exactly one variant
/// exists per invocation, so conflicting modes are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeRequest {
    /// Target width; height follows from the aspect ratio.
    Width(u32),
    /// Target height; width follows from the aspect ratio.
    Height(u32),
    /// Exact target size, no ratio adjustment.
    Pair(Dimensions),
    /// Multiplier applied to both original dimensions.
    Scale(f64),
}

/// Aspect ratio of the original image, rounded to two decimal digits
/// with ties going to the even neighbor.
///
/// The missing dimension is always inferred from this rounded value,
/// not from the exact ratio, so e.g. a 1920x1080 source is treated as
/// 1.78:1.
pub fn aspect_ratio(original: Dimensions) -> f64 {
    let exact = original.width as f64 / original.height as f64;
    (exact * 100.0).round_ties_even() / 100.0
}

/// Compute the target dimensions for `request` against an original
/// image size. Fractional results are truncated.
///
/// # Examples
/// ```
/// # use img_resize::geometry::{resolve_size, Dimensions, ResizeRequest};
/// // 1000x500 has aspect ratio 2.0, so width 200 gives height 100
/// let original = Dimensions::new(1000, 500);
/// let target = resolve_size(original, ResizeRequest::Width(200));
/// assert_eq!(target, Dimensions::new(200, 100));
/// ```
///
/// A pathological combination of ratio and requested size can truncate
/// a dimension to zero; that is not guarded here and surfaces as an
/// encoder error downstream.
pub fn resolve_size(original: Dimensions, request: ResizeRequest) -> Dimensions {
    let ratio = aspect_ratio(original);

    match request {
        ResizeRequest::Scale(scale) => Dimensions::new(
            (original.width as f64 * scale) as u32,
            (original.height as f64 * scale) as u32,
        ),
        ResizeRequest::Width(width) => {
            Dimensions::new(width, (width as f64 / ratio) as u32)
        }
        ResizeRequest::Height(height) => {
            Dimensions::new((height as f64 * ratio) as u32, height)
        }
        ResizeRequest::Pair(pair) => pair,
    }
}

//! Edge-map front end for grayscale sources.
//!
//! When the input is a grayscale rendering rather than a segmentation mask,
//! the line extractor votes on a Canny-style edge map instead of a skeleton:
//!
//! - 5-tap separable Gaussian blur to suppress pixel noise.
//! - Sobel gradients (`gx`, `gy`, magnitude), borders clamped.
//! - Non-maximum suppression along the quantized gradient direction.
//! - Double-threshold hysteresis producing a binary edge mask.
//!
//! Thresholds are expressed in Sobel magnitude units for intensities in
//! `[0, 1]` (a unit step has magnitude 4).

pub mod blur;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use blur::{gaussian_blur, GAUSSIAN_5TAP};
pub use grad::{sobel_gradients, Grad};
pub use hysteresis::hysteresis;
pub use nms::suppress_non_maxima;

use crate::image::ImageF32;
use crate::mask::BinaryMask;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Magnitude at which weak edge pixels may extend a strong edge.
    pub low_threshold: f32,
    /// Magnitude at which a pixel seeds an edge.
    pub high_threshold: f32,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            low_threshold: 0.2,
            high_threshold: 0.6,
        }
    }
}

pub fn edge_map(gray: &ImageF32, options: &EdgeOptions) -> BinaryMask {
    let blurred = gaussian_blur(gray, &GAUSSIAN_5TAP);
    let grad = sobel_gradients(&blurred);
    let thin = suppress_non_maxima(&grad);
    let edges = hysteresis(&thin, options.low_threshold, options.high_threshold);
    debug!(
        "EdgeMap::run w={} h={} low={:.3} high={:.3} edges={}",
        gray.w,
        gray.h,
        options.low_threshold,
        options.high_threshold,
        edges.count()
    );
    edges
}

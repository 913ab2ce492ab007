//! Mask preprocessing: binarize, close small gaps, thin to a skeleton.
//!
//! The skeleton is what the line extractor votes on. Thinning stabilizes the
//! Hough accumulator: a thick stroke would otherwise vote for a fan of nearly
//! parallel lines. Closing runs first so hairline breaks in the stroke do not
//! split the skeleton.
//!
//! An all-background mask passes through unchanged.

pub mod morphology;
pub mod skeleton;

pub use morphology::{close, dilate, erode, StructuringElement};
pub use skeleton::skeletonize;

use crate::mask::BinaryMask;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Binarization threshold for probability and 8-bit grayscale masks.
    pub threshold: f32,
    /// Radius of the disk used for closing; 1 gives a 3×3 neighbourhood.
    pub close_radius: usize,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            close_radius: 1,
        }
    }
}

/// Intermediate masks kept for reporting and debugging.
#[derive(Clone, Debug)]
pub struct Preprocessed {
    pub closed: BinaryMask,
    pub skeleton: BinaryMask,
}

pub fn preprocess(mask: &BinaryMask, options: &PreprocessOptions) -> Preprocessed {
    let closed = if options.close_radius == 0 {
        mask.clone()
    } else {
        close(mask, &StructuringElement::disk(options.close_radius))
    };
    let skeleton = skeletonize(&closed);
    debug!(
        "MaskPreprocessor::run w={} h={} fg={} closed={} skeleton={}",
        mask.w(),
        mask.h(),
        mask.count(),
        closed.count(),
        skeleton.count()
    );
    Preprocessed { closed, skeleton }
}

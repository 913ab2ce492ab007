//! Straight segment extraction from a binary skeleton or edge map.
//!
//! Uses a deterministic progressive probabilistic Hough transform:
//!
//! - Foreground pixels are processed in raster order (no random sampling),
//!   so the output depends only on the mask and the options.
//! - Each pixel votes into a `theta × rho` accumulator with `theta_bins`
//!   orientations over `[0, π)` and `rho_step` pixel resolution.
//! - When the pixel's strongest cell reaches `threshold`, the corresponding
//!   line is followed in both directions, bridging at most `max_line_gap`
//!   missing pixels. The two walk ends become the segment endpoints.
//! - Segments shorter than `min_line_length` are dropped, but their pixels are
//!   still consumed.
//!
//! An empty mask yields an empty list; this is not an error.

mod hough;
mod options;
mod segment;

pub use options::HoughOptions;
pub use segment::{Segment, SegmentId};

use crate::mask::BinaryMask;
use log::debug;

pub fn extract_segments(mask: &BinaryMask, options: &HoughOptions) -> Vec<Segment> {
    let segments = hough::HoughExtractor::new(mask, *options).extract();
    debug!(
        "LineExtractor::run pixels={} threshold={} min_len={:.1} max_gap={} segments={}",
        mask.count(),
        options.threshold,
        options.min_line_length,
        options.max_line_gap,
        segments.len()
    );
    segments
}

#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod mask;

// Pipeline stages, usable on their own.
pub mod angle;
pub mod classify;
pub mod cluster;
pub mod edges;
pub mod intersect;
pub mod lines;
pub mod preprocess;
pub mod reconstruct;
pub mod validate;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, StarDetector, StarRecord};
pub use crate::error::{ConfigError, DetectError, InputError};
pub use crate::mask::BinaryMask;

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Record types shared between stages.
pub use crate::classify::{LineClass, SpokeDirection};
pub use crate::lines::{Segment, SegmentId};
pub use crate::reconstruct::Spoke;
pub use crate::validate::Center;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use plstar_detector::prelude::*;
///
/// # fn main() -> Result<(), DetectError> {
/// let (w, h) = (320usize, 240usize);
/// let pixels = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &pixels };
///
/// let det = StarDetector::new(DetectorParams::default())?;
/// let report = det.detect_bytes(img)?;
/// println!("stars={} latency_ms={:.3}", report.stars.len(), report.trace.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{
        BinaryMask, DetectError, DetectionReport, DetectorParams, SpokeDirection, StarDetector,
        StarRecord,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::classify::{classify_angle, classify_segments};
    pub use crate::cluster::{candidate_centers, cluster_intersections, dbscan};
    pub use crate::edges::edge_map;
    pub use crate::intersect::{compute_intersections, intersect};
    pub use crate::lines::extract_segments;
    pub use crate::preprocess::{preprocess, skeletonize};
    pub use crate::reconstruct::{reconstruct_spokes, trace_spoke};
    pub use crate::validate::{evaluate_center, find_spoke_support, validate_center};

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        ClusterSummary, FrontEnd, InputDescriptor, PreprocessStage,
        RejectedCandidate, StageTiming, TimingBreakdown,
    };
}

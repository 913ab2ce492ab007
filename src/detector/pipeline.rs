//! Detector pipeline driving star detection end-to-end.
//!
//! [`StarDetector`] holds validated parameters and nothing else, so one
//! instance can serve many masks, including concurrently.
//!
//! Typical usage:
//! ```no_run
//! use plstar_detector::{BinaryMask, DetectorParams, StarDetector};
//!
//! # fn example(mask: BinaryMask) -> Result<(), plstar_detector::DetectError> {
//! let detector = StarDetector::new(DetectorParams::default())?;
//! let report = detector.detect(&mask)?;
//! for star in &report.stars {
//!     println!("star at ({:.1}, {:.1})", star.center.x, star.center.y);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::DetectorParams;
use super::record::StarRecord;
use crate::classify::classify_segments;
use crate::cluster::{candidate_centers, cluster_intersections, Cluster};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    ClusterSummary, DetectionReport, FrontEnd, InputDescriptor, PipelineTrace, PreprocessStage,
    RejectedCandidate, TimingBreakdown,
};
use crate::edges::edge_map;
use crate::error::{ConfigError, DetectError, InputError};
use crate::image::{ImageF32, ImageU8};
use crate::intersect::compute_intersections;
use crate::lines::{extract_segments, Segment};
use crate::mask::BinaryMask;
use crate::preprocess::{preprocess, Preprocessed};
use crate::reconstruct::reconstruct_spokes;
use crate::validate::{evaluate_center, validate_center, Center};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Radial six-spoke pattern detector.
#[derive(Clone, Debug)]
pub struct StarDetector {
    params: DetectorParams,
}

/// Output of stages 4–7 for one set of classified segments.
struct StarSearch {
    stars: Vec<StarRecord>,
    intersections: usize,
    clusters: Vec<ClusterSummary>,
    rejected: Vec<RejectedCandidate>,
}

impl StarDetector {
    /// Create a detector; invalid parameters are rejected here, before any
    /// mask is processed.
    pub fn new(params: DetectorParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run the full pipeline on a binary mask.
    pub fn detect(&self, mask: &BinaryMask) -> Result<DetectionReport, DetectError> {
        check_dimensions(mask)?;
        debug!(
            "StarDetector::detect start w={} h={} fg={}",
            mask.w(),
            mask.h(),
            mask.count()
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let pre = self.preprocess_mask(mask);
        timings.record_since("preprocess", start);
        let stage = PreprocessStage {
            foreground: mask.count(),
            closed: pre.closed.count(),
            line_pixels: pre.skeleton.count(),
        };

        let report = self.run_from_lines(&pre.skeleton, mask, FrontEnd::Skeleton, stage, timings, total_start);
        Ok(report)
    }

    /// Binarize a probability map with `preprocess.threshold`, then detect.
    pub fn detect_probability(&self, map: &ImageF32) -> Result<DetectionReport, DetectError> {
        let mask = BinaryMask::from_f32(map, self.params.preprocess.threshold)?;
        self.detect(&mask)
    }

    /// Binarize an 8-bit mask (0/1 or 0..255), then detect.
    pub fn detect_bytes(&self, view: ImageU8<'_>) -> Result<DetectionReport, DetectError> {
        let mask = BinaryMask::from_u8(view, self.params.preprocess.threshold)?;
        self.detect(&mask)
    }

    /// Detect on a grayscale rendering via the edge-map front end.
    ///
    /// Lines are extracted from the hysteresis edge map. Spokes are walked
    /// over the rendering binarized with `preprocess.threshold`, since the
    /// spoke axis runs between the two edges of a stroke.
    pub fn detect_grayscale(&self, gray: ImageU8<'_>) -> Result<DetectionReport, DetectError> {
        let strokes = BinaryMask::from_u8(gray, self.params.preprocess.threshold)?;
        debug!("StarDetector::detect_grayscale start w={} h={}", gray.w, gray.h);
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let edges = edge_map(&ImageF32::from_u8(gray), &self.params.edges);
        timings.record_since("edges", start);
        let stage = PreprocessStage {
            foreground: strokes.count(),
            closed: strokes.count(),
            line_pixels: edges.count(),
        };

        Ok(self.run_from_lines(&edges, &strokes, FrontEnd::Edges, stage, timings, total_start))
    }

    /// Detect on independent masks in parallel. Results keep input order and
    /// match what [`detect`](Self::detect) returns for each mask.
    pub fn detect_batch(&self, masks: &[BinaryMask]) -> Vec<Result<DetectionReport, DetectError>> {
        masks.par_iter().map(|mask| self.detect(mask)).collect()
    }

    /// Closing and skeletonization only, for tools that save intermediate masks.
    pub fn preprocess_mask(&self, mask: &BinaryMask) -> Preprocessed {
        preprocess(mask, &self.params.preprocess)
    }

    /// Stages 3–7 on already extracted segments.
    ///
    /// Segments are (re)classified with `angle_tolerance_deg`; spokes are
    /// walked over `mask`.
    pub fn detect_segments(&self, segments: Vec<Segment>, mask: &BinaryMask) -> Vec<StarRecord> {
        let segments = classify_segments(segments, self.params.angle_tolerance_deg);
        self.find_stars(&segments, mask, &mut TimingBreakdown::default())
            .stars
    }

    fn run_from_lines(
        &self,
        line_mask: &BinaryMask,
        walk_mask: &BinaryMask,
        front_end: FrontEnd,
        preprocess_stage: PreprocessStage,
        mut timings: TimingBreakdown,
        total_start: Instant,
    ) -> DetectionReport {
        let start = Instant::now();
        let raw = extract_segments(line_mask, &self.params.hough);
        timings.record_since("lines", start);

        let start = Instant::now();
        let segments = classify_segments(raw, self.params.angle_tolerance_deg);
        timings.record_since("classify", start);

        let search = self.find_stars(&segments, walk_mask, &mut timings);
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "StarDetector::detect done stars={} segments={} intersections={} clusters={} total_ms={:.2}",
            search.stars.len(),
            segments.len(),
            search.intersections,
            search.clusters.len(),
            timings.total_ms
        );

        DetectionReport {
            stars: search.stars,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: walk_mask.w(),
                    height: walk_mask.h(),
                    front_end,
                },
                timings,
                preprocess: preprocess_stage,
                segments,
                intersections: search.intersections,
                clusters: search.clusters,
                rejected: search.rejected,
            },
        }
    }

    /// Intersections, clustering, validation and reconstruction.
    fn find_stars(&self, segments: &[Segment], walk_mask: &BinaryMask, timings: &mut TimingBreakdown) -> StarSearch {
        let start = Instant::now();
        let points = compute_intersections(segments);
        timings.record_since("intersect", start);

        let start = Instant::now();
        let clusters = cluster_intersections(&points, &self.params.cluster);
        timings.record_since("cluster", start);

        let start = Instant::now();
        let mut accepted: Vec<(&Cluster, Center)> = Vec::new();
        let mut rejected = Vec::new();
        for cluster in candidate_centers(&clusters) {
            let tol = self.params.distance_tolerance;
            match validate_center(cluster.centroid, segments, tol, self.params.min_supported_directions) {
                Some(center) => accepted.push((cluster, center)),
                None => {
                    let center = evaluate_center(cluster.centroid, segments, tol);
                    rejected.push(RejectedCandidate {
                        x: center.x,
                        y: center.y,
                        supported_directions: center.supported_directions,
                    });
                }
            }
        }
        timings.record_since("validate", start);

        let start = Instant::now();
        let stars = accepted
            .into_iter()
            .map(|(cluster, center)| {
                let spokes = reconstruct_spokes(walk_mask, [center.x, center.y], &self.params.ray);
                StarRecord::new(center, segments, spokes, cluster.len())
            })
            .collect();
        timings.record_since("reconstruct", start);

        StarSearch {
            stars,
            intersections: points.len(),
            clusters: clusters.iter().map(ClusterSummary::from).collect(),
            rejected,
        }
    }
}

fn check_dimensions(mask: &BinaryMask) -> Result<(), InputError> {
    if mask.w() == 0 || mask.h() == 0 {
        return Err(InputError::EmptyDimensions {
            width: mask.w(),
            height: mask.h(),
        });
    }
    Ok(())
}

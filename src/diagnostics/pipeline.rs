use crate::cluster::Cluster;
use crate::detector::StarRecord;
use crate::diagnostics::TimingBreakdown;
use crate::intersect::ClassPair;
use crate::lines::Segment;
use serde::Serialize;

/// Result produced by [`StarDetector::detect`](crate::StarDetector::detect).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub stars: Vec<StarRecord>,
    pub trace: PipelineTrace,
}

/// Per-stage record of one detection run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub preprocess: PreprocessStage,
    /// Every extracted segment, with its class or `null` when unclassified.
    pub segments: Vec<Segment>,
    pub intersections: usize,
    pub clusters: Vec<ClusterSummary>,
    pub rejected: Vec<RejectedCandidate>,
}

/// Which front end produced the mask the lines were voted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontEnd {
    Skeleton,
    Edges,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub front_end: FrontEnd,
}

/// Foreground pixel counts around preprocessing.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreprocessStage {
    pub foreground: usize,
    /// After closing; equals `foreground` for the edge front end, where
    /// foreground is the binarized rendering.
    pub closed: usize,
    /// Pixels handed to the line extractor.
    pub line_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub centroid: [f32; 2],
    pub size: usize,
    pub class_pairs: Vec<ClassPair>,
    /// Covers all three line classes and went on to validation.
    pub candidate: bool,
}

impl From<&Cluster> for ClusterSummary {
    fn from(cluster: &Cluster) -> Self {
        Self {
            centroid: cluster.centroid,
            size: cluster.len(),
            class_pairs: cluster.class_pairs.clone(),
            candidate: cluster.covers_all_classes(),
        }
    }
}

/// A candidate center with fewer supported directions than required.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedCandidate {
    pub x: f32,
    pub y: f32,
    pub supported_directions: usize,
}

impl DetectionReport {
    /// One-line human readable summary used by the CLI.
    pub fn summary(&self) -> String {
        let classified = self.trace.segments.iter().filter(|s| s.class.is_some()).count();
        format!(
            "stars={} segments={} classified={} intersections={} clusters={} rejected={} total_ms={:.2}",
            self.stars.len(),
            self.trace.segments.len(),
            classified,
            self.trace.intersections,
            self.trace.clusters.len(),
            self.trace.rejected.len(),
            self.trace.timings.total_ms
        )
    }
}

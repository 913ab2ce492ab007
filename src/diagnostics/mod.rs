//! Diagnostics data model returned alongside detected stars.
//!
//! `DetectionReport` is the main entry point: the stars themselves plus a
//! `PipelineTrace` with per-stage counts, every extracted segment, cluster
//! summaries, rejected candidates and stage timings. Everything serializes to
//! camelCase JSON for overlay and evaluation tools.

pub mod pipeline;
pub mod timing;

pub use pipeline::{
    ClusterSummary, DetectionReport, FrontEnd, InputDescriptor, PipelineTrace, PreprocessStage,
    RejectedCandidate,
};
pub use timing::{StageTiming, TimingBreakdown};

//! Star detector orchestrating the seven-stage pipeline.
//!
//! Overview
//! - Preprocess: binarize, close small breaks, thin to a skeleton (or build a
//!   hysteresis edge map for grayscale sources).
//! - Extract straight segments with a deterministic progressive Hough
//!   transform and sort them into three undirected line classes.
//! - Intersect segments of different classes and cluster the points with
//!   DBSCAN; clusters touching all three classes become candidate centers.
//! - Validate each candidate against all six directed spokes and walk the
//!   accepted ones outward over the mask to reconstruct the spokes.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the [`StarDetector`] implementation.
//! - `record` – the [`StarRecord`] output unit.

pub mod params;
mod pipeline;
mod record;

pub use params::DetectorParams;
pub use pipeline::StarDetector;
pub use record::StarRecord;

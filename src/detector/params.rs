//! Parameter types configuring the detector stages.
//!
//! Per-stage option structs live next to the stage that consumes them and are
//! grouped here. Everything deserializes with defaults, so a JSON config only
//! needs the fields it changes.

use crate::cluster::ClusterOptions;
use crate::edges::EdgeOptions;
use crate::error::ConfigError;
use crate::lines::HoughOptions;
use crate::preprocess::PreprocessOptions;
use crate::reconstruct::RayOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the seven-stage pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Binarization and closing before skeletonization.
    pub preprocess: PreprocessOptions,
    /// Probabilistic Hough line extraction.
    pub hough: HoughOptions,
    /// Maximum distance from a canonical class for a segment to be kept.
    pub angle_tolerance_deg: f32,
    /// Maximum center-to-segment distance for spoke support.
    pub distance_tolerance: f32,
    /// DBSCAN over intersection points.
    pub cluster: ClusterOptions,
    /// Directions (out of 6) that must be supported for a valid star.
    pub min_supported_directions: usize,
    /// Ray walking used to reconstruct spokes.
    pub ray: RayOptions,
    /// Edge-map front end for grayscale sources.
    pub edges: EdgeOptions,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            preprocess: PreprocessOptions::default(),
            hough: HoughOptions::default(),
            angle_tolerance_deg: 15.0,
            distance_tolerance: 20.0,
            cluster: ClusterOptions::default(),
            min_supported_directions: 4,
            ray: RayOptions::default(),
            edges: EdgeOptions::default(),
        }
    }
}

impl DetectorParams {
    /// Checks every parameter; the first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_threshold("preprocess.threshold", self.preprocess.threshold)?;
        nonzero("hough.threshold", self.hough.threshold as usize)?;
        positive("hough.min_line_length", self.hough.min_line_length)?;
        positive("hough.rho_step", self.hough.rho_step)?;
        nonzero("hough.theta_bins", self.hough.theta_bins)?;
        positive("angle_tolerance_deg", self.angle_tolerance_deg)?;
        positive("distance_tolerance", self.distance_tolerance)?;
        positive("cluster.eps", self.cluster.eps)?;
        nonzero("cluster.min_pts", self.cluster.min_pts)?;
        if !(1..=6).contains(&self.min_supported_directions) {
            return Err(ConfigError::SupportedDirectionsOutOfRange {
                value: self.min_supported_directions,
            });
        }
        nonzero("ray.max_radius", self.ray.max_radius as usize)?;
        positive("edges.low_threshold", self.edges.low_threshold)?;
        positive("edges.high_threshold", self.edges.high_threshold)?;
        if self.edges.low_threshold > self.edges.high_threshold {
            return Err(ConfigError::InvertedHysteresis {
                low: self.edges.low_threshold,
                high: self.edges.high_threshold,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn unit_threshold(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { field, value })
    }
}

fn nonzero(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::ZeroCount { field })
    } else {
        Ok(())
    }
}

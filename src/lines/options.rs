use serde::{Deserialize, Serialize};

/// Parameters of the probabilistic Hough line extractor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    /// Accumulator votes a `(theta, rho)` cell needs before its line is walked.
    pub threshold: u32,
    /// Minimum Euclidean length of an accepted segment, in pixels.
    pub min_line_length: f32,
    /// Longest run of missing pixels bridged inside one segment.
    pub max_line_gap: u32,
    /// Distance resolution of the accumulator in pixels.
    pub rho_step: f32,
    /// Number of orientation bins spanning `[0, π)`.
    pub theta_bins: usize,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            threshold: 50,
            min_line_length: 10.0,
            max_line_gap: 3,
            rho_step: 1.0,
            theta_bins: 180,
        }
    }
}

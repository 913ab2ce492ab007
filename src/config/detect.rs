use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    /// Mask (or grayscale rendering) to analyse.
    pub input: PathBuf,
    #[serde(default)]
    pub mode: InputMode,
    #[serde(default)]
    pub params: DetectorParams,
    pub output: DetectOutputConfig,
}

/// How the input image is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Segmentation mask: binarize, close and skeletonize.
    #[default]
    Mask,
    /// Grayscale rendering: Canny-style edge map.
    Edges,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    pub report_json: PathBuf,
    /// Optional PNG of the skeleton (or edge map) the lines were voted on.
    #[serde(default)]
    pub skeleton_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<DetectToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{ "input": "mask.png", "output": { "report_json": "out/report.json" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.mode, InputMode::Mask);
        assert_eq!(cfg.params, DetectorParams::default());
        assert!(cfg.output.skeleton_image.is_none());
    }

    #[test]
    fn parses_mode_and_overrides() {
        let cfg = parse_config(
            r#"{
                "input": "render.png",
                "mode": "edges",
                "params": { "min_supported_directions": 5, "ray": { "gap_tolerance": 8 } },
                "output": { "report_json": "r.json", "skeleton_image": "s.png" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.mode, InputMode::Edges);
        assert_eq!(cfg.params.min_supported_directions, 5);
        assert_eq!(cfg.params.ray.gap_tolerance, 8);
        assert_eq!(cfg.params.ray.max_radius, 300);
        assert_eq!(cfg.output.skeleton_image, Some(PathBuf::from("s.png")));
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{ "input": "mask.png" }"#).is_err());
    }
}

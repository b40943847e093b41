use crate::detector::DetectorOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorOptions,
    pub output: DetectOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    #[serde(rename = "segments_json")]
    pub segments_json: PathBuf,
    /// Optional rebuilt line image (the redraw sink).
    #[serde(default)]
    pub rebuilt_image: Option<PathBuf>,
    /// Optional dump of the binary edge map.
    #[serde(default)]
    pub edge_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: DetectToolConfig = serde_json::from_str(
            r#"{
                "input": "in.png",
                "output": { "segments_json": "out/segments.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("in.png"));
        assert!(!config.detector.squishy_blobs);
        assert!(config.output.rebuilt_image.is_none());
    }

    #[test]
    fn detector_section_overrides_defaults() {
        let config: DetectToolConfig = serde_json::from_str(
            r#"{
                "input": "in.png",
                "detector": { "squishy_blobs": true, "edge_threshold": 40 },
                "output": {
                    "segments_json": "segments.json",
                    "rebuilt_image": "rebuilt.png"
                }
            }"#,
        )
        .unwrap();
        assert!(config.detector.squishy_blobs);
        assert_eq!(config.detector.edge_threshold, 40);
        assert_eq!(
            config.output.rebuilt_image,
            Some(PathBuf::from("rebuilt.png"))
        );
    }
}

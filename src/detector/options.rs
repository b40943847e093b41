//! Parameter types configuring the detector stages.
//!
//! Defaults aim for technical line art at common resolutions. For tuning,
//! start with `squishy_blobs` and the edge threshold; the quantization knobs
//! interact with the vote thresholds and rarely need to move.

use crate::edges::DEFAULT_EDGE_THRESHOLD;
use crate::hough::{DEFAULT_DTHETA, DEFAULT_SWEEP_RANGE};
use crate::segments::MergePolicy;
use serde::Deserialize;

/// Detector-wide parameters controlling the pipeline.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct DetectorOptions {
    /// Use the permissive threshold regime for organic/blobby imagery
    /// instead of the strict line-art defaults.
    pub squishy_blobs: bool,
    /// Start the redraw from a blank background instead of the luminance
    /// image. Affects only the optional redraw sink.
    pub redraw_outlines_only: bool,
    /// Trace the theoretical line in gray under the supporting pixels.
    /// Affects only the optional redraw sink.
    pub draw_interior_as_gray: bool,
    /// Sobel magnitude threshold separating edge from non-edge pixels.
    pub edge_threshold: i32,
    /// θ quantization step of the accumulator, radians.
    pub dtheta: f64,
    /// Half-width of the angular band swept around each gradient, radians.
    pub sweep_range: f64,
    /// Roll back admissions with too few supporting pixels (see
    /// [`MergePolicy::enforce_min_pixel_density`]).
    pub enforce_min_pixel_density: bool,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            squishy_blobs: false,
            redraw_outlines_only: false,
            draw_interior_as_gray: false,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            dtheta: DEFAULT_DTHETA,
            sweep_range: DEFAULT_SWEEP_RANGE,
            enforce_min_pixel_density: false,
        }
    }
}

impl DetectorOptions {
    /// Resolve the threshold regime these options select.
    pub fn merge_policy(&self) -> MergePolicy {
        let mut policy = if self.squishy_blobs {
            MergePolicy::squishy()
        } else {
            MergePolicy::strict()
        };
        policy.enforce_min_pixel_density = self.enforce_min_pixel_density;
        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_strict_regime() {
        let policy = DetectorOptions::default().merge_policy();
        assert_eq!(policy.min_votes_for_real_line, 90);
        assert_eq!(policy.min_useful_length, 50.0);
    }

    #[test]
    fn squishy_flag_selects_permissive_regime() {
        let options = DetectorOptions {
            squishy_blobs: true,
            ..Default::default()
        };
        let policy = options.merge_policy();
        assert_eq!(policy.min_votes_for_real_line, 10);
        assert_eq!(policy.min_useful_length, 5.0);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: DetectorOptions =
            serde_json::from_str(r#"{ "squishy_blobs": true }"#).unwrap();
        assert!(options.squishy_blobs);
        assert_eq!(options.edge_threshold, DEFAULT_EDGE_THRESHOLD);
        assert_eq!(options.dtheta, DEFAULT_DTHETA);
    }
}

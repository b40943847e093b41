#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
// (You can tighten or feature-gate these later.)
pub mod config;
pub mod edges;
pub mod geometry;
pub mod hough;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_lines, DetectorError, DetectorOptions, LineDetector};
pub use crate::detector::{LineDetectionReport, SegmentCanvas};

// Edge map consumed by the detector.
pub use crate::edges::{GradientDirection, LuminanceMap};

// Segment primitives.
pub use crate::segments::{MergePolicy, Segment};

// Counters exposed after a detection pass.
pub use crate::diagnostics::VoteCounters;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use line_detector::prelude::*;
///
/// # fn main() -> Result<(), line_detector::DetectorError> {
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![255u8; w * h * 3];
/// let img = ImageRgb8 { w, h, stride: w, data: &rgb };
///
/// let luminance = LuminanceMap::build(&img, 25)?;
/// let report = LineDetector::new(DetectorOptions::default()).detect(&luminance, None)?;
/// println!("lines={} votes_passed={}", report.segments.len(), report.counters.num_lines_with_min_votes);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, PixelSource};
    pub use crate::types::{BoundingBox, PixelPoint};
    pub use crate::{DetectorOptions, LineDetector, LuminanceMap, Segment};
}

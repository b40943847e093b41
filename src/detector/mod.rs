//! Detector pipeline orchestrating end-to-end line detection.
//!
//! The [`LineDetector`] exposes a simple API: feed a
//! [`LuminanceMap`](crate::edges::LuminanceMap) built from the source image
//! and get the accepted segment list with counters and
//! stage timings. Internally it coordinates the accumulator allocation, the
//! gradient-guided vote sweep, harvesting, collinear merging, and the final
//! length filter.
//!
//! Typical usage:
//! ```no_run
//! use line_detector::{DetectorOptions, LineDetector, LuminanceMap};
//! use line_detector::image::ImageRgb8;
//!
//! # fn example(img: ImageRgb8) -> Result<(), line_detector::DetectorError> {
//! let options = DetectorOptions::default();
//! let luminance = LuminanceMap::build(&img, options.edge_threshold)?;
//! let report = LineDetector::new(options).detect(&luminance, None)?;
//! println!("{} lines", report.segments.len());
//! # Ok(())
//! # }
//! ```
//!
//! The detector holds no state between passes and writes nothing but its
//! return value; the optional redraw sink of [`detect_lines`] is the only
//! output channel, and its failures are reported without discarding the
//! segment set.

// Stages
// - Vote: sweep edge pixels, fill the (ρ, θ) accumulator.
// - Harvest: scan cells θ-outer/ρ-inner, feed candidates to the merger.
// - Merge: extend collinear segments or admit new ones (densified).
// - Filter: drop segments below the minimum useful length.
// - Render (optional): redraw accepted segments into a grayscale sink.

mod error;
mod options;
mod pipeline;
mod render;

pub use error::DetectorError;
pub use options::DetectorOptions;
pub use pipeline::{detect_lines, LineDetectionReport, LineDetector};
pub use render::{render_segments, SegmentCanvas};

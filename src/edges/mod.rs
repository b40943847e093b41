//! Edge processing: per-pixel luminance, Sobel gradients, and edge flags.
//!
//! This module builds the [`LuminanceMap`], the one authoritative answer to
//! “is this pixel on an edge?” and “what is the local gradient?” for the rest
//! of the pipeline:
//!
//! - Grayscale conversion with the classic 0.30/0.59/0.11 weighting.
//! - Sobel gradient magnitude, thresholded into a binary edge flag.
//! - A coarse 8-way compass code for the gradient direction, with a small
//!   dead-band so nearly axis-aligned gradients classify as straight.
//!
//! Design goals
//! - Compute every per-pixel quantity exactly once, in two row-major passes.
//! - Handle borders by clamping indices (replicate).
//! - Keep the map read-only after construction; the voter, the merger, and
//!   the shape extractor all share it.

mod direction;
mod luminance;

pub use direction::GradientDirection;
pub use luminance::{LuminanceEntry, LuminanceMap, DEFAULT_EDGE_THRESHOLD};

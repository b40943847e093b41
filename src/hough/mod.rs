//! Modified Hough transform: accumulator, gradient-guided voter, harvester.
//!
//! Lines are parameterized by their perpendicular through the origin: the
//! signed distance ρ and the angle θ of that perpendicular with the x-axis.
//! Every edge pixel votes for the (ρ, θ) cells of the lines likely to contain
//! it, and cells that collect enough votes become segment candidates.
//!
//! The departure from a textbook Hough transform is twofold:
//!
//! - Each pixel votes only a narrow angular band centered on its local
//!   gradient direction, instead of the full θ range. The local gradient is
//!   noisy (pixelation, anti-aliasing, nearby edges), so a band absorbs that
//!   noise while still avoiding the false-positive flood a full sweep causes
//!   on line-dense imagery.
//! - Every cell tracks the lexicographically extreme pixels that voted for
//!   it, so harvested candidates are segments with endpoints rather than
//!   infinite lines.
//!
//! The accumulator is the dominant allocation of a pass
//! (`(2·ρ_max + 1) · ⌊π/Δθ⌋` cells) and is released as soon as harvesting
//! finishes, before any segment post-processing runs.

mod accumulator;
mod harvest;
mod voter;

pub use accumulator::{Accumulator, Candidate, DEFAULT_DTHETA};
pub use harvest::{harvest_candidates, HarvestStats};
pub use voter::{sweep_votes, DEFAULT_SWEEP_RANGE};

use crate::geometry::{values_are_close_f64, values_are_close_i32};
use crate::segments::Segment;
use serde::{Deserialize, Serialize};

/// Thresholds deciding which candidates are real lines and when two lines
/// are duplicates of each other.
///
/// - `min_votes_for_real_line`: accumulator votes below this are noise.
/// - `min_useful_length`: segments shorter than this are dropped by the
///   final filter.
/// - `min_pixel_density`: supporting pixels per unit length required when
///   density checking is enabled.
/// - `min_point_resolution`: intercept/endpoint closeness for merging.
/// - `angle_resolution`: slope closeness for merging.
/// - `max_gap_between_dashes`: two collinear dashes this close combine into
///   one line; dashed lines are usually artifacts of the source image.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    pub min_votes_for_real_line: u32,
    pub min_useful_length: f64,
    pub min_pixel_density: f64,
    pub min_point_resolution: f64,
    pub angle_resolution: f64,
    pub max_gap_between_dashes: i32,
    /// Roll back admissions whose supporting-pixel density is too low.
    /// Off by default: merging does not union pixel lists yet, so density
    /// after a merge undercounts.
    pub enforce_min_pixel_density: bool,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl MergePolicy {
    /// Default regime for technical line art.
    pub fn strict() -> Self {
        Self {
            min_votes_for_real_line: 90,
            min_useful_length: 50.0,
            min_pixel_density: 1.0 / 5.0,
            min_point_resolution: 10.0,
            angle_resolution: 0.4,
            max_gap_between_dashes: 10,
            enforce_min_pixel_density: false,
        }
    }

    /// Permissive regime for organic, blobby imagery with short lines.
    pub fn squishy() -> Self {
        Self {
            min_votes_for_real_line: 10,
            min_useful_length: 5.0,
            ..Self::strict()
        }
    }

    /// Overlap predicate between a candidate and an existing segment.
    ///
    /// Both the slope and the intercept must be close; then any one of the
    /// endpoint conditions (x-range containment, a bridgeable dash gap, or
    /// nearby start points) makes the pair overlapping.
    pub fn candidate_overlaps(&self, candidate: &Segment, existing: &Segment) -> bool {
        if !values_are_close_f64(candidate.slope, existing.slope, self.angle_resolution) {
            return false;
        }
        if !values_are_close_f64(
            candidate.y_intercept,
            existing.y_intercept,
            self.min_point_resolution,
        ) {
            return false;
        }

        let contained = |x: i32| x >= candidate.point_a.x && x <= candidate.point_b.x;
        contained(existing.point_a.x)
            || contained(existing.point_b.x)
            || values_are_close_i32(
                existing.point_a.x,
                candidate.point_b.x,
                self.max_gap_between_dashes,
            )
            || values_are_close_i32(
                existing.point_b.x,
                candidate.point_a.x,
                self.max_gap_between_dashes,
            )
            || existing.point_a.distance_to(&candidate.point_a) <= self.min_point_resolution
    }
}

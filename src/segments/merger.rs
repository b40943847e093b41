use super::policy::MergePolicy;
use super::segment::Segment;
use crate::edges::LuminanceMap;
use crate::types::PixelPoint;
use log::debug;

/// What happened to an offered candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Admitted as a new segment.
    Accepted,
    /// Folded into one or more existing collinear segments.
    MergedIntoExisting,
    /// Admission rolled back: too few supporting edge pixels.
    RejectedLowDensity,
}

/// Maintains the accepted-segment list during a harvest.
///
/// Candidates arrive in harvest order; each is either merged into the
/// existing collinear segments it overlaps (extending their endpoints) or
/// admitted as a new segment. Merging is destructive for the candidate: its
/// vote count is dropped and its pixels are never collected.
pub struct Merger<'a> {
    policy: MergePolicy,
    map: &'a LuminanceMap,
    accepted: Vec<Segment>,
    num_duplicates: usize,
}

impl<'a> Merger<'a> {
    pub fn new(policy: MergePolicy, map: &'a LuminanceMap) -> Self {
        Self {
            policy,
            map,
            accepted: Vec::new(),
            num_duplicates: 0,
        }
    }

    /// Offer a candidate endpoint pair from the harvester.
    pub fn offer(&mut self, endpoint_a: PixelPoint, endpoint_b: PixelPoint) -> Admission {
        let mut candidate = Segment::from_endpoints(endpoint_a, endpoint_b);

        // A candidate may bridge several accepted dashes at once, so every
        // overlapping segment extends, not just the first hit.
        let mut overlapped = false;
        for existing in &mut self.accepted {
            if !self.policy.candidate_overlaps(&candidate, existing) {
                continue;
            }
            overlapped = true;
            if candidate.point_a.x < existing.point_a.x {
                existing.point_a = candidate.point_a;
            }
            if candidate.point_b.x > existing.point_b.x {
                existing.point_b = candidate.point_b;
            }
            existing.refresh_line_fit();
        }
        if overlapped {
            self.num_duplicates += 1;
            return Admission::MergedIntoExisting;
        }

        self.densify(&mut candidate);
        if self.policy.enforce_min_pixel_density
            && candidate.pixel_density() < self.policy.min_pixel_density
        {
            debug!(
                "rolling back admission ({}, {})..({}, {}): density {:.3} < {:.3}",
                candidate.point_a.x,
                candidate.point_a.y,
                candidate.point_b.x,
                candidate.point_b.y,
                candidate.pixel_density(),
                self.policy.min_pixel_density
            );
            return Admission::RejectedLowDensity;
        }

        self.accepted.push(candidate);
        Admission::Accepted
    }

    /// Collect the edge pixels supporting a segment.
    ///
    /// Walks every integer x in the segment's span, evaluates the line
    /// equation, and probes the three pixels around the theoretical y. Reads
    /// outside the image count as non-edge rather than clamping, so border
    /// replication cannot fabricate members.
    fn densify(&self, segment: &mut Segment) {
        let mut pixels = Vec::new();
        for x in segment.point_a.x..=segment.point_b.x {
            let y_theoretical = segment.slope * x as f64 + segment.y_intercept;
            let y_floor = y_theoretical.floor() as i32;
            for y in [y_floor - 1, y_floor, y_floor + 1] {
                if self.map.in_bounds(x, y) && self.map.is_edge(x, y) {
                    pixels.push(PixelPoint::new(x, y));
                }
            }
        }
        segment.set_pixels(pixels);
    }

    /// Candidates that merged instead of being admitted.
    pub fn num_duplicates(&self) -> usize {
        self.num_duplicates
    }

    pub fn accepted(&self) -> &[Segment] {
        &self.accepted
    }

    /// Finish the pass and hand over the accepted list in insertion order.
    pub fn into_segments(self) -> Vec<Segment> {
        self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::DEFAULT_EDGE_THRESHOLD;
    use crate::image::ImageRgb8;

    fn flat_map(w: usize, h: usize) -> LuminanceMap {
        let data = vec![255u8; w * h * 3];
        let img = ImageRgb8 {
            w,
            h,
            stride: w,
            data: &data,
        };
        LuminanceMap::build(&img, DEFAULT_EDGE_THRESHOLD).unwrap()
    }

    fn step_map(w: usize, h: usize, split_y: usize) -> LuminanceMap {
        let mut data = vec![255u8; w * h * 3];
        for y in split_y..h {
            for x in 0..w {
                let base = (y * w + x) * 3;
                data[base] = 0;
                data[base + 1] = 0;
                data[base + 2] = 0;
            }
        }
        let img = ImageRgb8 {
            w,
            h,
            stride: w,
            data: &data,
        };
        LuminanceMap::build(&img, DEFAULT_EDGE_THRESHOLD).unwrap()
    }

    #[test]
    fn collinear_dashes_merge_and_extend() {
        let map = flat_map(100, 100);
        let mut merger = Merger::new(MergePolicy::strict(), &map);
        assert_eq!(
            merger.offer(PixelPoint::new(10, 50), PixelPoint::new(40, 50)),
            Admission::Accepted
        );
        // Gap of 5 columns: bridged as two dashes of one line.
        assert_eq!(
            merger.offer(PixelPoint::new(45, 50), PixelPoint::new(80, 50)),
            Admission::MergedIntoExisting
        );
        assert_eq!(merger.num_duplicates(), 1);
        let segments = merger.into_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].point_a, PixelPoint::new(10, 50));
        assert_eq!(segments[0].point_b, PixelPoint::new(80, 50));
        assert!(segments[0].slope.abs() < 1e-12);
    }

    #[test]
    fn distant_parallels_stay_separate() {
        let map = flat_map(100, 100);
        let mut merger = Merger::new(MergePolicy::strict(), &map);
        merger.offer(PixelPoint::new(10, 30), PixelPoint::new(80, 30));
        merger.offer(PixelPoint::new(10, 70), PixelPoint::new(80, 70));
        let segments = merger.into_segments();
        assert_eq!(segments.len(), 2);
        assert!((segments[0].y_intercept - 30.0).abs() < 1e-12);
        assert!((segments[1].y_intercept - 70.0).abs() < 1e-12);
    }

    #[test]
    fn close_parallels_merge() {
        let map = flat_map(100, 100);
        let mut merger = Merger::new(MergePolicy::strict(), &map);
        merger.offer(PixelPoint::new(10, 50), PixelPoint::new(80, 50));
        // Two rows apart: within the point resolution, same line.
        assert_eq!(
            merger.offer(PixelPoint::new(5, 52), PixelPoint::new(85, 52)),
            Admission::MergedIntoExisting
        );
        let segments = merger.into_segments();
        assert_eq!(segments.len(), 1);
        // Extended to span both originals.
        assert_eq!(segments[0].point_a, PixelPoint::new(5, 52));
        assert_eq!(segments[0].point_b, PixelPoint::new(85, 52));
    }

    #[test]
    fn vertical_sentinel_slopes_do_not_merge() {
        let map = flat_map(200, 200);
        let mut merger = Merger::new(MergePolicy::strict(), &map);
        merger.offer(PixelPoint::new(74, 10), PixelPoint::new(74, 139));
        // The adjacent column two pixels away: intercepts differ by
        // slope × Δx = 258, far past the point resolution.
        assert_eq!(
            merger.offer(PixelPoint::new(76, 10), PixelPoint::new(76, 139)),
            Admission::Accepted
        );
        assert_eq!(merger.into_segments().len(), 2);
    }

    #[test]
    fn densification_collects_supporting_pixels() {
        // Luminance step at y=16: edge rows at 15 and 16 across the image.
        let map = step_map(32, 32, 16);
        let mut merger = Merger::new(MergePolicy::strict(), &map);
        merger.offer(PixelPoint::new(0, 15), PixelPoint::new(31, 15));
        let segments = merger.into_segments();
        // Probes y ∈ {14, 15, 16} for each of 32 columns; rows 15 and 16 are edges.
        assert_eq!(segments[0].pixel_count, 64);
        assert!(segments[0].pixel_density() > 1.0);
    }

    #[test]
    fn low_density_admission_rolls_back_when_enforced() {
        let map = flat_map(100, 100);
        let policy = MergePolicy {
            enforce_min_pixel_density: true,
            ..MergePolicy::strict()
        };
        let mut merger = Merger::new(policy, &map);
        // No edges anywhere: density is zero.
        assert_eq!(
            merger.offer(PixelPoint::new(10, 50), PixelPoint::new(80, 50)),
            Admission::RejectedLowDensity
        );
        assert!(merger.into_segments().is_empty());
    }
}

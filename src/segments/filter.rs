use super::policy::MergePolicy;
use super::segment::Segment;

/// Final pass over the accepted list, in insertion order.
///
/// Drops segments shorter than the policy's minimum useful length, and,
/// only when the policy enforces it, segments whose supporting-pixel
/// density is too low. The density filter stays opt-in until pixel lists
/// survive merging.
pub fn filter_segments(mut segments: Vec<Segment>, policy: &MergePolicy) -> Vec<Segment> {
    segments.retain(|s| s.length() >= policy.min_useful_length);
    if policy.enforce_min_pixel_density {
        segments.retain(|s| s.pixel_density() >= policy.min_pixel_density);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PixelPoint;

    fn seg(ax: i32, ay: i32, bx: i32, by: i32) -> Segment {
        Segment::from_endpoints(PixelPoint::new(ax, ay), PixelPoint::new(bx, by))
    }

    #[test]
    fn short_segments_are_dropped() {
        let segments = vec![seg(0, 0, 100, 0), seg(0, 10, 20, 10), seg(0, 20, 50, 20)];
        let kept = filter_segments(segments, &MergePolicy::strict());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].point_b.x, 100);
        assert_eq!(kept[1].point_b.x, 50);
    }

    #[test]
    fn length_exactly_at_minimum_survives() {
        let kept = filter_segments(vec![seg(0, 0, 50, 0)], &MergePolicy::strict());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn squishy_keeps_short_segments() {
        let segments = vec![seg(0, 0, 6, 0)];
        assert_eq!(
            filter_segments(segments, &MergePolicy::squishy()).len(),
            1
        );
    }

    #[test]
    fn density_filter_applies_only_when_enforced() {
        let mut low_density = seg(0, 0, 100, 0);
        low_density.set_pixels(vec![PixelPoint::new(0, 0)]);

        let kept = filter_segments(vec![low_density.clone()], &MergePolicy::strict());
        assert_eq!(kept.len(), 1);

        let enforcing = MergePolicy {
            enforce_min_pixel_density: true,
            ..MergePolicy::strict()
        };
        assert!(filter_segments(vec![low_density], &enforcing).is_empty());
    }
}

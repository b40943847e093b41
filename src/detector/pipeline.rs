use super::error::DetectorError;
use super::options::DetectorOptions;
use super::render::{render_segments, SegmentCanvas};
use crate::diagnostics::{TimingBreakdown, VoteCounters};
use crate::edges::LuminanceMap;
use crate::hough::{harvest_candidates, sweep_votes, Accumulator};
use crate::segments::{filter_segments, Merger, Segment};
use crate::types::BoundingBox;
use log::debug;
use std::time::Instant;

/// Result of one detection pass.
#[derive(Debug)]
pub struct LineDetectionReport {
    /// Accepted segments, in insertion order.
    pub segments: Vec<Segment>,
    pub counters: VoteCounters,
    pub timing: TimingBreakdown,
    /// Set when the optional redraw sink failed; the segments above are
    /// complete and valid regardless.
    pub sink_error: Option<DetectorError>,
}

/// Line detector for a single configuration.
///
/// A pure function of its inputs: no state survives a pass, and two passes
/// over the same map yield the same report.
pub struct LineDetector {
    options: DetectorOptions,
}

impl LineDetector {
    /// Create a detector with the supplied options.
    pub fn new(options: DetectorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DetectorOptions {
        &self.options
    }

    /// Run the full pipeline over `bbox` (the whole image when `None`).
    pub fn detect(
        &self,
        luminance: &LuminanceMap,
        bbox: Option<BoundingBox>,
    ) -> Result<LineDetectionReport, DetectorError> {
        let total_start = Instant::now();
        let (w, h) = luminance.dims();
        if w == 0 || h == 0 {
            return Err(DetectorError::InvalidInput(format!(
                "luminance map is {w}x{h}"
            )));
        }
        let bbox = match bbox {
            Some(requested) => requested.clamped(w, h).ok_or_else(|| {
                DetectorError::InvalidInput(format!("degenerate bounding box {requested:?}"))
            })?,
            None => BoundingBox::full(w, h),
        };

        let policy = self.options.merge_policy();
        let mut timing = TimingBreakdown::default();

        let mut accumulator = Accumulator::new(w, h, self.options.dtheta)?;
        let vote_start = Instant::now();
        sweep_votes(luminance, &mut accumulator, bbox, self.options.sweep_range);
        timing.push("vote", vote_start.elapsed().as_secs_f64() * 1000.0);

        let harvest_start = Instant::now();
        let mut merger = Merger::new(policy, luminance);
        let stats = harvest_candidates(
            &mut accumulator,
            policy.min_votes_for_real_line,
            |candidate| {
                merger.offer(candidate.endpoint_a, candidate.endpoint_b);
            },
        );
        // The grid is by far the largest allocation of the pass; free it
        // before any segment post-processing.
        drop(accumulator);
        timing.push("harvest", harvest_start.elapsed().as_secs_f64() * 1000.0);

        let filter_start = Instant::now();
        let num_duplicate_lines = merger.num_duplicates();
        let segments = filter_segments(merger.into_segments(), &policy);
        timing.push("filter", filter_start.elapsed().as_secs_f64() * 1000.0);

        let counters = VoteCounters {
            num_possible_lines: stats.num_possible_lines,
            num_lines_with_min_votes: stats.num_lines_with_min_votes,
            num_duplicate_lines,
            num_lines: segments.len(),
        };
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "line detection: possible={} with_min_votes={} duplicates={} lines={}",
            counters.num_possible_lines,
            counters.num_lines_with_min_votes,
            counters.num_duplicate_lines,
            counters.num_lines
        );

        Ok(LineDetectionReport {
            segments,
            counters,
            timing,
            sink_error: None,
        })
    }
}

/// Run a detection pass and optionally redraw the result into a sink.
///
/// A sink write failure is non-fatal: it is recorded on the report, which
/// still carries the full segment set.
pub fn detect_lines(
    options: DetectorOptions,
    luminance: &LuminanceMap,
    bbox: Option<BoundingBox>,
    sink: Option<&mut dyn SegmentCanvas>,
) -> Result<LineDetectionReport, DetectorError> {
    let mut report = LineDetector::new(options).detect(luminance, bbox)?;
    if let Some(canvas) = sink {
        if let Err(msg) = render_segments(&report.segments, luminance, &options, canvas) {
            report.sink_error = Some(DetectorError::Sink(msg));
        }
    }
    Ok(report)
}

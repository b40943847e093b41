use line_detector::config::{load_config, DetectToolConfig};
use line_detector::diagnostics::{TimingBreakdown, VoteCounters};
use line_detector::image::io::{load_rgb_image, save_grayscale_u8, write_json_file};
use line_detector::image::{GrayBuffer, GRAYSCALE_WHITE};
use line_detector::{detect_lines, LuminanceMap, Segment, SegmentCanvas};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: DetectToolConfig = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;
    let view = image.as_view();

    let luminance = LuminanceMap::build(&view, config.detector.edge_threshold)
        .map_err(|e| format!("Failed to build luminance map: {e}"))?;

    let mut canvas = config
        .output
        .rebuilt_image
        .as_ref()
        .map(|_| GrayBuffer::filled(image.width(), image.height(), GRAYSCALE_WHITE));

    let report = detect_lines(
        config.detector,
        &luminance,
        None,
        canvas.as_mut().map(|c| c as &mut dyn SegmentCanvas),
    )
    .map_err(|e| format!("Line detection failed: {e}"))?;

    if let Some(sink_error) = &report.sink_error {
        eprintln!("Warning: {sink_error}");
    }

    let summary = DetectionSummary {
        width: image.width(),
        height: image.height(),
        counters: report.counters,
        timing: report.timing,
        segments: report.segments,
    };
    write_json_file(&config.output.segments_json, &summary)?;
    println!(
        "Saved {} segments to {}",
        summary.segments.len(),
        config.output.segments_json.display()
    );

    if let (Some(path), Some(canvas)) = (&config.output.rebuilt_image, &canvas) {
        save_grayscale_u8(canvas, path)?;
        println!("Saved rebuilt line image to {}", path.display());
    }

    if let Some(path) = &config.output.edge_image {
        save_grayscale_u8(&luminance.edge_image(), path)?;
        println!("Saved edge image to {}", path.display());
    }

    println!(
        "possible={} with_min_votes={} duplicates={} lines={} ({:.1} ms)",
        summary.counters.num_possible_lines,
        summary.counters.num_lines_with_min_votes,
        summary.counters.num_duplicate_lines,
        summary.counters.num_lines,
        summary.timing.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: detect_lines <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectionSummary {
    width: usize,
    height: usize,
    counters: VoteCounters,
    timing: TimingBreakdown,
    segments: Vec<Segment>,
}

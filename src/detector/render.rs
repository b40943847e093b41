use super::options::DetectorOptions;
use crate::edges::LuminanceMap;
use crate::geometry::round_to_i32;
use crate::image::{GrayBuffer, GRAYSCALE_BLACK, GRAYSCALE_WHITE};
use crate::segments::Segment;

/// Mid-gray used for the theoretical line trace.
const GRAYSCALE_INTERIOR: u8 = 0x80;

/// Grayscale sink accepting the rebuilt line image.
///
/// Write failures propagate to the caller, which treats them as non-fatal:
/// the segment list is independent of the redraw.
pub trait SegmentCanvas {
    fn dims(&self) -> (usize, usize);
    fn set_gray(&mut self, x: usize, y: usize, value: u8) -> Result<(), String>;
}

impl SegmentCanvas for GrayBuffer {
    fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    fn set_gray(&mut self, x: usize, y: usize, value: u8) -> Result<(), String> {
        self.set(x, y, value);
        Ok(())
    }
}

/// Redraw accepted segments into a grayscale sink.
///
/// The background is either blank (`redraw_outlines_only`) or the luminance
/// image; each segment then draws its supporting pixels in black, optionally
/// under a gray trace of the theoretical line.
pub fn render_segments(
    segments: &[Segment],
    luminance: &LuminanceMap,
    options: &DetectorOptions,
    canvas: &mut dyn SegmentCanvas,
) -> Result<(), String> {
    let (w, h) = canvas.dims();

    for y in 0..h {
        for x in 0..w {
            let value = if options.redraw_outlines_only {
                GRAYSCALE_WHITE
            } else {
                luminance.luminance(x as i32, y as i32)
            };
            canvas.set_gray(x, y, value)?;
        }
    }

    for segment in segments {
        if options.draw_interior_as_gray {
            for x in segment.point_a.x..=segment.point_b.x {
                let y = round_to_i32(segment.slope * x as f64 + segment.y_intercept);
                if in_canvas(x, y, w, h) {
                    canvas.set_gray(x as usize, y as usize, GRAYSCALE_INTERIOR)?;
                }
            }
        }
        for pixel in segment.pixels() {
            if in_canvas(pixel.x, pixel.y, w, h) {
                canvas.set_gray(pixel.x as usize, pixel.y as usize, GRAYSCALE_BLACK)?;
            }
        }
    }

    Ok(())
}

#[inline]
fn in_canvas(x: i32, y: i32, w: usize, h: usize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::DEFAULT_EDGE_THRESHOLD;
    use crate::image::ImageRgb8;
    use crate::types::PixelPoint;

    fn flat_map(w: usize, h: usize, value: u8) -> LuminanceMap {
        let data = vec![value; w * h * 3];
        let img = ImageRgb8 {
            w,
            h,
            stride: w,
            data: &data,
        };
        LuminanceMap::build(&img, DEFAULT_EDGE_THRESHOLD).unwrap()
    }

    fn segment_with_pixels(ax: i32, ay: i32, bx: i32, by: i32) -> Segment {
        let mut seg = Segment::from_endpoints(PixelPoint::new(ax, ay), PixelPoint::new(bx, by));
        seg.set_pixels((ax..=bx).map(|x| PixelPoint::new(x, ay)).collect());
        seg
    }

    #[test]
    fn outlines_only_erases_background() {
        let map = flat_map(16, 16, 80);
        let options = DetectorOptions {
            redraw_outlines_only: true,
            ..Default::default()
        };
        let segments = vec![segment_with_pixels(2, 5, 9, 5)];
        let mut canvas = GrayBuffer::filled(16, 16, 0x33);
        render_segments(&segments, &map, &options, &mut canvas).unwrap();
        assert_eq!(canvas.get(0, 0), GRAYSCALE_WHITE);
        assert_eq!(canvas.get(2, 5), GRAYSCALE_BLACK);
        assert_eq!(canvas.get(9, 5), GRAYSCALE_BLACK);
        assert_eq!(canvas.get(10, 5), GRAYSCALE_WHITE);
    }

    #[test]
    fn default_background_is_the_luminance_image() {
        let map = flat_map(16, 16, 80);
        let options = DetectorOptions::default();
        let mut canvas = GrayBuffer::filled(16, 16, 0);
        render_segments(&[], &map, &options, &mut canvas).unwrap();
        assert_eq!(canvas.get(3, 3), 80);
    }

    #[test]
    fn interior_trace_draws_gray_under_members() {
        let map = flat_map(16, 16, 255);
        let options = DetectorOptions {
            redraw_outlines_only: true,
            draw_interior_as_gray: true,
            ..Default::default()
        };
        // Members cover only half the span; the rest shows the gray trace.
        let mut seg =
            Segment::from_endpoints(PixelPoint::new(0, 8), PixelPoint::new(10, 8));
        seg.set_pixels((0..=5).map(|x| PixelPoint::new(x, 8)).collect());
        let mut canvas = GrayBuffer::filled(16, 16, 0);
        render_segments(&[seg], &map, &options, &mut canvas).unwrap();
        assert_eq!(canvas.get(3, 8), GRAYSCALE_BLACK);
        assert_eq!(canvas.get(8, 8), GRAYSCALE_INTERIOR);
    }

    #[test]
    fn out_of_canvas_pixels_are_clipped() {
        let map = flat_map(8, 8, 255);
        let options = DetectorOptions {
            redraw_outlines_only: true,
            ..Default::default()
        };
        // Segment extends past the canvas; rendering must not panic.
        let seg = segment_with_pixels(4, 4, 20, 4);
        let mut canvas = GrayBuffer::filled(8, 8, 0);
        render_segments(&[seg], &map, &options, &mut canvas).unwrap();
        assert_eq!(canvas.get(4, 4), GRAYSCALE_BLACK);
    }
}

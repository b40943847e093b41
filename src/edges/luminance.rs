use super::direction::GradientDirection;
use crate::detector::DetectorError;
use crate::image::{GrayBuffer, PixelSource, GRAYSCALE_BLACK, GRAYSCALE_WHITE};

/// Default Sobel magnitude threshold separating edge from non-edge pixels.
pub const DEFAULT_EDGE_THRESHOLD: i32 = 25;

/// Per-pixel record computed once from the source image.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuminanceEntry {
    /// Grayscale luminance in [0, 255].
    pub gray: u8,
    /// True iff the Sobel magnitude reaches the configured threshold.
    pub is_edge: bool,
    /// Raw Sobel magnitude, unclipped. Clip to [0, 255] for display.
    pub gradient_mag: i32,
    /// Compass code for the direction luminance grows in.
    pub gradient_dir: GradientDirection,
}

/// Dense per-pixel luminance and gradient map.
///
/// Built once from a [`PixelSource`], then queried read-only by the voter
/// (gradient sweep), the merger (densification), and the shape extractor.
/// Out-of-range queries clamp to the nearest valid pixel, so callers can ask
/// about 3×3 neighborhoods anywhere without bounds bookkeeping.
#[derive(Clone, Debug)]
pub struct LuminanceMap {
    w: usize,
    h: usize,
    edge_threshold: i32,
    entries: Vec<LuminanceEntry>,
}

impl LuminanceMap {
    /// Compute luminance and Sobel gradients for a whole image.
    ///
    /// Runs two passes: grayscale conversion first, then the gradient pass
    /// over the cached luminance values.
    pub fn build(source: &impl PixelSource, edge_threshold: i32) -> Result<Self, DetectorError> {
        let (w, h) = source.dims();
        if w == 0 || h == 0 {
            return Err(DetectorError::InvalidInput(format!(
                "image dimensions {w}x{h} are degenerate"
            )));
        }

        let mut map = Self {
            w,
            h,
            edge_threshold,
            entries: vec![LuminanceEntry::default(); w * h],
        };

        for y in 0..h {
            for x in 0..w {
                let [r, g, b] = source.rgb(x, y);
                map.entries[y * w + x].gray = pixel_luminance(r, g, b);
            }
        }
        map.compute_gradients();
        Ok(map)
    }

    fn compute_gradients(&mut self) {
        for y in 0..self.h as i32 {
            for x in 0..self.w as i32 {
                let above = self.luminance(x, y - 1) as i32;
                let below = self.luminance(x, y + 1) as i32;
                let left = self.luminance(x - 1, y) as i32;
                let right = self.luminance(x + 1, y) as i32;
                let above_left = self.luminance(x - 1, y - 1) as i32;
                let above_right = self.luminance(x + 1, y - 1) as i32;
                let below_left = self.luminance(x - 1, y + 1) as i32;
                let below_right = self.luminance(x + 1, y + 1) as i32;

                let gx = (2 * right + above_right + below_right) - (2 * left + above_left + below_left);
                // Positive when pixels above are brighter (y grows downward).
                let gy = (2 * above + above_left + above_right) - (2 * below + below_left + below_right);

                let mag = ((gx * gx + gy * gy) as f64).sqrt().round() as i32;

                let entry = &mut self.entries[(y as usize) * self.w + x as usize];
                entry.gradient_mag = mag;
                entry.gradient_dir = GradientDirection::classify(gx, gy);
                entry.is_edge = self.edge_threshold > 0 && mag >= self.edge_threshold;
            }
        }
    }

    /// Image dimensions as `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Threshold the edge flags were computed with.
    #[inline]
    pub fn edge_threshold(&self) -> i32 {
        self.edge_threshold
    }

    #[inline]
    fn entry(&self, x: i32, y: i32) -> &LuminanceEntry {
        let cx = x.clamp(0, self.w as i32 - 1) as usize;
        let cy = y.clamp(0, self.h as i32 - 1) as usize;
        &self.entries[cy * self.w + cx]
    }

    /// Grayscale luminance at `(x, y)`; out-of-range clamps to the border.
    #[inline]
    pub fn luminance(&self, x: i32, y: i32) -> u8 {
        self.entry(x, y).gray
    }

    /// Edge flag at `(x, y)`; out-of-range clamps to the border.
    #[inline]
    pub fn is_edge(&self, x: i32, y: i32) -> bool {
        self.entry(x, y).is_edge
    }

    /// Raw Sobel magnitude at `(x, y)`; out-of-range clamps to the border.
    #[inline]
    pub fn gradient_mag(&self, x: i32, y: i32) -> i32 {
        self.entry(x, y).gradient_mag
    }

    /// Sobel magnitude clipped to [0, 255] for display.
    #[inline]
    pub fn gradient_mag_display(&self, x: i32, y: i32) -> u8 {
        self.entry(x, y).gradient_mag.clamp(0, 255) as u8
    }

    /// Gradient compass code at `(x, y)`; out-of-range clamps to the border.
    #[inline]
    pub fn gradient_dir(&self, x: i32, y: i32) -> GradientDirection {
        self.entry(x, y).gradient_dir
    }

    /// True when `(x, y)` addresses a real pixel (no clamping involved).
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h
    }

    /// Render the edge flags as a black-on-white grayscale image.
    pub fn edge_image(&self) -> GrayBuffer {
        let mut out = GrayBuffer::filled(self.w, self.h, GRAYSCALE_WHITE);
        for y in 0..self.h {
            for x in 0..self.w {
                if self.entries[y * self.w + x].is_edge {
                    out.set(x, y, GRAYSCALE_BLACK);
                }
            }
        }
        out
    }
}

/// Weighted grayscale conversion: `0.30·R + 0.59·G + 0.11·B`, rounded.
#[inline]
fn pixel_luminance(r: u8, g: u8, b: u8) -> u8 {
    let lum = 0.30 * r as f64 + 0.59 * g as f64 + 0.11 * b as f64;
    lum.round().clamp(0.0, 255.0) as u8
}

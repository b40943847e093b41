use crate::types::PixelPoint;
use nalgebra::Vector3;
use serde::Serialize;
use std::cell::OnceCell;

/// An accepted line segment.
///
/// Endpoints are ordered so `point_a.x ≤ point_b.x`, ties broken by y. The
/// slope/intercept pair is derived from the endpoints; a vertical pair
/// substitutes Δx = 1 so the slope stays finite (a sentinel steep slope
/// rather than an infinity).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub point_a: PixelPoint,
    pub point_b: PixelPoint,
    pub slope: f64,
    pub y_intercept: f64,
    /// Angle with the horizontal axis, radians.
    pub angle_with_horizontal: f64,
    /// Number of edge pixels found along the segment at admission time.
    pub pixel_count: u32,
    /// The supporting edge pixels themselves, used for redrawing.
    #[serde(skip)]
    pub(crate) pixels: Vec<PixelPoint>,
    #[serde(skip)]
    length: OnceCell<f64>,
    #[serde(skip)]
    line: OnceCell<Vector3<f64>>,
}

impl Segment {
    /// Build a segment from two endpoints, normalizing their order.
    pub fn from_endpoints(a: PixelPoint, b: PixelPoint) -> Self {
        let (point_a, point_b) = if b < a { (b, a) } else { (a, b) };
        let (slope, y_intercept, angle_with_horizontal) = line_fit(point_a, point_b);
        Self {
            point_a,
            point_b,
            slope,
            y_intercept,
            angle_with_horizontal,
            pixel_count: 0,
            pixels: Vec::new(),
            length: OnceCell::new(),
            line: OnceCell::new(),
        }
    }

    /// Recompute slope, intercept, and angle after the endpoints moved.
    pub(crate) fn refresh_line_fit(&mut self) {
        let (slope, y_intercept, angle) = line_fit(self.point_a, self.point_b);
        self.slope = slope;
        self.y_intercept = y_intercept;
        self.angle_with_horizontal = angle;
        self.length = OnceCell::new();
        self.line = OnceCell::new();
    }

    pub(crate) fn set_pixels(&mut self, pixels: Vec<PixelPoint>) {
        self.pixel_count = pixels.len() as u32;
        self.pixels = pixels;
    }

    /// Supporting edge pixels collected at admission.
    pub fn pixels(&self) -> &[PixelPoint] {
        &self.pixels
    }

    /// Euclidean endpoint distance, computed on first use.
    pub fn length(&self) -> f64 {
        *self
            .length
            .get_or_init(|| self.point_a.distance_to(&self.point_b))
    }

    /// Supporting pixels per unit of length.
    pub fn pixel_density(&self) -> f64 {
        self.pixel_count as f64 / self.length()
    }

    /// Line in normal form `ax + by + c = 0` with `√(a² + b²) = 1`.
    pub fn line(&self) -> Vector3<f64> {
        *self.line.get_or_init(|| {
            let (x0, y0) = (self.point_a.x as f64, self.point_a.y as f64);
            let (x1, y1) = (self.point_b.x as f64, self.point_b.y as f64);
            let a = y1 - y0;
            let b = x0 - x1;
            let c = x1 * y0 - x0 * y1;
            let norm = (a * a + b * b).sqrt().max(1e-12);
            Vector3::new(a / norm, b / norm, c / norm)
        })
    }
}

/// Slope, intercept, and horizontal angle from an endpoint pair.
fn line_fit(a: PixelPoint, b: PixelPoint) -> (f64, f64, f64) {
    let mut dx = b.x - a.x;
    if dx == 0 {
        // Treat vertical as "almost vertical" so the slope stays finite.
        dx = 1;
    }
    let dy = b.y - a.y;
    let slope = dy as f64 / dx as f64;
    // y = mx + b, so b = y - mx
    let y_intercept = a.y as f64 - slope * a.x as f64;
    // slope = Δy/Δx; with Δx = 1, Δy equals the slope.
    let angle_with_horizontal = (1.0f64).atan2(slope);
    (slope, y_intercept, angle_with_horizontal)
}

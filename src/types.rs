use serde::{Deserialize, Serialize};

/// Integer pixel coordinate with the image origin at the top-left corner.
/// `x` grows to the right, `y` grows downward.
///
/// The derived ordering is lexicographic on (x, then y); that ordering is the
/// one the accumulator uses to keep the extreme endpoints of a candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another pixel.
    #[inline]
    pub fn distance_to(&self, other: &PixelPoint) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Half-open pixel rectangle `[x0, x1) × [y0, y1)` restricting a detection
/// pass. Negative coordinates clamp to zero; the upper bounds clamp to the
/// image dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    /// Box covering a whole `w × h` image.
    pub fn full(w: usize, h: usize) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: w as i32,
            y1: h as i32,
        }
    }

    /// Clamp the box into a `w × h` image. Returns `None` when the clamped
    /// box is degenerate (empty in either axis).
    pub fn clamped(&self, w: usize, h: usize) -> Option<Self> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(w as i32);
        let y1 = self.y1.min(h as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self { x0, y0, x1, y1 })
    }

    #[inline]
    pub fn width(&self) -> usize {
        (self.x1 - self.x0) as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        (self.y1 - self.y0) as usize
    }
}

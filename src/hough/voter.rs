use super::accumulator::Accumulator;
use crate::edges::LuminanceMap;
use crate::geometry::quantize_to_step;
use crate::types::{BoundingBox, PixelPoint};
use std::f64::consts::{FRAC_PI_2, PI};

/// Default half-width of the angular band swept around the gradient angle.
///
/// A wider band finds more true lines but costs votes linearly; π/8 is the
/// empirical knee of that curve. π/16 misses most lines, π/4 finds nearly
/// all of them at roughly double the cost.
pub const DEFAULT_SWEEP_RANGE: f64 = FRAC_PI_2 / 4.0;

/// Convert the edge map into accumulator votes.
///
/// For every edge pixel in `bbox`, estimates the angle of the perpendicular
/// line from the local gradient and votes for each quantized θ in a band of
/// ±`range` around it, with `ρ = x·cos θ − y·sin θ` (the sign of the y term
/// matches a coordinate system with y growing downward).
///
/// Nothing here is fatal: out-of-range ρ and θ clamp into the grid, and
/// border gradients use the map's replicated-border reads.
pub fn sweep_votes(map: &LuminanceMap, acc: &mut Accumulator, bbox: BoundingBox, range: f64) {
    let dtheta = acc.dtheta();
    let theta_min = acc.theta_min();
    let theta_max = acc.theta_max();
    let rho_max = acc.rho_max();

    for y in bbox.y0..bbox.y1 {
        for x in bbox.x0..bbox.x1 {
            if !map.is_edge(x, y) {
                continue;
            }

            let theta_center = perpendicular_angle(map, x, y, theta_min, theta_max);
            // Limit the angle to the grid precision so that pixels on the
            // same pixelated line derive the same quantized center.
            let theta_center = quantize_to_step(theta_center, dtheta);

            let start = (theta_center - range).clamp(theta_min, theta_max);
            let end = (theta_center + range).clamp(theta_min, theta_max);

            let pixel = PixelPoint::new(x, y);
            let mut theta = start;
            while theta < end {
                let rho = (x as f64) * theta.cos() - (y as f64) * theta.sin();
                let rho = rho.clamp(-rho_max, rho_max);
                acc.vote(rho, theta, pixel);
                theta += dtheta;
            }
        }
    }
}

/// Angle of the perpendicular line at an edge pixel, in [θ_min, θ_max).
///
/// The row gradient (difference between the rows below and above) is the
/// y-component of the net luminance change, the column gradient (difference
/// between the columns left and right) the x-component. Their `atan2` is the
/// angle of the steepest change, which points along the perpendicular of the
/// containing line. Lines are non-directional, so angles fold by π into the
/// half-open range.
#[inline]
fn perpendicular_angle(map: &LuminanceMap, x: i32, y: i32, theta_min: f64, theta_max: f64) -> f64 {
    let above = map.luminance(x, y - 1) as i32;
    let below = map.luminance(x, y + 1) as i32;
    let left = map.luminance(x - 1, y) as i32;
    let right = map.luminance(x + 1, y) as i32;
    let above_left = map.luminance(x - 1, y - 1) as i32;
    let above_right = map.luminance(x + 1, y - 1) as i32;
    let below_left = map.luminance(x - 1, y + 1) as i32;
    let below_right = map.luminance(x + 1, y + 1) as i32;

    let row_gradient = (2 * below + below_left + below_right) - (2 * above + above_left + above_right);
    let col_gradient = (2 * left + above_left + below_left) - (2 * right + above_right + below_right);

    let mut angle = (row_gradient as f64).atan2(col_gradient as f64);
    if angle < theta_min {
        angle += PI;
    }
    if angle >= theta_max {
        angle -= PI;
    }
    angle
}

use serde::{Deserialize, Serialize};

/// Axis-aligned gradients below this magnitude are treated as straight.
const MAX_GRADIENT_FOR_STRAIGHT_LINE: i32 = 10;

/// Coarse compass code for the direction pixels brighten in.
///
/// `WestToEast` means luminance grows from west to east, i.e. the gradient
/// x-component is positive while the y-component is negligible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    #[default]
    WestToEast,
    EastToWest,
    NorthToSouth,
    SouthToNorth,
    NortheastToSouthwest,
    SouthwestToNortheast,
    NorthwestToSoutheast,
    SoutheastToNorthwest,
}

impl GradientDirection {
    /// Classify a Sobel gradient `(gx, gy)` into one of the 8 compass codes.
    ///
    /// `gy` is positive when pixels above are brighter than pixels below
    /// (y grows downward). A ±10 dead-band on either axis snaps nearly
    /// axis-aligned gradients to the straight codes.
    pub fn classify(gx: i32, gy: i32) -> Self {
        if gy.abs() <= MAX_GRADIENT_FOR_STRAIGHT_LINE {
            if gx >= 0 {
                GradientDirection::WestToEast
            } else {
                GradientDirection::EastToWest
            }
        } else if gx.abs() <= MAX_GRADIENT_FOR_STRAIGHT_LINE {
            if gy >= 0 {
                GradientDirection::SouthToNorth
            } else {
                GradientDirection::NorthToSouth
            }
        } else if gx >= 0 {
            if gy >= 0 {
                GradientDirection::SouthwestToNortheast
            } else {
                GradientDirection::NorthwestToSoutheast
            }
        } else if gy >= 0 {
            GradientDirection::SoutheastToNorthwest
        } else {
            GradientDirection::NortheastToSouthwest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_codes_win_inside_dead_band() {
        assert_eq!(
            GradientDirection::classify(100, 10),
            GradientDirection::WestToEast
        );
        assert_eq!(
            GradientDirection::classify(-100, -10),
            GradientDirection::EastToWest
        );
        assert_eq!(
            GradientDirection::classify(10, 100),
            GradientDirection::SouthToNorth
        );
        assert_eq!(
            GradientDirection::classify(-10, -100),
            GradientDirection::NorthToSouth
        );
    }

    #[test]
    fn horizontal_dead_band_takes_precedence() {
        // Both components inside the dead-band: the horizontal rule applies first.
        assert_eq!(
            GradientDirection::classify(5, 5),
            GradientDirection::WestToEast
        );
        assert_eq!(
            GradientDirection::classify(-5, 5),
            GradientDirection::EastToWest
        );
    }

    #[test]
    fn diagonals_follow_component_signs() {
        assert_eq!(
            GradientDirection::classify(50, 50),
            GradientDirection::SouthwestToNortheast
        );
        assert_eq!(
            GradientDirection::classify(50, -50),
            GradientDirection::NorthwestToSoutheast
        );
        assert_eq!(
            GradientDirection::classify(-50, 50),
            GradientDirection::SoutheastToNorthwest
        );
        assert_eq!(
            GradientDirection::classify(-50, -50),
            GradientDirection::NortheastToSouthwest
        );
    }
}

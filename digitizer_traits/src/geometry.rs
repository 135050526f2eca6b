/// A click position in image pixel space.
///
/// Sub-pixel positions are allowed; collaborators that only report integer
/// pixels simply produce whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis.
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Image axis selector used by reference-length calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn along_selects_axis() {
        let p = PixelPoint::new(3.0, -7.5);
        assert_eq!(p.along(Axis::X), 3.0);
        assert_eq!(p.along(Axis::Y), -7.5);
    }

    #[test]
    fn display_is_one_decimal() {
        assert_eq!(PixelPoint::new(100.0, 42.31).to_string(), "(100.0, 42.3)");
        assert_eq!(Axis::Y.to_string(), "y");
    }
}

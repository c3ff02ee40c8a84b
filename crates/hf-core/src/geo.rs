//! Pixel-space coordinate type.
//!
//! Positions come from the layout in screen convention (x right, y down).
//! Steering math wants a y-up frame, so [`PixelPoint::delta_y_up`] flips the
//! vertical component when building direction vectors.

/// A 2-D screen coordinate in pixels (y grows downwards).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const ORIGIN: PixelPoint = PixelPoint { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t` is used as given, callers clamp.
    #[inline]
    pub fn lerp(self, other: PixelPoint, t: f32) -> PixelPoint {
        PixelPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Vector from `self` to `to` expressed in a y-up frame.
    #[inline]
    pub fn delta_y_up(self, to: PixelPoint) -> (f32, f32) {
        (to.x - self.x, -(to.y - self.y))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for PixelPoint {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

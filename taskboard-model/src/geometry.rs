//! Pixel-space geometry values exchanged with the host.
//!
//! These are plain measurements. The math that turns them into
//! container-relative percentages lives in the engine.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a box from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A zero-sized box at `(left, top)`.
    #[must_use]
    pub const fn point(left: f64, top: f64) -> Self {
        Self::new(left, top, 0.0, 0.0)
    }

    /// Returns `true` if both dimensions are strictly positive and finite.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Returns the box moved by `delta`.
    #[must_use]
    pub fn translate(&self, delta: Delta) -> Self {
        Self::new(self.left + delta.dx, self.top + delta.dy, self.width, self.height)
    }
}

/// Pixel displacement accumulated over one drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Horizontal displacement.
    pub dx: f64,
    /// Vertical displacement.
    pub dy: f64,
}

impl Delta {
    /// Creates a displacement.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Returns `true` for a gesture that ended exactly where it started.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

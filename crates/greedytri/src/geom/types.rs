//! Canvas-level value types: sizes, half-open rectangles and the vertex config.

use super::Point;

/// Vertex display configuration shared by generation, hit-testing and bounds
/// checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasCfg {
    /// Visual radius of a vertex marker. Also the inset margin of the
    /// drawable rectangle and half the side of the hit square.
    pub vertex_radius: f64,
}

impl Default for CanvasCfg {
    fn default() -> Self {
        Self { vertex_radius: 6.0 }
    }
}

/// Width and height of a drawable area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive (a minimized window is
    /// not).
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Axis-aligned rectangle with half-open containment: `left <= x < right`,
/// `top <= y < bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `2 * half` centered on `c`.
    #[inline]
    pub fn centered(c: Point, half: f64) -> Self {
        Self::new(c.x - half, c.y - half, c.x + half, c.y + half)
    }

    /// Shrinks every side by `margin`.
    #[inline]
    pub fn inset(&self, margin: f64) -> Self {
        Self::new(
            self.left + margin,
            self.top + margin,
            self.right - margin,
            self.bottom - margin,
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.left <= p.x && p.x < self.right && self.top <= p.y && p.y < self.bottom
    }
}

//! Geometry value types.
//!
//! All three types are `#[repr(C)]` with `f64` fields so they are bit-identical to
//! `CGPoint`, `CGSize` and `CGRect` and can cross a dispatched call by value.

use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in points. The host may reject negative sizes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Whether a point given in this rect's own coordinate space (origin at 0,0)
    /// lies within `[0, width] x [0, height]`. Both edges are inclusive.
    pub fn contains_local(&self, point: Point) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x <= self.size.width
            && point.y <= self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_cg_structs() {
        assert_eq!(std::mem::size_of::<Point>(), 16);
        assert_eq!(std::mem::size_of::<Size>(), 16);
        assert_eq!(std::mem::size_of::<Rect>(), 32);
        assert_eq!(std::mem::align_of::<Rect>(), 8);
    }

    #[test]
    fn test_contains_local_inclusive_edges() {
        let frame = Rect::new(120.0, 40.0, 800.0, 600.0);
        assert!(frame.contains_local(Point::new(400.0, 300.0)));
        assert!(frame.contains_local(Point::new(0.0, 0.0)));
        assert!(frame.contains_local(Point::new(800.0, 600.0)));
    }

    #[test]
    fn test_contains_local_ignores_origin() {
        // The window origin is in screen space; locations are window-relative.
        let frame = Rect::new(500.0, 500.0, 100.0, 100.0);
        assert!(frame.contains_local(Point::new(50.0, 50.0)));
        assert!(!frame.contains_local(Point::new(550.0, 550.0)));
    }

    #[test]
    fn test_contains_local_outside() {
        let frame = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(!frame.contains_local(Point::new(-5.0, 300.0)));
        assert!(!frame.contains_local(Point::new(801.0, 300.0)));
        assert!(!frame.contains_local(Point::new(400.0, 601.0)));
        assert!(!frame.contains_local(Point::new(400.0, -0.5)));
    }
}

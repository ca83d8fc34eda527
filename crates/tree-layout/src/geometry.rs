#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point with f32 coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

//! Positional contexts
//!
//! Coordinates use a left-handed convention: +X right, +Y up, +Z forward.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D::new(0.0, 0.0, 0.0);
    pub const RIGHT: Point3D = Point3D::new(1.0, 0.0, 0.0);
    pub const UP: Point3D = Point3D::new(0.0, 1.0, 0.0);
    pub const FORWARD: Point3D = Point3D::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn offset(self, by: Point3D) -> Point3D {
        Point3D::new(self.x + by.x, self.y + by.y, self.z + by.z)
    }

    pub fn distance(self, other: Point3D) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Where something is; `None` when the fragment named a position that
/// could not be resolved to coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionalContext {
    position: Option<Point3D>,
}

impl PositionalContext {
    pub fn new(position: Option<Point3D>) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Option<Point3D> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<Point3D>) {
        self.position = position;
    }
}

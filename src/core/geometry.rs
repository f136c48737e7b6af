use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center`, `angle` radians from the positive x-axis.
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    pub fn offset_from(&self, origin: &Self) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let (dx, dy) = self.offset_from(other);
        (dx.powi(2) + dy.powi(2)).sqrt()
    }
}

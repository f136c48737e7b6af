use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::geometry::Point;
use crate::layout::paginate::CirclePage;
use crate::layout::LayoutError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ItemPlacement {
    pub index: usize,
    /// Radians from the positive x-axis.
    pub angle: f64,
    pub position: Point,
}

/// Spreads the page's items evenly around the full circle. Spacing depends on
/// the page's own item count, so a short last page is still balanced.
pub fn place_items(
    page: &CirclePage,
    center: Point,
    radius: f64,
) -> Result<Vec<ItemPlacement>, LayoutError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(LayoutError::InvalidArgument(format!(
            "radius must be a finite non-negative number, got {radius}"
        )));
    }

    let count = page.len();
    Ok(page
        .range
        .clone()
        .enumerate()
        .map(|(local, index)| {
            let angle = TAU * local as f64 / count as f64;
            ItemPlacement {
                index,
                angle,
                position: Point::polar(center, radius, angle),
            }
        })
        .collect())
}

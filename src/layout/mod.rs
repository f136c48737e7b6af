pub mod paginate;
pub mod placement;
pub mod state;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::geometry::Point;

pub use paginate::{paginate, CirclePage, DEFAULT_PAGE_CAPACITY};
pub use placement::{place_items, ItemPlacement};
pub use state::PaginationState;

pub const DEFAULT_RADIUS: f64 = 200.0;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_capacity: usize,
    pub radius: f64,
    pub center: Point,
    /// Keep item 0 in the middle of the circle and page the rest around it.
    pub pin_first: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_capacity: DEFAULT_PAGE_CAPACITY,
            radius: DEFAULT_RADIUS,
            center: Point::default(),
            pin_first: false,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read layout config: {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse layout config: {}", path.display()))?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageFrame {
    pub page: CirclePage,
    pub placements: Vec<ItemPlacement>,
}

/// Every page of the list with its item positions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircleFrame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub: Option<ItemPlacement>,
    pub pages: Vec<PageFrame>,
}

impl CircleFrame {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, state: PaginationState) -> Option<&PageFrame> {
        self.pages.get(state.page_index)
    }
}

pub trait LayoutEngine {
    fn compute(&self, item_count: usize) -> Result<CircleFrame, LayoutError>;
}

#[derive(Debug, Clone, Default)]
pub struct CircleLayout {
    config: LayoutConfig,
}

impl CircleLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

impl LayoutEngine for CircleLayout {
    fn compute(&self, item_count: usize) -> Result<CircleFrame, LayoutError> {
        let LayoutConfig {
            page_capacity,
            radius,
            center,
            pin_first,
        } = self.config;

        let (hub, first, remaining) = if pin_first && item_count > 0 {
            let hub = ItemPlacement {
                index: 0,
                angle: 0.0,
                position: center,
            };
            (Some(hub), 1, item_count - 1)
        } else {
            (None, 0, item_count)
        };

        let pages = paginate::paginate_from(first, remaining, page_capacity)?
            .into_iter()
            .map(|page| {
                let placements = place_items(&page, center, radius)?;
                Ok::<_, LayoutError>(PageFrame { page, placements })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CircleFrame { hub, pages })
    }
}

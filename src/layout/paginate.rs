use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutError;

pub const DEFAULT_PAGE_CAPACITY: usize = 7;

/// One screen of the circular list: a contiguous run of item indices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CirclePage {
    pub index: usize,
    pub range: Range<usize>,
}

impl CirclePage {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.range.contains(&item)
    }

    /// Position of `item` within this page.
    pub fn local_index(&self, item: usize) -> Option<usize> {
        self.contains(item).then(|| item - self.range.start)
    }
}

/// Splits `0..item_count` into pages of at most `page_capacity` items with
/// boundaries at `0, page_capacity, 2 * page_capacity, ...`.
pub fn paginate(item_count: usize, page_capacity: usize) -> Result<Vec<CirclePage>, LayoutError> {
    paginate_from(0, item_count, page_capacity)
}

/// Like [`paginate`], for the items `first..first + item_count`.
pub fn paginate_from(
    first: usize,
    item_count: usize,
    page_capacity: usize,
) -> Result<Vec<CirclePage>, LayoutError> {
    if page_capacity == 0 {
        return Err(LayoutError::InvalidArgument(
            "page capacity must be at least 1".to_string(),
        ));
    }
    let end = first
        .checked_add(item_count)
        .ok_or_else(|| LayoutError::InvalidArgument(format!("item count {item_count} overflows")))?;

    Ok((first..end)
        .step_by(page_capacity)
        .enumerate()
        .map(|(index, start)| CirclePage {
            index,
            range: start..start.saturating_add(page_capacity).min(end),
        })
        .collect())
}

use serde::{Deserialize, Serialize};

/// Which page of the circular list is on screen.
///
/// Transitions are pure: each returns the new state and wraps around at
/// either end. A page count of zero always maps to page 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
}

impl PaginationState {
    pub fn new(page_index: usize) -> Self {
        Self { page_index }
    }

    pub fn next(self, page_count: usize) -> Self {
        if page_count == 0 {
            return Self::default();
        }
        Self::new((self.page_index.min(page_count - 1) + 1) % page_count)
    }

    pub fn previous(self, page_count: usize) -> Self {
        if page_count == 0 {
            return Self::default();
        }
        let current = self.page_index.min(page_count - 1);
        Self::new(if current == 0 { page_count - 1 } else { current - 1 })
    }

    /// Jump straight to a page, e.g. from the page indicator dots.
    pub fn select(self, page_index: usize, page_count: usize) -> Self {
        if page_count == 0 {
            return Self::default();
        }
        Self::new(page_index.min(page_count - 1))
    }

    /// A drag to the right goes back a page, anything else goes forward.
    pub fn swipe(self, translation_width: f64, page_count: usize) -> Self {
        if translation_width > 0.0 {
            self.previous(page_count)
        } else {
            self.next(page_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_wraps_to_first_page() {
        let state = PaginationState::new(2);
        assert_eq!(state.next(3), PaginationState::new(0));
        assert_eq!(PaginationState::new(0).next(3), PaginationState::new(1));
    }

    #[test]
    fn previous_wraps_to_last_page() {
        assert_eq!(PaginationState::new(0).previous(3), PaginationState::new(2));
        assert_eq!(PaginationState::new(2).previous(3), PaginationState::new(1));
    }

    #[test]
    fn swipe_direction_picks_transition() {
        let state = PaginationState::new(1);
        assert_eq!(state.swipe(40.0, 3), PaginationState::new(0));
        assert_eq!(state.swipe(-40.0, 3), PaginationState::new(2));
        assert_eq!(state.swipe(0.0, 3), PaginationState::new(2));
    }

    #[test]
    fn select_clamps_to_last_page() {
        assert_eq!(PaginationState::default().select(9, 3), PaginationState::new(2));
    }

    #[test]
    fn no_pages_stays_at_zero() {
        let state = PaginationState::new(4);
        assert_eq!(state.next(0), PaginationState::default());
        assert_eq!(state.previous(0), PaginationState::default());
        assert_eq!(state.select(1, 0), PaginationState::default());
    }

    #[test]
    fn stale_index_is_clamped_before_moving() {
        // Items were removed and the list shrank from five pages to two.
        assert_eq!(PaginationState::new(4).next(2), PaginationState::new(0));
        assert_eq!(PaginationState::new(4).previous(2), PaginationState::new(0));
    }
}

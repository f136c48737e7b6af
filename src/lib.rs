pub mod card;
pub mod core;
pub mod export;
pub mod layout;
pub mod pipeline;

pub use card::classify;
pub use core::model::{ContactDraft, DetectedEntity, EntityKind, ParsedBusinessCard};
pub use layout::{paginate, place_items, CirclePage, ItemPlacement, LayoutError, PaginationState};

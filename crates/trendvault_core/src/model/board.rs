//! Board domain model.
//!
//! # Responsibility
//! - Define the user-named collection record.
//!
//! # Invariants
//! - `sort_order` defines board list order; it is not unique, ties keep
//!   insertion order.
//! - `cover_item_id` is a loose reference and is not enforced to exist.

use crate::model::item::ItemId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one board.
pub type BoardId = Uuid;

/// User-named, ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub modified_at: i64,
    /// Board list order key.
    pub sort_order: i64,
    /// Display color token, e.g. `#ff8800`.
    pub color: Option<String>,
    /// Icon reference understood by the presentation layer.
    pub icon: Option<String>,
    pub cover_item_id: Option<ItemId>,
}

impl Board {
    /// Creates a board with a generated id.
    pub fn new(title: impl Into<String>, sort_order: i64, now_ms: i64) -> Self {
        Self::with_id(Uuid::new_v4(), title, sort_order, now_ms)
    }

    /// Creates a board with a caller-provided id.
    pub fn with_id(id: BoardId, title: impl Into<String>, sort_order: i64, now_ms: i64) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: now_ms,
            modified_at: now_ms,
            sort_order,
            color: None,
            icon: None,
            cover_item_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Board;

    #[test]
    fn new_board_has_no_decorations() {
        let board = Board::new("Brand", 3, 42);
        assert_eq!(board.title, "Brand");
        assert_eq!(board.sort_order, 3);
        assert_eq!(board.created_at, 42);
        assert_eq!(board.modified_at, 42);
        assert_eq!(board.color, None);
        assert_eq!(board.icon, None);
        assert_eq!(board.cover_item_id, None);
    }
}

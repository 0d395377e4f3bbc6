//! Board membership (board <-> item join) model.
//!
//! # Invariants
//! - At most one membership exists per `(board_id, item_id)` pair.
//! - Positions of one board form `0..count-1` after every store mutation.
//! - A membership never outlives its board or its item.

use crate::model::board::BoardId;
use crate::model::item::ItemId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one membership record.
pub type BoardItemId = Uuid;

/// Join record placing one item at one position inside one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub id: BoardItemId,
    pub board_id: BoardId,
    pub item_id: ItemId,
    /// Dense per-board order key.
    pub position: i64,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl BoardItem {
    pub fn new(board_id: BoardId, item_id: ItemId, position: i64, now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            item_id,
            position,
            created_at: now_ms,
        }
    }

    /// Returns whether this record joins exactly `board_id` and `item_id`.
    pub fn links(&self, board_id: BoardId, item_id: ItemId) -> bool {
        self.board_id == board_id && self.item_id == item_id
    }
}

//! Board create/rename/update/delete operations.

use super::{StoreOutcome, TrendStore};
use crate::clock::Clock;
use crate::model::board::{Board, BoardId};
use crate::model::item::ItemId;
use crate::model::update::FieldUpdate;
use log::debug;

/// Partial update for board decorations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardUpdate {
    pub color: FieldUpdate<String>,
    pub icon: FieldUpdate<String>,
    pub cover_item_id: FieldUpdate<ItemId>,
}

impl<C: Clock> TrendStore<C> {
    /// Creates a board at the end of the board list.
    ///
    /// `sort_order` is one past the current maximum, or `0` for the first
    /// board. At `i64::MAX` the order saturates; ties keep insertion order,
    /// so the new board still sorts last.
    pub fn create_board(&mut self, title: impl Into<String>) -> Board {
        let sort_order = self
            .boards
            .iter()
            .map(|board| board.sort_order)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        let board = Board::new(title, sort_order, self.clock.now_ms());
        self.boards.push(board.clone());
        self.touch();

        debug!(
            "event=board_create module=store status=ok board_id={} sort_order={}",
            board.id, sort_order
        );
        board
    }

    /// Sets a board title and refreshes its modification timestamp.
    pub fn rename_board(&mut self, board_id: BoardId, title: impl Into<String>) -> StoreOutcome {
        let Some(index) = self.board_index(board_id) else {
            return log_board_outcome("board_rename", board_id, StoreOutcome::NotFound);
        };

        let now = self.clock.now_ms();
        let board = &mut self.boards[index];
        board.title = title.into();
        board.modified_at = now;
        self.touch();
        log_board_outcome("board_rename", board_id, StoreOutcome::Applied)
    }

    /// Applies color/icon/cover changes in one call.
    ///
    /// The modification timestamp is refreshed once when any field changes.
    pub fn update_board(&mut self, board_id: BoardId, update: BoardUpdate) -> StoreOutcome {
        let Some(index) = self.board_index(board_id) else {
            return log_board_outcome("board_update", board_id, StoreOutcome::NotFound);
        };

        let BoardUpdate {
            color,
            icon,
            cover_item_id,
        } = update;
        let now = self.clock.now_ms();
        let board = &mut self.boards[index];
        let mut changed = color.apply_to(&mut board.color);
        changed |= icon.apply_to(&mut board.icon);
        changed |= cover_item_id.apply_to(&mut board.cover_item_id);
        if !changed {
            return log_board_outcome("board_update", board_id, StoreOutcome::Unchanged);
        }

        board.modified_at = now;
        self.touch();
        log_board_outcome("board_update", board_id, StoreOutcome::Applied)
    }

    /// Deletes a board and every membership that references it.
    ///
    /// Items are left untouched.
    pub fn delete_board(&mut self, board_id: BoardId) -> StoreOutcome {
        let Some(index) = self.board_index(board_id) else {
            return log_board_outcome("board_delete", board_id, StoreOutcome::NotFound);
        };

        self.boards.remove(index);
        let before = self.board_items.len();
        self.board_items.retain(|membership| membership.board_id != board_id);
        let removed = before - self.board_items.len();
        self.touch();

        debug!(
            "event=board_delete module=store status=ok board_id={board_id} board_items_removed={removed}"
        );
        StoreOutcome::Applied
    }

    /// Boards ordered by `sort_order`; equal keys keep insertion order.
    pub fn boards_sorted(&self) -> Vec<&Board> {
        let mut sorted: Vec<&Board> = self.boards.iter().collect();
        sorted.sort_by_key(|board| board.sort_order);
        sorted
    }
}

fn log_board_outcome(event: &str, board_id: BoardId, outcome: StoreOutcome) -> StoreOutcome {
    debug!(
        "event={event} module=store status={} board_id={board_id}",
        outcome.as_status()
    );
    outcome
}

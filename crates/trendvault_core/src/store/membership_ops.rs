//! Board membership and ordering operations.

use super::positions::{move_offsets, normalize_board_positions};
use super::{StoreOutcome, TrendStore};
use crate::clock::Clock;
use crate::model::board::BoardId;
use crate::model::item::{ItemId, TrendItem};
use crate::model::membership::BoardItem;
use log::{debug, error};
use std::collections::HashMap;

impl<C: Clock> TrendStore<C> {
    pub fn is_item_in_board(&self, board_id: BoardId, item_id: ItemId) -> bool {
        self.board_items
            .iter()
            .any(|membership| membership.links(board_id, item_id))
    }

    /// Item ids of one board in position order.
    pub fn board_item_ids(&self, board_id: BoardId) -> Vec<ItemId> {
        self.ordered_memberships(board_id)
            .into_iter()
            .map(|membership| membership.item_id)
            .collect()
    }

    /// Items of one board in position order.
    ///
    /// A membership whose item is missing is skipped and logged; cascading
    /// deletes make that state unreachable through the public API.
    pub fn items_in_board(&self, board_id: BoardId) -> Vec<&TrendItem> {
        let lookup: HashMap<ItemId, &TrendItem> =
            self.items.iter().map(|item| (item.id, item)).collect();

        self.ordered_memberships(board_id)
            .into_iter()
            .filter_map(|membership| {
                let item = lookup.get(&membership.item_id).copied();
                if item.is_none() {
                    error!(
                        "event=dangling_board_item module=store status=error board_id={board_id} item_id={}",
                        membership.item_id
                    );
                }
                item
            })
            .collect()
    }

    /// Appends an item to the end of a board.
    ///
    /// No-op when either id is unknown or the item is already on the board.
    pub fn add_item_to_board(&mut self, board_id: BoardId, item_id: ItemId) -> StoreOutcome {
        if self.board_index(board_id).is_none() || self.item_index(item_id).is_none() {
            return log_membership_outcome(
                "board_item_add",
                board_id,
                item_id,
                StoreOutcome::NotFound,
            );
        }
        if self.is_item_in_board(board_id, item_id) {
            return log_membership_outcome(
                "board_item_add",
                board_id,
                item_id,
                StoreOutcome::AlreadyExists,
            );
        }

        let position = self
            .board_items
            .iter()
            .filter(|membership| membership.board_id == board_id)
            .map(|membership| membership.position)
            .max()
            .map_or(0, |max| max + 1);
        let membership = BoardItem::new(board_id, item_id, position, self.clock.now_ms());
        self.board_items.push(membership);
        self.touch();
        log_membership_outcome("board_item_add", board_id, item_id, StoreOutcome::Applied)
    }

    /// Removes an item from a board and closes the position gap.
    pub fn remove_item_from_board(&mut self, board_id: BoardId, item_id: ItemId) -> StoreOutcome {
        let Some(index) = self
            .board_items
            .iter()
            .position(|membership| membership.links(board_id, item_id))
        else {
            return log_membership_outcome(
                "board_item_remove",
                board_id,
                item_id,
                StoreOutcome::NotFound,
            );
        };

        self.board_items.remove(index);
        normalize_board_positions(&mut self.board_items, board_id);
        self.touch();
        log_membership_outcome("board_item_remove", board_id, item_id, StoreOutcome::Applied)
    }

    /// Reorders a board to follow `ordered_item_ids`.
    ///
    /// - Ids without a membership on this board are ignored.
    /// - Members missing from the list keep their membership and move behind
    ///   the listed items, in their current relative order.
    /// - A repeated id takes the position of its last occurrence.
    pub fn reorder_items_in_board(
        &mut self,
        board_id: BoardId,
        ordered_item_ids: &[ItemId],
    ) -> StoreOutcome {
        if self.board_index(board_id).is_none() {
            return log_reorder_outcome(board_id, StoreOutcome::NotFound);
        }

        let current = self.board_item_ids(board_id);
        if current.is_empty() || ordered_item_ids.is_empty() {
            return log_reorder_outcome(board_id, StoreOutcome::Unchanged);
        }

        let mut desired: HashMap<ItemId, i64> = HashMap::with_capacity(current.len());
        for (index, item_id) in ordered_item_ids.iter().enumerate() {
            desired.insert(*item_id, index as i64);
        }
        let mut next_fallback = desired.values().copied().max().map_or(0, |max| max + 1);
        for item_id in &current {
            if !desired.contains_key(item_id) {
                desired.insert(*item_id, next_fallback);
                next_fallback += 1;
            }
        }

        for membership in self
            .board_items
            .iter_mut()
            .filter(|membership| membership.board_id == board_id)
        {
            if let Some(position) = desired.get(&membership.item_id) {
                membership.position = *position;
            }
        }
        normalize_board_positions(&mut self.board_items, board_id);

        if self.board_item_ids(board_id) == current {
            return log_reorder_outcome(board_id, StoreOutcome::Unchanged);
        }
        self.touch();
        log_reorder_outcome(board_id, StoreOutcome::Applied)
    }

    /// Moves the board entries at `from_offsets` to `to_offset`.
    ///
    /// Offsets refer to the current position order, with list-move semantics
    /// (see [`move_offsets`]).
    pub fn move_items_in_board(
        &mut self,
        board_id: BoardId,
        from_offsets: &[usize],
        to_offset: usize,
    ) -> StoreOutcome {
        let current = self.board_item_ids(board_id);
        let reordered = move_offsets(&current, from_offsets, to_offset);
        self.reorder_items_in_board(board_id, &reordered)
    }

    fn ordered_memberships(&self, board_id: BoardId) -> Vec<&BoardItem> {
        let mut memberships: Vec<&BoardItem> = self
            .board_items
            .iter()
            .filter(|membership| membership.board_id == board_id)
            .collect();
        memberships.sort_by_key(|membership| membership.position);
        memberships
    }
}

fn log_membership_outcome(
    event: &str,
    board_id: BoardId,
    item_id: ItemId,
    outcome: StoreOutcome,
) -> StoreOutcome {
    debug!(
        "event={event} module=store status={} board_id={board_id} item_id={item_id}",
        outcome.as_status()
    );
    outcome
}

fn log_reorder_outcome(board_id: BoardId, outcome: StoreOutcome) -> StoreOutcome {
    debug!(
        "event=board_reorder module=store status={} board_id={board_id}",
        outcome.as_status()
    );
    outcome
}

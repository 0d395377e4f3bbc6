//! Read-only verification of store invariants.
//!
//! # Responsibility
//! - Detect duplicate ids, non-canonical tags, duplicate memberships,
//!   dangling references and non-dense positions in a set of collections.
//!
//! # Invariants
//! - Verification never mutates its input.
//! - The first violation found is reported; checks run in a fixed order.

use crate::model::board::{Board, BoardId};
use crate::model::item::{ItemId, TrendItem};
use crate::model::membership::{BoardItem, BoardItemId};
use crate::model::tags::normalize_tags;
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invariant violation found by [`verify_collections`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// Two items share one id.
    DuplicateItemId(ItemId),
    /// Item tags are not lower-cased, deduplicated and sorted.
    NonNormalizedTags { item_id: ItemId },
    /// Two boards share one id.
    DuplicateBoardId(BoardId),
    /// One `(board, item)` pair has more than one membership.
    DuplicateMembership { board_id: BoardId, item_id: ItemId },
    /// Membership points at a board that does not exist.
    DanglingBoard {
        board_item_id: BoardItemId,
        board_id: BoardId,
    },
    /// Membership points at an item that does not exist.
    DanglingItem {
        board_item_id: BoardItemId,
        item_id: ItemId,
    },
    /// Board positions are not exactly `0..count-1`.
    NonDensePositions {
        board_id: BoardId,
        positions: Vec<i64>,
    },
}

impl Display for IntegrityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateItemId(id) => write!(f, "duplicate item id: {id}"),
            Self::NonNormalizedTags { item_id } => {
                write!(f, "item {item_id} tags are not normalized")
            }
            Self::DuplicateBoardId(id) => write!(f, "duplicate board id: {id}"),
            Self::DuplicateMembership { board_id, item_id } => write!(
                f,
                "item {item_id} is a member of board {board_id} more than once"
            ),
            Self::DanglingBoard {
                board_item_id,
                board_id,
            } => write!(
                f,
                "board item {board_item_id} references missing board {board_id}"
            ),
            Self::DanglingItem {
                board_item_id,
                item_id,
            } => write!(
                f,
                "board item {board_item_id} references missing item {item_id}"
            ),
            Self::NonDensePositions {
                board_id,
                positions,
            } => write!(
                f,
                "board {board_id} positions are not dense: {positions:?}"
            ),
        }
    }
}

impl Error for IntegrityError {}

/// Checks every relational invariant over the given collections.
pub fn verify_collections(
    items: &[TrendItem],
    boards: &[Board],
    board_items: &[BoardItem],
) -> Result<(), IntegrityError> {
    let mut item_ids = HashSet::with_capacity(items.len());
    for item in items {
        if !item_ids.insert(item.id) {
            return Err(IntegrityError::DuplicateItemId(item.id));
        }
        if normalize_tags(&item.tags) != item.tags {
            return Err(IntegrityError::NonNormalizedTags { item_id: item.id });
        }
    }

    let mut board_ids = HashSet::with_capacity(boards.len());
    for board in boards {
        if !board_ids.insert(board.id) {
            return Err(IntegrityError::DuplicateBoardId(board.id));
        }
    }

    let mut pairs = HashSet::with_capacity(board_items.len());
    let mut positions_by_board: BTreeMap<BoardId, Vec<i64>> = BTreeMap::new();
    for membership in board_items {
        if !board_ids.contains(&membership.board_id) {
            return Err(IntegrityError::DanglingBoard {
                board_item_id: membership.id,
                board_id: membership.board_id,
            });
        }
        if !item_ids.contains(&membership.item_id) {
            return Err(IntegrityError::DanglingItem {
                board_item_id: membership.id,
                item_id: membership.item_id,
            });
        }
        if !pairs.insert((membership.board_id, membership.item_id)) {
            return Err(IntegrityError::DuplicateMembership {
                board_id: membership.board_id,
                item_id: membership.item_id,
            });
        }
        positions_by_board
            .entry(membership.board_id)
            .or_default()
            .push(membership.position);
    }

    for (board_id, mut positions) in positions_by_board {
        positions.sort_unstable();
        let dense = positions
            .iter()
            .enumerate()
            .all(|(index, position)| *position == index as i64);
        if !dense {
            return Err(IntegrityError::NonDensePositions {
                board_id,
                positions,
            });
        }
    }

    Ok(())
}

//! Membership position normalization.
//!
//! # Responsibility
//! - Reindex one board's memberships to a dense `0..n-1` sequence.
//! - Provide list-move semantics used by drag-and-drop reordering.
//!
//! # Invariants
//! - Relative order is preserved; equal positions keep storage order.
//! - Reindexing an already dense board changes nothing.

use crate::model::board::BoardId;
use crate::model::membership::BoardItem;
use std::collections::BTreeSet;

/// Returns, for each input position, its rank in a stable ascending sort.
///
/// `dense_ranks(&[5, 2, 5, 9]) == [1, 0, 2, 3]`.
pub fn dense_ranks(positions: &[i64]) -> Vec<i64> {
    let mut order: Vec<usize> = (0..positions.len()).collect();
    order.sort_by_key(|&index| positions[index]);

    let mut ranks = vec![0; positions.len()];
    for (rank, index) in order.into_iter().enumerate() {
        ranks[index] = rank as i64;
    }
    ranks
}

/// Rewrites positions of `board_id` memberships to `0..n-1`.
///
/// Returns whether any position changed.
pub fn normalize_board_positions(memberships: &mut [BoardItem], board_id: BoardId) -> bool {
    let indices: Vec<usize> = memberships
        .iter()
        .enumerate()
        .filter(|(_, membership)| membership.board_id == board_id)
        .map(|(index, _)| index)
        .collect();
    let current: Vec<i64> = indices
        .iter()
        .map(|&index| memberships[index].position)
        .collect();

    let mut changed = false;
    for (index, rank) in indices.into_iter().zip(dense_ranks(&current)) {
        if memberships[index].position != rank {
            memberships[index].position = rank;
            changed = true;
        }
    }
    changed
}

/// Normalizes positions for every board referenced by `memberships`.
pub fn normalize_all_positions(memberships: &mut [BoardItem]) {
    let board_ids: BTreeSet<BoardId> = memberships
        .iter()
        .map(|membership| membership.board_id)
        .collect();
    for board_id in board_ids {
        normalize_board_positions(memberships, board_id);
    }
}

/// Moves the elements at `from_offsets` so they start before the element
/// originally at `to_offset`, keeping their relative order.
///
/// Offsets outside the list are ignored and `to_offset` is clamped to the
/// list length, so `to_offset == len` appends.
pub fn move_offsets<T: Clone>(ordered: &[T], from_offsets: &[usize], to_offset: usize) -> Vec<T> {
    let selected: BTreeSet<usize> = from_offsets
        .iter()
        .copied()
        .filter(|&offset| offset < ordered.len())
        .collect();
    if selected.is_empty() {
        return ordered.to_vec();
    }

    let to_offset = to_offset.min(ordered.len());
    let removed_before_target = selected.range(..to_offset).count();

    let mut moved = Vec::with_capacity(selected.len());
    let mut rest = Vec::with_capacity(ordered.len() - selected.len());
    for (offset, value) in ordered.iter().enumerate() {
        if selected.contains(&offset) {
            moved.push(value.clone());
        } else {
            rest.push(value.clone());
        }
    }

    let insert_at = to_offset - removed_before_target;
    rest.splice(insert_at..insert_at, moved);
    rest
}

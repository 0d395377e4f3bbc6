//! In-memory relational store for items, boards and board memberships.
//!
//! # Responsibility
//! - Own every entity collection and be their only mutator.
//! - Expose board/item CRUD, membership and reorder operations.
//! - Keep membership positions dense and references valid after each call.
//!
//! # Invariants
//! - At most one membership per `(board_id, item_id)` pair.
//! - Positions of one board are exactly `0..count-1` after every mutation.
//! - No membership references a missing board or item.
//! - Unknown ids never fail; the call reports `StoreOutcome::NotFound` and
//!   leaves state untouched.
//!
//! # See also
//! - `store::positions` for the reindexing rules.

mod board_ops;
mod integrity;
mod item_ops;
mod membership_ops;
pub mod positions;

pub use board_ops::BoardUpdate;
pub use integrity::{verify_collections, IntegrityError};

use crate::clock::{Clock, SystemClock};
use crate::model::board::{Board, BoardId};
use crate::model::item::{ItemId, TrendItem};
use crate::model::membership::BoardItem;
use crate::model::tags::normalize_tags;
use crate::seed::{generate_seed, SeedConfig, SeedSet};
use log::{debug, warn};
use positions::normalize_all_positions;
use std::collections::HashSet;

/// Result of one mutating store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// State changed.
    Applied,
    /// Call was valid but nothing needed to change.
    Unchanged,
    /// A referenced board or item does not exist.
    NotFound,
    /// The membership being added already exists.
    AlreadyExists,
}

impl StoreOutcome {
    fn as_status(self) -> &'static str {
        match self {
            Self::Applied => "ok",
            Self::Unchanged => "unchanged",
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
        }
    }
}

/// Owning store for all trend items, boards and memberships.
///
/// The store is single-threaded: every mutation takes `&mut self`, and
/// callers re-read collections after each call. `revision()` increases on
/// every applied mutation.
#[derive(Debug)]
pub struct TrendStore<C: Clock = SystemClock> {
    items: Vec<TrendItem>,
    boards: Vec<Board>,
    board_items: Vec<BoardItem>,
    revision: u64,
    clock: C,
}

impl TrendStore<SystemClock> {
    /// Creates an empty store using wall-clock timestamps.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a store filled with generated fixture data.
    pub fn seeded(config: &SeedConfig) -> Self {
        let clock = SystemClock;
        let seed = generate_seed(config, &clock);
        Self::from_seed(seed, clock)
    }
}

impl Default for TrendStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TrendStore<C> {
    /// Creates an empty store using the provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: Vec::new(),
            boards: Vec::new(),
            board_items: Vec::new(),
            revision: 0,
            clock,
        }
    }

    /// Creates a store from a generated seed set.
    pub fn from_seed(seed: SeedSet, clock: C) -> Self {
        Self::from_parts(seed.items, seed.boards, seed.board_items, clock)
    }

    /// Creates a store from arbitrary initial collections.
    ///
    /// Input is repaired rather than rejected: duplicate item/board ids keep
    /// their first record, item tags are normalized, memberships that dangle
    /// or repeat a pair are dropped, and every board's positions are
    /// normalized.
    pub fn from_parts(
        items: Vec<TrendItem>,
        boards: Vec<Board>,
        board_items: Vec<BoardItem>,
        clock: C,
    ) -> Self {
        let input_counts = (items.len(), boards.len(), board_items.len());

        let mut seen_items = HashSet::new();
        let mut retagged = 0usize;
        let items: Vec<TrendItem> = items
            .into_iter()
            .filter(|item| seen_items.insert(item.id))
            .map(|mut item| {
                let normalized = normalize_tags(&item.tags);
                if normalized != item.tags {
                    item.tags = normalized;
                    retagged += 1;
                }
                item
            })
            .collect();

        let mut seen_boards = HashSet::new();
        let boards: Vec<Board> = boards
            .into_iter()
            .filter(|board| seen_boards.insert(board.id))
            .collect();

        let mut seen_pairs = HashSet::new();
        let mut board_items: Vec<BoardItem> = board_items
            .into_iter()
            .filter(|membership| {
                seen_items.contains(&membership.item_id)
                    && seen_boards.contains(&membership.board_id)
                    && seen_pairs.insert((membership.board_id, membership.item_id))
            })
            .collect();
        normalize_all_positions(&mut board_items);

        let dropped = (
            input_counts.0 - items.len(),
            input_counts.1 - boards.len(),
            input_counts.2 - board_items.len(),
        );
        if dropped != (0, 0, 0) || retagged > 0 {
            warn!(
                "event=store_load module=store status=repaired dropped_items={} dropped_boards={} dropped_board_items={} retagged_items={}",
                dropped.0, dropped.1, dropped.2, retagged
            );
        }
        debug!(
            "event=store_load module=store status=ok items={} boards={} board_items={}",
            items.len(),
            boards.len(),
            board_items.len()
        );

        Self {
            items,
            boards,
            board_items,
            revision: 0,
            clock,
        }
    }

    /// All items, most recently created first.
    pub fn items(&self) -> &[TrendItem] {
        &self.items
    }

    /// All boards in insertion order. See [`TrendStore::boards_sorted`].
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// All membership records.
    pub fn board_items(&self) -> &[BoardItem] {
        &self.board_items
    }

    /// Monotonic change counter, bumped once per applied mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn item(&self, item_id: ItemId) -> Option<&TrendItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    /// Verifies every store invariant.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        verify_collections(&self.items, &self.boards, &self.board_items)
    }

    fn item_index(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    fn board_index(&self, board_id: BoardId) -> Option<usize> {
        self.boards.iter().position(|board| board.id == board_id)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

//! Fixture data for a freshly started, volatile store.
//!
//! # Responsibility
//! - Generate boards, items and memberships for first-run content.
//! - Keep generation reproducible when a seed is configured.
//!
//! # Invariants
//! - Generated memberships reference generated boards/items only.
//! - Positions are dense per board.

use crate::clock::Clock;
use crate::model::board::Board;
use crate::model::item::{NewItem, TrendItem};
use crate::model::membership::BoardItem;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Default number of generated items.
pub const DEFAULT_SEED_ITEM_COUNT: usize = 24;

/// Tags sampled for generated items.
pub const SEED_TAG_POOL: [&str; 12] = [
    "brand",
    "typography",
    "layout",
    "color",
    "ads",
    "landingpage",
    "cta",
    "copy",
    "ui",
    "pricing",
    "saas",
    "b2b",
];

const SEED_BOARD_TITLES: [&str; 3] = ["Brand", "Campaigns", "UI Patterns"];
const SEED_SOURCE: &str = "Seed";
const HOUR_MS: i64 = 60 * 60 * 1000;
const BOARD_SLICE_STRIDE: usize = 6;
const BOARD_SLICE_LEN: usize = 10;
const MIN_TAGS_PER_ITEM: usize = 1;
const MAX_TAGS_PER_ITEM: usize = 4;

/// Seed generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub item_count: usize,
    /// Fixed RNG seed. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_SEED_ITEM_COUNT,
            rng_seed: None,
        }
    }
}

/// Generated initial collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSet {
    pub boards: Vec<Board>,
    pub items: Vec<TrendItem>,
    pub board_items: Vec<BoardItem>,
}

/// Generates boards, items and memberships in one pass.
pub fn generate_seed(config: &SeedConfig, clock: &impl Clock) -> SeedSet {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let now_ms = clock.now_ms();

    let boards = make_boards(now_ms);
    let items = make_items(config.item_count, &mut rng, now_ms);
    let board_items = make_board_items(&boards, &items, now_ms);
    SeedSet {
        boards,
        items,
        board_items,
    }
}

/// Returns the default boards with sort orders `0..`.
pub fn make_boards(now_ms: i64) -> Vec<Board> {
    SEED_BOARD_TITLES
        .iter()
        .enumerate()
        .map(|(index, title)| Board::new(*title, index as i64, now_ms))
        .collect()
}

/// Returns `count` items, newest first, one hour apart.
///
/// Every fifth item (starting with the first) carries a sample note.
pub fn make_items<R: Rng + ?Sized>(count: usize, rng: &mut R, now_ms: i64) -> Vec<TrendItem> {
    (0..count)
        .map(|index| {
            let created = now_ms - index as i64 * HOUR_MS;
            let input = NewItem {
                tags: pick_tags(&SEED_TAG_POOL, MIN_TAGS_PER_ITEM, MAX_TAGS_PER_ITEM, rng),
                source: Some(SEED_SOURCE.to_string()),
                note: (index % 5 == 0).then(|| format!("Sample note {index}")),
                ..NewItem::default()
            };
            TrendItem::new(input, created)
        })
        .collect()
}

/// Places overlapping slices of `items` on each board.
///
/// Board `b` receives `items[6b .. 6b + 10]`, clipped to the item count.
pub fn make_board_items(boards: &[Board], items: &[TrendItem], now_ms: i64) -> Vec<BoardItem> {
    let mut result = Vec::new();
    for (board_index, board) in boards.iter().enumerate() {
        let start = items.len().min(board_index * BOARD_SLICE_STRIDE);
        let end = items.len().min(start + BOARD_SLICE_LEN);
        for (position, item) in items[start..end].iter().enumerate() {
            result.push(BoardItem::new(board.id, item.id, position as i64, now_ms));
        }
    }
    result
}

fn pick_tags<R: Rng + ?Sized>(
    pool: &[&str],
    min_count: usize,
    max_count: usize,
    rng: &mut R,
) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }
    let min_count = min_count.min(pool.len());
    let max_count = max_count.max(min_count).min(pool.len());
    let count = rng.gen_range(min_count..=max_count);
    pool.choose_multiple(rng, count)
        .map(|tag| tag.to_string())
        .collect()
}

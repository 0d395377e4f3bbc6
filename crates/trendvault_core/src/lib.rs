//! Core domain logic for TrendVault.
//! This crate is the single source of truth for item/board invariants.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod seed;
pub mod store;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardId};
pub use model::item::{ItemId, NewItem, TrendItem};
pub use model::membership::{BoardItem, BoardItemId};
pub use model::tags::{normalize_tag, normalize_tags, parse_tag_input};
pub use model::update::{FieldUpdate, ItemUpdate};
pub use search::filter::{filter_items, item_matches, ItemQuery};
pub use seed::{generate_seed, SeedConfig, SeedSet};
pub use store::{BoardUpdate, IntegrityError, StoreOutcome, TrendStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

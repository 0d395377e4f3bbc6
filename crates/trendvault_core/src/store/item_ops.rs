//! Item create/update/delete operations and tag helpers.

use super::positions::normalize_board_positions;
use super::{StoreOutcome, TrendStore};
use crate::clock::Clock;
use crate::model::board::BoardId;
use crate::model::item::{ItemId, NewItem, TrendItem};
use crate::model::tags::normalize_tags;
use crate::model::update::{FieldUpdate, ItemUpdate};
use log::debug;
use std::collections::BTreeSet;

impl<C: Clock> TrendStore<C> {
    /// Creates an item at the head of the item list.
    pub fn create_item(&mut self, input: NewItem) -> TrendItem {
        let item = TrendItem::new(input, self.clock.now_ms());
        self.items.insert(0, item.clone());
        self.touch();

        debug!(
            "event=item_create module=store status=ok item_id={} tag_count={} has_thumbnail={}",
            item.id,
            item.tags.len(),
            item.has_thumbnail()
        );
        item
    }

    /// Applies a partial update to one item.
    ///
    /// Omitted fields are untouched. `modified_at` is refreshed once when at
    /// least one field value actually changes.
    pub fn update_item(&mut self, item_id: ItemId, update: ItemUpdate) -> StoreOutcome {
        let Some(index) = self.item_index(item_id) else {
            return log_item_outcome("item_update", item_id, StoreOutcome::NotFound);
        };

        let ItemUpdate { tags, source, note } = update;
        let now = self.clock.now_ms();
        let item = &mut self.items[index];

        let mut changed = false;
        if let Some(tags) = tags {
            let normalized = normalize_tags(&tags);
            if item.tags != normalized {
                item.tags = normalized;
                changed = true;
            }
        }
        changed |= source.apply_to(&mut item.source);
        changed |= note.apply_to(&mut item.note);

        if !changed {
            return log_item_outcome("item_update", item_id, StoreOutcome::Unchanged);
        }

        item.modified_at = now;
        self.touch();
        log_item_outcome("item_update", item_id, StoreOutcome::Applied)
    }

    /// Replaces the full tag set.
    pub fn set_tags<S: AsRef<str>>(&mut self, item_id: ItemId, tags: &[S]) -> StoreOutcome {
        let tags = tags.iter().map(|tag| tag.as_ref().to_string()).collect();
        self.update_item(
            item_id,
            ItemUpdate {
                tags: Some(tags),
                ..ItemUpdate::default()
            },
        )
    }

    /// Adds tags to the existing set.
    pub fn add_tags<S: AsRef<str>>(&mut self, item_id: ItemId, tags: &[S]) -> StoreOutcome {
        let Some(item) = self.item(item_id) else {
            return log_item_outcome("item_add_tags", item_id, StoreOutcome::NotFound);
        };

        let mut merged = item.tags.clone();
        merged.extend(tags.iter().map(|tag| tag.as_ref().to_string()));
        self.set_tags(item_id, &merged)
    }

    /// Removes tags from the existing set.
    ///
    /// Removal input is normalized first, so `"ADS "` removes `ads`.
    pub fn remove_tags<S: AsRef<str>>(&mut self, item_id: ItemId, tags: &[S]) -> StoreOutcome {
        let Some(item) = self.item(item_id) else {
            return log_item_outcome("item_remove_tags", item_id, StoreOutcome::NotFound);
        };

        let removed: BTreeSet<String> = normalize_tags(tags).into_iter().collect();
        let remaining: Vec<String> = item
            .tags
            .iter()
            .filter(|tag| !removed.contains(*tag))
            .cloned()
            .collect();
        self.set_tags(item_id, &remaining)
    }

    /// Sets the source; `None` clears it.
    pub fn set_source(&mut self, item_id: ItemId, source: Option<String>) -> StoreOutcome {
        self.update_item(
            item_id,
            ItemUpdate {
                source: FieldUpdate::from_option(source),
                ..ItemUpdate::default()
            },
        )
    }

    /// Sets the note; `None` clears it.
    pub fn set_note(&mut self, item_id: ItemId, note: Option<String>) -> StoreOutcome {
        self.update_item(
            item_id,
            ItemUpdate {
                note: FieldUpdate::from_option(note),
                ..ItemUpdate::default()
            },
        )
    }

    /// Deletes an item and its memberships on every board.
    ///
    /// Each affected board is renormalized so its positions stay dense.
    pub fn delete_item(&mut self, item_id: ItemId) -> StoreOutcome {
        let Some(index) = self.item_index(item_id) else {
            return log_item_outcome("item_delete", item_id, StoreOutcome::NotFound);
        };

        self.items.remove(index);
        let affected: BTreeSet<BoardId> = self
            .board_items
            .iter()
            .filter(|membership| membership.item_id == item_id)
            .map(|membership| membership.board_id)
            .collect();
        self.board_items.retain(|membership| membership.item_id != item_id);
        for board_id in &affected {
            normalize_board_positions(&mut self.board_items, *board_id);
        }
        self.touch();

        debug!(
            "event=item_delete module=store status=ok item_id={item_id} boards_affected={}",
            affected.len()
        );
        StoreOutcome::Applied
    }

    /// Distinct tags across all items, sorted.
    pub fn tags_in_use(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect();
        unique.into_iter().map(str::to_string).collect()
    }
}

fn log_item_outcome(event: &str, item_id: ItemId, outcome: StoreOutcome) -> StoreOutcome {
    debug!(
        "event={event} module=store status={} item_id={item_id}",
        outcome.as_status()
    );
    outcome
}

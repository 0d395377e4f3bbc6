//! Trend item domain model.
//!
//! # Responsibility
//! - Define the canonical record for one collected visual asset.
//! - Define the creation input consumed by `TrendStore::create_item`.
//!
//! # Invariants
//! - `tags` is always stored in normalized form (see `model::tags`).
//! - `modified_at` is never earlier than `created_at` for store-created items.

use crate::model::tags::normalize_tags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one trend item.
pub type ItemId = Uuid;

/// One collected visual asset with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendItem {
    /// Stable item id used by board memberships.
    pub id: ItemId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Refreshed whenever a field actually changes.
    pub modified_at: i64,
    /// Lower-cased, deduplicated and sorted tag names.
    pub tags: Vec<String>,
    /// Where the asset was collected from.
    pub source: Option<String>,
    /// Free-form user note.
    pub note: Option<String>,
    /// Text recognized in the image, if any.
    pub ocr_text: Option<String>,
    /// Encoded thumbnail bytes. Empty when no preview exists.
    #[serde(default)]
    pub thumbnail: Vec<u8>,
    /// Reference to the full-resolution asset outside the store.
    pub image_asset_ref: Option<String>,
}

impl TrendItem {
    /// Creates an item with a generated id and both timestamps set to `now_ms`.
    ///
    /// Tags are normalized before they are stored.
    pub fn new(input: NewItem, now_ms: i64) -> Self {
        Self::with_id(Uuid::new_v4(), input, now_ms)
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used by seed/import paths where identity already exists.
    pub fn with_id(id: ItemId, input: NewItem, now_ms: i64) -> Self {
        let NewItem {
            tags,
            source,
            note,
            ocr_text,
            thumbnail,
            image_asset_ref,
        } = input;

        Self {
            id,
            created_at: now_ms,
            modified_at: now_ms,
            tags: normalize_tags(&tags),
            source,
            note,
            ocr_text,
            thumbnail,
            image_asset_ref,
        }
    }

    /// Returns whether a thumbnail payload is present.
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail.is_empty()
    }
}

/// Creation input for a trend item.
///
/// All fields default to empty/absent so callers only spell out what they have.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    /// Raw tag input. Normalized on creation.
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub note: Option<String>,
    pub ocr_text: Option<String>,
    pub thumbnail: Vec<u8>,
    pub image_asset_ref: Option<String>,
}

impl NewItem {
    /// Starts an input with the given raw tags.
    pub fn tagged<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn ocr_text(mut self, ocr_text: impl Into<String>) -> Self {
        self.ocr_text = Some(ocr_text.into());
        self
    }

    pub fn thumbnail(mut self, bytes: Vec<u8>) -> Self {
        self.thumbnail = bytes;
        self
    }

    pub fn image_asset_ref(mut self, asset_ref: impl Into<String>) -> Self {
        self.image_asset_ref = Some(asset_ref.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{NewItem, TrendItem};

    #[test]
    fn new_item_normalizes_tags_and_sets_both_timestamps() {
        let item = TrendItem::new(NewItem::tagged(["UI", " ads", "ui"]), 1_000);
        assert!(!item.id.is_nil());
        assert_eq!(item.tags, vec!["ads".to_string(), "ui".to_string()]);
        assert_eq!(item.created_at, 1_000);
        assert_eq!(item.modified_at, 1_000);
        assert!(!item.has_thumbnail());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let input = NewItem::default()
            .source("dribbble")
            .note("hero layout")
            .ocr_text("BUY NOW")
            .thumbnail(vec![1, 2, 3])
            .image_asset_ref("assets/1.png");
        let item = TrendItem::new(input, 5);
        assert_eq!(item.source.as_deref(), Some("dribbble"));
        assert_eq!(item.note.as_deref(), Some("hero layout"));
        assert_eq!(item.ocr_text.as_deref(), Some("BUY NOW"));
        assert_eq!(item.image_asset_ref.as_deref(), Some("assets/1.png"));
        assert!(item.has_thumbnail());
    }
}

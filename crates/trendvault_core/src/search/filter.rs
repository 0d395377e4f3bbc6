//! Substring filter over item tags, source, note and OCR text.
//!
//! # Invariants
//! - A blank query matches every item.
//! - Matching is case-insensitive; absent fields never match.
//! - Filtering preserves input order.

use crate::model::item::TrendItem;

/// Prepared, lower-cased search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    needle: String,
}

impl ItemQuery {
    /// Trims and lower-cases raw search field input.
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    /// Returns whether this query matches everything.
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, item: &TrendItem) -> bool {
        if self.is_blank() {
            return true;
        }

        item.tags.iter().any(|tag| self.contained_in(tag))
            || [&item.source, &item.note, &item.ocr_text]
                .into_iter()
                .flatten()
                .any(|text| self.contained_in(text))
    }

    fn contained_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(self.needle.as_str())
    }
}

/// Returns whether `item` matches the raw query text.
pub fn item_matches(item: &TrendItem, query: &str) -> bool {
    ItemQuery::new(query).matches(item)
}

/// Returns the items matching the raw query text, in input order.
pub fn filter_items<'a, I>(items: I, query: &str) -> Vec<&'a TrendItem>
where
    I: IntoIterator<Item = &'a TrendItem>,
{
    let query = ItemQuery::new(query);
    items
        .into_iter()
        .filter(|item| query.matches(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_items, item_matches, ItemQuery};
    use crate::model::item::{NewItem, TrendItem};

    fn item(input: NewItem) -> TrendItem {
        TrendItem::new(input, 0)
    }

    #[test]
    fn blank_query_matches_everything() {
        let plain = item(NewItem::default());
        assert!(item_matches(&plain, ""));
        assert!(item_matches(&plain, "   "));
        assert!(ItemQuery::new("\t").is_blank());
    }

    #[test]
    fn matches_tag_substring_case_insensitively() {
        let tagged = item(NewItem::tagged(["landingpage"]));
        assert!(item_matches(&tagged, " LANDING "));
        assert!(!item_matches(&tagged, "pricing"));
    }

    #[test]
    fn matches_source_note_and_ocr_text() {
        let rich = item(
            NewItem::default()
                .source("Dribbble")
                .note("Great Hero")
                .ocr_text("Start FREE trial"),
        );
        assert!(item_matches(&rich, "dribb"));
        assert!(item_matches(&rich, "hero"));
        assert!(item_matches(&rich, "free trial"));
        assert!(!item_matches(&rich, "behance"));
    }

    #[test]
    fn absent_fields_never_match() {
        let bare = item(NewItem::default());
        assert!(!item_matches(&bare, "seed"));
    }

    #[test]
    fn filter_preserves_input_order() {
        let first = item(NewItem::tagged(["ads"]));
        let second = item(NewItem::tagged(["ui"]));
        let third = item(NewItem::tagged(["ads", "copy"]));
        let items = vec![first.clone(), second, third.clone()];

        let hits = filter_items(&items, "ads");
        let ids: Vec<_> = hits.iter().map(|hit| hit.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }
}

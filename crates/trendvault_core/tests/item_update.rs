use trendvault_core::{FieldUpdate, ItemUpdate, NewItem, SteppingClock, StoreOutcome, TrendStore};
use uuid::Uuid;

fn setup() -> TrendStore<SteppingClock> {
    TrendStore::with_clock(SteppingClock::default())
}

#[test]
fn create_item_normalizes_tags_and_inserts_at_head() {
    let mut store = setup();

    let first = store.create_item(NewItem::tagged(["Ads", " ads ", "UI"]));
    let second = store.create_item(NewItem::default().note("newest"));

    assert_eq!(first.tags, vec!["ads", "ui"]);
    let ids: Vec<_> = store.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn update_with_all_fields_omitted_changes_nothing() {
    let mut store = setup();
    let item = store.create_item(NewItem::tagged(["ads"]).note("keep"));
    let revision = store.revision();

    let outcome = store.update_item(item.id, ItemUpdate::default());

    assert_eq!(outcome, StoreOutcome::Unchanged);
    assert_eq!(store.item(item.id).unwrap(), &item);
    assert_eq!(store.revision(), revision);
}

#[test]
fn explicit_clear_removes_note_and_refreshes_timestamp() {
    let mut store = setup();
    let item = store.create_item(NewItem::default().note("draft").source("behance"));

    let outcome = store.update_item(
        item.id,
        ItemUpdate {
            note: FieldUpdate::Clear,
            ..ItemUpdate::default()
        },
    );

    assert_eq!(outcome, StoreOutcome::Applied);
    let updated = store.item(item.id).unwrap();
    assert_eq!(updated.note, None);
    assert_eq!(updated.source.as_deref(), Some("behance"));
    assert!(updated.modified_at > item.modified_at);
}

#[test]
fn multi_field_update_refreshes_timestamp_once() {
    let mut store = setup();
    let item = store.create_item(NewItem::default());
    let next_tick = store.clock().peek();

    store.update_item(
        item.id,
        ItemUpdate {
            tags: Some(vec!["Copy".to_string()]),
            source: FieldUpdate::Set("pinterest".to_string()),
            note: FieldUpdate::Set("short headline".to_string()),
        },
    );

    let updated = store.item(item.id).unwrap();
    assert_eq!(updated.tags, vec!["copy"]);
    assert_eq!(updated.source.as_deref(), Some("pinterest"));
    assert_eq!(updated.note.as_deref(), Some("short headline"));
    assert_eq!(updated.modified_at, next_tick);
    assert_eq!(store.revision(), 2);
}

#[test]
fn writing_identical_values_is_unchanged() {
    let mut store = setup();
    let item = store.create_item(NewItem::tagged(["ui"]).source("dribbble"));

    assert_eq!(
        store.set_source(item.id, Some("dribbble".to_string())),
        StoreOutcome::Unchanged
    );
    assert_eq!(store.set_tags(item.id, &["UI "]), StoreOutcome::Unchanged);
    assert_eq!(store.item(item.id).unwrap().modified_at, item.modified_at);
}

#[test]
fn set_source_and_set_note_support_explicit_clear() {
    let mut store = setup();
    let item = store.create_item(NewItem::default());

    store.set_source(item.id, Some("awwwards".to_string()));
    store.set_note(item.id, Some("color study".to_string()));
    assert_eq!(store.item(item.id).unwrap().source.as_deref(), Some("awwwards"));
    assert_eq!(store.item(item.id).unwrap().note.as_deref(), Some("color study"));

    assert_eq!(store.set_source(item.id, None), StoreOutcome::Applied);
    assert_eq!(store.set_note(item.id, None), StoreOutcome::Applied);
    let cleared = store.item(item.id).unwrap();
    assert_eq!(cleared.source, None);
    assert_eq!(cleared.note, None);
}

#[test]
fn add_and_remove_tags_keep_normalized_set() {
    let mut store = setup();
    let item = store.create_item(NewItem::tagged(["brand", "ui"]));

    store.add_tags(item.id, &["Pricing", "ui", "  "]);
    assert_eq!(store.item(item.id).unwrap().tags, vec!["brand", "pricing", "ui"]);

    store.remove_tags(item.id, &["BRAND ", "missing"]);
    assert_eq!(store.item(item.id).unwrap().tags, vec!["pricing", "ui"]);

    store.set_tags::<&str>(item.id, &[]);
    assert!(store.item(item.id).unwrap().tags.is_empty());
}

#[test]
fn tag_helpers_on_unknown_item_are_noops() {
    let mut store = setup();
    let missing = Uuid::new_v4();

    assert_eq!(store.add_tags(missing, &["ads"]), StoreOutcome::NotFound);
    assert_eq!(store.remove_tags(missing, &["ads"]), StoreOutcome::NotFound);
    assert_eq!(store.set_tags(missing, &["ads"]), StoreOutcome::NotFound);
    assert_eq!(store.set_note(missing, None), StoreOutcome::NotFound);
    assert_eq!(store.revision(), 0);
}

#[test]
fn tags_in_use_lists_distinct_sorted_tags() {
    let mut store = setup();
    store.create_item(NewItem::tagged(["ui", "saas"]));
    store.create_item(NewItem::tagged(["B2B", "ui"]));

    assert_eq!(store.tags_in_use(), vec!["b2b", "saas", "ui"]);
}

#[test]
fn delete_item_removes_item() {
    let mut store = setup();
    let item = store.create_item(NewItem::default());

    assert_eq!(store.delete_item(item.id), StoreOutcome::Applied);
    assert!(store.item(item.id).is_none());
    assert_eq!(store.delete_item(item.id), StoreOutcome::NotFound);
}

use trendvault_core::{NewItem, SteppingClock, StoreOutcome, TrendStore};
use uuid::Uuid;

struct Fixture {
    store: TrendStore<SteppingClock>,
    board: Uuid,
    a: Uuid,
    b: Uuid,
    c: Uuid,
}

fn fixture() -> Fixture {
    let mut store = TrendStore::with_clock(SteppingClock::default());
    let board = store.create_board("Brand").id;
    let a = store.create_item(NewItem::default()).id;
    let b = store.create_item(NewItem::default()).id;
    let c = store.create_item(NewItem::default()).id;
    for item_id in [a, b, c] {
        store.add_item_to_board(board, item_id);
    }
    Fixture {
        store,
        board,
        a,
        b,
        c,
    }
}

#[test]
fn reorder_follows_given_list() {
    let mut store = TrendStore::with_clock(SteppingClock::default());
    let brand = store.create_board("Brand");
    let a = store.create_item(NewItem::default());
    let b = store.create_item(NewItem::default());
    store.add_item_to_board(brand.id, a.id);
    store.add_item_to_board(brand.id, b.id);

    let outcome = store.reorder_items_in_board(brand.id, &[b.id, a.id]);

    assert_eq!(outcome, StoreOutcome::Applied);
    let ordered: Vec<_> = store.items_in_board(brand.id).iter().map(|i| i.id).collect();
    assert_eq!(ordered, vec![b.id, a.id]);
    store.check_integrity().unwrap();
}

#[test]
fn reorder_ignores_ids_that_are_not_members() {
    let mut f = fixture();
    let stranger = f.store.create_item(NewItem::default()).id;

    f.store
        .reorder_items_in_board(f.board, &[stranger, f.c, Uuid::new_v4(), f.a, f.b]);

    assert_eq!(f.store.board_item_ids(f.board), vec![f.c, f.a, f.b]);
    assert!(!f.store.is_item_in_board(f.board, stranger));
    f.store.check_integrity().unwrap();
}

#[test]
fn members_missing_from_list_trail_in_original_order() {
    let mut f = fixture();

    f.store.reorder_items_in_board(f.board, &[f.c]);

    assert_eq!(f.store.board_item_ids(f.board), vec![f.c, f.a, f.b]);
    assert_eq!(f.store.board_items().len(), 3);
    f.store.check_integrity().unwrap();
}

#[test]
fn repeated_id_takes_last_occurrence() {
    let mut f = fixture();

    f.store.reorder_items_in_board(f.board, &[f.a, f.b, f.a, f.c]);

    assert_eq!(f.store.board_item_ids(f.board), vec![f.b, f.a, f.c]);
}

#[test]
fn reorder_to_current_order_is_unchanged() {
    let mut f = fixture();
    let revision = f.store.revision();

    assert_eq!(
        f.store.reorder_items_in_board(f.board, &[f.a, f.b, f.c]),
        StoreOutcome::Unchanged
    );
    assert_eq!(
        f.store.reorder_items_in_board(f.board, &[]),
        StoreOutcome::Unchanged
    );
    assert_eq!(f.store.revision(), revision);
}

#[test]
fn reorder_unknown_board_is_noop() {
    let mut f = fixture();
    assert_eq!(
        f.store.reorder_items_in_board(Uuid::new_v4(), &[f.a]),
        StoreOutcome::NotFound
    );
    assert_eq!(f.store.board_item_ids(f.board), vec![f.a, f.b, f.c]);
}

#[test]
fn reorder_does_not_touch_other_boards() {
    let mut f = fixture();
    let other = f.store.create_board("Campaigns").id;
    f.store.add_item_to_board(other, f.b);
    f.store.add_item_to_board(other, f.a);

    f.store.reorder_items_in_board(f.board, &[f.c, f.b, f.a]);

    assert_eq!(f.store.board_item_ids(other), vec![f.b, f.a]);
}

#[test]
fn move_items_uses_list_move_semantics() {
    let mut f = fixture();

    assert_eq!(
        f.store.move_items_in_board(f.board, &[0], 3),
        StoreOutcome::Applied
    );
    assert_eq!(f.store.board_item_ids(f.board), vec![f.b, f.c, f.a]);

    f.store.move_items_in_board(f.board, &[2], 0);
    assert_eq!(f.store.board_item_ids(f.board), vec![f.a, f.b, f.c]);

    f.store.move_items_in_board(f.board, &[0, 2], 1);
    assert_eq!(f.store.board_item_ids(f.board), vec![f.a, f.c, f.b]);
    f.store.check_integrity().unwrap();
}

#[test]
fn move_to_own_slot_is_unchanged() {
    let mut f = fixture();
    assert_eq!(
        f.store.move_items_in_board(f.board, &[1], 1),
        StoreOutcome::Unchanged
    );
    assert_eq!(
        f.store.move_items_in_board(f.board, &[1], 2),
        StoreOutcome::Unchanged
    );
    assert_eq!(
        f.store.move_items_in_board(f.board, &[9], 0),
        StoreOutcome::Unchanged
    );
}

// tests/rater_flow.rs
//
// State-machine behavior over an injected in-memory store.

use std::collections::BTreeMap;

use brawler_rater::catalog::Item;
use brawler_rater::rater::{Command, ImportError, RATINGS_ORDER, Rater, RatingLabel, View};
use brawler_rater::store::{MemoryStore, SessionState, SessionStore};

fn item(name: &str, file: &str) -> Item {
    Item { name: name.to_string(), file: file.to_string() }
}

fn two_items() -> Vec<Item> {
    vec![item("A", "a.png"), item("B", "b.png")]
}

#[test]
fn rate_two_items_reaches_summary_with_expected_buckets() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    assert_eq!(rater.view(), View::Rating);
    assert_eq!(rater.current_item().map(|i| i.name.as_str()), Some("A"));

    rater.rate(RatingLabel::Love);
    assert_eq!(rater.current_index(), 1);
    assert_eq!(rater.ratings().get("A"), Some(&RatingLabel::Love));
    assert_eq!(rater.view(), View::Rating);

    rater.rate(RatingLabel::Ok);
    assert_eq!(rater.view(), View::Summary);

    let buckets = rater.buckets();
    let names = |label: RatingLabel| -> Vec<String> {
        buckets
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, m)| m.iter().map(|i| i.name.clone()).collect())
            .unwrap()
    };
    assert_eq!(names(RatingLabel::Love), vec!["A"]);
    assert_eq!(names(RatingLabel::Ok), vec!["B"]);
    assert!(names(RatingLabel::Like).is_empty());
    assert!(names(RatingLabel::DontLike).is_empty());
    assert!(names(RatingLabel::NotFamiliar).is_empty());
}

#[test]
fn skipping_all_items_reaches_summary_with_empty_ratings() {
    let items = two_items();
    let n = items.len();
    let mut rater = Rater::new(items, MemoryStore::new());
    for _ in 0..n {
        rater.skip();
    }
    assert_eq!(rater.view(), View::Summary);
    assert!(rater.ratings().is_empty());
}

#[test]
fn unrated_items_bucket_as_not_familiar() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.rate(RatingLabel::Like);
    rater.skip();

    let buckets = rater.buckets();
    let total: usize = buckets.iter().map(|(_, m)| m.len()).sum();
    assert_eq!(total, 2, "every item in exactly one bucket");

    let not_familiar = &buckets
        .iter()
        .find(|(l, _)| *l == RatingLabel::NotFamiliar)
        .unwrap()
        .1;
    assert_eq!(not_familiar.len(), 1);
    assert_eq!(not_familiar[0].name, "B");
    // The ratings map itself still distinguishes unrated from explicit.
    assert!(!rater.ratings().contains_key("B"));
}

#[test]
fn previous_at_index_zero_is_a_noop() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.previous();
    assert_eq!(rater.current_index(), 0);

    rater.skip();
    rater.previous();
    assert_eq!(rater.current_index(), 0);
}

#[test]
fn back_to_rating_clamps_the_done_sentinel() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.skip();
    rater.skip();
    assert_eq!(rater.view(), View::Summary);
    assert_eq!(rater.current_index(), 2); // sentinel

    rater.back_to_rating();
    assert_eq!(rater.view(), View::Rating);
    assert_eq!(rater.current_index(), 1);
}

#[test]
fn view_summary_mutates_nothing() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.rate(RatingLabel::Love);
    let idx = rater.current_index();
    let ratings = rater.ratings().clone();

    rater.view_summary();
    assert_eq!(rater.view(), View::Summary);
    assert_eq!(rater.current_index(), idx);
    assert_eq!(rater.ratings(), &ratings);
}

#[test]
fn restart_clears_ratings_and_restores_catalog() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.rate(RatingLabel::Love);
    let replacement = r#"{"ratings":{"X":"Ok"},"brawlers":[{"name":"X","file":"x.png"}]}"#;
    rater.import_results(replacement).unwrap();
    assert_eq!(rater.items().len(), 1);

    rater.restart();
    assert_eq!(rater.view(), View::Rating);
    assert_eq!(rater.current_index(), 0);
    assert!(rater.ratings().is_empty());
    assert_eq!(rater.items(), two_items().as_slice());
}

#[test]
fn export_import_round_trips_ratings_and_catalog() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.rate(RatingLabel::Love);
    rater.rate(RatingLabel::DontLike);

    let exported = serde_json::to_string(&rater.export_results()).unwrap();
    let ratings_before = rater.ratings().clone();
    let items_before = rater.items().to_vec();

    let mut other = Rater::new(two_items(), MemoryStore::new());
    other.dispatch(Command::Import(exported)).unwrap();

    assert_eq!(other.ratings(), &ratings_before);
    assert_eq!(other.items(), items_before.as_slice());
    assert_eq!(other.view(), View::Summary);
    assert_eq!(other.current_index(), 0);
}

#[test]
fn import_without_brawlers_keeps_base_catalog() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.import_results(r#"{"ratings":{"A":"Like"}}"#).unwrap();
    assert_eq!(rater.items(), two_items().as_slice());
    assert_eq!(rater.ratings().get("A"), Some(&RatingLabel::Like));
}

#[test]
fn import_without_ratings_clears_them() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.rate(RatingLabel::Love);
    rater
        .import_results(r#"{"brawlers":[{"name":"X","file":"x.png"}]}"#)
        .unwrap();
    assert!(rater.ratings().is_empty());
    assert_eq!(rater.items().len(), 1);
}

#[test]
fn malformed_imports_are_rejected_without_state_change() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.rate(RatingLabel::Love);
    let idx = rater.current_index();
    let ratings = rater.ratings().clone();

    assert!(matches!(
        rater.import_results("not json at all"),
        Err(ImportError::Json(_))
    ));
    assert!(matches!(
        rater.import_results("[1, 2, 3]"),
        Err(ImportError::NotAnObject)
    ));
    assert!(matches!(
        rater.import_results(r#"{"brawlers": 3}"#),
        Err(ImportError::Shape(_))
    ));

    assert_eq!(rater.current_index(), idx);
    assert_eq!(rater.ratings(), &ratings);
    assert_eq!(rater.items().len(), 2);
    assert_eq!(rater.view(), View::Rating);
}

#[test]
fn unknown_rating_label_is_rejected_on_import() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    let res = rater.import_results(r#"{"ratings":{"A":"Adore"}}"#);
    assert!(matches!(res, Err(ImportError::Shape(_))));
}

#[test]
fn every_mutating_transition_persists_immediately() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());

    rater.rate(RatingLabel::Love);
    let saved = rater.store().state().cloned().unwrap();
    assert_eq!(saved.current_index, 1);
    assert_eq!(saved.ratings.get("A"), Some(&RatingLabel::Love));

    rater.skip();
    let saved = rater.store().state().cloned().unwrap();
    assert_eq!(saved.current_index, 2); // sentinel persisted too

    rater.back_to_rating();
    rater.previous();
    let saved = rater.store().state().cloned().unwrap();
    assert_eq!(saved.current_index, 0);
}

#[test]
fn restore_clamps_out_of_range_index() {
    let seeded = MemoryStore::with_state(SessionState {
        current_index: 99,
        ratings: BTreeMap::new(),
    });
    let rater = Rater::new(two_items(), seeded);
    assert_eq!(rater.current_index(), 1);
    assert_eq!(rater.view(), View::Rating);
}

#[test]
fn restore_with_everything_rated_opens_on_summary() {
    let mut ratings = BTreeMap::new();
    ratings.insert("A".to_string(), RatingLabel::Love);
    ratings.insert("B".to_string(), RatingLabel::NotFamiliar);
    let seeded = MemoryStore::with_state(SessionState { current_index: 2, ratings });

    let rater = Rater::new(two_items(), seeded);
    assert_eq!(rater.view(), View::Summary);
}

#[test]
fn last_write_wins_for_repeated_ratings() {
    let mut rater = Rater::new(two_items(), MemoryStore::new());
    rater.rate(RatingLabel::Love);
    rater.previous();
    rater.rate(RatingLabel::Ok);
    assert_eq!(rater.ratings().get("A"), Some(&RatingLabel::Ok));
    assert_eq!(rater.ratings().len(), 1);
}

#[test]
fn labels_serialize_to_the_fixed_vocabulary() {
    let wire: Vec<String> = RATINGS_ORDER
        .iter()
        .map(|l| serde_json::to_string(l).unwrap())
        .collect();
    assert_eq!(
        wire,
        vec![r#""Love""#, r#""Like""#, r#""Ok""#, r#""Dont like""#, r#""Not familiar""#]
    );
}

#[test]
fn store_trait_clear_forgets_the_session() {
    let mut store = MemoryStore::new();
    store
        .save(&SessionState { current_index: 1, ratings: BTreeMap::new() })
        .unwrap();
    assert!(store.load().unwrap().is_some());
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

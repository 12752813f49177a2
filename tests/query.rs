use std::thread::sleep;
use std::time::Duration;

use animemoments::{Client, Criteria, NewAnimeMoment};
use tempfile::TempDir;

fn open_client() -> (TempDir, Client) {
    let dir = TempDir::new().expect("temp dir");
    let client = Client::open(dir.path()).expect("open client");
    (dir, client)
}

fn moment(title: &str, anime: &str) -> NewAnimeMoment {
    NewAnimeMoment::new(title, anime, "description")
}

fn tick() {
    sleep(Duration::from_millis(2));
}

fn titles(moments: &[animemoments::AnimeMoment]) -> Vec<&str> {
    moments.iter().map(|m| m.title.as_str()).collect()
}

#[test]
fn filter_returns_exact_matches_in_insertion_order() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments.create(moment("Gear Fifth", "One Piece")).expect("create");
    moments.create(moment("Talk No Jutsu", "Naruto Shippuden")).expect("create");
    moments.create(moment("Declaration of War", "One Piece")).expect("create");

    let criteria = Criteria::new().field("anime_name", "One Piece");
    let matched = moments.filter(&criteria, None).expect("filter");
    assert_eq!(titles(&matched), ["Gear Fifth", "Declaration of War"]);
}

#[test]
fn empty_criteria_match_everything() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments.create(moment("One", "A")).expect("create");
    moments.create(moment("Two", "B")).expect("create");

    let matched = moments.filter(&Criteria::new(), None).expect("filter");
    assert_eq!(titles(&matched), ["One", "Two"]);
}

#[test]
fn filter_without_matches_is_empty_not_an_error() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();
    moments.create(moment("Only", "A")).expect("create");

    let criteria = Criteria::new().field("anime_name", "Z");
    assert!(moments.filter(&criteria, None).expect("filter").is_empty());
}

#[test]
fn filter_with_sort_orders_the_subset() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments.create(moment("Banana", "A")).expect("create");
    tick();
    moments.create(moment("Apple", "A")).expect("create");
    tick();
    moments.create(moment("Cherry", "B")).expect("create");

    let criteria = Criteria::new().field("anime_name", "A");
    let matched = moments.filter(&criteria, Some("title")).expect("filter");
    assert_eq!(titles(&matched), ["Apple", "Banana"]);

    let matched = moments.filter(&criteria, Some("-created_date")).expect("filter");
    assert_eq!(titles(&matched), ["Apple", "Banana"]);
}

#[test]
fn list_sorts_ascending_and_descending() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments.create(moment("Banana", "A")).expect("create");
    moments.create(moment("Apple", "B")).expect("create");
    moments.create(moment("Cherry", "C")).expect("create");

    let ascending = moments.list(Some("title")).expect("list");
    assert_eq!(titles(&ascending), ["Apple", "Banana", "Cherry"]);

    let descending = moments.list(Some("-title")).expect("list");
    assert_eq!(titles(&descending), ["Cherry", "Banana", "Apple"]);
}

#[test]
fn documents_missing_the_sort_field_come_first() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments
        .create(NewAnimeMoment {
            episode: Some("Episode 2".to_string()),
            ..moment("Has episode", "A")
        })
        .expect("create");
    moments.create(moment("No episode", "A")).expect("create");
    moments
        .create(NewAnimeMoment {
            episode: Some("Episode 1".to_string()),
            ..moment("Earlier episode", "A")
        })
        .expect("create");

    let sorted = moments.list(Some("episode")).expect("list");
    assert_eq!(titles(&sorted), ["No episode", "Earlier episode", "Has episode"]);
}

#[test]
fn equal_sort_keys_keep_insertion_order() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments.create(moment("First", "Same")).expect("create");
    moments.create(moment("Second", "Same")).expect("create");
    moments.create(moment("Third", "Same")).expect("create");

    let sorted = moments.list(Some("anime_name")).expect("list");
    assert_eq!(titles(&sorted), ["First", "Second", "Third"]);

    let sorted = moments.list(Some("-anime_name")).expect("list");
    assert_eq!(titles(&sorted), ["First", "Second", "Third"]);
}

#[test]
fn repeated_reads_are_idempotent() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments.create(moment("One", "A")).expect("create");
    tick();
    moments.create(moment("Two", "B")).expect("create");

    let first = moments.list(Some("-created_date")).expect("list");
    let second = moments.list(Some("-created_date")).expect("list");
    assert_eq!(first, second);

    let criteria = Criteria::new().field("anime_name", "A");
    let first = moments.filter(&criteria, None).expect("filter");
    let second = moments.filter(&criteria, None).expect("filter");
    assert_eq!(first, second);
}

#[test]
fn filtering_leaves_the_collection_untouched() {
    let (_dir, client) = open_client();
    let moments = client.anime_moments();

    moments.create(moment("One", "A")).expect("create");
    moments.create(moment("Two", "B")).expect("create");

    let criteria = Criteria::new().field("anime_name", "A");
    let _ = moments.filter(&criteria, Some("-created_date")).expect("filter");
    assert_eq!(titles(&moments.list(None).expect("list")), ["One", "Two"]);
}

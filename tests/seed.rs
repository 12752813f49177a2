use animemoments::{Client, NewAnimeMoment, ensure_demo_content};
use tempfile::TempDir;

fn open_client() -> (TempDir, Client) {
    let dir = TempDir::new().expect("temp dir");
    let client = Client::open(dir.path()).expect("open client");
    (dir, client)
}

#[test]
fn seeds_an_empty_store() {
    let (_dir, client) = open_client();

    let added = ensure_demo_content(&client).expect("seed");
    assert!(added > 0);
    assert_eq!(client.anime_moments().count(), added);

    for moment in client.anime_moments().list(None).expect("list") {
        assert!(!moment.id.is_empty());
        assert!(!moment.title.is_empty());
        assert!(!moment.anime_name.is_empty());
        assert!(!moment.description.is_empty());
    }
}

#[test]
fn seeding_twice_adds_nothing() {
    let (_dir, client) = open_client();
    let added = ensure_demo_content(&client).expect("first seed");
    assert_eq!(ensure_demo_content(&client).expect("second seed"), 0);
    assert_eq!(client.anime_moments().count(), added);
}

#[test]
fn a_store_with_content_is_never_seeded() {
    let (_dir, client) = open_client();
    client
        .anime_moments()
        .create(NewAnimeMoment::new("Mine", "One Piece", "user content"))
        .expect("create");
    assert_eq!(ensure_demo_content(&client).expect("seed"), 0);
    assert_eq!(client.anime_moments().count(), 1);
}

#[test]
fn seeded_feed_lists_newest_first() {
    let (_dir, client) = open_client();
    ensure_demo_content(&client).expect("seed");

    let feed = client.anime_moments().list(Some("-created_date")).expect("list");
    for window in feed.windows(2) {
        assert!(window[0].created_date >= window[1].created_date);
    }
    // Catalog order: the newest entry is the One Piece awakening.
    assert_eq!(feed[0].anime_name, "One Piece");
}

#[test]
fn seeded_documents_persist_across_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let added = {
        let client = Client::open(dir.path()).expect("open");
        ensure_demo_content(&client).expect("seed")
    };
    let client = Client::open(dir.path()).expect("reopen");
    assert_eq!(client.anime_moments().count(), added);
    assert_eq!(ensure_demo_content(&client).expect("seed after reopen"), 0);
}

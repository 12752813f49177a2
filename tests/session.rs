use std::fs;

use animemoments::storage::SESSION_KEY;
use animemoments::{Client, RepoError, UserIdentity};
use tempfile::TempDir;

fn open_client() -> (TempDir, Client) {
    let dir = TempDir::new().expect("temp dir");
    let client = Client::open(dir.path()).expect("open client");
    (dir, client)
}

#[test]
fn logged_out_by_default() {
    let (_dir, client) = open_client();
    assert_eq!(client.auth().current_user(), None);
}

#[test]
fn start_writes_the_demo_identity() {
    let (_dir, client) = open_client();

    let identity = client.auth().start().expect("start session");
    assert_eq!(identity, UserIdentity::demo());
    assert_eq!(identity.email, "demo@animemoments.com");

    let current = client.auth().current_user().expect("logged in");
    assert_eq!(current, identity);
}

#[test]
fn end_clears_the_session() {
    let (_dir, client) = open_client();
    client.auth().start().expect("start");
    client.auth().end().expect("end");
    assert_eq!(client.auth().current_user(), None);

    // Ending twice is a no-op.
    client.auth().end().expect("end again");
}

#[test]
fn session_survives_reopen() {
    let dir = TempDir::new().expect("temp dir");
    {
        let client = Client::open(dir.path()).expect("open");
        client.auth().start().expect("start");
    }
    let client = Client::open(dir.path()).expect("reopen");
    assert_eq!(client.auth().current_user(), Some(UserIdentity::demo()));
}

#[test]
fn custom_identity_round_trips() {
    let (_dir, client) = open_client();
    let identity = UserIdentity {
        email: "sakura_fan@anime.com".to_string(),
        full_name: "Sakura Fan".to_string(),
        id: "user-sakura".to_string(),
    };
    client.auth().start_with(identity.clone()).expect("start");
    assert_eq!(client.auth().current_user(), Some(identity));
}

#[test]
fn invalid_email_is_rejected() {
    let (_dir, client) = open_client();
    let err = client
        .auth()
        .start_with(UserIdentity {
            email: "not-an-email".to_string(),
            full_name: "Nobody".to_string(),
            id: "user-nobody".to_string(),
        })
        .expect_err("must fail");
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(client.auth().current_user(), None);
}

#[test]
fn corrupt_session_key_reads_as_logged_out() {
    let dir = TempDir::new().expect("temp dir");
    let client = Client::open(dir.path()).expect("open");
    fs::write(dir.path().join(format!("{SESSION_KEY}.json")), "{{{").expect("plant corruption");
    assert_eq!(client.auth().current_user(), None);
}

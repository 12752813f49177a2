//! AnimeMoments persistence core: a file-backed document store with typed
//! CRUD repositories and a single persisted login identity.
//!
//! The store simulates the backend of a small content-sharing app: two
//! collections (`AnimeMoment`, `Comment`) persisted as one JSON document
//! under a local storage directory, plus a session key holding the current
//! identity. UI layers talk to it exclusively through [`Client`].
//!
//! ```no_run
//! use animemoments::{Client, NewAnimeMoment};
//!
//! let client = Client::open(".moments")?;
//! let moments = client.anime_moments();
//! let created = moments.create(NewAnimeMoment::new(
//!     "Luffy's Gear Fifth Awakening",
//!     "One Piece",
//!     "The most epic transformation in anime history!",
//! ))?;
//! let feed = moments.list(Some("-created_date"))?;
//! assert_eq!(feed.first().map(|moment| moment.id.as_str()), Some(created.id.as_str()));
//! # Ok::<(), animemoments::RepoError>(())
//! ```

pub mod client;
pub mod errors;
pub mod id;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;
pub mod validators;

pub use client::Client;
pub use errors::{RepoError, ValidationError, ValidationIssue, ValidationResult};
pub use models::{AnimeMoment, AnimeMomentPatch, Comment, CommentPatch, NewAnimeMoment, NewComment};
pub use query::{Criteria, SortKey, SortOrder};
pub use repository::Repo;
pub use seed::ensure_demo_content;
pub use session::{Session, UserIdentity};
pub use store::{DataStore, StoreData};
pub use types::Model;

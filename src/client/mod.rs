//! Client: the single entry point owning the store lifecycle.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::errors::RepoError;
use crate::models::{AnimeMoment, Comment};
use crate::repository::Repo;
use crate::session::Session;
use crate::storage::LocalStorage;
use crate::store::DataStore;
use crate::types::Model;

/// Entry point for all document and session operations.
///
/// Opens the storage directory once and owns the in-memory document store
/// for the life of the process; every repository handed out by
/// [`Client::collection`] shares it. The execution model is single-threaded
/// (handles are `!Send`): one logical operation at a time, no locking. Two
/// clients over the same directory each hold an independent snapshot and
/// the last flush wins — a known limitation of the storage contract.
pub struct Client {
    store: Rc<RefCell<DataStore>>,
    session: Session,
}

impl Client {
    /// Opens the storage directory (creating it if needed) and loads the
    /// document store.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let storage = LocalStorage::open(root)?;
        let store = DataStore::open(storage.clone())?;
        Ok(Self {
            store: Rc::new(RefCell::new(store)),
            session: Session::new(storage),
        })
    }

    /// Typed handle for any collection.
    pub fn collection<T: Model>(&self) -> Repo<T> {
        Repo::new(Rc::clone(&self.store))
    }

    /// The AnimeMoment collection.
    pub fn anime_moments(&self) -> Repo<AnimeMoment> {
        self.collection()
    }

    /// The Comment collection.
    pub fn comments(&self) -> Repo<Comment> {
        self.collection()
    }

    /// Session state, consumed by callers for auth-gating decisions.
    pub fn auth(&self) -> &Session {
        &self.session
    }

    pub(crate) fn store(&self) -> &Rc<RefCell<DataStore>> {
        &self.store
    }
}

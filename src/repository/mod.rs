//! Entity Access Layer: typed CRUD + filter over one collection.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use chrono::Utc;

use crate::errors::RepoError;
use crate::id::generate_id;
use crate::query::{Criteria, SortKey, sort_documents};
use crate::store::DataStore;
use crate::types::Model;

/// Typed handle over one collection of the shared document store.
///
/// Every mutation flushes the whole store to durable storage before
/// returning; an unflushed mutation does not survive a restart. Handles are
/// handed out by [`crate::Client`] and share a single store.
pub struct Repo<T: Model> {
    store: Rc<RefCell<DataStore>>,
    _model: PhantomData<T>,
}

impl<T: Model> Repo<T> {
    pub(crate) fn new(store: Rc<RefCell<DataStore>>) -> Self {
        Self {
            store,
            _model: PhantomData,
        }
    }

    /// Returns a copy of the collection, optionally sorted by `sort`
    /// (`"field"` ascending, `"-field"` descending).
    pub fn list(&self, sort: Option<&str>) -> Result<Vec<T>, RepoError> {
        let items = {
            let store = self.store.borrow();
            T::collection(store.data()).clone()
        };
        match sort {
            Some(spec) => sort_documents(items, &SortKey::parse(spec)),
            None => Ok(items),
        }
    }

    /// Finds a document by id. Absence is `None`, not an error.
    pub fn get(&self, id: &str) -> Result<Option<T>, RepoError> {
        let store = self.store.borrow();
        Ok(T::collection(store.data()).iter().find(|item| item.id() == id).cloned())
    }

    /// Creates a document: validates the input, assigns a fresh id and the
    /// current timestamp, appends to the collection, and flushes.
    pub fn create(&self, input: T::Create) -> Result<T, RepoError> {
        T::validate_create(&input)?;
        let document = T::assemble(generate_id(), Utc::now(), input);
        let mut store = self.store.borrow_mut();
        T::collection_mut(store.data_mut()).push(document.clone());
        store.save()?;
        log::debug!("created {} {}", T::COLLECTION, document.id());
        Ok(document)
    }

    /// Shallow-merges `patch` into the document with the given id and
    /// flushes. Fails with [`RepoError::NotFound`] when the id is absent,
    /// leaving the collection unchanged.
    pub fn update(&self, id: &str, patch: T::Patch) -> Result<T, RepoError> {
        T::validate_patch(&patch)?;
        let mut store = self.store.borrow_mut();
        let Some(document) = T::collection_mut(store.data_mut()).iter_mut().find(|item| item.id() == id) else {
            return Err(RepoError::NotFound {
                entity_id: Some(id.to_string()),
            });
        };
        document.apply_patch(patch);
        let updated = document.clone();
        store.save()?;
        Ok(updated)
    }

    /// Deletes the document with the given id. Returns whether anything was
    /// removed; deleting an absent id is not an error.
    pub fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut store = self.store.borrow_mut();
        let collection = T::collection_mut(store.data_mut());
        let Some(index) = collection.iter().position(|item| item.id() == id) else {
            return Ok(false);
        };
        collection.remove(index);
        store.save()?;
        log::debug!("deleted {} {id}", T::COLLECTION);
        Ok(true)
    }

    /// Returns the documents matching every criterion, in insertion order,
    /// optionally sorted. Empty criteria match everything.
    pub fn filter(&self, criteria: &Criteria, sort: Option<&str>) -> Result<Vec<T>, RepoError> {
        let matched = {
            let store = self.store.borrow();
            let mut matched = Vec::new();
            for item in T::collection(store.data()) {
                if criteria.is_empty() || criteria.matches(&serde_json::to_value(item)?) {
                    matched.push(item.clone());
                }
            }
            matched
        };
        match sort {
            Some(spec) => sort_documents(matched, &SortKey::parse(spec)),
            None => Ok(matched),
        }
    }

    /// Number of documents currently in the collection.
    pub fn count(&self) -> usize {
        let store = self.store.borrow();
        T::collection(store.data()).len()
    }
}

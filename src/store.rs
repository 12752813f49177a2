//! Document Store: the durable mapping from collection name to an ordered
//! sequence of documents.
//!
//! The whole mapping is one JSON object persisted under the data key, with
//! one field per collection. Loading happens once at open; every mutation
//! must be followed by [`DataStore::save`] or it dies with the process.

use serde::{Deserialize, Serialize};

use crate::errors::RepoError;
use crate::models::{AnimeMoment, Comment};
use crate::storage::{DATA_KEY, LocalStorage};

/// The persisted document mapping. Field names match the on-disk layout:
/// `{"AnimeMoment": [...], "Comment": [...]}`. Collections absent from the
/// stored object start empty.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(rename = "AnimeMoment", default)]
    pub anime_moments: Vec<AnimeMoment>,
    #[serde(rename = "Comment", default)]
    pub comments: Vec<Comment>,
}

/// In-memory document store with load-on-open and explicit flush-on-save.
///
/// Two stores opened over the same directory each hold an independent
/// snapshot; whichever saves last overwrites the other's writes.
#[derive(Debug)]
pub struct DataStore {
    storage: LocalStorage,
    data: StoreData,
}

impl DataStore {
    /// Loads the store from the data key. An absent key yields an empty
    /// store; unparseable content also yields an empty store, with a logged
    /// warning. Recovery, not an error surface.
    pub fn open(storage: LocalStorage) -> Result<Self, RepoError> {
        let data = match storage.read(DATA_KEY)? {
            None => StoreData::default(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(err) => {
                    log::warn!("discarding unreadable document store ({err}); starting empty");
                    StoreData::default()
                }
            },
        };
        Ok(Self { storage, data })
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut StoreData {
        &mut self.data
    }

    /// Serializes the entire mapping and overwrites the durable data key.
    pub fn save(&self) -> Result<(), RepoError> {
        let encoded = serde_json::to_string(&self.data)?;
        self.storage.write(DATA_KEY, &encoded)?;
        Ok(())
    }
}

//! Session State: the single persisted login identity.

use serde::{Deserialize, Serialize};

use crate::errors::{RepoError, ValidationError};
use crate::storage::{LocalStorage, SESSION_KEY};
use crate::validators::is_valid_email;

/// The current logged-in identity, as persisted under the session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    pub full_name: String,
    pub id: String,
}

impl UserIdentity {
    /// Fixed demo identity written by [`Session::start`]. A real deployment
    /// replaces this with an actual authentication flow.
    pub fn demo() -> Self {
        Self {
            email: "demo@animemoments.com".to_string(),
            full_name: "Demo User".to_string(),
            id: "demo-user-id".to_string(),
        }
    }
}

/// Reads and writes the persisted session identity.
///
/// Two states only: logged out (key absent) and logged in (key holds an
/// identity). No expiry, no multi-session support.
#[derive(Debug, Clone)]
pub struct Session {
    storage: LocalStorage,
}

impl Session {
    pub(crate) fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Returns the stored identity, or `None` when the session key is
    /// absent or its content is unreadable.
    pub fn current_user(&self) -> Option<UserIdentity> {
        let raw = self.storage.read(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                log::debug!("ignoring unreadable session identity: {err}");
                None
            }
        }
    }

    /// Logs in as the demo identity and returns it.
    pub fn start(&self) -> Result<UserIdentity, RepoError> {
        self.start_with(UserIdentity::demo())
    }

    /// Logs in with a caller-chosen identity. The email must be
    /// syntactically valid.
    pub fn start_with(&self, identity: UserIdentity) -> Result<UserIdentity, RepoError> {
        if !is_valid_email(&identity.email) {
            return Err(
                ValidationError::single("email", "validation.email", "value must be a valid email address").into(),
            );
        }
        let encoded = serde_json::to_string(&identity)?;
        self.storage.write(SESSION_KEY, &encoded)?;
        Ok(identity)
    }

    /// Logs out. Ending an already-ended session is a no-op.
    pub fn end(&self) -> Result<(), RepoError> {
        Ok(self.storage.remove(SESSION_KEY)?)
    }
}

//! The model trait wiring typed entities into the generic repository.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::ValidationResult;
use crate::store::StoreData;

/// A typed document kind stored in one collection of the document store.
///
/// Implemented by hand for the closed set of entities. The trait is the seam
/// between the generic repository and the typed collections, so a mistyped
/// field name is a compile error rather than a silently-empty query.
pub trait Model: Clone + Serialize {
    /// Collection name, as it appears in the persisted mapping.
    const COLLECTION: &'static str;

    /// Caller-supplied fields accepted by `create`.
    type Create;
    /// Partial-field update applied by `update` (shallow merge).
    type Patch;

    /// Assembles a full document from a freshly generated id, the creation
    /// timestamp, and the caller-supplied fields. Callers never supply `id`
    /// or `created_date`; the generated values always win.
    fn assemble(id: String, created_date: DateTime<Utc>, input: Self::Create) -> Self;

    /// Applies a shallow merge: present patch fields overwrite, absent
    /// fields stay. Replacing a sequence field (`likes`, `tags`) means
    /// passing the full new sequence, not a delta.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Checks caller-supplied create fields before any mutation happens.
    fn validate_create(input: &Self::Create) -> ValidationResult<()>;

    /// Checks a patch before it is merged.
    fn validate_patch(patch: &Self::Patch) -> ValidationResult<()>;

    fn id(&self) -> &str;

    /// Projects this model's collection out of the store.
    fn collection(data: &StoreData) -> &Vec<Self>;

    fn collection_mut(data: &mut StoreData) -> &mut Vec<Self>;
}

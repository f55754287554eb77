//! Identity shared by persisted records.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ports::RepositoryError;

/// A record stored in a collection file and addressed by an integer id.
///
/// Ids are owned by the repository that stores the record: callers never
/// choose them, see [`next_id`].
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human-readable entity name used in messages ("Filament", "Filament type").
    const ENTITY: &'static str;

    /// The record's id.
    fn id(&self) -> i64;

    /// Return the same record carrying `id` instead of its current one.
    #[must_use]
    fn with_id(self, id: i64) -> Self;
}

/// Next free id for a collection: one past the highest id, or 1 when empty.
///
/// Fails when the highest id is already `i64::MAX`.
pub fn next_id<T: Record>(records: &[T]) -> Result<i64, RepositoryError> {
    match records.iter().map(Record::id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(RepositoryError::IdsExhausted {
            entity: T::ENTITY,
            max,
        }),
    }
}

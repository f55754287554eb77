//! Generic whole-collection JSON file repository.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use filament_core::domain::next_id;
use filament_core::{Record, RepositoryError, attempt};

/// A collection of `T` stored as one JSON array in a single file.
///
/// The repository is bound to its file at construction. Reads load the
/// whole file; mutations load, change the in-memory list and write the
/// whole list back. Stored order is preserved and new records go last.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileRepository<T> {
    /// Create a repository bound to `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// The file this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record.
    ///
    /// A missing file is an empty collection. A file that exists but is not
    /// a JSON array of records, including an empty one, fails with the path
    /// and the parser's message.
    pub fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "collection file absent, treating as empty");
            return Ok(Vec::new());
        }

        let raw = attempt(
            || fs::read_to_string(&self.path),
            |e| RepositoryError::Read {
                path: self.path.clone(),
                reason: e.to_string(),
            },
        )?;

        let records: Vec<T> = attempt(
            || serde_json::from_str(&raw),
            |e| RepositoryError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            },
        )?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded collection"
        );
        Ok(records)
    }

    /// Load the record with `id`, or fail with a not-found error.
    pub fn find_by_id(&self, id: i64) -> Result<T, RepositoryError> {
        self.find_all()?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| RepositoryError::not_found::<T>(id))
    }

    /// Overwrite the file with `records`, creating parent directories.
    pub fn save(&self, records: &[T]) -> Result<(), RepositoryError> {
        let mut json = serde_json::to_string_pretty(records)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(&e))?;
        }
        fs::write(&self.path, json).map_err(|e| self.write_error(&e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "saved collection"
        );
        Ok(())
    }

    /// Append `record` under the next free id, ignoring the id it carries.
    pub fn add(&self, record: T) -> Result<T, RepositoryError> {
        let mut records = self.find_all()?;
        let stored = record.with_id(next_id(&records)?);
        records.push(stored.clone());
        self.save(&records)?;

        tracing::info!(entity = T::ENTITY, id = stored.id(), "added record");
        Ok(stored)
    }

    /// Replace the first record sharing `record`'s id.
    ///
    /// When no record matches, the collection is written back unchanged and
    /// the call still succeeds.
    pub fn update(&self, record: T) -> Result<T, RepositoryError> {
        let mut records = self.find_all()?;
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record.clone();
                tracing::info!(entity = T::ENTITY, id = record.id(), "updated record");
            }
            None => {
                tracing::debug!(entity = T::ENTITY, id = record.id(), "update matched no record");
            }
        }
        self.save(&records)?;
        Ok(record)
    }

    /// Drop every record with `id`. An unknown id is not an error.
    pub fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut records = self.find_all()?;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            tracing::debug!(entity = T::ENTITY, id, "delete matched no record");
        } else {
            tracing::info!(entity = T::ENTITY, id, "deleted record");
        }
        self.save(&records)
    }

    fn write_error(&self, err: &std::io::Error) -> RepositoryError {
        RepositoryError::Write {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}

impl<T> Clone for JsonFileRepository<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for JsonFileRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileRepository")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filament_core::FilamentType;
    use tempfile::tempdir;

    fn named(id: i64, name: &str) -> FilamentType {
        FilamentType {
            id,
            name: name.to_string(),
            manufacturer: "Prusament".to_string(),
            material_type: "PETG".to_string(),
            diameter: 1.75,
            density: 1.27,
            ..FilamentType::default()
        }
    }

    fn repo_in(dir: &Path) -> JsonFileRepository<FilamentType> {
        JsonFileRepository::new(dir.join("types.json"))
    }

    #[test]
    fn missing_file_is_empty_collection() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());

        assert!(repo.find_all().unwrap().is_empty());
        assert!(!repo.path().exists(), "reads must not create the file");
    }

    #[test]
    fn whitespace_only_file_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        fs::write(repo.path(), "\n  \n").unwrap();

        let err = repo.find_all().unwrap_err();
        assert!(matches!(err, RepositoryError::Parse { .. }));
        assert!(err.to_string().contains("types.json"));
    }

    #[test]
    fn malformed_file_names_path_and_cause() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        fs::write(repo.path(), "[{\"id\": 1,").unwrap();

        let err = repo.find_all().unwrap_err();
        assert!(matches!(err, RepositoryError::Parse { .. }));
        assert!(err.to_string().contains("types.json"));
    }

    #[test]
    fn object_instead_of_array_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        fs::write(repo.path(), "{}").unwrap();

        assert!(matches!(
            repo.find_all().unwrap_err(),
            RepositoryError::Parse { .. }
        ));
    }

    #[test]
    fn save_then_find_all_preserves_order() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        let collection = vec![named(5, "Galaxy"), named(2, "Jet Black"), named(9, "Signal")];

        repo.save(&collection).unwrap();

        assert_eq!(repo.find_all().unwrap(), collection);
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp = tempdir().unwrap();
        let repo: JsonFileRepository<FilamentType> =
            JsonFileRepository::new(temp.path().join("nested").join("dir").join("types.json"));

        repo.save(&[named(1, "Galaxy")]).unwrap();

        assert!(repo.path().exists());
    }

    #[test]
    fn save_writes_pretty_json_array() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());

        repo.save(&[named(1, "Galaxy")]).unwrap();

        let raw = fs::read_to_string(repo.path()).unwrap();
        assert!(raw.starts_with("[\n"));
        assert!(raw.contains("\n  {\n"));
        assert!(raw.contains("\"nozzleTemp\""));
        assert!(raw.ends_with("]\n"));
    }

    #[test]
    fn save_overwrites_rather_than_merges() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        repo.save(&[named(1, "A"), named(2, "B")]).unwrap();

        repo.save(&[named(3, "C")]).unwrap();

        assert_eq!(repo.find_all().unwrap(), vec![named(3, "C")]);
    }

    #[test]
    fn add_assigns_one_on_empty_collection_and_ignores_given_id() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());

        let stored = repo.add(named(77, "Galaxy")).unwrap();

        assert_eq!(stored.id, 1);
        assert_eq!(repo.find_all().unwrap(), vec![named(1, "Galaxy")]);
    }

    #[test]
    fn add_uses_max_id_plus_one() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        repo.save(&[named(4, "A"), named(10, "B"), named(2, "C")]).unwrap();

        let stored = repo.add(named(0, "D")).unwrap();

        assert_eq!(stored.id, 11);
        let all = repo.find_all().unwrap();
        assert_eq!(all.last().map(|t| t.id), Some(11));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn add_fails_when_max_id_is_taken() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        fs::write(repo.path(), "[{\"id\": 9223372036854775807, \"name\": \"Edge\", \"manufacturer\": \"\", \"description\": \"\", \"type\": \"PLA\", \"diameter\": 1.75, \"nozzleTemp\": \"\", \"bedTemp\": \"\", \"density\": 1.24}]").unwrap();
        let before = fs::read_to_string(repo.path()).unwrap();

        let err = repo.add(FilamentType::default()).unwrap_err();

        assert!(matches!(err, RepositoryError::IdsExhausted { max: i64::MAX, .. }));
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), before);
    }

    #[test]
    fn update_replaces_matching_record_in_place() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        repo.save(&[named(1, "A"), named(2, "B"), named(3, "C")]).unwrap();

        let returned = repo.update(named(2, "B2")).unwrap();

        assert_eq!(returned.name, "B2");
        let names: Vec<String> = repo.find_all().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["A", "B2", "C"]);
    }

    #[test]
    fn update_of_unknown_id_is_silent_no_op() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        let collection = vec![named(1, "A"), named(2, "B")];
        repo.save(&collection).unwrap();

        let returned = repo.update(named(99, "Ghost")).unwrap();

        assert_eq!(returned.id, 99);
        assert_eq!(repo.find_all().unwrap(), collection);
    }

    #[test]
    fn delete_removes_only_matching_id() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        repo.save(&[named(1, "A"), named(2, "B"), named(3, "C")]).unwrap();

        repo.delete_by_id(2).unwrap();

        let ids: Vec<i64> = repo.find_all().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_is_idempotent() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        repo.save(&[named(1, "A")]).unwrap();

        repo.delete_by_id(1).unwrap();
        repo.delete_by_id(1).unwrap();
        repo.delete_by_id(42).unwrap();

        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn ids_are_not_reused_below_the_max() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        repo.add(named(0, "A")).unwrap();
        repo.add(named(0, "B")).unwrap();
        repo.add(named(0, "C")).unwrap();

        repo.delete_by_id(2).unwrap();
        let next = repo.add(named(0, "D")).unwrap();

        assert_eq!(next.id, 4);
    }

    #[test]
    fn find_by_id_reports_entity_and_id() {
        let temp = tempdir().unwrap();
        let repo = repo_in(temp.path());
        repo.save(&[named(1, "A")]).unwrap();

        assert_eq!(repo.find_by_id(1).unwrap().name, "A");
        assert_eq!(
            repo.find_by_id(8).unwrap_err().to_string(),
            "Filament type not found: 8"
        );
    }

    #[test]
    fn write_into_file_path_blocked_by_directory_fails() {
        let temp = tempdir().unwrap();
        let blocked = temp.path().join("types.json");
        fs::create_dir(&blocked).unwrap();
        let repo: JsonFileRepository<FilamentType> = JsonFileRepository::new(&blocked);

        let err = repo.save(&[named(1, "A")]).unwrap_err();
        assert!(matches!(err, RepositoryError::Write { .. }));
    }
}

use crate::records::Record;
use crate::repositories::FlatFileRepository;
use crate::CareResult;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The authoritative in-memory collection for one entity kind, paired with its repository.
#[derive(Debug)]
struct Collection<R> {
    repository: FlatFileRepository<R>,
    records: Vec<R>,
}

impl<R: Record> Collection<R> {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn save(&self) -> CareResult<()> {
        self.repository.save_all(&self.records)
    }
}

/// Shared, lock-guarded record collection.
///
/// Clones share one collection. Every mutation holds the lock from the id scan through the
/// file overwrite, and is undone in memory if the overwrite fails.
#[derive(Debug)]
pub(crate) struct RecordStore<R> {
    inner: Arc<Mutex<Collection<R>>>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Loads every record through `repository`.
    pub(crate) fn open(repository: FlatFileRepository<R>) -> CareResult<Self> {
        let records = repository.load_all()?;
        Ok(Self {
            inner: Arc::new(Mutex::new(Collection {
                repository,
                records,
            })),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Collection<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn path(&self) -> PathBuf {
        self.lock().repository.path().to_path_buf()
    }

    pub(crate) fn is_backed_by(&self, path: &Path) -> bool {
        self.lock().repository.path() == path
    }

    pub(crate) fn list(&self) -> Vec<R> {
        self.lock().records.clone()
    }

    pub(crate) fn get(&self, id: &str) -> Option<R> {
        let collection = self.lock();
        collection
            .position(id)
            .map(|index| collection.records[index].clone())
    }

    /// Allocates the next id, builds a record from it, appends it and persists.
    pub(crate) fn insert_with(&self, build: impl FnOnce(String) -> R) -> CareResult<R> {
        let mut collection = self.lock();

        let id = carebook_ids::next_id(
            R::KIND.id_prefix(),
            collection.records.iter().map(|r| r.id()),
        )?;
        let record = build(id);

        collection.records.push(record.clone());
        if let Err(err) = collection.save() {
            collection.records.pop();
            return Err(err);
        }

        Ok(record)
    }

    /// Removes the first record with `id` and persists. `None` if no record matches.
    pub(crate) fn remove(&self, id: &str) -> CareResult<Option<R>> {
        let mut collection = self.lock();

        let Some(index) = collection.position(id) else {
            return Ok(None);
        };

        let removed = collection.records.remove(index);
        if let Err(err) = collection.save() {
            collection.records.insert(index, removed);
            return Err(err);
        }

        Ok(Some(removed))
    }

    /// Applies `change` to the first record with `id` and persists. `None` if no record matches.
    pub(crate) fn update(&self, id: &str, change: impl FnOnce(&mut R)) -> CareResult<Option<R>> {
        let mut collection = self.lock();

        let Some(index) = collection.position(id) else {
            return Ok(None);
        };

        let previous = collection.records[index].clone();
        change(&mut collection.records[index]);
        if let Err(err) = collection.save() {
            collection.records[index] = previous;
            return Err(err);
        }

        Ok(Some(collection.records[index].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Clinician, NewClinician};
    use crate::CareError;
    use std::fs;
    use tempfile::TempDir;

    fn open_store(dir: &Path) -> RecordStore<Clinician> {
        let repository = FlatFileRepository::<Clinician>::new(dir.join("clinicians.csv"));
        repository.initialise().expect("initialise should succeed");
        RecordStore::open(repository).expect("open should succeed")
    }

    fn add(store: &RecordStore<Clinician>, last_name: &str) -> CareResult<Clinician> {
        store.insert_with(|id| {
            Clinician::from_new(
                id,
                NewClinician {
                    last_name: last_name.into(),
                    ..Default::default()
                },
            )
        })
    }

    #[test]
    fn test_insert_allocates_sequential_ids() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(temp_dir.path());

        assert_eq!(add(&store, "Okafor").unwrap().clinician_id, "C001");
        assert_eq!(add(&store, "Okafor").unwrap().clinician_id, "C002");
    }

    #[test]
    fn test_clones_share_one_collection() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(temp_dir.path());
        let other = store.clone();

        add(&store, "Okafor").expect("insert should succeed");

        assert_eq!(other.list().len(), 1);
        assert!(other.get("C001").is_some());
    }

    #[test]
    fn test_remove_missing_id_does_not_persist() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(temp_dir.path());
        add(&store, "Okafor").expect("insert should succeed");

        fs::remove_file(store.path()).expect("should remove file");

        assert!(store.remove("C999").expect("remove should succeed").is_none());
        assert!(store
            .update("C999", |c| c.title = "Dr".into())
            .expect("update should succeed")
            .is_none());
        assert_eq!(store.list().len(), 1);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_failed_save_rolls_back_every_mutation() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        fs::create_dir(&data_dir).expect("should create data dir");
        let store = open_store(&data_dir);
        add(&store, "Okafor").expect("insert should succeed");
        let before = store.list();

        fs::remove_dir_all(&data_dir).expect("should remove data dir");

        assert!(matches!(add(&store, "Nwosu"), Err(CareError::FileWrite { .. })));
        assert!(matches!(store.remove("C001"), Err(CareError::FileWrite { .. })));
        assert!(matches!(
            store.update("C001", |c| c.title = "Prof".into()),
            Err(CareError::FileWrite { .. })
        ));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(temp_dir.path());
        add(&store, "Okafor").expect("insert should succeed");

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.list().len(), 1);
        assert_eq!(add(&store, "Nwosu").unwrap().clinician_id, "C002");
    }
}

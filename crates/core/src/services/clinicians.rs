use super::store::RecordStore;
use crate::config::CoreConfig;
use crate::records::{Clinician, NewClinician};
use crate::repositories::FlatFileRepository;
use crate::CareResult;

/// Create, list, look up and delete clinicians.
#[derive(Clone, Debug)]
pub struct ClinicianService {
    store: RecordStore<Clinician>,
}

impl ClinicianService {
    /// Loads every clinician from the configured data directory.
    pub fn open(cfg: &CoreConfig) -> CareResult<Self> {
        Ok(Self {
            store: RecordStore::open(FlatFileRepository::for_config(cfg))?,
        })
    }

    pub fn list(&self) -> Vec<Clinician> {
        self.store.list()
    }

    pub fn get(&self, clinician_id: &str) -> Option<Clinician> {
        self.store.get(clinician_id)
    }

    pub fn create(&self, new: NewClinician) -> CareResult<Clinician> {
        let record = self.store.insert_with(|id| Clinician::from_new(id, new))?;
        tracing::info!(clinician_id = %record.clinician_id, "created clinician");
        Ok(record)
    }

    /// Removes the clinician with exactly `clinician_id`. `None` if there is no such clinician.
    pub fn delete(&self, clinician_id: &str) -> CareResult<Option<Clinician>> {
        let removed = self.store.remove(clinician_id)?;
        if removed.is_some() {
            tracing::info!(clinician_id, "deleted clinician");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::initialised_config;
    use tempfile::TempDir;

    #[test]
    fn test_delete_matches_id_exactly() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = ClinicianService::open(&cfg).expect("open should succeed");
        service
            .create(NewClinician {
                first_name: "Ada".into(),
                last_name: "Okafor".into(),
                title: "Dr".into(),
                ..Default::default()
            })
            .expect("create should succeed");

        assert!(service.delete("c001").expect("delete should succeed").is_none());
        assert!(service.delete("C001").expect("delete should succeed").is_some());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_get_returns_clinician_by_id() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = ClinicianService::open(&cfg).expect("open should succeed");
        let created = service
            .create(NewClinician {
                last_name: "Okafor".into(),
                ..Default::default()
            })
            .expect("create should succeed");

        assert_eq!(service.get("C001"), Some(created));
        assert_eq!(service.get("C002"), None);
    }
}

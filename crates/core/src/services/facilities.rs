use super::store::RecordStore;
use crate::config::CoreConfig;
use crate::records::{Facility, NewFacility};
use crate::repositories::FlatFileRepository;
use crate::CareResult;

/// Create, list, look up and delete facilities.
#[derive(Clone, Debug)]
pub struct FacilityService {
    store: RecordStore<Facility>,
}

impl FacilityService {
    pub fn open(cfg: &CoreConfig) -> CareResult<Self> {
        Ok(Self {
            store: RecordStore::open(FlatFileRepository::for_config(cfg))?,
        })
    }

    pub fn list(&self) -> Vec<Facility> {
        self.store.list()
    }

    pub fn get(&self, facility_id: &str) -> Option<Facility> {
        self.store.get(facility_id)
    }

    pub fn create(&self, new: NewFacility) -> CareResult<Facility> {
        let record = self.store.insert_with(|id| Facility::from_new(id, new))?;
        tracing::info!(facility_id = %record.facility_id, "created facility");
        Ok(record)
    }

    /// Removes the facility with exactly `facility_id`. `None` if there is no such facility.
    pub fn delete(&self, facility_id: &str) -> CareResult<Option<Facility>> {
        let removed = self.store.remove(facility_id)?;
        if removed.is_some() {
            tracing::info!(facility_id, "deleted facility");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::initialised_config;
    use tempfile::TempDir;

    fn surgery() -> NewFacility {
        NewFacility {
            facility_name: "Riverside Surgery".into(),
            facility_type: "GP Surgery".into(),
            address: "4 Mill Lane".into(),
            postcode: "LS2 7AB".into(),
            phone_number: "0113 496 0000".into(),
            email: "riverside@example.com".into(),
            opening_hours: "08:00-18:30".into(),
            manager_name: "Dana Kerr".into(),
            capacity: "40".into(),
            specialities_offered: "General Practice|Minor Surgery".into(),
        }
    }

    #[test]
    fn test_facility_ids_start_at_f001() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = FacilityService::open(&cfg).expect("open should succeed");

        let first = service.create(surgery()).expect("create should succeed");
        let second = service
            .create(NewFacility::default())
            .expect("create should succeed");

        assert_eq!(first.facility_id, "F001");
        assert_eq!(second.facility_id, "F002");
        assert_eq!(service.get("F001"), Some(first));
    }

    #[test]
    fn test_created_facility_survives_reload() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let created = FacilityService::open(&cfg)
            .expect("open should succeed")
            .create(surgery())
            .expect("create should succeed");

        let reopened = FacilityService::open(&cfg).expect("reopen should succeed");

        assert_eq!(reopened.list(), vec![created]);
    }

    #[test]
    fn test_delete_removes_only_the_named_facility() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = FacilityService::open(&cfg).expect("open should succeed");
        let first = service.create(surgery()).expect("create should succeed");
        let second = service.create(surgery()).expect("create should succeed");

        assert_eq!(service.delete("F001").expect("delete should succeed"), Some(first));
        assert_eq!(service.list(), vec![second.clone()]);

        let reopened = FacilityService::open(&cfg).expect("reopen should succeed");
        assert_eq!(reopened.list(), vec![second]);
    }

    #[test]
    fn test_delete_of_missing_facility_changes_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = FacilityService::open(&cfg).expect("open should succeed");
        let existing = service.create(surgery()).expect("create should succeed");

        assert_eq!(service.delete("F099").expect("delete should succeed"), None);
        assert_eq!(service.delete("f001").expect("delete should succeed"), None);
        assert_eq!(service.list(), vec![existing]);
    }
}

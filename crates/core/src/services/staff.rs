use super::store::RecordStore;
use crate::config::CoreConfig;
use crate::records::{NewStaff, Staff};
use crate::repositories::FlatFileRepository;
use crate::CareResult;

/// Create, list, look up and delete staff members.
#[derive(Clone, Debug)]
pub struct StaffService {
    store: RecordStore<Staff>,
}

impl StaffService {
    pub fn open(cfg: &CoreConfig) -> CareResult<Self> {
        Ok(Self {
            store: RecordStore::open(FlatFileRepository::for_config(cfg))?,
        })
    }

    pub fn list(&self) -> Vec<Staff> {
        self.store.list()
    }

    pub fn get(&self, staff_id: &str) -> Option<Staff> {
        self.store.get(staff_id)
    }

    pub fn create(&self, new: NewStaff) -> CareResult<Staff> {
        let record = self.store.insert_with(|id| Staff::from_new(id, new))?;
        tracing::info!(staff_id = %record.staff_id, "created staff member");
        Ok(record)
    }

    /// `None` if no staff member has `staff_id`.
    pub fn delete(&self, staff_id: &str) -> CareResult<Option<Staff>> {
        let removed = self.store.remove(staff_id)?;
        if removed.is_some() {
            tracing::info!(staff_id, "deleted staff member");
        }
        Ok(removed)
    }
}

use super::store::RecordStore;
use crate::config::CoreConfig;
use crate::records::{NewPatient, Patient};
use crate::repositories::FlatFileRepository;
use crate::CareResult;

/// Create, list, look up and delete patients.
#[derive(Clone, Debug)]
pub struct PatientService {
    store: RecordStore<Patient>,
}

impl PatientService {
    /// Loads every patient from the configured data directory.
    pub fn open(cfg: &CoreConfig) -> CareResult<Self> {
        Ok(Self {
            store: RecordStore::open(FlatFileRepository::for_config(cfg))?,
        })
    }

    pub fn list(&self) -> Vec<Patient> {
        self.store.list()
    }

    pub fn get(&self, patient_id: &str) -> Option<Patient> {
        self.store.get(patient_id)
    }

    pub fn create(&self, new: NewPatient) -> CareResult<Patient> {
        let record = self.store.insert_with(|id| Patient::from_new(id, new))?;
        tracing::info!(patient_id = %record.patient_id, "created patient");
        Ok(record)
    }

    /// Removes the patient with exactly `patient_id`. `None` if there is no such patient.
    pub fn delete(&self, patient_id: &str) -> CareResult<Option<Patient>> {
        let removed = self.store.remove(patient_id)?;
        if removed.is_some() {
            tracing::info!(patient_id, "deleted patient");
        }
        Ok(removed)
    }
}

use super::store::RecordStore;
use super::today;
use crate::config::CoreConfig;
use crate::records::{NewPrescription, Prescription};
use crate::repositories::FlatFileRepository;
use crate::CareResult;

/// Issues prescriptions.
#[derive(Clone, Debug)]
pub struct PrescriptionService {
    store: RecordStore<Prescription>,
}

impl PrescriptionService {
    pub fn open(cfg: &CoreConfig) -> CareResult<Self> {
        Ok(Self {
            store: RecordStore::open(FlatFileRepository::for_config(cfg))?,
        })
    }

    pub fn list(&self) -> Vec<Prescription> {
        self.store.list()
    }

    pub fn get(&self, prescription_id: &str) -> Option<Prescription> {
        self.store.get(prescription_id)
    }

    /// Issues a prescription dated today with status `Issued` and no collection date.
    pub fn create(&self, new: NewPrescription) -> CareResult<Prescription> {
        let today = today();
        let record = self
            .store
            .insert_with(|id| Prescription::issued(id, new, today))?;
        tracing::info!(
            prescription_id = %record.prescription_id,
            patient_id = %record.patient_id,
            "issued prescription"
        );
        Ok(record)
    }
}

use super::store::RecordStore;
use super::today;
use crate::config::CoreConfig;
use crate::records::{Appointment, AppointmentStatus, NewAppointment};
use crate::repositories::FlatFileRepository;
use crate::CareResult;

/// Books and cancels appointments.
#[derive(Clone, Debug)]
pub struct AppointmentService {
    store: RecordStore<Appointment>,
}

impl AppointmentService {
    pub fn open(cfg: &CoreConfig) -> CareResult<Self> {
        Ok(Self {
            store: RecordStore::open(FlatFileRepository::for_config(cfg))?,
        })
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.store.list()
    }

    pub fn get(&self, appointment_id: &str) -> Option<Appointment> {
        self.store.get(appointment_id)
    }

    /// Books a new appointment with status `Scheduled`, stamped with today's date.
    pub fn create(&self, new: NewAppointment) -> CareResult<Appointment> {
        let today = today();
        let record = self
            .store
            .insert_with(|id| Appointment::scheduled(id, new, today))?;
        tracing::info!(
            appointment_id = %record.appointment_id,
            patient_id = %record.patient_id,
            "booked appointment"
        );
        Ok(record)
    }

    /// Marks the appointment `Cancelled` and refreshes `last_modified`.
    ///
    /// Cancelling an already cancelled appointment succeeds again. Returns `None` if there is
    /// no appointment with `appointment_id`.
    pub fn cancel(&self, appointment_id: &str) -> CareResult<Option<Appointment>> {
        let today = today();
        let updated = self.store.update(appointment_id, |appt| {
            appt.status = AppointmentStatus::Cancelled;
            appt.last_modified = today;
        })?;
        if updated.is_some() {
            tracing::info!(appointment_id, "cancelled appointment");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::initialised_config;
    use tempfile::TempDir;

    fn checkup() -> NewAppointment {
        NewAppointment {
            patient_id: "P001".into(),
            clinician_id: "C001".into(),
            facility_id: "F001".into(),
            appointment_date: "2026-11-02".into(),
            appointment_time: "09:30".into(),
            duration_minutes: "15".into(),
            appointment_type: "Routine".into(),
            reason_for_visit: "Annual review".into(),
        }
    }

    #[test]
    fn test_create_schedules_with_today() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = AppointmentService::open(&cfg).expect("open should succeed");

        let appt = service.create(checkup()).expect("create should succeed");

        assert_eq!(appt.appointment_id, "A001");
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(appt.notes, None);
        assert_eq!(appt.created_date, today());
        assert_eq!(appt.last_modified, appt.created_date);
    }

    #[test]
    fn test_cancel_twice_succeeds_both_times() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = AppointmentService::open(&cfg).expect("open should succeed");
        service.create(checkup()).expect("create should succeed");

        let first = service.cancel("A001").expect("cancel should succeed");
        let second = service.cancel("A001").expect("cancel should succeed");

        assert_eq!(
            first.map(|a| a.status),
            Some(AppointmentStatus::Cancelled)
        );
        let second = second.expect("appointment should still exist");
        assert_eq!(second.status, AppointmentStatus::Cancelled);
        assert_eq!(second.last_modified, today());

        let reopened = AppointmentService::open(&cfg).expect("reopen should succeed");
        assert_eq!(
            reopened.get("A001").map(|a| a.status),
            Some(AppointmentStatus::Cancelled)
        );
    }

    #[test]
    fn test_cancel_missing_appointment_returns_none() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = AppointmentService::open(&cfg).expect("open should succeed");

        assert!(service.cancel("A404").expect("cancel should succeed").is_none());
        assert!(service.list().is_empty());
    }
}

use super::{AppointmentStatus, EntityKind, Record};
use crate::codec::FieldReader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A booked appointment between a patient and a clinician at a facility.
///
/// `status` and `last_modified` are the only fields changed after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub facility_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub duration_minutes: String,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub reason_for_visit: String,
    pub notes: Option<String>,
    pub created_date: String,
    pub last_modified: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_id: String,
    pub clinician_id: String,
    pub facility_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub duration_minutes: String,
    pub appointment_type: String,
    pub reason_for_visit: String,
}

impl Appointment {
    /// Builds a freshly scheduled appointment stamped with `today`.
    pub(crate) fn scheduled(appointment_id: String, new: NewAppointment, today: String) -> Self {
        Self {
            appointment_id,
            patient_id: new.patient_id,
            clinician_id: new.clinician_id,
            facility_id: new.facility_id,
            appointment_date: new.appointment_date,
            appointment_time: new.appointment_time,
            duration_minutes: new.duration_minutes,
            appointment_type: new.appointment_type,
            status: AppointmentStatus::Scheduled,
            reason_for_visit: new.reason_for_visit,
            notes: None,
            created_date: today.clone(),
            last_modified: today,
        }
    }
}

impl Record for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;

    const HEADER: &'static [&'static str] = &[
        "appointment_id",
        "patient_id",
        "clinician_id",
        "facility_id",
        "appointment_date",
        "appointment_time",
        "duration_minutes",
        "appointment_type",
        "status",
        "reason_for_visit",
        "notes",
        "created_date",
        "last_modified",
    ];

    fn id(&self) -> &str {
        &self.appointment_id
    }

    fn fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.appointment_id.as_str()),
            Some(self.patient_id.as_str()),
            Some(self.clinician_id.as_str()),
            Some(self.facility_id.as_str()),
            Some(self.appointment_date.as_str()),
            Some(self.appointment_time.as_str()),
            Some(self.duration_minutes.as_str()),
            Some(self.appointment_type.as_str()),
            Some(self.status.as_str()),
            Some(self.reason_for_visit.as_str()),
            self.notes.as_deref(),
            Some(self.created_date.as_str()),
            Some(self.last_modified.as_str()),
        ]
    }

    fn from_fields(r: &mut FieldReader<'_>) -> Self {
        Self {
            appointment_id: r.text(),
            patient_id: r.text(),
            clinician_id: r.text(),
            facility_id: r.text(),
            appointment_date: r.text(),
            appointment_time: r.text(),
            duration_minutes: r.text(),
            appointment_type: r.text(),
            status: AppointmentStatus::from(r.text()),
            reason_for_visit: r.text(),
            notes: r.optional(),
            created_date: r.text(),
            last_modified: r.text(),
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Patient: {} | Clinician: {} | Facility: {} | Date: {} {} | Duration: {} min | \
             Type: {} | Status: {} | Reason: {}",
            self.appointment_id,
            self.patient_id,
            self.clinician_id,
            self.facility_id,
            self.appointment_date,
            self.appointment_time,
            self.duration_minutes,
            self.appointment_type,
            self.status,
            self.reason_for_visit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_stamps_defaults() {
        let appt = Appointment::scheduled(
            "A001".into(),
            NewAppointment {
                patient_id: "P001".into(),
                ..Default::default()
            },
            "2026-10-16".into(),
        );

        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(appt.notes, None);
        assert_eq!(appt.created_date, "2026-10-16");
        assert_eq!(appt.last_modified, "2026-10-16");
    }

    #[test]
    fn test_absent_notes_serialize_as_empty_field() {
        let appt = Appointment::scheduled("A001".into(), NewAppointment::default(), "d".into());
        let line = appt.to_line();
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), Appointment::HEADER.len());
        assert_eq!(fields[8], "Scheduled");
        assert_eq!(fields[10], "");
    }
}

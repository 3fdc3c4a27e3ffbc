//! Record types, one per entity kind.
//!
//! Records are flat structs of text fields. Each implements [`Record`], which fixes the
//! field order used by both the file header and the line serializer.

mod appointment;
mod clinician;
mod facility;
mod patient;
mod prescription;
mod referral;
mod staff;
mod status;

pub use appointment::{Appointment, NewAppointment};
pub use clinician::{Clinician, NewClinician};
pub use facility::{Facility, NewFacility};
pub use patient::{NewPatient, Patient};
pub use prescription::{NewPrescription, Prescription};
pub use referral::{NewReferral, Referral};
pub use staff::{NewStaff, Staff};
pub use status::{AppointmentStatus, PrescriptionStatus, ReferralStatus};

use crate::codec::{join_fields, FieldReader};
use crate::constants::*;
use std::fmt;

/// The entity kinds Carebook keeps records for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Patient,
    Clinician,
    Facility,
    Appointment,
    Prescription,
    Referral,
    Staff,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Patient,
        EntityKind::Clinician,
        EntityKind::Facility,
        EntityKind::Appointment,
        EntityKind::Prescription,
        EntityKind::Referral,
        EntityKind::Staff,
    ];

    /// File name of this kind's record file within the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            EntityKind::Patient => PATIENTS_FILENAME,
            EntityKind::Clinician => CLINICIANS_FILENAME,
            EntityKind::Facility => FACILITIES_FILENAME,
            EntityKind::Appointment => APPOINTMENTS_FILENAME,
            EntityKind::Prescription => PRESCRIPTIONS_FILENAME,
            EntityKind::Referral => REFERRALS_FILENAME,
            EntityKind::Staff => STAFF_FILENAME,
        }
    }

    /// Identifier prefix for new records of this kind.
    pub fn id_prefix(self) -> &'static str {
        match self {
            EntityKind::Patient => PATIENT_ID_PREFIX,
            EntityKind::Clinician => CLINICIAN_ID_PREFIX,
            EntityKind::Facility => FACILITY_ID_PREFIX,
            EntityKind::Appointment => APPOINTMENT_ID_PREFIX,
            EntityKind::Prescription => PRESCRIPTION_ID_PREFIX,
            EntityKind::Referral => REFERRAL_ID_PREFIX,
            EntityKind::Staff => STAFF_ID_PREFIX,
        }
    }

    /// Header fields of this kind's record file, in serialization order.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            EntityKind::Patient => Patient::HEADER,
            EntityKind::Clinician => Clinician::HEADER,
            EntityKind::Facility => Facility::HEADER,
            EntityKind::Appointment => Appointment::HEADER,
            EntityKind::Prescription => Prescription::HEADER,
            EntityKind::Referral => Referral::HEADER,
            EntityKind::Staff => Staff::HEADER,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Patient => "patient",
            EntityKind::Clinician => "clinician",
            EntityKind::Facility => "facility",
            EntityKind::Appointment => "appointment",
            EntityKind::Prescription => "prescription",
            EntityKind::Referral => "referral",
            EntityKind::Staff => "staff",
        };
        f.write_str(label)
    }
}

/// A record that can be stored in a flat file.
///
/// `HEADER`, [`fields`](Record::fields) and [`from_fields`](Record::from_fields) must all use
/// the same field order.
pub trait Record: Clone + Send + 'static {
    const KIND: EntityKind;

    /// Field names, written as the file header.
    const HEADER: &'static [&'static str];

    /// The record's identifier.
    fn id(&self) -> &str;

    /// Field values in header order. `None` marks an absent value.
    fn fields(&self) -> Vec<Option<&str>>;

    /// Builds a record from a row holding at least `HEADER.len()` fields.
    fn from_fields(fields: &mut FieldReader<'_>) -> Self;

    /// The sanitized, delimited line for this record.
    fn to_line(&self) -> String {
        join_fields(self.fields())
    }

    fn header_line() -> String {
        Self::HEADER.join(&FIELD_DELIMITER.to_string())
    }
}

/// Maps empty input to `None` for optional fields, matching how they read back from disk.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

use super::{EntityKind, Record};
use crate::codec::FieldReader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A clinician (GP, consultant, nurse practitioner, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinician {
    pub clinician_id: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub speciality: String,
    /// General Medical Council registration number.
    pub gmc_number: String,
    pub phone_number: String,
    pub email: String,
    /// Facility the clinician works at.
    pub workplace_id: String,
    pub workplace_type: String,
    pub employment_status: String,
    pub start_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClinician {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub speciality: String,
    pub gmc_number: String,
    pub phone_number: String,
    pub email: String,
    pub workplace_id: String,
    pub workplace_type: String,
    pub employment_status: String,
    pub start_date: String,
}

impl Clinician {
    pub(crate) fn from_new(clinician_id: String, new: NewClinician) -> Self {
        Self {
            clinician_id,
            first_name: new.first_name,
            last_name: new.last_name,
            title: new.title,
            speciality: new.speciality,
            gmc_number: new.gmc_number,
            phone_number: new.phone_number,
            email: new.email,
            workplace_id: new.workplace_id,
            workplace_type: new.workplace_type,
            employment_status: new.employment_status,
            start_date: new.start_date,
        }
    }
}

impl Record for Clinician {
    const KIND: EntityKind = EntityKind::Clinician;

    const HEADER: &'static [&'static str] = &[
        "clinician_id",
        "first_name",
        "last_name",
        "title",
        "speciality",
        "gmc_number",
        "phone_number",
        "email",
        "workplace_id",
        "workplace_type",
        "employment_status",
        "start_date",
    ];

    fn id(&self) -> &str {
        &self.clinician_id
    }

    fn fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.clinician_id.as_str()),
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            Some(self.title.as_str()),
            Some(self.speciality.as_str()),
            Some(self.gmc_number.as_str()),
            Some(self.phone_number.as_str()),
            Some(self.email.as_str()),
            Some(self.workplace_id.as_str()),
            Some(self.workplace_type.as_str()),
            Some(self.employment_status.as_str()),
            Some(self.start_date.as_str()),
        ]
    }

    fn from_fields(r: &mut FieldReader<'_>) -> Self {
        Self {
            clinician_id: r.text(),
            first_name: r.text(),
            last_name: r.text(),
            title: r.text(),
            speciality: r.text(),
            gmc_number: r.text(),
            phone_number: r.text(),
            email: r.text(),
            workplace_id: r.text(),
            workplace_type: r.text(),
            employment_status: r.text(),
            start_date: r.text(),
        }
    }
}

impl fmt::Display for Clinician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} {} {} | Speciality: {} | GMC: {} | Phone: {} | Email: {} | \
             Workplace: {} ({}) | Status: {} | Started: {}",
            self.clinician_id,
            self.title,
            self.first_name,
            self.last_name,
            self.speciality,
            self.gmc_number,
            self.phone_number,
            self.email,
            self.workplace_id,
            self.workplace_type,
            self.employment_status,
            self.start_date
        )
    }
}

use super::{EntityKind, Record};
use crate::codec::FieldReader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    /// NHS number, kept as opaque text.
    pub nhs_number: String,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub postcode: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub registration_date: String,
    /// Identifier of the patient's GP surgery (a facility id).
    pub gp_surgery_id: String,
}

/// Caller-supplied fields for a new patient. The identifier is allocated by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub nhs_number: String,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub postcode: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub registration_date: String,
    pub gp_surgery_id: String,
}

impl Patient {
    pub(crate) fn from_new(patient_id: String, new: NewPatient) -> Self {
        Self {
            patient_id,
            first_name: new.first_name,
            last_name: new.last_name,
            date_of_birth: new.date_of_birth,
            nhs_number: new.nhs_number,
            gender: new.gender,
            phone_number: new.phone_number,
            email: new.email,
            address: new.address,
            postcode: new.postcode,
            emergency_contact_name: new.emergency_contact_name,
            emergency_contact_phone: new.emergency_contact_phone,
            registration_date: new.registration_date,
            gp_surgery_id: new.gp_surgery_id,
        }
    }
}

impl Record for Patient {
    const KIND: EntityKind = EntityKind::Patient;

    const HEADER: &'static [&'static str] = &[
        "patient_id",
        "first_name",
        "last_name",
        "date_of_birth",
        "nhs_number",
        "gender",
        "phone_number",
        "email",
        "address",
        "postcode",
        "emergency_contact_name",
        "emergency_contact_phone",
        "registration_date",
        "gp_surgery_id",
    ];

    fn id(&self) -> &str {
        &self.patient_id
    }

    fn fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.patient_id.as_str()),
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            Some(self.date_of_birth.as_str()),
            Some(self.nhs_number.as_str()),
            Some(self.gender.as_str()),
            Some(self.phone_number.as_str()),
            Some(self.email.as_str()),
            Some(self.address.as_str()),
            Some(self.postcode.as_str()),
            Some(self.emergency_contact_name.as_str()),
            Some(self.emergency_contact_phone.as_str()),
            Some(self.registration_date.as_str()),
            Some(self.gp_surgery_id.as_str()),
        ]
    }

    fn from_fields(r: &mut FieldReader<'_>) -> Self {
        Self {
            patient_id: r.text(),
            first_name: r.text(),
            last_name: r.text(),
            date_of_birth: r.text(),
            nhs_number: r.text(),
            gender: r.text(),
            phone_number: r.text(),
            email: r.text(),
            address: r.text(),
            postcode: r.text(),
            emergency_contact_name: r.text(),
            emergency_contact_phone: r.text(),
            registration_date: r.text(),
            gp_surgery_id: r.text(),
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} {} | DOB: {} | NHS No: {} | Gender: {} | Phone: {} | Email: {} | \
             Address: {} | Postcode: {} | Emergency Contact: {} ({}) | Registered: {} | \
             GP Surgery ID: {}",
            self.patient_id,
            self.first_name,
            self.last_name,
            self.date_of_birth,
            self.nhs_number,
            self.gender,
            self.phone_number,
            self.email,
            self.address,
            self.postcode,
            self.emergency_contact_name,
            self.emergency_contact_phone,
            self.registration_date,
            self.gp_surgery_id
        )
    }
}

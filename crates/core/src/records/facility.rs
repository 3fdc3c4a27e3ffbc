use super::{EntityKind, Record};
use crate::codec::FieldReader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A GP surgery, hospital or clinic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub facility_id: String,
    pub facility_name: String,
    pub facility_type: String,
    pub address: String,
    pub postcode: String,
    pub phone_number: String,
    pub email: String,
    pub opening_hours: String,
    pub manager_name: String,
    pub capacity: String,
    /// Free-text list, conventionally `|`-separated.
    pub specialities_offered: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFacility {
    pub facility_name: String,
    pub facility_type: String,
    pub address: String,
    pub postcode: String,
    pub phone_number: String,
    pub email: String,
    pub opening_hours: String,
    pub manager_name: String,
    pub capacity: String,
    pub specialities_offered: String,
}

impl Facility {
    pub(crate) fn from_new(facility_id: String, new: NewFacility) -> Self {
        Self {
            facility_id,
            facility_name: new.facility_name,
            facility_type: new.facility_type,
            address: new.address,
            postcode: new.postcode,
            phone_number: new.phone_number,
            email: new.email,
            opening_hours: new.opening_hours,
            manager_name: new.manager_name,
            capacity: new.capacity,
            specialities_offered: new.specialities_offered,
        }
    }
}

impl Record for Facility {
    const KIND: EntityKind = EntityKind::Facility;

    const HEADER: &'static [&'static str] = &[
        "facility_id",
        "facility_name",
        "facility_type",
        "address",
        "postcode",
        "phone_number",
        "email",
        "opening_hours",
        "manager_name",
        "capacity",
        "specialities_offered",
    ];

    fn id(&self) -> &str {
        &self.facility_id
    }

    fn fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.facility_id.as_str()),
            Some(self.facility_name.as_str()),
            Some(self.facility_type.as_str()),
            Some(self.address.as_str()),
            Some(self.postcode.as_str()),
            Some(self.phone_number.as_str()),
            Some(self.email.as_str()),
            Some(self.opening_hours.as_str()),
            Some(self.manager_name.as_str()),
            Some(self.capacity.as_str()),
            Some(self.specialities_offered.as_str()),
        ]
    }

    fn from_fields(r: &mut FieldReader<'_>) -> Self {
        Self {
            facility_id: r.text(),
            facility_name: r.text(),
            facility_type: r.text(),
            address: r.text(),
            postcode: r.text(),
            phone_number: r.text(),
            email: r.text(),
            opening_hours: r.text(),
            manager_name: r.text(),
            capacity: r.text(),
            specialities_offered: r.text(),
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Type: {} | Address: {} {} | Phone: {} | Email: {} | Hours: {} | \
             Manager: {} | Capacity: {} | Specialities: {}",
            self.facility_id,
            self.facility_name,
            self.facility_type,
            self.address,
            self.postcode,
            self.phone_number,
            self.email,
            self.opening_hours,
            self.manager_name,
            self.capacity,
            self.specialities_offered
        )
    }
}

use super::{EntityKind, Record};
use crate::codec::FieldReader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-clinical staff member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub facility_id: String,
    pub phone_number: String,
    pub email: String,
    pub employment_status: String,
    pub start_date: String,
    /// Name or staff id of the line manager.
    pub line_manager: String,
    pub access_level: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub facility_id: String,
    pub phone_number: String,
    pub email: String,
    pub employment_status: String,
    pub start_date: String,
    pub line_manager: String,
    pub access_level: String,
}

impl Staff {
    pub(crate) fn from_new(staff_id: String, new: NewStaff) -> Self {
        Self {
            staff_id,
            first_name: new.first_name,
            last_name: new.last_name,
            role: new.role,
            department: new.department,
            facility_id: new.facility_id,
            phone_number: new.phone_number,
            email: new.email,
            employment_status: new.employment_status,
            start_date: new.start_date,
            line_manager: new.line_manager,
            access_level: new.access_level,
        }
    }
}

impl Record for Staff {
    const KIND: EntityKind = EntityKind::Staff;

    const HEADER: &'static [&'static str] = &[
        "staff_id",
        "first_name",
        "last_name",
        "role",
        "department",
        "facility_id",
        "phone_number",
        "email",
        "employment_status",
        "start_date",
        "line_manager",
        "access_level",
    ];

    fn id(&self) -> &str {
        &self.staff_id
    }

    fn fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.staff_id.as_str()),
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            Some(self.role.as_str()),
            Some(self.department.as_str()),
            Some(self.facility_id.as_str()),
            Some(self.phone_number.as_str()),
            Some(self.email.as_str()),
            Some(self.employment_status.as_str()),
            Some(self.start_date.as_str()),
            Some(self.line_manager.as_str()),
            Some(self.access_level.as_str()),
        ]
    }

    fn from_fields(r: &mut FieldReader<'_>) -> Self {
        Self {
            staff_id: r.text(),
            first_name: r.text(),
            last_name: r.text(),
            role: r.text(),
            department: r.text(),
            facility_id: r.text(),
            phone_number: r.text(),
            email: r.text(),
            employment_status: r.text(),
            start_date: r.text(),
            line_manager: r.text(),
            access_level: r.text(),
        }
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} {} | Role: {} | Department: {} | Facility: {} | Phone: {} | \
             Email: {} | Status: {} | Started: {} | Manager: {} | Access: {}",
            self.staff_id,
            self.first_name,
            self.last_name,
            self.role,
            self.department,
            self.facility_id,
            self.phone_number,
            self.email,
            self.employment_status,
            self.start_date,
            self.line_manager,
            self.access_level
        )
    }
}

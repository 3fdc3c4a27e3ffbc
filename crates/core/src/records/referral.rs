use super::{non_empty, EntityKind, Record, ReferralStatus};
use crate::codec::FieldReader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A referral of a patient from one clinician or facility to another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    pub referral_id: String,
    pub patient_id: String,
    pub referring_clinician_id: String,
    pub referred_to_clinician_id: String,
    pub referring_facility_id: String,
    pub referred_to_facility_id: String,
    pub referral_date: String,
    pub urgency_level: String,
    pub referral_reason: String,
    /// Free text; commas and line breaks become spaces when written to disk.
    pub clinical_summary: String,
    /// Raw list of requested investigations, e.g. `ECG|Echo`.
    pub requested_investigations: Option<String>,
    pub status: ReferralStatus,
    pub appointment_id: Option<String>,
    pub notes: Option<String>,
    pub created_date: String,
    pub last_updated: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReferral {
    pub patient_id: String,
    pub referring_clinician_id: String,
    pub referred_to_clinician_id: String,
    pub referring_facility_id: String,
    pub referred_to_facility_id: String,
    pub urgency_level: String,
    pub referral_reason: String,
    pub clinical_summary: String,
    pub appointment_id: Option<String>,
}

impl Referral {
    pub(crate) fn sent(referral_id: String, new: NewReferral, today: String) -> Self {
        Self {
            referral_id,
            patient_id: new.patient_id,
            referring_clinician_id: new.referring_clinician_id,
            referred_to_clinician_id: new.referred_to_clinician_id,
            referring_facility_id: new.referring_facility_id,
            referred_to_facility_id: new.referred_to_facility_id,
            referral_date: today.clone(),
            urgency_level: new.urgency_level,
            referral_reason: new.referral_reason,
            clinical_summary: new.clinical_summary,
            requested_investigations: None,
            status: ReferralStatus::Sent,
            appointment_id: non_empty(new.appointment_id),
            notes: None,
            created_date: today.clone(),
            last_updated: today,
        }
    }
}

impl Record for Referral {
    const KIND: EntityKind = EntityKind::Referral;

    const HEADER: &'static [&'static str] = &[
        "referral_id",
        "patient_id",
        "referring_clinician_id",
        "referred_to_clinician_id",
        "referring_facility_id",
        "referred_to_facility_id",
        "referral_date",
        "urgency_level",
        "referral_reason",
        "clinical_summary",
        "requested_investigations",
        "status",
        "appointment_id",
        "notes",
        "created_date",
        "last_updated",
    ];

    fn id(&self) -> &str {
        &self.referral_id
    }

    fn fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.referral_id.as_str()),
            Some(self.patient_id.as_str()),
            Some(self.referring_clinician_id.as_str()),
            Some(self.referred_to_clinician_id.as_str()),
            Some(self.referring_facility_id.as_str()),
            Some(self.referred_to_facility_id.as_str()),
            Some(self.referral_date.as_str()),
            Some(self.urgency_level.as_str()),
            Some(self.referral_reason.as_str()),
            Some(self.clinical_summary.as_str()),
            self.requested_investigations.as_deref(),
            Some(self.status.as_str()),
            self.appointment_id.as_deref(),
            self.notes.as_deref(),
            Some(self.created_date.as_str()),
            Some(self.last_updated.as_str()),
        ]
    }

    fn from_fields(r: &mut FieldReader<'_>) -> Self {
        Self {
            referral_id: r.text(),
            patient_id: r.text(),
            referring_clinician_id: r.text(),
            referred_to_clinician_id: r.text(),
            referring_facility_id: r.text(),
            referred_to_facility_id: r.text(),
            referral_date: r.text(),
            urgency_level: r.text(),
            referral_reason: r.text(),
            clinical_summary: r.text(),
            requested_investigations: r.optional(),
            status: ReferralStatus::from(r.text()),
            appointment_id: r.optional(),
            notes: r.optional(),
            created_date: r.text(),
            last_updated: r.text(),
        }
    }
}

impl fmt::Display for Referral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Patient: {} | From Clinician: {} | To Clinician: {} | From Facility: {} | \
             To Facility: {} | Date: {} | Urgency: {} | Reason: {} | Status: {}",
            self.referral_id,
            self.patient_id,
            self.referring_clinician_id,
            self.referred_to_clinician_id,
            self.referring_facility_id,
            self.referred_to_facility_id,
            self.referral_date,
            self.urgency_level,
            self.referral_reason,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_treats_blank_appointment_as_absent() {
        let referral = Referral::sent(
            "R001".into(),
            NewReferral {
                appointment_id: Some(String::new()),
                ..Default::default()
            },
            "2026-10-16".into(),
        );

        assert_eq!(referral.appointment_id, None);
        assert_eq!(referral.status, ReferralStatus::Sent);
        assert_eq!(referral.referral_date, "2026-10-16");
    }

    #[test]
    fn test_clinical_summary_line_breaks_are_flattened() {
        let referral = Referral::sent(
            "R001".into(),
            NewReferral {
                clinical_summary: "Chest pain,\nshortness of breath".into(),
                ..Default::default()
            },
            "2026-10-16".into(),
        );

        let line = referral.to_line();
        assert!(!line.contains('\n'));
        assert_eq!(line.split(',').count(), Referral::HEADER.len());
        assert!(line.contains("Chest pain  shortness of breath"));
    }
}

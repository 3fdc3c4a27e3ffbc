use super::{EntityKind, PrescriptionStatus, Record};
use crate::codec::FieldReader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A prescription issued to a patient.
///
/// `collection_date` stays absent until the medication is collected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub prescription_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub appointment_id: String,
    pub prescription_date: String,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: String,
    pub quantity: String,
    pub instructions: String,
    pub pharmacy_name: String,
    pub status: PrescriptionStatus,
    pub issue_date: String,
    pub collection_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrescription {
    pub patient_id: String,
    pub clinician_id: String,
    pub appointment_id: String,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: String,
    pub quantity: String,
    pub instructions: String,
    pub pharmacy_name: String,
}

impl Prescription {
    pub(crate) fn issued(prescription_id: String, new: NewPrescription, today: String) -> Self {
        Self {
            prescription_id,
            patient_id: new.patient_id,
            clinician_id: new.clinician_id,
            appointment_id: new.appointment_id,
            prescription_date: today.clone(),
            medication_name: new.medication_name,
            dosage: new.dosage,
            frequency: new.frequency,
            duration_days: new.duration_days,
            quantity: new.quantity,
            instructions: new.instructions,
            pharmacy_name: new.pharmacy_name,
            status: PrescriptionStatus::Issued,
            issue_date: today,
            collection_date: None,
        }
    }
}

impl Record for Prescription {
    const KIND: EntityKind = EntityKind::Prescription;

    const HEADER: &'static [&'static str] = &[
        "prescription_id",
        "patient_id",
        "clinician_id",
        "appointment_id",
        "prescription_date",
        "medication_name",
        "dosage",
        "frequency",
        "duration_days",
        "quantity",
        "instructions",
        "pharmacy_name",
        "status",
        "issue_date",
        "collection_date",
    ];

    fn id(&self) -> &str {
        &self.prescription_id
    }

    fn fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.prescription_id.as_str()),
            Some(self.patient_id.as_str()),
            Some(self.clinician_id.as_str()),
            Some(self.appointment_id.as_str()),
            Some(self.prescription_date.as_str()),
            Some(self.medication_name.as_str()),
            Some(self.dosage.as_str()),
            Some(self.frequency.as_str()),
            Some(self.duration_days.as_str()),
            Some(self.quantity.as_str()),
            Some(self.instructions.as_str()),
            Some(self.pharmacy_name.as_str()),
            Some(self.status.as_str()),
            Some(self.issue_date.as_str()),
            self.collection_date.as_deref(),
        ]
    }

    fn from_fields(r: &mut FieldReader<'_>) -> Self {
        Self {
            prescription_id: r.text(),
            patient_id: r.text(),
            clinician_id: r.text(),
            appointment_id: r.text(),
            prescription_date: r.text(),
            medication_name: r.text(),
            dosage: r.text(),
            frequency: r.text(),
            duration_days: r.text(),
            quantity: r.text(),
            instructions: r.text(),
            pharmacy_name: r.text(),
            status: PrescriptionStatus::from(r.text()),
            issue_date: r.text(),
            collection_date: r.optional(),
        }
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Patient: {} | Clinician: {} | Medication: {} {} | Frequency: {} | \
             Duration: {} days | Quantity: {} | Pharmacy: {} | Status: {} | Issued: {}",
            self.prescription_id,
            self.patient_id,
            self.clinician_id,
            self.medication_name,
            self.dosage,
            self.frequency,
            self.duration_days,
            self.quantity,
            self.pharmacy_name,
            self.status,
            self.issue_date
        )
    }
}

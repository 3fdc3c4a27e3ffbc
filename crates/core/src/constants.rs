//! Constants used throughout the Carebook core crate.
//!
//! This module contains the file name and identifier prefix constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Default directory for record storage when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Field delimiter used by every record file.
pub const FIELD_DELIMITER: char = ',';

/// Date format used for creation and modification stamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const PATIENTS_FILENAME: &str = "patients.csv";
pub const CLINICIANS_FILENAME: &str = "clinicians.csv";
pub const FACILITIES_FILENAME: &str = "facilities.csv";
pub const APPOINTMENTS_FILENAME: &str = "appointments.csv";
pub const PRESCRIPTIONS_FILENAME: &str = "prescriptions.csv";
pub const REFERRALS_FILENAME: &str = "referrals.csv";
pub const STAFF_FILENAME: &str = "staff.csv";

pub const PATIENT_ID_PREFIX: &str = "P";
pub const CLINICIAN_ID_PREFIX: &str = "C";
pub const FACILITY_ID_PREFIX: &str = "F";
pub const APPOINTMENT_ID_PREFIX: &str = "A";
pub const PRESCRIPTION_ID_PREFIX: &str = "RX";
pub const REFERRAL_ID_PREFIX: &str = "R";
pub const STAFF_ID_PREFIX: &str = "ST";

/// Filename prefix of the patient-facing referral notice.
pub const REFERRAL_EMAIL_PREFIX: &str = "referral_email_";

/// Filename prefix of the EHR audit note written for each referral.
pub const REFERRAL_EHR_PREFIX: &str = "referral_ehr_";

/// Extension shared by both referral notification artifacts.
pub const NOTIFICATION_EXTENSION: &str = "txt";

//! Command-line definitions.
//!
//! Each entity kind gets its own subcommand group. `add` flags map one-to-one onto the
//! record's input fields; anything not given is stored as an empty field.

use carebook_core::records::{
    NewAppointment, NewClinician, NewFacility, NewPatient, NewPrescription, NewReferral, NewStaff,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carebook")]
#[command(about = "Carebook healthcare record keeping CLI")]
pub struct Cli {
    /// Directory holding the record files [env: CAREBOOK_DATA_DIR, default: data]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory for referral notifications [env: CAREBOOK_NOTIFICATIONS_DIR, default: data dir]
    #[arg(long, global = true)]
    pub notifications_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create any missing record files with just a header line
    Init,
    #[command(flatten)]
    Records(RecordCommands),
}

#[derive(Subcommand)]
pub enum RecordCommands {
    /// Manage patients
    Patients {
        #[command(subcommand)]
        action: PatientAction,
    },
    /// Manage clinicians
    Clinicians {
        #[command(subcommand)]
        action: ClinicianAction,
    },
    /// Manage facilities
    Facilities {
        #[command(subcommand)]
        action: FacilityAction,
    },
    /// Manage appointments
    Appointments {
        #[command(subcommand)]
        action: AppointmentAction,
    },
    /// Manage prescriptions
    Prescriptions {
        #[command(subcommand)]
        action: PrescriptionAction,
    },
    /// Manage referrals
    Referrals {
        #[command(subcommand)]
        action: ReferralAction,
    },
    /// Manage non-clinical staff
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum PatientAction {
    /// List all patients
    List(ListArgs),
    /// Register a patient
    Add(PatientArgs),
    /// Delete a patient by ID
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ClinicianAction {
    /// List all clinicians
    List(ListArgs),
    /// Add a clinician
    Add(ClinicianArgs),
    /// Delete a clinician by ID
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum FacilityAction {
    /// List all facilities
    List(ListArgs),
    /// Add a facility
    Add(FacilityArgs),
    /// Delete a facility by ID
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum StaffAction {
    /// List all staff
    List(ListArgs),
    /// Add a staff member
    Add(StaffArgs),
    /// Delete a staff member by ID
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum AppointmentAction {
    /// List all appointments
    List(ListArgs),
    /// Book an appointment
    Add(AppointmentArgs),
    /// Cancel an appointment by ID
    Cancel { id: String },
}

#[derive(Subcommand)]
pub enum PrescriptionAction {
    /// List all prescriptions
    List(ListArgs),
    /// Issue a prescription
    Add(PrescriptionArgs),
}

#[derive(Subcommand)]
pub enum ReferralAction {
    /// List all referrals
    List(ListArgs),
    /// Create a referral and write its notifications
    Add(ReferralArgs),
    /// Delete a referral by ID
    Delete { id: String },
}

#[derive(Args)]
pub struct PatientArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long, default_value_t)]
    pub date_of_birth: String,
    #[arg(long, default_value_t)]
    pub nhs_number: String,
    #[arg(long, default_value_t)]
    pub gender: String,
    #[arg(long, default_value_t)]
    pub phone_number: String,
    #[arg(long, default_value_t)]
    pub email: String,
    #[arg(long, default_value_t)]
    pub address: String,
    #[arg(long, default_value_t)]
    pub postcode: String,
    #[arg(long, default_value_t)]
    pub emergency_contact_name: String,
    #[arg(long, default_value_t)]
    pub emergency_contact_phone: String,
    #[arg(long, default_value_t)]
    pub registration_date: String,
    /// Facility ID of the patient's GP surgery
    #[arg(long, default_value_t)]
    pub gp_surgery_id: String,
}

impl From<PatientArgs> for NewPatient {
    fn from(a: PatientArgs) -> Self {
        NewPatient {
            first_name: a.first_name,
            last_name: a.last_name,
            date_of_birth: a.date_of_birth,
            nhs_number: a.nhs_number,
            gender: a.gender,
            phone_number: a.phone_number,
            email: a.email,
            address: a.address,
            postcode: a.postcode,
            emergency_contact_name: a.emergency_contact_name,
            emergency_contact_phone: a.emergency_contact_phone,
            registration_date: a.registration_date,
            gp_surgery_id: a.gp_surgery_id,
        }
    }
}

#[derive(Args)]
pub struct ClinicianArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long, default_value_t)]
    pub title: String,
    #[arg(long, default_value_t)]
    pub speciality: String,
    #[arg(long, default_value_t)]
    pub gmc_number: String,
    #[arg(long, default_value_t)]
    pub phone_number: String,
    #[arg(long, default_value_t)]
    pub email: String,
    #[arg(long, default_value_t)]
    pub workplace_id: String,
    #[arg(long, default_value_t)]
    pub workplace_type: String,
    #[arg(long, default_value_t)]
    pub employment_status: String,
    #[arg(long, default_value_t)]
    pub start_date: String,
}

impl From<ClinicianArgs> for NewClinician {
    fn from(a: ClinicianArgs) -> Self {
        NewClinician {
            first_name: a.first_name,
            last_name: a.last_name,
            title: a.title,
            speciality: a.speciality,
            gmc_number: a.gmc_number,
            phone_number: a.phone_number,
            email: a.email,
            workplace_id: a.workplace_id,
            workplace_type: a.workplace_type,
            employment_status: a.employment_status,
            start_date: a.start_date,
        }
    }
}

#[derive(Args)]
pub struct FacilityArgs {
    #[arg(long)]
    pub facility_name: String,
    #[arg(long, default_value_t)]
    pub facility_type: String,
    #[arg(long, default_value_t)]
    pub address: String,
    #[arg(long, default_value_t)]
    pub postcode: String,
    #[arg(long, default_value_t)]
    pub phone_number: String,
    #[arg(long, default_value_t)]
    pub email: String,
    #[arg(long, default_value_t)]
    pub opening_hours: String,
    #[arg(long, default_value_t)]
    pub manager_name: String,
    #[arg(long, default_value_t)]
    pub capacity: String,
    /// Raw list of specialities, e.g. "Cardiology|Dermatology"
    #[arg(long, default_value_t)]
    pub specialities_offered: String,
}

impl From<FacilityArgs> for NewFacility {
    fn from(a: FacilityArgs) -> Self {
        NewFacility {
            facility_name: a.facility_name,
            facility_type: a.facility_type,
            address: a.address,
            postcode: a.postcode,
            phone_number: a.phone_number,
            email: a.email,
            opening_hours: a.opening_hours,
            manager_name: a.manager_name,
            capacity: a.capacity,
            specialities_offered: a.specialities_offered,
        }
    }
}

#[derive(Args)]
pub struct StaffArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long, default_value_t)]
    pub role: String,
    #[arg(long, default_value_t)]
    pub department: String,
    #[arg(long, default_value_t)]
    pub facility_id: String,
    #[arg(long, default_value_t)]
    pub phone_number: String,
    #[arg(long, default_value_t)]
    pub email: String,
    #[arg(long, default_value_t)]
    pub employment_status: String,
    #[arg(long, default_value_t)]
    pub start_date: String,
    #[arg(long, default_value_t)]
    pub line_manager: String,
    #[arg(long, default_value_t)]
    pub access_level: String,
}

impl From<StaffArgs> for NewStaff {
    fn from(a: StaffArgs) -> Self {
        NewStaff {
            first_name: a.first_name,
            last_name: a.last_name,
            role: a.role,
            department: a.department,
            facility_id: a.facility_id,
            phone_number: a.phone_number,
            email: a.email,
            employment_status: a.employment_status,
            start_date: a.start_date,
            line_manager: a.line_manager,
            access_level: a.access_level,
        }
    }
}

#[derive(Args)]
pub struct AppointmentArgs {
    #[arg(long)]
    pub patient_id: String,
    #[arg(long)]
    pub clinician_id: String,
    #[arg(long)]
    pub facility_id: String,
    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Appointment time (HH:MM)
    #[arg(long)]
    pub time: String,
    #[arg(long, default_value_t)]
    pub duration_minutes: String,
    #[arg(long = "type", default_value_t)]
    pub appointment_type: String,
    #[arg(long = "reason", default_value_t)]
    pub reason_for_visit: String,
}

impl From<AppointmentArgs> for NewAppointment {
    fn from(a: AppointmentArgs) -> Self {
        NewAppointment {
            patient_id: a.patient_id,
            clinician_id: a.clinician_id,
            facility_id: a.facility_id,
            appointment_date: a.date,
            appointment_time: a.time,
            duration_minutes: a.duration_minutes,
            appointment_type: a.appointment_type,
            reason_for_visit: a.reason_for_visit,
        }
    }
}

#[derive(Args)]
pub struct PrescriptionArgs {
    #[arg(long)]
    pub patient_id: String,
    #[arg(long)]
    pub clinician_id: String,
    #[arg(long, default_value_t)]
    pub appointment_id: String,
    #[arg(long = "medication")]
    pub medication_name: String,
    #[arg(long, default_value_t)]
    pub dosage: String,
    #[arg(long, default_value_t)]
    pub frequency: String,
    #[arg(long, default_value_t)]
    pub duration_days: String,
    #[arg(long, default_value_t)]
    pub quantity: String,
    #[arg(long, default_value_t)]
    pub instructions: String,
    #[arg(long = "pharmacy", default_value_t)]
    pub pharmacy_name: String,
}

impl From<PrescriptionArgs> for NewPrescription {
    fn from(a: PrescriptionArgs) -> Self {
        NewPrescription {
            patient_id: a.patient_id,
            clinician_id: a.clinician_id,
            appointment_id: a.appointment_id,
            medication_name: a.medication_name,
            dosage: a.dosage,
            frequency: a.frequency,
            duration_days: a.duration_days,
            quantity: a.quantity,
            instructions: a.instructions,
            pharmacy_name: a.pharmacy_name,
        }
    }
}

#[derive(Args)]
pub struct ReferralArgs {
    #[arg(long)]
    pub patient_id: String,
    #[arg(long = "from-clinician")]
    pub referring_clinician_id: String,
    #[arg(long = "to-clinician", default_value_t)]
    pub referred_to_clinician_id: String,
    #[arg(long = "from-facility", default_value_t)]
    pub referring_facility_id: String,
    #[arg(long = "to-facility", default_value_t)]
    pub referred_to_facility_id: String,
    /// e.g. Routine, Urgent
    #[arg(long = "urgency", default_value_t)]
    pub urgency_level: String,
    #[arg(long = "reason", default_value_t)]
    pub referral_reason: String,
    #[arg(long = "summary", default_value_t)]
    pub clinical_summary: String,
    /// Appointment this referral came out of
    #[arg(long)]
    pub appointment_id: Option<String>,
}

impl From<ReferralArgs> for NewReferral {
    fn from(a: ReferralArgs) -> Self {
        NewReferral {
            patient_id: a.patient_id,
            referring_clinician_id: a.referring_clinician_id,
            referred_to_clinician_id: a.referred_to_clinician_id,
            referring_facility_id: a.referring_facility_id,
            referred_to_facility_id: a.referred_to_facility_id,
            urgency_level: a.urgency_level,
            referral_reason: a.referral_reason,
            clinical_summary: a.clinical_summary,
            appointment_id: a.appointment_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_patient_add() {
        let cli = Cli::try_parse_from([
            "carebook",
            "patients",
            "add",
            "--first-name",
            "Ann",
            "--last-name",
            "Lee",
        ])
        .expect("should parse");

        let Some(Commands::Records(RecordCommands::Patients {
            action: PatientAction::Add(args),
        })) = cli.command
        else {
            panic!("expected patients add");
        };
        let new = NewPatient::from(args);
        assert_eq!(new.first_name, "Ann");
        assert_eq!(new.last_name, "Lee");
        assert_eq!(new.nhs_number, "");
    }

    #[test]
    fn test_global_dirs_after_subcommand() {
        let cli = Cli::try_parse_from([
            "carebook",
            "appointments",
            "cancel",
            "A001",
            "--data-dir",
            "/tmp/care",
        ])
        .expect("should parse");

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/care")));
        assert!(matches!(
            cli.command,
            Some(Commands::Records(RecordCommands::Appointments {
                action: AppointmentAction::Cancel { ref id }
            })) if id == "A001"
        ));
    }

    #[test]
    fn test_prescriptions_have_no_delete() {
        assert!(Cli::try_parse_from(["carebook", "prescriptions", "delete", "RX001"]).is_err());
    }
}

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use carebook_core::config::{data_dir_from_env_value, dir_from_env_value};
use carebook_core::repositories::initialise_all;
use carebook_core::{CareServices, CoreConfig, SharedReferrals};

mod cli;

use cli::{
    AppointmentAction, ClinicianAction, Cli, Commands, FacilityAction, PatientAction,
    PrescriptionAction, RecordCommands, ReferralAction, StaffAction,
};

const DATA_DIR_ENV: &str = "CAREBOOK_DATA_DIR";
const NOTIFICATIONS_DIR_ENV: &str = "CAREBOOK_NOTIFICATIONS_DIR";

/// Main entry point for the Carebook CLI
///
/// Resolves configuration once, opens every record service, then runs a single command.
///
/// # Environment Variables
/// - `CAREBOOK_DATA_DIR`: Directory holding the record files (default: "data")
/// - `CAREBOOK_NOTIFICATIONS_DIR`: Directory for referral notifications (default: the data dir)
/// - `RUST_LOG`: Log filter (default: "carebook=info")
///
/// Both directories can also be set with `--data-dir` and `--notifications-dir`, which take
/// precedence over the environment.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carebook=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = Arc::new(resolve_config(
        cli.data_dir,
        cli.notifications_dir,
        std::env::var(DATA_DIR_ENV).ok(),
        std::env::var(NOTIFICATIONS_DIR_ENV).ok(),
    )?);

    let Some(command) = cli.command else {
        println!("Use 'carebook --help' for commands");
        return Ok(());
    };

    let command = match command {
        Commands::Init => return init(&cfg),
        Commands::Records(command) => command,
    };

    let referrals = SharedReferrals::new();
    let services = CareServices::open(Arc::clone(&cfg), &referrals).with_context(|| {
        format!(
            "failed to load records from {} (run 'carebook init' to create missing files)",
            cfg.data_dir().display()
        )
    })?;

    run(&services, command)
}

fn init(cfg: &CoreConfig) -> anyhow::Result<()> {
    let created = initialise_all(cfg).context("failed to initialise data directory")?;
    if created.is_empty() {
        println!("All record files already exist in {}", cfg.data_dir().display());
    } else {
        for kind in created {
            println!("Created {}", cfg.record_path(kind).display());
        }
    }
    Ok(())
}

/// Flag values win over environment values; the notifications directory falls back to the
/// data directory.
fn resolve_config(
    data_dir_flag: Option<PathBuf>,
    notifications_dir_flag: Option<PathBuf>,
    data_dir_env: Option<String>,
    notifications_dir_env: Option<String>,
) -> anyhow::Result<CoreConfig> {
    let data_dir = data_dir_flag.unwrap_or_else(|| data_dir_from_env_value(data_dir_env));
    let notifications_dir = notifications_dir_flag
        .unwrap_or_else(|| dir_from_env_value(notifications_dir_env, &data_dir));

    tracing::debug!(
        data_dir = %data_dir.display(),
        notifications_dir = %notifications_dir.display(),
        "resolved configuration"
    );
    Ok(CoreConfig::new(data_dir, notifications_dir)?)
}

fn run(services: &CareServices, command: RecordCommands) -> anyhow::Result<()> {
    match command {
        RecordCommands::Patients { action } => {
            let patients = services.patients();
            match action {
                PatientAction::List(args) => print_all(&patients.list(), args.json, "patients")?,
                PatientAction::Add(args) => print_created(&patients.create(args.into())?),
                PatientAction::Delete { id } => print_deleted("Patient", &id, patients.delete(&id)?),
            }
        }
        RecordCommands::Clinicians { action } => {
            let clinicians = services.clinicians();
            match action {
                ClinicianAction::List(args) => {
                    print_all(&clinicians.list(), args.json, "clinicians")?
                }
                ClinicianAction::Add(args) => print_created(&clinicians.create(args.into())?),
                ClinicianAction::Delete { id } => {
                    print_deleted("Clinician", &id, clinicians.delete(&id)?)
                }
            }
        }
        RecordCommands::Facilities { action } => {
            let facilities = services.facilities();
            match action {
                FacilityAction::List(args) => {
                    print_all(&facilities.list(), args.json, "facilities")?
                }
                FacilityAction::Add(args) => print_created(&facilities.create(args.into())?),
                FacilityAction::Delete { id } => {
                    print_deleted("Facility", &id, facilities.delete(&id)?)
                }
            }
        }
        RecordCommands::Staff { action } => {
            let staff = services.staff();
            match action {
                StaffAction::List(args) => print_all(&staff.list(), args.json, "staff")?,
                StaffAction::Add(args) => print_created(&staff.create(args.into())?),
                StaffAction::Delete { id } => print_deleted("Staff member", &id, staff.delete(&id)?),
            }
        }
        RecordCommands::Appointments { action } => {
            let appointments = services.appointments();
            match action {
                AppointmentAction::List(args) => {
                    print_all(&appointments.list(), args.json, "appointments")?
                }
                AppointmentAction::Add(args) => print_created(&appointments.create(args.into())?),
                AppointmentAction::Cancel { id } => match appointments.cancel(&id)? {
                    Some(appt) => println!("Cancelled: {appt}"),
                    None => println!("No appointment found with ID {id}"),
                },
            }
        }
        RecordCommands::Prescriptions { action } => {
            let prescriptions = services.prescriptions();
            match action {
                PrescriptionAction::List(args) => {
                    print_all(&prescriptions.list(), args.json, "prescriptions")?
                }
                PrescriptionAction::Add(args) => {
                    print_created(&prescriptions.create(args.into())?)
                }
            }
        }
        RecordCommands::Referrals { action } => {
            let referrals = services.referrals();
            match action {
                ReferralAction::List(args) => print_all(&referrals.list(), args.json, "referrals")?,
                ReferralAction::Add(args) => print_created(&referrals.create(args.into())?),
                ReferralAction::Delete { id } => {
                    print_deleted("Referral", &id, referrals.delete(&id)?)
                }
            }
        }
    }

    Ok(())
}

fn print_all<R: Serialize + Display>(records: &[R], json: bool, label: &str) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else if records.is_empty() {
        println!("No {label} found.");
    } else {
        for record in records {
            println!("{record}");
        }
    }
    Ok(())
}

fn print_created<R: Display>(record: &R) {
    println!("Created: {record}");
}

fn print_deleted<R: Display>(label: &str, id: &str, removed: Option<R>) {
    match removed {
        Some(record) => println!("Deleted: {record}"),
        None => println!("{label} not found: {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_resolve_config_defaults() {
        let cfg = resolve_config(None, None, None, None).expect("config should resolve");
        assert_eq!(cfg.data_dir(), Path::new("data"));
        assert_eq!(cfg.notifications_dir(), Path::new("data"));
    }

    #[test]
    fn test_resolve_config_env_values() {
        let cfg = resolve_config(None, None, Some("/srv/care".into()), None)
            .expect("config should resolve");
        assert_eq!(cfg.data_dir(), Path::new("/srv/care"));
        assert_eq!(cfg.notifications_dir(), Path::new("/srv/care"));

        let cfg = resolve_config(
            None,
            None,
            Some("/srv/care".into()),
            Some("/srv/outbox".into()),
        )
        .expect("config should resolve");
        assert_eq!(cfg.notifications_dir(), Path::new("/srv/outbox"));
    }

    #[test]
    fn test_resolve_config_flags_win_over_env() {
        let cfg = resolve_config(
            Some(PathBuf::from("local")),
            Some(PathBuf::from("outbox")),
            Some("/srv/care".into()),
            Some("/srv/outbox".into()),
        )
        .expect("config should resolve");
        assert_eq!(cfg.data_dir(), Path::new("local"));
        assert_eq!(cfg.notifications_dir(), Path::new("outbox"));
    }

    #[test]
    fn test_init_then_add_and_list() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let cfg = Arc::new(
            resolve_config(Some(temp_dir.path().to_path_buf()), None, None, None)
                .expect("config should resolve"),
        );
        initialise_all(&cfg).expect("initialise should succeed");
        let services = CareServices::open(Arc::clone(&cfg), &SharedReferrals::new())
            .expect("open should succeed");

        let cli = Cli::parse_from([
            "carebook",
            "patients",
            "add",
            "--first-name",
            "Ann",
            "--last-name",
            "Lee",
        ]);
        let Some(Commands::Records(command)) = cli.command else {
            panic!("expected a record command");
        };
        run(&services, command).expect("run should succeed");

        assert_eq!(services.patients().list()[0].patient_id, "P001");
    }
}

//! Entity services.
//!
//! Each service owns the in-memory collection for one entity kind and is the only way to
//! change it. Services are cheap to clone; every clone shares the same collection and lock.
//!
//! A mutating operation holds its kind's lock for the whole read-modify-write: scanning ids,
//! changing the collection and overwriting the file. If the overwrite fails the change is
//! undone in memory and the error is returned. There is no coordination across kinds.
//!
//! Operations that target an existing record by id return `Ok(None)` when no record matches,
//! in which case nothing is written.

mod appointments;
mod clinicians;
mod facilities;
mod patients;
mod prescriptions;
mod referrals;
mod staff;
mod store;

pub use appointments::AppointmentService;
pub use clinicians::ClinicianService;
pub use facilities::FacilityService;
pub use patients::PatientService;
pub use prescriptions::PrescriptionService;
pub use referrals::{ReferralService, SharedReferrals};
pub use staff::StaffService;

use crate::config::CoreConfig;
use crate::constants::DATE_FORMAT;
use crate::CareResult;
use chrono::Local;
use std::sync::Arc;

/// Today's local date, formatted for record fields.
pub(crate) fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Every service, opened once from one configuration.
#[derive(Clone, Debug)]
pub struct CareServices {
    cfg: Arc<CoreConfig>,
    patients: PatientService,
    clinicians: ClinicianService,
    facilities: FacilityService,
    staff: StaffService,
    appointments: AppointmentService,
    prescriptions: PrescriptionService,
    referrals: ReferralService,
}

impl CareServices {
    /// Opens every service, loading each record file once.
    ///
    /// The referral handle comes from `referrals`, so every bundle opened from the same slot
    /// shares one referral collection.
    ///
    /// # Errors
    ///
    /// Fails if any record file is missing, unreadable or malformed.
    pub fn open(cfg: Arc<CoreConfig>, referrals: &SharedReferrals) -> CareResult<Self> {
        Ok(Self {
            patients: PatientService::open(&cfg)?,
            clinicians: ClinicianService::open(&cfg)?,
            facilities: FacilityService::open(&cfg)?,
            staff: StaffService::open(&cfg)?,
            appointments: AppointmentService::open(&cfg)?,
            prescriptions: PrescriptionService::open(&cfg)?,
            referrals: referrals.get_or_open(&cfg)?,
            cfg,
        })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn patients(&self) -> &PatientService {
        &self.patients
    }

    pub fn clinicians(&self) -> &ClinicianService {
        &self.clinicians
    }

    pub fn facilities(&self) -> &FacilityService {
        &self.facilities
    }

    pub fn staff(&self) -> &StaffService {
        &self.staff
    }

    pub fn appointments(&self) -> &AppointmentService {
        &self.appointments
    }

    pub fn prescriptions(&self) -> &PrescriptionService {
        &self.prescriptions
    }

    pub fn referrals(&self) -> &ReferralService {
        &self.referrals
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::CoreConfig;
    use crate::repositories::initialise_all;
    use std::path::Path;

    /// Config rooted at `dir` with every record file created header-only.
    pub(crate) fn initialised_config(dir: &Path) -> CoreConfig {
        let cfg = CoreConfig::with_data_dir(dir.to_path_buf()).expect("config should be valid");
        initialise_all(&cfg).expect("initialise should succeed");
        cfg
    }
}

//! Referral notification artifacts.
//!
//! Every new referral produces two text files in the notifications directory: an email-style
//! notice for the receiving clinician and a short note confirming the referral was recorded in
//! the EHR. Both are written after the referral itself has been persisted.

use crate::config::CoreConfig;
use crate::constants::{NOTIFICATION_EXTENSION, REFERRAL_EHR_PREFIX, REFERRAL_EMAIL_PREFIX};
use crate::records::Referral;
use crate::{CareError, CareResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the notification artifacts for referrals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferralNotifier {
    dir: PathBuf,
}

impl ReferralNotifier {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn for_config(cfg: &CoreConfig) -> Self {
        Self::new(cfg.notifications_dir())
    }

    pub fn email_path(&self, referral_id: &str) -> PathBuf {
        self.artifact_path(REFERRAL_EMAIL_PREFIX, referral_id)
    }

    pub fn ehr_path(&self, referral_id: &str) -> PathBuf {
        self.artifact_path(REFERRAL_EHR_PREFIX, referral_id)
    }

    /// Writes both artifacts for `referral`, overwriting any earlier ones for the same id.
    ///
    /// # Errors
    ///
    /// Returns [`CareError::FileWrite`] for the first artifact that cannot be written. The email
    /// notice is written first, so it may exist even when this fails.
    pub fn notify(&self, referral: &Referral) -> CareResult<()> {
        let email_path = self.email_path(&referral.referral_id);
        write_artifact(&email_path, &email_body(referral))?;

        let ehr_path = self.ehr_path(&referral.referral_id);
        write_artifact(&ehr_path, &ehr_body(referral))?;

        tracing::debug!(
            referral_id = %referral.referral_id,
            dir = %self.dir.display(),
            "wrote referral notifications"
        );
        Ok(())
    }

    fn artifact_path(&self, prefix: &str, referral_id: &str) -> PathBuf {
        self.dir
            .join(format!("{prefix}{referral_id}.{NOTIFICATION_EXTENSION}"))
    }
}

/// Text of the email-style referral notice.
pub fn email_body(referral: &Referral) -> String {
    format!(
        "Referral ID: {}\nPatient ID: {}\nUrgency: {}\nReason: {}\nClinical Summary:\n{}\n",
        referral.referral_id,
        referral.patient_id,
        referral.urgency_level,
        referral.referral_reason,
        referral.clinical_summary
    )
}

/// Text of the EHR confirmation note.
pub fn ehr_body(referral: &Referral) -> String {
    format!(
        "Referral recorded in EHR\nReferral ID: {}\nStatus: {}\n",
        referral.referral_id, referral.status
    )
}

fn write_artifact(path: &Path, contents: &str) -> CareResult<()> {
    fs::write(path, contents).map_err(|source| CareError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

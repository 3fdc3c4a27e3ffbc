//! Referral management.
//!
//! There is one referral collection per process. [`CareServices`](super::CareServices) opens it
//! once and hands out clones of the same [`ReferralService`]; [`SharedReferrals`] is the slot
//! that guarantees later callers receive that handle instead of a second collection.

use super::store::RecordStore;
use super::today;
use crate::config::CoreConfig;
use crate::notifications::ReferralNotifier;
use crate::records::{EntityKind, NewReferral, Referral};
use crate::repositories::FlatFileRepository;
use crate::CareResult;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Creates, lists and deletes referrals, writing notification artifacts for new ones.
#[derive(Clone, Debug)]
pub struct ReferralService {
    store: RecordStore<Referral>,
    notifier: ReferralNotifier,
}

impl ReferralService {
    /// Opens a fresh collection. Callers outside this crate go through [`SharedReferrals`].
    pub(crate) fn open(cfg: &CoreConfig) -> CareResult<Self> {
        Ok(Self {
            store: RecordStore::open(FlatFileRepository::for_config(cfg))?,
            notifier: ReferralNotifier::for_config(cfg),
        })
    }

    pub fn list(&self) -> Vec<Referral> {
        self.store.list()
    }

    pub fn get(&self, referral_id: &str) -> Option<Referral> {
        self.store.get(referral_id)
    }

    /// Records a new referral with status `Sent`, then writes its notification artifacts.
    ///
    /// The referral is persisted before any artifact is written. A failure to write the
    /// artifacts is logged and does not affect the result.
    pub fn create(&self, new: NewReferral) -> CareResult<Referral> {
        let today = today();
        let record = self
            .store
            .insert_with(|id| Referral::sent(id, new, today))?;
        tracing::info!(
            referral_id = %record.referral_id,
            patient_id = %record.patient_id,
            urgency = %record.urgency_level,
            "created referral"
        );

        if let Err(err) = self.notifier.notify(&record) {
            tracing::warn!(
                referral_id = %record.referral_id,
                error = %err,
                "failed to write referral notifications"
            );
        }

        Ok(record)
    }

    /// Removes the referral with exactly `referral_id`. Notification artifacts are left as
    /// they are.
    pub fn delete(&self, referral_id: &str) -> CareResult<Option<Referral>> {
        let removed = self.store.remove(referral_id)?;
        if removed.is_some() {
            tracing::info!(referral_id, "deleted referral");
        }
        Ok(removed)
    }

    /// Path of the referral file backing this handle.
    pub fn path(&self) -> PathBuf {
        self.store.path()
    }
}

/// First-wins slot holding the process's single [`ReferralService`].
///
/// Clones of the slot share it. The first successful [`get_or_open`](Self::get_or_open) decides
/// which collection is used; every later call returns a clone of that handle.
#[derive(Clone, Debug, Default)]
pub struct SharedReferrals {
    slot: Arc<Mutex<Option<ReferralService>>>,
}

impl SharedReferrals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared referral handle, opening it from `cfg` on first use.
    ///
    /// If the handle is already open, `cfg` is ignored even when it names a different data
    /// directory.
    pub fn get_or_open(&self, cfg: &CoreConfig) -> CareResult<ReferralService> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(service) = slot.as_ref() {
            let requested = cfg.record_path(EntityKind::Referral);
            if !service.store.is_backed_by(&requested) {
                tracing::debug!(
                    open = %service.path().display(),
                    requested = %requested.display(),
                    "referral service already open; ignoring requested location"
                );
            }
            return Ok(service.clone());
        }

        let service = ReferralService::open(cfg)?;
        *slot = Some(service.clone());
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ReferralStatus;
    use crate::services::test_support::initialised_config;
    use std::fs;
    use tempfile::TempDir;

    fn cardiology() -> NewReferral {
        NewReferral {
            patient_id: "P001".into(),
            referring_clinician_id: "C001".into(),
            referred_to_clinician_id: "C002".into(),
            referring_facility_id: "F001".into(),
            referred_to_facility_id: "F002".into(),
            urgency_level: "Urgent".into(),
            referral_reason: "Chest pain".into(),
            clinical_summary: "Exertional chest pain, two weeks".into(),
            appointment_id: None,
        }
    }

    #[test]
    fn test_create_persists_and_writes_notifications() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = ReferralService::open(&cfg).expect("open should succeed");

        let referral = service.create(cardiology()).expect("create should succeed");

        assert_eq!(referral.referral_id, "R001");
        assert_eq!(referral.status, ReferralStatus::Sent);
        assert_eq!(referral.referral_date, today());
        assert_eq!(referral.created_date, today());
        assert_eq!(referral.last_updated, today());
        assert!(temp_dir.path().join("referral_email_R001.txt").exists());
        assert!(temp_dir.path().join("referral_ehr_R001.txt").exists());

        let reopened = ReferralService::open(&cfg).expect("reopen should succeed");
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(
            reopened.list()[0].clinical_summary,
            "Exertional chest pain  two weeks"
        );
    }

    #[test]
    fn test_notification_failure_does_not_fail_create() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        fs::create_dir(&data_dir).expect("should create data dir");
        let cfg = CoreConfig::new(data_dir.clone(), temp_dir.path().join("no-such-dir"))
            .expect("config should be valid");
        FlatFileRepository::<Referral>::for_config(&cfg)
            .initialise()
            .expect("initialise should succeed");
        let service = ReferralService::open(&cfg).expect("open should succeed");

        let referral = service.create(cardiology()).expect("create should succeed");

        assert_eq!(referral.referral_id, "R001");
        assert_eq!(service.list().len(), 1);
        assert!(!cfg.notifications_dir().exists());
    }

    #[test]
    fn test_shared_handles_see_each_others_mutations() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let shared = SharedReferrals::new();

        let first = shared.get_or_open(&cfg).expect("open should succeed");
        let second = shared.clone().get_or_open(&cfg).expect("open should succeed");

        first.create(cardiology()).expect("create should succeed");
        assert_eq!(second.list().len(), 1);

        second.delete("R001").expect("delete should succeed");
        assert!(first.list().is_empty());
    }

    #[test]
    fn test_first_open_wins() {
        let first_dir = TempDir::new().expect("Failed to create temp dir");
        let other_dir = TempDir::new().expect("Failed to create temp dir");
        let first_cfg = initialised_config(first_dir.path());
        let other_cfg = initialised_config(other_dir.path());
        let shared = SharedReferrals::new();

        shared.get_or_open(&first_cfg).expect("open should succeed");
        let later = shared
            .get_or_open(&other_cfg)
            .expect("open should succeed");

        assert_eq!(later.path(), first_cfg.record_path(EntityKind::Referral));
        later.create(cardiology()).expect("create should succeed");
        assert_eq!(
            fs::read_to_string(other_cfg.record_path(EntityKind::Referral))
                .expect("should read other file")
                .lines()
                .count(),
            1
        );
    }

    #[test]
    fn test_delete_leaves_notifications() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = initialised_config(temp_dir.path());
        let service = ReferralService::open(&cfg).expect("open should succeed");
        service.create(cardiology()).expect("create should succeed");

        let removed = service.delete("R001").expect("delete should succeed");

        assert!(removed.is_some());
        assert!(service.list().is_empty());
        assert!(temp_dir.path().join("referral_email_R001.txt").exists());
        assert!(service.delete("R001").expect("delete should succeed").is_none());
    }
}

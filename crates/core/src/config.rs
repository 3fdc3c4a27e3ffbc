//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! while services are running, which can lead to inconsistent behaviour in multi-threaded
//! programs and test harnesses.

use crate::constants::DEFAULT_DATA_DIR;
use crate::records::EntityKind;
use crate::{CareError, CareResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    data_dir: PathBuf,
    notifications_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `data_dir` holds one flat file per entity kind. `notifications_dir` receives the
    /// artifacts written alongside each new referral; it may be the same directory.
    pub fn new(data_dir: PathBuf, notifications_dir: PathBuf) -> CareResult<Self> {
        if data_dir.as_os_str().is_empty() {
            return Err(CareError::InvalidInput("data_dir cannot be empty".into()));
        }
        if notifications_dir.as_os_str().is_empty() {
            return Err(CareError::InvalidInput(
                "notifications_dir cannot be empty".into(),
            ));
        }

        Ok(Self {
            data_dir,
            notifications_dir,
        })
    }

    /// Configuration that keeps notifications next to the record files.
    pub fn with_data_dir(data_dir: PathBuf) -> CareResult<Self> {
        let notifications_dir = data_dir.clone();
        Self::new(data_dir, notifications_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn notifications_dir(&self) -> &Path {
        &self.notifications_dir
    }

    /// Path of the flat file backing `kind`.
    pub fn record_path(&self, kind: EntityKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}

/// Resolve a directory from an optional string value.
///
/// `None` or an empty/whitespace value falls back to `default`.
pub fn dir_from_env_value(value: Option<String>, default: &Path) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| default.to_path_buf())
}

/// Resolve the record data directory, defaulting to [`DEFAULT_DATA_DIR`].
pub fn data_dir_from_env_value(value: Option<String>) -> PathBuf {
    dir_from_env_value(value, Path::new(DEFAULT_DATA_DIR))
}

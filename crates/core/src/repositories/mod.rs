//! Record repositories.
//!
//! A repository owns the mapping between one entity kind and its flat file. It knows nothing
//! about identifiers, timestamps or concurrency; those belong to the services layer.

mod flat_file;

pub use flat_file::FlatFileRepository;

use crate::config::CoreConfig;
use crate::records::*;
use crate::{CareError, CareResult};
use std::fs;

/// Creates the data and notifications directories and a header-only file for every entity kind
/// that has none yet.
///
/// Returns the kinds whose files were created. Existing files are left untouched.
pub fn initialise_all(cfg: &CoreConfig) -> CareResult<Vec<EntityKind>> {
    for dir in [cfg.data_dir(), cfg.notifications_dir()] {
        fs::create_dir_all(dir).map_err(|source| CareError::FileWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut created = Vec::new();
    initialise_kind::<Patient>(cfg, &mut created)?;
    initialise_kind::<Clinician>(cfg, &mut created)?;
    initialise_kind::<Facility>(cfg, &mut created)?;
    initialise_kind::<Appointment>(cfg, &mut created)?;
    initialise_kind::<Prescription>(cfg, &mut created)?;
    initialise_kind::<Referral>(cfg, &mut created)?;
    initialise_kind::<Staff>(cfg, &mut created)?;
    Ok(created)
}

fn initialise_kind<R: Record>(cfg: &CoreConfig, created: &mut Vec<EntityKind>) -> CareResult<()> {
    if FlatFileRepository::<R>::for_config(cfg).initialise()? {
        created.push(R::KIND);
    }
    Ok(())
}

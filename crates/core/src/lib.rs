//! # Carebook Core
//!
//! Core business logic for the Carebook record system.
//!
//! This crate owns the entity records and everything that keeps them consistent:
//! - Flat-file storage, one delimited file per entity kind
//! - Collision-free identifier allocation on create
//! - Per-kind services with locked read-modify-write and rollback on failed saves
//! - One shared referral collection, plus the notification artifacts for new referrals
//!
//! **No interface concerns**: argument parsing, output formatting and process setup belong in
//! the `carebook` binary.

pub mod codec;
pub mod config;
pub mod constants;
pub mod notifications;
pub mod records;
pub mod repositories;
pub mod services;

mod error;

pub use config::CoreConfig;
pub use error::{CareError, CareResult};
pub use records::{EntityKind, Record};
pub use services::{CareServices, SharedReferrals};

//! Sequential record identifiers.
//!
//! Every Carebook record is identified by a short prefix followed by a zero-padded sequence
//! number, for example `P007` for a patient or `RX014` for a prescription.
//!
//! ## Identifier form
//! - Prefix: one or more characters, matched exactly and case-sensitively
//! - Sequence: decimal digits, zero-padded to a minimum width of 3
//! - Example: `A001`, `RX100`, `P1235`
//!
//! Padding is a minimum, not a maximum: once the sequence passes 999 the identifier simply
//! grows (`P999` is followed by `P1000`).
//!
//! ## Allocation
//! New identifiers are derived from the identifiers already in use via [`next_id`]. No counter
//! is retained between calls, so callers must pass the complete current id set every time and
//! hold whatever lock guards that set until the new record has been stored.

mod sequence;

pub use sequence::{next_id, sequence_number, MIN_SEQUENCE_WIDTH};

/// Error type for identifier allocation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    /// The prefix was empty, so every identifier would match it.
    #[error("identifier prefix cannot be empty")]
    EmptyPrefix,
    /// The highest sequence number in use is already the largest representable value.
    #[error("identifier sequence for prefix '{prefix}' is exhausted")]
    Exhausted { prefix: String },
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;

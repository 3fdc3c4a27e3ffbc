//! Derivation of the next sequential identifier from the identifiers in use.

use crate::{IdError, IdResult};

/// Minimum number of digits in the sequence part of a generated identifier.
pub const MIN_SEQUENCE_WIDTH: usize = 3;

/// Returns the sequence number of `id` if it carries `prefix`.
///
/// The prefix match is exact and case-sensitive. The remainder must parse as a non-negative
/// integer; anything else (letters, a sign, an empty remainder, overflow) yields `None`.
///
/// # Examples
///
/// ```
/// use carebook_ids::sequence_number;
///
/// assert_eq!(sequence_number("RX", "RX0099"), Some(99));
/// assert_eq!(sequence_number("R", "RX001"), None);
/// assert_eq!(sequence_number("P", "p001"), None);
/// ```
pub fn sequence_number(prefix: &str, id: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Derives the next collision-free identifier for `prefix`.
///
/// Identifiers that do not start with `prefix`, or whose remainder is not numeric, are ignored.
/// Such entries are treated as legacy or foreign identifiers rather than errors. The result is
/// `prefix` followed by one more than the highest sequence number found (or `1` when none is
/// found), zero-padded to [`MIN_SEQUENCE_WIDTH`] digits.
///
/// This is a pure function; the caller owns the id set and any locking around it.
///
/// # Errors
///
/// - [`IdError::EmptyPrefix`] if `prefix` is empty
/// - [`IdError::Exhausted`] if the highest sequence number cannot be incremented
///
/// # Examples
///
/// ```
/// use carebook_ids::next_id;
///
/// let none: [&str; 0] = [];
/// assert_eq!(next_id("A", none).unwrap(), "A001");
/// assert_eq!(next_id("RX", ["RX001", "RX003", "RX0099"]).unwrap(), "RX100");
/// ```
pub fn next_id<I, S>(prefix: &str, existing_ids: I) -> IdResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if prefix.is_empty() {
        return Err(IdError::EmptyPrefix);
    }

    let max = existing_ids
        .into_iter()
        .filter_map(|id| sequence_number(prefix, id.as_ref()))
        .max()
        .unwrap_or(0);

    let next = max.checked_add(1).ok_or_else(|| IdError::Exhausted {
        prefix: prefix.to_string(),
    })?;

    Ok(format!("{prefix}{next:0width$}", width = MIN_SEQUENCE_WIDTH))
}

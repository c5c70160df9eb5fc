//! Next-number computation over the set of already-assigned numbers.
//!
//! This is a pure max-suffix scan. It does NOT guarantee uniqueness
//! under concurrent creation; callers must pair it with a unique
//! constraint on the stored number and retry with a freshly computed
//! number on conflict.

use kontor_shared::NumberingConfig;

/// Computes the next number for a prefix from the existing numbers.
///
/// Numbers matching `{prefix}-{digits}` contribute their suffix; the
/// result is `max + 1`, or the configured seed when nothing matches.
/// Malformed or foreign numbers are skipped, never errors.
#[must_use]
pub fn next_number<S: AsRef<str>>(
    existing: &[S],
    prefix: &str,
    config: &NumberingConfig,
) -> String {
    let max_suffix = existing
        .iter()
        .filter_map(|number| parse_suffix(number.as_ref(), prefix))
        .max();

    let next = match max_suffix {
        Some(max) => max + 1,
        None => config.start_at,
    };

    format!("{prefix}-{next:0width$}", width = config.pad_width)
}

/// Composes the `PREFIX-YYYY` context used for offers and invoices.
#[must_use]
pub fn yearly_prefix(base: &str, year: i32) -> String {
    format!("{base}-{year}")
}

/// Extracts the numeric suffix if `number` is `{prefix}-{digits}`.
fn parse_suffix(number: &str, prefix: &str) -> Option<u32> {
    let rest = number.strip_prefix(prefix)?.strip_prefix('-')?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

use std::num::IntErrorKind;

use crate::error::InvalidInput;

/// Largest accepted answer magnitude unless settings say otherwise.
pub const DEFAULT_ANSWER_BOUND: i64 = 998_000;

/// Parse typed answer text into an integer.
///
/// Surrounding whitespace is ignored. With `bound` set, values whose
/// magnitude exceeds it are rejected.
///
/// # Errors
///
/// Returns `InvalidInput` for empty, non-numeric, overflowing or
/// out-of-bound text.
pub fn parse_answer(raw: &str, bound: Option<i64>) -> Result<i64, InvalidInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Empty);
    }

    let value: i64 = trimmed.parse().map_err(|err: std::num::ParseIntError| {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InvalidInput::TooLarge {
                raw: trimmed.to_string(),
            },
            _ => InvalidInput::NotANumber {
                raw: trimmed.to_string(),
            },
        }
    })?;

    if let Some(bound) = bound.filter(|b| value.unsigned_abs() > b.unsigned_abs()) {
        return Err(InvalidInput::OutOfRange { value, bound });
    }

    Ok(value)
}

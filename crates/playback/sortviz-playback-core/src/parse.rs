//! Boundary parsing for the input form: raw array text and the speed slider.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Inclusive range accepted for the per-step delay, in milliseconds.
pub const DELAY_RANGE_MS: RangeInclusive<u32> = 100..=2000;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("array input is empty")]
    Empty,
    #[error("token {index} ({token:?}) is not a number")]
    InvalidToken { index: usize, token: String },
    #[error("delay {0} ms outside the accepted 100..=2000 range")]
    DelayOutOfRange(u32),
}

/// Parse comma-separated numbers from the array text field. Any non-numeric
/// token rejects the whole input, so the caller keeps its previous array
/// unchanged (no partial update).
pub fn parse_array(text: &str) -> Result<Vec<f32>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut values = Vec::new();
    for (index, token) in trimmed.split(',').enumerate() {
        let token = token.trim();
        match token.parse::<f32>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => {
                return Err(ParseError::InvalidToken {
                    index,
                    token: token.to_string(),
                })
            }
        }
    }
    Ok(values)
}

/// Validate a slider value before it is used as the per-step delay.
pub fn validate_delay(ms: u32) -> Result<u32, ParseError> {
    if DELAY_RANGE_MS.contains(&ms) {
        Ok(ms)
    } else {
        Err(ParseError::DelayOutOfRange(ms))
    }
}

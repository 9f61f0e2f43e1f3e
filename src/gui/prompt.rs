//! The size prompt dialog state and its input parsing.

use crate::grid::MAX_GRID_SIDE;
use anyhow::{anyhow, Error};

/// Shown when the prompt input cannot be used at all.
pub const INVALID_SIZE_MESSAGE: &str = "Invalid input. Please enter a number between 1 and 100.";
/// Shown when the prompt input was usable but had to be clamped.
pub const CLAMPED_SIZE_MESSAGE: &str = "Size too large. Using 100 instead.";

/// State for an open size prompt dialog.
pub struct SizePrompt {
    /// Current contents of the text field.
    pub buffer: String,
}

impl Default for SizePrompt {
    fn default() -> Self {
        Self {
            buffer: "16".to_string(),
        }
    }
}

/// Outcome of successfully parsing the prompt's text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizeRequest {
    /// The requested side length, already in range.
    Accepted(usize),
    /// The request exceeded [`MAX_GRID_SIDE`] and was clamped down to it.
    Clamped(usize),
}

impl SizeRequest {
    /// The side length to build, however it was obtained.
    pub fn side(self) -> usize {
        match self {
            SizeRequest::Accepted(side) | SizeRequest::Clamped(side) => side,
        }
    }
}

/// Parses the prompt text into a usable grid side length.
///
/// Anything that is not an integer of at least 1 is an error carrying the
/// user-facing message; values above [`MAX_GRID_SIDE`] are clamped rather than
/// rejected.
pub fn parse_size(input: &str) -> Result<SizeRequest, Error> {
    let side = input
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow!(INVALID_SIZE_MESSAGE))?;
    if side < 1 {
        return Err(anyhow!(INVALID_SIZE_MESSAGE));
    }
    if side > MAX_GRID_SIDE as i64 {
        return Ok(SizeRequest::Clamped(MAX_GRID_SIDE));
    }
    Ok(SizeRequest::Accepted(side as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sizes_in_range() {
        assert_eq!(parse_size("16").unwrap(), SizeRequest::Accepted(16));
        assert_eq!(parse_size("1").unwrap(), SizeRequest::Accepted(1));
        assert_eq!(parse_size("100").unwrap(), SizeRequest::Accepted(100));
        assert_eq!(parse_size("  42 ").unwrap(), SizeRequest::Accepted(42));
    }

    #[test]
    fn rejects_zero() {
        let v = parse_size("0");
        assert!(v.is_err());
        assert_eq!(format!("{}", v.unwrap_err()), INVALID_SIZE_MESSAGE);
    }

    #[test]
    fn rejects_negative_numbers() {
        assert!(parse_size("-3").is_err());
    }

    #[test]
    fn rejects_non_numeric_input() {
        let v = parse_size("abc");
        assert!(v.is_err());
        assert_eq!(format!("{}", v.unwrap_err()), INVALID_SIZE_MESSAGE);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_size("").is_err());
        assert!(parse_size("   ").is_err());
    }

    #[test]
    fn clamps_oversized_input() {
        assert_eq!(parse_size("500").unwrap(), SizeRequest::Clamped(100));
        assert_eq!(parse_size("101").unwrap(), SizeRequest::Clamped(100));
        assert_eq!(parse_size("500").unwrap().side(), MAX_GRID_SIDE);
    }

    #[test]
    fn prompt_suggests_default_size() {
        assert_eq!(SizePrompt::default().buffer, "16");
    }
}

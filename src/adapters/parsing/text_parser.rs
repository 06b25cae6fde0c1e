//! Text Parser - Comma-separated labels and numbers from free-form input.
//!
//! Runs before anything reaches the AHP core, so every value it hands over
//! is already a validated label or a finite non-negative number.

use crate::domain::foundation::{validate_label_set, AhpError, InputProblem, Label};

/// Token separator for free-form lists.
pub const SEPARATOR: char = ',';

/// Parses `"Cost, Quality , Speed"` into an ordered label set.
///
/// Empty tokens are dropped, so trailing commas are harmless.
///
/// # Errors
/// - Fewer than 2 labels remain
/// - The same label appears twice
pub fn parse_labels(text: &str) -> Result<Vec<Label>, AhpError> {
    let labels = text
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Label::new)
        .collect::<Result<Vec<_>, _>>()?;

    validate_label_set(&labels)?;
    Ok(labels)
}

/// Parses `"0.3, 0.5, 0.2"` into numbers.
///
/// # Errors
/// Any token that is not a finite non-negative number, including empty ones.
pub fn parse_weights(text: &str) -> Result<Vec<f64>, AhpError> {
    text.split(SEPARATOR).map(parse_number).collect()
}

/// Parses one judgment or weight: a decimal (`"0.25"`) or a fraction (`"1/3"`).
pub fn parse_number(token: &str) -> Result<f64, AhpError> {
    let token = token.trim();
    let malformed = || AhpError::input(InputProblem::MalformedNumber(token.to_string()));

    let value = match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().map_err(|_| malformed())?;
            let denominator: f64 = denominator.trim().parse().map_err(|_| malformed())?;
            if denominator == 0.0 {
                return Err(malformed());
            }
            numerator / denominator
        }
        None => token.parse().map_err(|_| malformed())?,
    };

    if !value.is_finite() || value < 0.0 {
        return Err(malformed());
    }

    Ok(value)
}

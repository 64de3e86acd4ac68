//! Client-side Validation
//!
//! Form field rules applied before a mutation is submitted. A failure here
//! produces `ApiError::Validation` and never reaches the network.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::reconcile::ChildRecord;

/// Oldest film year accepted (the Roundhay Garden Scene).
pub const MIN_YEAR: u16 = 1888;
pub const MAX_YEAR: u16 = 2100;

/// Canonical date form used across all resources, e.g. "2 Oct 2025".
pub const DATE_FORMAT: &str = "%-d %b %Y";

/// Input formats tolerated before normalization.
const DATE_INPUT_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Required text field: non-empty after trimming. Returns the trimmed value.
pub fn require_text(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(field, "is required"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Four-digit year within [1888, 2100].
pub fn parse_year(field: &str, raw: &str) -> Result<u16, ApiError> {
    let year: u16 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(field, "must be a 4-digit year"))?;
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ApiError::validation(
            field,
            format!("must be between {} and {}", MIN_YEAR, MAX_YEAR),
        ))
    }
}

/// Finite positive amount (money, quantity).
pub fn parse_amount(field: &str, raw: &str) -> Result<f64, ApiError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(field, "must be a number"))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ApiError::validation(field, "must be greater than zero"));
    }
    Ok(amount)
}

/// Positive whole count (labour, episodes).
pub fn parse_count(field: &str, raw: &str) -> Result<u32, ApiError> {
    let count: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(field, "must be a whole number"))?;
    if count == 0 {
        return Err(ApiError::validation(field, "must be greater than zero"));
    }
    Ok(count)
}

/// Rating in [1, 10].
pub fn parse_rating(field: &str, raw: &str) -> Result<u8, ApiError> {
    let rating: u8 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(field, "must be a number"))?;
    if (1..=10).contains(&rating) {
        Ok(rating)
    } else {
        Err(ApiError::validation(field, "must be between 1 and 10"))
    }
}

pub fn require_url(field: &str, raw: &str) -> Result<String, ApiError> {
    let url = require_text(field, raw)?;
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(ApiError::validation(field, "must start with http:// or https://"))
    }
}

/// Parse a user-entered date and normalize it to the canonical
/// "D MMM YYYY" form.
pub fn normalize_date(field: &str, raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(field, "is required"));
    }
    for format in DATE_INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.format(DATE_FORMAT).to_string());
        }
    }
    Err(ApiError::validation(field, "is not a recognized date"))
}

/// Sub-record rules shared by movie parts and series seasons: the ordinal
/// key must be unique within the parent, and newly added entries (no server
/// id yet) must be at or above `min_new_ordinal`.
pub fn check_child_ordinals<C: ChildRecord>(
    field: &str,
    children: &[C],
    min_new_ordinal: u32,
) -> Result<(), ApiError> {
    let mut seen = Vec::with_capacity(children.len());
    for child in children {
        let ordinal = child.ordinal();
        if seen.contains(&ordinal) {
            return Err(ApiError::validation(
                field,
                format!("number {} is used more than once", ordinal),
            ));
        }
        seen.push(ordinal);
        if child.server_id().is_none() && ordinal < min_new_ordinal {
            return Err(ApiError::validation(
                field,
                format!("new entries must be numbered {} or higher", min_new_ordinal),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    #[test]
    fn required_text_rejects_whitespace() {
        assert!(require_text("title", "   ").is_err());
        assert_eq!(require_text("title", "  Dune ").unwrap(), "Dune");
    }

    #[test]
    fn year_bounds() {
        assert!(parse_year("year", "1887").is_err());
        assert!(parse_year("year", "2101").is_err());
        assert!(parse_year("year", "abc").is_err());
        assert_eq!(parse_year("year", "2010").unwrap(), 2010);
    }

    #[test]
    fn amount_must_be_finite_positive() {
        assert!(parse_amount("amount", "0").is_err());
        assert!(parse_amount("amount", "-3").is_err());
        assert!(parse_amount("amount", "inf").is_err());
        assert_eq!(parse_amount("amount", "1500.50").unwrap(), 1500.50);
    }

    #[test]
    fn date_normalizes_to_canonical_form() {
        assert_eq!(normalize_date("date", "2 Oct 2025").unwrap(), "2 Oct 2025");
        assert_eq!(normalize_date("date", "02 Oct 2025").unwrap(), "2 Oct 2025");
        assert_eq!(normalize_date("date", "2025-10-02").unwrap(), "2 Oct 2025");
        assert_eq!(normalize_date("date", "02/10/2025").unwrap(), "2 Oct 2025");
        assert!(normalize_date("date", "sometime soon").is_err());
    }

    fn season(id: Option<u32>, season_no: u32) -> Season {
        Season {
            id,
            season_no,
            episodes: 8,
        }
    }

    #[test]
    fn duplicate_ordinals_rejected() {
        let seasons = vec![season(Some(1), 1), season(None, 1)];
        assert!(check_child_ordinals("seasons", &seasons, 1).is_err());
    }

    #[test]
    fn new_children_respect_minimum_ordinal() {
        // pre-existing season 0 is tolerated, a new one is not
        let existing_zero = vec![season(Some(1), 0)];
        assert!(check_child_ordinals("seasons", &existing_zero, 1).is_ok());

        let new_zero = vec![season(None, 0)];
        assert!(check_child_ordinals("seasons", &new_zero, 1).is_err());
    }
}

//! Per-field validation for the customer form.
//!
//! [`validate_field`] is a pure function of its two inputs; the returned
//! message is surfaced verbatim as inline helper text next to the offending
//! field, with an empty string meaning "valid".

use validator::ValidateUrl;

use crate::schema::{field_def, FieldKind};

/// Message for count fields that fail to parse or are negative.
pub const ERR_NON_NEGATIVE: &str = "This has to be a non-negative number.";
/// Message for blank required fields.
pub const ERR_REQUIRED: &str = "This field is required.";
/// Message for malformed URLs.
pub const ERR_INVALID_URL: &str = "Please enter a valid URL.";

/// Validate a single raw field value against the customer schema.
///
/// Returns the error message, or an empty string when the value is valid.
/// Field names absent from the schema fall back to the required-text rule.
pub fn validate_field(name: &str, value: &str) -> String {
    let kind = field_def(name).map_or(FieldKind::Text, |f| f.kind);
    let trimmed = value.trim();

    match kind {
        FieldKind::Count => {
            // A blank count reads as zero, so only non-blank input is parsed.
            let invalid = !trimmed.is_empty()
                && trimmed.parse::<f64>().map_or(true, |n| n.is_nan() || n < 0.0);
            if invalid {
                return ERR_NON_NEGATIVE.to_string();
            }
        }
        FieldKind::Text => {
            if trimmed.is_empty() {
                return ERR_REQUIRED.to_string();
            }
        }
        FieldKind::Url => {
            if trimmed.is_empty() {
                return ERR_REQUIRED.to_string();
            }
            if !trimmed.validate_url() {
                return ERR_INVALID_URL.to_string();
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_accepts_non_negative_numbers() {
        assert_eq!(validate_field("noRigs", "0"), "");
        assert_eq!(validate_field("noRigs", "5"), "");
        assert_eq!(validate_field("noJackups", "12.5"), "");
        assert_eq!(validate_field("noModus", " 3 "), "");
    }

    #[test]
    fn count_accepts_blank_as_zero() {
        assert_eq!(validate_field("noRigs", ""), "");
        assert_eq!(validate_field("noRigs", "   "), "");
    }

    #[test]
    fn count_rejects_negative_and_non_numeric() {
        assert_eq!(validate_field("noRigs", "-1"), ERR_NON_NEGATIVE);
        assert_eq!(validate_field("noRigs", "abc"), ERR_NON_NEGATIVE);
        assert_eq!(validate_field("noModus", "NaN"), ERR_NON_NEGATIVE);
    }

    #[test]
    fn text_requires_non_blank_value() {
        assert_eq!(validate_field("name", "Acme Drilling"), "");
        assert_eq!(validate_field("name", ""), ERR_REQUIRED);
        assert_eq!(validate_field("address", "   "), ERR_REQUIRED);
    }

    #[test]
    fn url_must_be_well_formed_when_present() {
        assert_eq!(validate_field("siteUrl", "https://example.com"), "");
        assert_eq!(validate_field("siteUrl", "not a url"), ERR_INVALID_URL);
        // A bare scheme prefix (the new-entry seed value) is not a full URL.
        assert_eq!(validate_field("siteUrl", "https://"), ERR_INVALID_URL);
    }

    #[test]
    fn blank_url_falls_under_required_rule() {
        assert_eq!(validate_field("siteUrl", ""), ERR_REQUIRED);
    }

    #[test]
    fn unknown_field_treated_as_required_text() {
        assert_eq!(validate_field("somethingElse", "value"), "");
        assert_eq!(validate_field("somethingElse", ""), ERR_REQUIRED);
    }
}

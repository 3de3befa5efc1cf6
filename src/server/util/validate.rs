//! Field validation and normalization of request payloads.
//!
//! Text fields are trimmed before any check; optional text that is blank after trimming is
//! stored as `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::validation::ValidationError;

pub const NAME_MAX_LEN: usize = 100;
pub const DEFAULT_COLOR_CODE: &str = "#6c757d";

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?|ftp)://[^\s/$.?#].[^\s]*$").unwrap());

static COLOR_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Trimmed, non-blank text of at most `max` characters.
pub fn required_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<String, ValidationError> {
    optional_text(field, value, max)?.ok_or(ValidationError::Required(field))
}

/// Like [`required_text`] with the name length limit.
pub fn required_name(value: Option<String>) -> Result<String, ValidationError> {
    required_text("name", value, NAME_MAX_LEN)
}

/// Trimmed text of at most `max` characters, `None` when blank.
pub fn optional_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > max {
        return Err(ValidationError::field(
            field,
            format!("{} cannot be more than {} characters", field, max),
        ));
    }

    Ok(Some(value.to_string()))
}

pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required(field))
}

pub fn non_negative(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::field(
            field,
            format!("{} cannot be negative", field),
        ));
    }

    Ok(value)
}

pub fn non_negative_amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::field(
            field,
            format!("{} cannot be negative", field),
        ));
    }

    Ok(value)
}

/// An http, https or ftp URL, `None` when blank.
pub fn optional_url(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    let value = optional_text(field, value, 2048)?;

    match value {
        Some(url) if !URL_RE.is_match(&url) => Err(ValidationError::field(
            field,
            "Please use a valid URL with HTTP, HTTPS or FTP",
        )),
        value => Ok(value),
    }
}

/// A lower-cased email address, `None` when blank.
pub fn optional_email(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    let value = optional_text(field, value, 254)?.map(|email| email.to_lowercase());

    match value {
        Some(email) if !EMAIL_RE.is_match(&email) => Err(ValidationError::field(
            field,
            "Please add a valid email",
        )),
        value => Ok(value),
    }
}

/// A `#rgb` or `#rrggbb` color.
pub fn color_code(value: String) -> Result<String, ValidationError> {
    let value = value.trim();

    if !COLOR_CODE_RE.is_match(value) {
        return Err(ValidationError::field(
            "color_code",
            "Color code must be a valid hex color",
        ));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect names to be trimmed and blank names to be required
    #[test]
    fn trims_and_requires_names() {
        assert_eq!(required_name(Some("  Patna ".to_string())), Ok("Patna".to_string()));
        assert_eq!(
            required_name(Some("   ".to_string())),
            Err(ValidationError::Required("name"))
        );
        assert_eq!(required_name(None), Err(ValidationError::Required("name")));
    }

    /// Expect names over 100 characters to be rejected
    #[test]
    fn limits_name_length() {
        assert!(required_name(Some("a".repeat(100))).is_ok());
        assert!(required_name(Some("a".repeat(101))).is_err());
    }

    #[test]
    fn blank_optional_text_is_none() {
        assert_eq!(optional_text("remark", Some(" ".to_string()), 10), Ok(None));
    }

    #[test]
    fn validates_urls() {
        assert!(optional_url("photo", Some("https://example.com/a.png".to_string())).is_ok());
        assert!(optional_url("photo", Some("ftp://files.example.com".to_string())).is_ok());
        assert!(optional_url("photo", Some("javascript:alert(1)".to_string())).is_err());
        assert_eq!(optional_url("photo", Some(String::new())), Ok(None));
    }

    #[test]
    fn validates_color_codes() {
        assert!(color_code("#6c757d".to_string()).is_ok());
        assert!(color_code("#FFF".to_string()).is_ok());
        assert!(color_code("6c757d".to_string()).is_err());
        assert!(color_code("#12345".to_string()).is_err());
    }

    /// Expect emails to be lower-cased
    #[test]
    fn lower_cases_emails() {
        assert_eq!(
            optional_email("email", Some("Asha@Example.COM".to_string())),
            Ok(Some("asha@example.com".to_string()))
        );
        assert!(optional_email("email", Some("not-an-email".to_string())).is_err());
    }

    #[test]
    fn rejects_negative_counts() {
        assert!(non_negative("votes", -1).is_err());
        assert_eq!(non_negative("votes", 0), Ok(0));
        assert!(non_negative_amount("amount", -0.5).is_err());
    }
}

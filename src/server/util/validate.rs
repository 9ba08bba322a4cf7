//! Input normalization shared by services.
//!
//! Each helper returns the cleaned value or an `AppError::BadRequest` naming the field.

use chrono::NaiveDate;
use url::Url;

use crate::server::error::AppError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trims a required text field and rejects it when empty or too long.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    if value.chars().count() > max_len {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }

    Ok(value.to_string())
}

/// Trims an optional text field, mapping blank values to `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => required_text(field, value, max_len).map(Some),
    }
}

/// Lowercases and checks an email address.
///
/// Only the shape `local@domain.tld` is checked; deliverability is not.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    let invalid = || AppError::BadRequest("Invalid email address".to_string());

    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let valid_domain = domain
        .split('.')
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
        && domain.contains('.');
    if !valid_domain {
        return Err(invalid());
    }

    Ok(email)
}

pub fn password(field: &str, value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "{} must be at least {} characters",
            field, MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Accepts an optional image URL, which must be absolute http(s).
pub fn image_url(value: Option<String>) -> Result<Option<String>, AppError> {
    let Some(value) = optional_text("Image", value, 2048)? else {
        return Ok(None);
    };

    match Url::parse(&value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(Some(value)),
        _ => Err(AppError::BadRequest(
            "Image must be an http or https URL".to_string(),
        )),
    }
}

/// Rejects a date range whose end precedes its start. Open ranges always pass.
pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(AppError::BadRequest(
                "End date must not be before start date".to_string(),
            ));
        }
    }
    Ok(())
}

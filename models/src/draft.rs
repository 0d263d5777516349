// models/src/draft.rs
//
// A draft is the in-progress, not-yet-submitted copy of an entity held by an
// open modal. Inputs arrive as strings (dates, numbers included) and are
// coerced into the entity shape at submit time; every coercion failure lands
// in the field-error map rather than aborting the whole form.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

/// field name -> user-facing message, same shape the backend echoes back
/// in its `errors` payload.
pub type FieldErrors = BTreeMap<String, String>;

pub trait Draft: Clone + Default {
    type Entity;

    /// Populate the draft from an existing entity for the edit modal.
    /// Missing optional fields fall back to their `Default` values.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Coerce the string-typed draft into a concrete entity.
    /// Returns every failing field at once so the form can show them all.
    fn validate(&self) -> Result<Self::Entity, FieldErrors>;
}

// =========================================================================
// Coercion helpers shared by the per-resource drafts
// =========================================================================

pub fn require(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field.to_string(), "required".to_string());
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_i32(errors: &mut FieldErrors, field: &str, value: &str) -> Option<i32> {
    let raw = require(errors, field, value)?;
    match raw.parse::<i32>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.insert(field.to_string(), "must be a whole number".to_string());
            None
        }
    }
}

pub fn parse_datetime(errors: &mut FieldErrors, field: &str, value: &str) -> Option<DateTime<Utc>> {
    let raw = require(errors, field, value)?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => {
            errors.insert(
                field.to_string(),
                "must be an RFC 3339 date-time".to_string(),
            );
            None
        }
    }
}

pub fn parse_date(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDate> {
    let raw = require(errors, field, value)?;
    match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.insert(field.to_string(), "must be a YYYY-MM-DD date".to_string());
            None
        }
    }
}

/// Shape check only; real address verification belongs to the backend.
pub fn check_email(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    let raw = require(errors, field, value)?;
    let looks_ok = raw.contains('@') && !raw.starts_with('@') && !raw.ends_with('@');
    if looks_ok {
        Some(raw)
    } else {
        errors.insert(field.to_string(), "must be an email address".to_string());
        None
    }
}

/// "HH:MM" 24h wall-clock strings used by clinic settings and availability.
pub fn check_wall_clock(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    let raw = require(errors, field, value)?;
    let ok = matches!(raw.split_once(':'), Some((h, m))
        if h.len() == 2 && m.len() == 2
            && h.parse::<u8>().map(|h| h < 24).unwrap_or(false)
            && m.parse::<u8>().map(|m| m < 60).unwrap_or(false));
    if ok {
        Some(raw)
    } else {
        errors.insert(field.to_string(), "must be HH:MM".to_string());
        None
    }
}

/// Comma-separated text area -> list of trimmed, non-empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_blank_and_keeps_trimmed() {
        let mut errors = FieldErrors::new();
        assert_eq!(require(&mut errors, "name", "  Ada  "), Some("Ada".into()));
        assert!(errors.is_empty());
        assert_eq!(require(&mut errors, "name", "   "), None);
        assert_eq!(errors.get("name").map(String::as_str), Some("required"));
    }

    #[test]
    fn parse_i32_reports_instead_of_panicking() {
        let mut errors = FieldErrors::new();
        assert_eq!(parse_i32(&mut errors, "capacity", "four"), None);
        assert_eq!(
            errors.get("capacity").map(String::as_str),
            Some("must be a whole number")
        );
    }

    #[test]
    fn wall_clock_accepts_only_hh_mm() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            check_wall_clock(&mut errors, "opens", "08:30"),
            Some("08:30".into())
        );
        assert_eq!(check_wall_clock(&mut errors, "opens", "8:30"), None);
        assert_eq!(check_wall_clock(&mut errors, "opens", "25:00"), None);
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(
            split_list("penicillin, latex,, "),
            vec!["penicillin".to_string(), "latex".to_string()]
        );
    }
}

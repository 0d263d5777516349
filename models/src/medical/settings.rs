// models/src/medical/settings.rs
use serde::{Deserialize, Serialize};

use crate::draft::{self, Draft, FieldErrors};

/// Clinic-wide settings edited as a single form (no list, no id).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClinicSettings {
    pub clinic_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_time: String, // "HH:MM"
    pub closing_time: String, // "HH:MM"
    pub slot_minutes: i32,
}

impl Default for ClinicSettings {
    fn default() -> Self {
        ClinicSettings {
            clinic_name: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            opening_time: "08:00".to_string(),
            closing_time: "18:00".to_string(),
            slot_minutes: 30,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsDraft {
    pub clinic_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_time: String,
    pub closing_time: String,
    pub slot_minutes: String,
}

impl Draft for SettingsDraft {
    type Entity = ClinicSettings;

    fn from_entity(entity: &ClinicSettings) -> Self {
        SettingsDraft {
            clinic_name: entity.clinic_name.clone(),
            address: entity.address.clone(),
            phone: entity.phone.clone(),
            email: entity.email.clone(),
            opening_time: entity.opening_time.clone(),
            closing_time: entity.closing_time.clone(),
            slot_minutes: entity.slot_minutes.to_string(),
        }
    }

    fn validate(&self) -> Result<ClinicSettings, FieldErrors> {
        let mut errors = FieldErrors::new();

        let clinic_name = draft::require(&mut errors, "clinic_name", &self.clinic_name);
        let email = draft::check_email(&mut errors, "email", &self.email);
        let opening_time = draft::check_wall_clock(&mut errors, "opening_time", &self.opening_time);
        let closing_time = draft::check_wall_clock(&mut errors, "closing_time", &self.closing_time);
        if let (Some(open), Some(close)) = (&opening_time, &closing_time) {
            if close <= open {
                errors.insert(
                    "closing_time".to_string(),
                    "must be after opening time".to_string(),
                );
            }
        }
        let slot_minutes = draft::parse_i32(&mut errors, "slot_minutes", &self.slot_minutes);
        if let Some(n) = slot_minutes {
            if n < 5 || n > 240 {
                errors.insert(
                    "slot_minutes".to_string(),
                    "must be between 5 and 240".to_string(),
                );
            }
        }

        match (clinic_name, email, opening_time, closing_time, slot_minutes) {
            (
                Some(clinic_name),
                Some(email),
                Some(opening_time),
                Some(closing_time),
                Some(slot_minutes),
            ) if errors.is_empty() => Ok(ClinicSettings {
                clinic_name,
                address: self.address.trim().to_string(),
                phone: self.phone.trim().to_string(),
                email,
                opening_time,
                closing_time,
                slot_minutes,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_must_be_ordered() {
        let draft = SettingsDraft {
            clinic_name: "Westside Clinic".into(),
            email: "front@westside.example".into(),
            opening_time: "18:00".into(),
            closing_time: "08:00".into(),
            slot_minutes: "30".into(),
            ..SettingsDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("closing_time").map(String::as_str),
            Some("must be after opening time")
        );
    }

    #[test]
    fn slot_length_is_bounded() {
        let draft = SettingsDraft {
            clinic_name: "Westside Clinic".into(),
            email: "front@westside.example".into(),
            opening_time: "08:00".into(),
            closing_time: "18:00".into(),
            slot_minutes: "3".into(),
            ..SettingsDraft::default()
        };
        assert!(draft.validate().unwrap_err().contains_key("slot_minutes"));
    }
}

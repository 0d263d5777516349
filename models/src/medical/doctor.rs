// models/src/medical/doctor.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::draft::{self, Draft, FieldErrors};
use crate::weekday::Weekday;
use crate::Keyed;

/// Shared by doctors and staff members.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Active,
    OnLeave,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::OnLeave => "On Leave",
            EmploymentStatus::Inactive => "Inactive",
            EmploymentStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for EmploymentStatus {
    fn badge(&self) -> Badge {
        match self {
            EmploymentStatus::Active => Badge::new("Active", "emerald"),
            EmploymentStatus::OnLeave => Badge::new("On Leave", "amber"),
            EmploymentStatus::Inactive => Badge::new("Inactive", "rose"),
            EmploymentStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

/// One weekday's working window. `available: false` keeps the stored times
/// so flipping the day back on restores them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub start: String, // "HH:MM"
    pub end: String,   // "HH:MM"
    pub available: bool,
}

impl Default for DayAvailability {
    fn default() -> Self {
        DayAvailability {
            start: "09:00".to_string(),
            end: "17:00".to_string(),
            available: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub license_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: EmploymentStatus,
    /// Always carries all seven weekdays once it has passed through a draft.
    #[serde(default)]
    pub availability: BTreeMap<Weekday, DayAvailability>,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Keyed for Doctor {
    fn key(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoctorDraft {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub license_number: String,
    pub phone: String,
    pub email: String,
    pub status: Option<EmploymentStatus>,
    pub availability: BTreeMap<Weekday, DayAvailability>,
}

impl Default for DoctorDraft {
    fn default() -> Self {
        let mut availability = BTreeMap::new();
        for day in Weekday::ALL {
            let available = !matches!(day, Weekday::Saturday | Weekday::Sunday);
            availability.insert(
                day,
                DayAvailability {
                    available,
                    ..DayAvailability::default()
                },
            );
        }
        DoctorDraft {
            first_name: String::new(),
            last_name: String::new(),
            specialization: String::new(),
            license_number: String::new(),
            phone: String::new(),
            email: String::new(),
            status: None,
            availability,
        }
    }
}

impl Draft for DoctorDraft {
    type Entity = Doctor;

    fn from_entity(entity: &Doctor) -> Self {
        let mut draft = DoctorDraft {
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            specialization: entity.specialization.clone(),
            license_number: entity.license_number.clone(),
            phone: entity.phone.clone().unwrap_or_default(),
            email: entity.email.clone().unwrap_or_default(),
            status: Some(entity.status),
            ..DoctorDraft::default()
        };
        // Stored days override the defaults; days the backend never sent
        // keep the default window so the form still shows all seven.
        for (day, slot) in &entity.availability {
            draft.availability.insert(*day, slot.clone());
        }
        draft
    }

    fn validate(&self) -> Result<Doctor, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = draft::require(&mut errors, "first_name", &self.first_name);
        let last_name = draft::require(&mut errors, "last_name", &self.last_name);
        let specialization = draft::require(&mut errors, "specialization", &self.specialization);
        let license_number = draft::require(&mut errors, "license_number", &self.license_number);
        let email = match self.email.trim() {
            "" => None,
            raw => draft::check_email(&mut errors, "email", raw),
        };

        for (day, slot) in &self.availability {
            if !slot.available {
                continue;
            }
            let start_field = format!("availability.{}.start", day.as_str().to_lowercase());
            let end_field = format!("availability.{}.end", day.as_str().to_lowercase());
            let start = draft::check_wall_clock(&mut errors, &start_field, &slot.start);
            let end = draft::check_wall_clock(&mut errors, &end_field, &slot.end);
            if let (Some(start), Some(end)) = (start, end) {
                // "HH:MM" compares correctly as text
                if end <= start {
                    errors.insert(end_field, "must be after start".to_string());
                }
            }
        }

        match (first_name, last_name, specialization, license_number) {
            (Some(first_name), Some(last_name), Some(specialization), Some(license_number))
                if errors.is_empty() =>
            {
                Ok(Doctor {
                    id: 0,
                    first_name,
                    last_name,
                    specialization,
                    license_number,
                    phone: draft::optional(&self.phone),
                    email,
                    status: self.status.unwrap_or(EmploymentStatus::Active),
                    availability: self.availability.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DoctorDraft {
        DoctorDraft {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            specialization: "Cardiology".into(),
            license_number: "MD-1044".into(),
            ..DoctorDraft::default()
        }
    }

    #[test]
    fn default_draft_carries_all_seven_days() {
        let d = DoctorDraft::default();
        assert_eq!(d.availability.len(), 7);
        assert!(!d.availability[&Weekday::Sunday].available);
        assert!(d.availability[&Weekday::Wednesday].available);
    }

    #[test]
    fn availability_window_must_be_ordered() {
        let mut d = draft();
        let slot = d.availability.get_mut(&Weekday::Monday).unwrap();
        slot.start = "17:00".into();
        slot.end = "09:00".into();
        let errors = d.validate().unwrap_err();
        assert_eq!(
            errors.get("availability.monday.end").map(String::as_str),
            Some("must be after start")
        );
    }

    #[test]
    fn unavailable_days_skip_time_checks() {
        let mut d = draft();
        let slot = d.availability.get_mut(&Weekday::Saturday).unwrap();
        slot.start = "garbage".into();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn partial_backend_map_is_filled_out_on_edit() {
        let mut doctor = draft().validate().unwrap();
        doctor.availability.clear();
        doctor
            .availability
            .insert(Weekday::Monday, DayAvailability::default());
        let edited = DoctorDraft::from_entity(&doctor);
        assert_eq!(edited.availability.len(), 7);
    }
}

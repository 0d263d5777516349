// models/src/medical/appointment.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::draft::{self, Draft, FieldErrors};
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
    NoShow,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::CheckedIn => "Checked In",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No Show",
            AppointmentStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for AppointmentStatus {
    fn badge(&self) -> Badge {
        match self {
            AppointmentStatus::Scheduled => Badge::new("Scheduled", "sky"),
            AppointmentStatus::Confirmed => Badge::new("Confirmed", "emerald"),
            AppointmentStatus::CheckedIn => Badge::new("Checked In", "indigo"),
            AppointmentStatus::Completed => Badge::new("Completed", "green"),
            AppointmentStatus::Cancelled => Badge::new("Cancelled", "rose"),
            AppointmentStatus::NoShow => Badge::new("No Show", "amber"),
            AppointmentStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppointmentType {
    Consultation,
    FollowUp,
    NewPatient,
    Procedure,
    Urgent,
    #[serde(other)]
    Unknown,
}

impl AppointmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Consultation => "Consultation",
            AppointmentType::FollowUp => "Follow Up",
            AppointmentType::NewPatient => "New Patient",
            AppointmentType::Procedure => "Procedure",
            AppointmentType::Urgent => "Urgent",
            AppointmentType::Unknown => "Unknown",
        }
    }
}

impl Badged for AppointmentType {
    fn badge(&self) -> Badge {
        match self {
            AppointmentType::Consultation => Badge::new("Consultation", "sky"),
            AppointmentType::FollowUp => Badge::new("Follow Up", "teal"),
            AppointmentType::NewPatient => Badge::new("New Patient", "violet"),
            AppointmentType::Procedure => Badge::new("Procedure", "indigo"),
            AppointmentType::Urgent => Badge::new("Urgent", "rose"),
            AppointmentType::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
            Priority::Unknown => "Unknown",
        }
    }
}

impl Badged for Priority {
    fn badge(&self) -> Badge {
        match self {
            Priority::Low => Badge::new("Low", "slate"),
            Priority::Normal => Badge::new("Normal", "sky"),
            Priority::High => Badge::new("High", "amber"),
            Priority::Urgent => Badge::new("Urgent", "rose"),
            Priority::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub room_id: Option<i32>,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub priority: Priority,
    pub notes: Option<String>,
}

impl Keyed for Appointment {
    fn key(&self) -> i32 {
        self.id
    }
}

/// String-typed mirror of `Appointment` bound to the add/edit form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub doctor_id: String,
    pub room_id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub appointment_type: Option<AppointmentType>,
    pub status: Option<AppointmentStatus>,
    pub priority: Option<Priority>,
    pub notes: String,
}

impl Draft for AppointmentDraft {
    type Entity = Appointment;

    fn from_entity(entity: &Appointment) -> Self {
        AppointmentDraft {
            patient_id: entity.patient_id.to_string(),
            doctor_id: entity.doctor_id.to_string(),
            room_id: entity.room_id.map(|id| id.to_string()).unwrap_or_default(),
            title: entity.title.clone(),
            start_time: entity.start_time.to_rfc3339(),
            end_time: entity.end_time.to_rfc3339(),
            appointment_type: Some(entity.appointment_type),
            status: Some(entity.status),
            priority: Some(entity.priority),
            notes: entity.notes.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<Appointment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let patient_id = draft::parse_i32(&mut errors, "patient_id", &self.patient_id);
        let doctor_id = draft::parse_i32(&mut errors, "doctor_id", &self.doctor_id);
        let room_id = match self.room_id.trim() {
            "" => None,
            raw => draft::parse_i32(&mut errors, "room_id", raw),
        };
        let title = draft::require(&mut errors, "title", &self.title);
        let start_time = draft::parse_datetime(&mut errors, "start_time", &self.start_time);
        let end_time = draft::parse_datetime(&mut errors, "end_time", &self.end_time);

        if let (Some(start), Some(end)) = (start_time, end_time) {
            if end <= start {
                errors.insert("end_time".to_string(), "must be after start time".to_string());
            }
        }

        if self.appointment_type.is_none() {
            errors.insert("appointment_type".to_string(), "required".to_string());
        }

        match (patient_id, doctor_id, title, start_time, end_time, self.appointment_type) {
            (
                Some(patient_id),
                Some(doctor_id),
                Some(title),
                Some(start_time),
                Some(end_time),
                Some(appointment_type),
            ) if errors.is_empty() => Ok(Appointment {
                id: 0, // assigned by the backend on create, overridden on update
                patient_id,
                doctor_id,
                room_id,
                title,
                start_time,
                end_time,
                appointment_type,
                status: self.status.unwrap_or(AppointmentStatus::Scheduled),
                priority: self.priority.unwrap_or(Priority::Normal),
                notes: draft::optional(&self.notes),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> AppointmentDraft {
        AppointmentDraft {
            patient_id: "12".into(),
            doctor_id: "3".into(),
            room_id: "".into(),
            title: "Annual physical".into(),
            start_time: "2026-09-01T09:00:00Z".into(),
            end_time: "2026-09-01T09:30:00Z".into(),
            appointment_type: Some(AppointmentType::Consultation),
            status: None,
            priority: None,
            notes: "".into(),
        }
    }

    #[test]
    fn valid_draft_coerces_with_defaults() {
        let appt = filled_draft().validate().expect("should validate");
        assert_eq!(appt.patient_id, 12);
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(appt.priority, Priority::Normal);
        assert_eq!(appt.room_id, None);
        assert_eq!(appt.notes, None);
    }

    #[test]
    fn end_before_start_is_a_field_error() {
        let mut draft = filled_draft();
        draft.end_time = "2026-09-01T08:00:00Z".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("end_time").map(String::as_str),
            Some("must be after start time")
        );
    }

    #[test]
    fn bad_number_is_a_field_error_not_a_panic() {
        let mut draft = filled_draft();
        draft.patient_id = "twelve".into();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains_key("patient_id"));
    }

    #[test]
    fn edit_round_trip_keeps_fields() {
        let appt = filled_draft().validate().unwrap();
        let draft = AppointmentDraft::from_entity(&appt);
        assert_eq!(draft.title, "Annual physical");
        assert_eq!(draft.status, Some(AppointmentStatus::Scheduled));
        let again = draft.validate().unwrap();
        assert_eq!(again.start_time, appt.start_time);
    }

    #[test]
    fn unknown_wire_status_degrades_to_neutral_badge() {
        let status: AppointmentStatus = serde_json::from_str("\"Tentative\"").unwrap();
        assert_eq!(status, AppointmentStatus::Unknown);
        assert_eq!(status.badge().color, "slate");
    }
}

// console/src/cli/handlers_utils.rs
//
// Shared helpers for the command handlers: parsing enum flags from the
// command line and printing rows, badges, and field-error maps.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use models::medical::{
    AppointmentStatus, AppointmentType, EmploymentStatus, LabStatus, MessageStatus, PatientStatus,
    Priority, RecordStatus, RoomStatus, RoomType, SampleStatus, StaffRole,
};
use models::{Badged, FieldErrors};

/// Terminal rendering of a status/type chip: label plus its color name.
pub fn badge_cell(value: &impl Badged) -> String {
    let badge = value.badge();
    format!("{} ({})", badge.label, badge.color)
}

/// Header line for a list command: the plain total for the identity view,
/// "visible of total" once search or filters narrow it.
pub fn count_line(noun: &str, visible: usize, total: usize, filtered: bool) -> String {
    if filtered {
        format!("{visible} of {total} {noun}")
    } else {
        format!("{total} {noun}")
    }
}

pub fn print_errors(errors: &FieldErrors) {
    for (field, message) in errors {
        println!("  {field}: {message}");
    }
}

pub fn parse_timestamp(flag: &str, raw: &str) -> Result<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => bail!("--{flag} must be an RFC 3339 date-time, got {raw:?}"),
    }
}

pub fn parse_appointment_status(raw: &str) -> Result<AppointmentStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "scheduled" => Ok(AppointmentStatus::Scheduled),
        "confirmed" => Ok(AppointmentStatus::Confirmed),
        "checked-in" | "checkedin" => Ok(AppointmentStatus::CheckedIn),
        "completed" => Ok(AppointmentStatus::Completed),
        "cancelled" | "canceled" => Ok(AppointmentStatus::Cancelled),
        "no-show" | "noshow" => Ok(AppointmentStatus::NoShow),
        _ => bail!("unknown appointment status {raw:?}"),
    }
}

pub fn parse_appointment_type(raw: &str) -> Result<AppointmentType> {
    match raw.to_ascii_lowercase().as_str() {
        "consultation" => Ok(AppointmentType::Consultation),
        "follow-up" | "followup" => Ok(AppointmentType::FollowUp),
        "new-patient" | "newpatient" => Ok(AppointmentType::NewPatient),
        "procedure" => Ok(AppointmentType::Procedure),
        "urgent" => Ok(AppointmentType::Urgent),
        _ => bail!("unknown appointment type {raw:?}"),
    }
}

pub fn parse_priority(raw: &str) -> Result<Priority> {
    match raw.to_ascii_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "normal" => Ok(Priority::Normal),
        "high" => Ok(Priority::High),
        "urgent" => Ok(Priority::Urgent),
        _ => bail!("unknown priority {raw:?}"),
    }
}

pub fn parse_patient_status(raw: &str) -> Result<PatientStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "active" => Ok(PatientStatus::Active),
        "inactive" => Ok(PatientStatus::Inactive),
        "deceased" => Ok(PatientStatus::Deceased),
        _ => bail!("unknown patient status {raw:?}"),
    }
}

pub fn parse_employment_status(raw: &str) -> Result<EmploymentStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "active" => Ok(EmploymentStatus::Active),
        "on-leave" | "onleave" => Ok(EmploymentStatus::OnLeave),
        "inactive" => Ok(EmploymentStatus::Inactive),
        _ => bail!("unknown employment status {raw:?}"),
    }
}

pub fn parse_room_type(raw: &str) -> Result<RoomType> {
    match raw.to_ascii_lowercase().as_str() {
        "consultation" => Ok(RoomType::Consultation),
        "examination" => Ok(RoomType::Examination),
        "operating" => Ok(RoomType::Operating),
        "recovery" => Ok(RoomType::Recovery),
        "ward" => Ok(RoomType::Ward),
        _ => bail!("unknown room type {raw:?}"),
    }
}

pub fn parse_room_status(raw: &str) -> Result<RoomStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "available" => Ok(RoomStatus::Available),
        "occupied" => Ok(RoomStatus::Occupied),
        "cleaning" => Ok(RoomStatus::Cleaning),
        "maintenance" => Ok(RoomStatus::Maintenance),
        _ => bail!("unknown room status {raw:?}"),
    }
}

pub fn parse_staff_role(raw: &str) -> Result<StaffRole> {
    match raw.to_ascii_lowercase().as_str() {
        "nurse" => Ok(StaffRole::Nurse),
        "receptionist" => Ok(StaffRole::Receptionist),
        "technician" => Ok(StaffRole::Technician),
        "administrator" | "admin" => Ok(StaffRole::Administrator),
        "assistant" => Ok(StaffRole::Assistant),
        _ => bail!("unknown staff role {raw:?}"),
    }
}

pub fn parse_message_status(raw: &str) -> Result<MessageStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "unread" => Ok(MessageStatus::Unread),
        "read" => Ok(MessageStatus::Read),
        "archived" => Ok(MessageStatus::Archived),
        _ => bail!("unknown message status {raw:?}"),
    }
}

pub fn parse_lab_status(raw: &str) -> Result<LabStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "pending" => Ok(LabStatus::Pending),
        "completed" => Ok(LabStatus::Completed),
        "amended" => Ok(LabStatus::Amended),
        _ => bail!("unknown lab status {raw:?}"),
    }
}

pub fn parse_sample_status(raw: &str) -> Result<SampleStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "in-stock" | "instock" => Ok(SampleStatus::InStock),
        "low" => Ok(SampleStatus::Low),
        "expired" => Ok(SampleStatus::Expired),
        "recalled" => Ok(SampleStatus::Recalled),
        _ => bail!("unknown sample status {raw:?}"),
    }
}

pub fn parse_record_status(raw: &str) -> Result<RecordStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "draft" => Ok(RecordStatus::Draft),
        "final" => Ok(RecordStatus::Final),
        "amended" => Ok(RecordStatus::Amended),
        _ => bail!("unknown record status {raw:?}"),
    }
}

/// Applies a `--flag value` override to a draft field, leaving the field
/// alone when the flag was not given.
pub fn apply(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_accepts_common_spellings() {
        assert_eq!(
            parse_appointment_status("No-Show").unwrap(),
            AppointmentStatus::NoShow
        );
        assert_eq!(
            parse_appointment_status("canceled").unwrap(),
            AppointmentStatus::Cancelled
        );
        assert!(parse_appointment_status("tentative").is_err());
    }

    #[test]
    fn count_line_distinguishes_narrowed_views() {
        assert_eq!(count_line("rooms", 4, 4, false), "4 rooms");
        assert_eq!(count_line("rooms", 1, 4, true), "1 of 4 rooms");
        assert_eq!(count_line("rooms", 0, 4, true), "0 of 4 rooms");
    }

    #[test]
    fn apply_only_overrides_given_flags() {
        let mut field = "kept".to_string();
        apply(&mut field, None);
        assert_eq!(field, "kept");
        apply(&mut field, Some("new".into()));
        assert_eq!(field, "new");
    }
}

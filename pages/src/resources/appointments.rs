// pages/src/resources/appointments.rs
use chrono::{DateTime, Utc};

use models::medical::{
    Appointment, AppointmentDraft, AppointmentStatus, AppointmentType, Priority,
};

use crate::list_controller::{FilterSet, Searchable};
use crate::page::ResourcePage;

impl Searchable for Appointment {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

/// Status, type, priority, and an inclusive start-time range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentFilters {
    pub status: Option<AppointmentStatus>,
    pub appointment_type: Option<AppointmentType>,
    pub priority: Option<Priority>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl FilterSet<Appointment> for AppointmentFilters {
    fn matches(&self, item: &Appointment) -> bool {
        self.status.map_or(true, |s| item.status == s)
            && self
                .appointment_type
                .map_or(true, |t| item.appointment_type == t)
            && self.priority.map_or(true, |p| item.priority == p)
            && self.from.map_or(true, |from| item.start_time >= from)
            && self.to.map_or(true, |to| item.start_time <= to)
    }

    fn is_neutral(&self) -> bool {
        *self == AppointmentFilters::default()
    }
}

pub type AppointmentsPage = ResourcePage<Appointment, AppointmentDraft, AppointmentFilters>;

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: i32, start: &str, priority: Priority) -> Appointment {
        Appointment {
            id,
            patient_id: 1,
            doctor_id: 1,
            room_id: None,
            title: "Visit".into(),
            start_time: start.parse().unwrap(),
            end_time: start.parse().unwrap(),
            appointment_type: AppointmentType::Consultation,
            status: AppointmentStatus::Scheduled,
            priority,
            notes: None,
        }
    }

    #[test]
    fn date_range_is_inclusive_on_start_time() {
        let filters = AppointmentFilters {
            from: Some("2026-09-01T00:00:00Z".parse().unwrap()),
            to: Some("2026-09-02T00:00:00Z".parse().unwrap()),
            ..AppointmentFilters::default()
        };
        assert!(filters.matches(&appointment(1, "2026-09-01T00:00:00Z", Priority::Normal)));
        assert!(filters.matches(&appointment(2, "2026-09-02T00:00:00Z", Priority::Normal)));
        assert!(!filters.matches(&appointment(3, "2026-09-03T09:00:00Z", Priority::Normal)));
    }

    #[test]
    fn combined_filters_are_conjunctive() {
        let filters = AppointmentFilters {
            priority: Some(Priority::Urgent),
            status: Some(AppointmentStatus::Scheduled),
            ..AppointmentFilters::default()
        };
        assert!(filters.matches(&appointment(1, "2026-09-01T09:00:00Z", Priority::Urgent)));
        assert!(!filters.matches(&appointment(2, "2026-09-01T09:00:00Z", Priority::Low)));
        assert!(!filters.is_neutral());
        assert!(AppointmentFilters::default().is_neutral());
    }
}

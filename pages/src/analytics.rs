// pages/src/analytics.rs
//
// Derived summaries over already-fetched collections. Pure functions, no
// I/O: the analytics page reads whatever the list pages fetched.

use std::collections::BTreeMap;

use models::medical::{Appointment, AppointmentStatus, Patient, Room, RoomStatus};

pub fn appointments_by_status(items: &[Appointment]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.status.as_str()).or_insert(0) += 1;
    }
    counts
}

pub fn patients_by_status(items: &[Patient]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.status.as_str()).or_insert(0) += 1;
    }
    counts
}

/// (occupied, total) per room type.
pub fn occupancy_by_room_type(items: &[Room]) -> BTreeMap<&'static str, (usize, usize)> {
    let mut counts: BTreeMap<&'static str, (usize, usize)> = BTreeMap::new();
    for room in items {
        let entry = counts.entry(room.room_type.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if room.status == RoomStatus::Occupied {
            entry.0 += 1;
        }
    }
    counts
}

/// No-shows over concluded appointments (completed + no-show). Zero when
/// nothing has concluded yet.
pub fn no_show_rate(items: &[Appointment]) -> f64 {
    let no_shows = items
        .iter()
        .filter(|a| a.status == AppointmentStatus::NoShow)
        .count();
    let concluded = items
        .iter()
        .filter(|a| {
            matches!(
                a.status,
                AppointmentStatus::Completed | AppointmentStatus::NoShow
            )
        })
        .count();
    if concluded == 0 {
        0.0
    } else {
        no_shows as f64 / concluded as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::medical::{AppointmentType, Priority};

    fn appointment(id: i32, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_id: 1,
            doctor_id: 1,
            room_id: None,
            title: "Visit".into(),
            start_time: "2026-09-01T09:00:00Z".parse().unwrap(),
            end_time: "2026-09-01T09:30:00Z".parse().unwrap(),
            appointment_type: AppointmentType::Consultation,
            status,
            priority: Priority::Normal,
            notes: None,
        }
    }

    #[test]
    fn counts_group_by_status_label() {
        let items = vec![
            appointment(1, AppointmentStatus::Scheduled),
            appointment(2, AppointmentStatus::Scheduled),
            appointment(3, AppointmentStatus::Cancelled),
        ];
        let counts = appointments_by_status(&items);
        assert_eq!(counts.get("Scheduled"), Some(&2));
        assert_eq!(counts.get("Cancelled"), Some(&1));
    }

    #[test]
    fn no_show_rate_ignores_pending_appointments() {
        let items = vec![
            appointment(1, AppointmentStatus::Scheduled),
            appointment(2, AppointmentStatus::Completed),
            appointment(3, AppointmentStatus::NoShow),
        ];
        assert!((no_show_rate(&items) - 0.5).abs() < f64::EPSILON);
        assert_eq!(no_show_rate(&[]), 0.0);
    }
}

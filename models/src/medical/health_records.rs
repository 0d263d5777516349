// models/src/medical/health_records.rs
//
// Read-only nested views fetched on demand: the per-patient health record
// bundle and the calendar projection of appointments. These never pass
// through a draft; the backend is the only writer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::medical::appointment::{Appointment, AppointmentStatus};
use crate::medical::patient::Patient;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: i32,
    pub patient_id: i32,
    pub encounter_type: String,
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i32,
    pub patient_id: i32,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub prescribed_by: String,
    pub started_on: NaiveDate,
}

/// Payload of `GET /patients/{id}/health-records`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthRecords {
    pub patient: Patient,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub encounters: Vec<Encounter>,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
}

/// One row of `GET /appointments/calendar/data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub id: i32,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

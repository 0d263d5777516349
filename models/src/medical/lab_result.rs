// models/src/medical/lab_result.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LabStatus {
    Pending,
    Completed,
    Amended,
    #[serde(other)]
    Unknown,
}

impl LabStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabStatus::Pending => "Pending",
            LabStatus::Completed => "Completed",
            LabStatus::Amended => "Amended",
            LabStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for LabStatus {
    fn badge(&self) -> Badge {
        match self {
            LabStatus::Pending => Badge::new("Pending", "amber"),
            LabStatus::Completed => Badge::new("Completed", "emerald"),
            LabStatus::Amended => Badge::new("Amended", "violet"),
            LabStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub id: i32,
    pub patient_id: i32,
    pub test_name: String,
    pub value: String,
    pub unit: Option<String>,
    pub reference_range: Option<String>,
    pub abnormal_flag: Option<String>, // e.g., "H", "L", "Normal"
    pub status: LabStatus,
    pub resulted_at: DateTime<Utc>,
}

impl Keyed for LabResult {
    fn key(&self) -> i32 {
        self.id
    }
}

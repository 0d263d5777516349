// models/src/medical/medical_record.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RecordType {
    Encounter,
    Diagnosis,
    Procedure,
    Immunization,
    #[serde(other)]
    Unknown,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Encounter => "Encounter",
            RecordType::Diagnosis => "Diagnosis",
            RecordType::Procedure => "Procedure",
            RecordType::Immunization => "Immunization",
            RecordType::Unknown => "Unknown",
        }
    }
}

impl Badged for RecordType {
    fn badge(&self) -> Badge {
        match self {
            RecordType::Encounter => Badge::new("Encounter", "sky"),
            RecordType::Diagnosis => Badge::new("Diagnosis", "amber"),
            RecordType::Procedure => Badge::new("Procedure", "indigo"),
            RecordType::Immunization => Badge::new("Immunization", "teal"),
            RecordType::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RecordStatus {
    Draft,
    Final,
    Amended,
    #[serde(other)]
    Unknown,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Draft => "Draft",
            RecordStatus::Final => "Final",
            RecordStatus::Amended => "Amended",
            RecordStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for RecordStatus {
    fn badge(&self) -> Badge {
        match self {
            RecordStatus::Draft => Badge::new("Draft", "amber"),
            RecordStatus::Final => Badge::new("Final", "emerald"),
            RecordStatus::Amended => Badge::new("Amended", "violet"),
            RecordStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i32,
    pub patient_id: i32,
    pub record_type: RecordType,
    pub title: String,
    pub summary: String,
    pub status: RecordStatus,
    pub recorded_at: DateTime<Utc>,
}

impl Keyed for MedicalRecord {
    fn key(&self) -> i32 {
        self.id
    }
}

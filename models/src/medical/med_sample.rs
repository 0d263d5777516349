// models/src/medical/med_sample.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SampleStatus {
    InStock,
    Low,
    Expired,
    Recalled,
    #[serde(other)]
    Unknown,
}

impl SampleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleStatus::InStock => "In Stock",
            SampleStatus::Low => "Low",
            SampleStatus::Expired => "Expired",
            SampleStatus::Recalled => "Recalled",
            SampleStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for SampleStatus {
    fn badge(&self) -> Badge {
        match self {
            SampleStatus::InStock => Badge::new("In Stock", "emerald"),
            SampleStatus::Low => Badge::new("Low", "amber"),
            SampleStatus::Expired => Badge::new("Expired", "rose"),
            SampleStatus::Recalled => Badge::new("Recalled", "violet"),
            SampleStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

/// Medication sample held at the front desk, tracked by lot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedSample {
    pub id: i32,
    pub medication_name: String,
    pub manufacturer: String,
    pub lot_number: String,
    pub quantity: i32,
    pub expires_on: NaiveDate,
    pub status: SampleStatus,
}

impl Keyed for MedSample {
    fn key(&self) -> i32 {
        self.id
    }
}

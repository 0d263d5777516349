// models/src/medical/message.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MessageStatus {
    Unread,
    Read,
    Archived,
    #[serde(other)]
    Unknown,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Unread => "Unread",
            MessageStatus::Read => "Read",
            MessageStatus::Archived => "Archived",
            MessageStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for MessageStatus {
    fn badge(&self) -> Badge {
        match self {
            MessageStatus::Unread => Badge::new("Unread", "sky"),
            MessageStatus::Read => Badge::new("Read", "emerald"),
            MessageStatus::Archived => Badge::new("Archived", "slate"),
            MessageStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MessageType {
    General,
    Referral,
    LabUpdate,
    Billing,
    #[serde(other)]
    Unknown,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::General => "General",
            MessageType::Referral => "Referral",
            MessageType::LabUpdate => "Lab Update",
            MessageType::Billing => "Billing",
            MessageType::Unknown => "Unknown",
        }
    }
}

impl Badged for MessageType {
    fn badge(&self) -> Badge {
        match self {
            MessageType::General => Badge::new("General", "sky"),
            MessageType::Referral => Badge::new("Referral", "violet"),
            MessageType::LabUpdate => Badge::new("Lab Update", "teal"),
            MessageType::Billing => Badge::new("Billing", "amber"),
            MessageType::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub message_type: MessageType,
    pub status: MessageStatus,
    pub received_at: DateTime<Utc>,
}

impl Keyed for Message {
    fn key(&self) -> i32 {
        self.id
    }
}

// models/src/medical/room.rs
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::draft::{self, Draft, FieldErrors};
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoomType {
    Consultation,
    Examination,
    Operating,
    Recovery,
    Ward,
    #[serde(other)]
    Unknown,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Consultation => "Consultation",
            RoomType::Examination => "Examination",
            RoomType::Operating => "Operating",
            RoomType::Recovery => "Recovery",
            RoomType::Ward => "Ward",
            RoomType::Unknown => "Unknown",
        }
    }
}

impl Badged for RoomType {
    fn badge(&self) -> Badge {
        match self {
            RoomType::Consultation => Badge::new("Consultation", "sky"),
            RoomType::Examination => Badge::new("Examination", "teal"),
            RoomType::Operating => Badge::new("Operating", "rose"),
            RoomType::Recovery => Badge::new("Recovery", "violet"),
            RoomType::Ward => Badge::new("Ward", "indigo"),
            RoomType::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
    #[serde(other)]
    Unknown,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Cleaning => "Cleaning",
            RoomStatus::Maintenance => "Maintenance",
            RoomStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for RoomStatus {
    fn badge(&self) -> Badge {
        match self {
            RoomStatus::Available => Badge::new("Available", "emerald"),
            RoomStatus::Occupied => Badge::new("Occupied", "amber"),
            RoomStatus::Cleaning => Badge::new("Cleaning", "sky"),
            RoomStatus::Maintenance => Badge::new("Maintenance", "rose"),
            RoomStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub status: RoomStatus,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Keyed for Room {
    fn key(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomDraft {
    pub name: String,
    pub room_type: Option<RoomType>,
    pub capacity: String,
    pub status: Option<RoomStatus>,
    /// Comma-separated in the form.
    pub equipment: String,
}

impl Draft for RoomDraft {
    type Entity = Room;

    fn from_entity(entity: &Room) -> Self {
        RoomDraft {
            name: entity.name.clone(),
            room_type: Some(entity.room_type),
            capacity: entity.capacity.to_string(),
            status: Some(entity.status),
            equipment: entity.equipment.join(", "),
        }
    }

    fn validate(&self) -> Result<Room, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = draft::require(&mut errors, "name", &self.name);
        let capacity = draft::parse_i32(&mut errors, "capacity", &self.capacity);
        if let Some(n) = capacity {
            if n < 1 {
                errors.insert("capacity".to_string(), "must be at least 1".to_string());
            }
        }
        if self.room_type.is_none() {
            errors.insert("room_type".to_string(), "required".to_string());
        }

        match (name, capacity, self.room_type) {
            (Some(name), Some(capacity), Some(room_type)) if errors.is_empty() => Ok(Room {
                id: 0,
                name,
                room_type,
                capacity,
                status: self.status.unwrap_or(RoomStatus::Available),
                equipment: draft::split_list(&self.equipment),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_must_be_positive() {
        let draft = RoomDraft {
            name: "OR-2".into(),
            room_type: Some(RoomType::Operating),
            capacity: "0".into(),
            ..RoomDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("capacity").map(String::as_str),
            Some("must be at least 1")
        );
    }

    #[test]
    fn equipment_splits_on_commas() {
        let draft = RoomDraft {
            name: "Exam 1".into(),
            room_type: Some(RoomType::Examination),
            capacity: "2".into(),
            equipment: "otoscope, scale".into(),
            ..RoomDraft::default()
        };
        let room = draft.validate().unwrap();
        assert_eq!(room.equipment, vec!["otoscope", "scale"]);
        assert_eq!(room.status, RoomStatus::Available);
    }
}

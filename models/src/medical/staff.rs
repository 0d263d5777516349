// models/src/medical/staff.rs
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::draft::{self, Draft, FieldErrors};
use crate::medical::doctor::EmploymentStatus;
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum StaffRole {
    Nurse,
    Receptionist,
    Technician,
    Administrator,
    Assistant,
    #[serde(other)]
    Unknown,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Nurse => "Nurse",
            StaffRole::Receptionist => "Receptionist",
            StaffRole::Technician => "Technician",
            StaffRole::Administrator => "Administrator",
            StaffRole::Assistant => "Assistant",
            StaffRole::Unknown => "Unknown",
        }
    }
}

impl Badged for StaffRole {
    fn badge(&self) -> Badge {
        match self {
            StaffRole::Nurse => Badge::new("Nurse", "teal"),
            StaffRole::Receptionist => Badge::new("Receptionist", "sky"),
            StaffRole::Technician => Badge::new("Technician", "indigo"),
            StaffRole::Administrator => Badge::new("Administrator", "violet"),
            StaffRole::Assistant => Badge::new("Assistant", "emerald"),
            StaffRole::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: StaffRole,
    pub department: String,
    pub status: EmploymentStatus,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Keyed for StaffMember {
    fn key(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaffDraft {
    pub first_name: String,
    pub last_name: String,
    pub role: Option<StaffRole>,
    pub department: String,
    pub status: Option<EmploymentStatus>,
    pub phone: String,
    pub email: String,
}

impl Draft for StaffDraft {
    type Entity = StaffMember;

    fn from_entity(entity: &StaffMember) -> Self {
        StaffDraft {
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            role: Some(entity.role),
            department: entity.department.clone(),
            status: Some(entity.status),
            phone: entity.phone.clone().unwrap_or_default(),
            email: entity.email.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<StaffMember, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = draft::require(&mut errors, "first_name", &self.first_name);
        let last_name = draft::require(&mut errors, "last_name", &self.last_name);
        let department = draft::require(&mut errors, "department", &self.department);
        let email = match self.email.trim() {
            "" => None,
            raw => draft::check_email(&mut errors, "email", raw),
        };
        if self.role.is_none() {
            errors.insert("role".to_string(), "required".to_string());
        }

        match (first_name, last_name, department, self.role) {
            (Some(first_name), Some(last_name), Some(department), Some(role))
                if errors.is_empty() =>
            {
                Ok(StaffMember {
                    id: 0,
                    first_name,
                    last_name,
                    role,
                    department,
                    status: self.status.unwrap_or(EmploymentStatus::Active),
                    phone: draft::optional(&self.phone),
                    email,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_required() {
        let draft = StaffDraft {
            first_name: "Rita".into(),
            last_name: "Nguyen".into(),
            department: "Front Desk".into(),
            ..StaffDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("role").map(String::as_str), Some("required"));
    }

    #[test]
    fn cancel_after_edit_leaves_entity_untouched() {
        let member = StaffMember {
            id: 4,
            first_name: "Rita".into(),
            last_name: "Nguyen".into(),
            role: StaffRole::Receptionist,
            department: "Front Desk".into(),
            status: EmploymentStatus::Active,
            phone: None,
            email: None,
        };
        let mut draft = StaffDraft::from_entity(&member);
        draft.first_name = "Edited".into();
        // the draft is a copy; mutating it must not alias the entity
        assert_eq!(member.first_name, "Rita");
    }
}

// models/src/medical/patient.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, Badged};
use crate::draft::{self, Draft, FieldErrors};
use crate::Keyed;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    Inactive,
    Deceased,
    #[serde(other)]
    Unknown,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Inactive => "Inactive",
            PatientStatus::Deceased => "Deceased",
            PatientStatus::Unknown => "Unknown",
        }
    }
}

impl Badged for PatientStatus {
    fn badge(&self) -> Badge {
        match self {
            PatientStatus::Active => Badge::new("Active", "emerald"),
            PatientStatus::Inactive => Badge::new("Inactive", "amber"),
            PatientStatus::Deceased => Badge::new("Deceased", "rose"),
            PatientStatus::Unknown => Badge::neutral("Unknown"),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactBlock {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InsuranceBlock {
    pub provider: Option<String>,
    pub policy_number: Option<String>,
    pub group_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub sex: Option<String>, // MALE, FEMALE, OTHER, UNKNOWN
    #[serde(default)]
    pub contact: ContactBlock,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub insurance: InsuranceBlock,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    pub status: PatientStatus,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Keyed for Patient {
    fn key(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub sex: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_name: String,
    pub emergency_relationship: String,
    pub emergency_phone: String,
    pub insurance_provider: String,
    pub insurance_policy: String,
    pub insurance_group: String,
    /// Comma-separated in the form, split at submit time.
    pub allergies: String,
    pub medical_history: String,
    pub status: Option<PatientStatus>,
}

impl Draft for PatientDraft {
    type Entity = Patient;

    fn from_entity(entity: &Patient) -> Self {
        PatientDraft {
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            date_of_birth: entity.date_of_birth.format("%Y-%m-%d").to_string(),
            sex: entity.sex.clone().unwrap_or_default(),
            phone: entity.contact.phone.clone().unwrap_or_default(),
            email: entity.contact.email.clone().unwrap_or_default(),
            address: entity.contact.address.clone().unwrap_or_default(),
            emergency_name: entity.emergency_contact.name.clone().unwrap_or_default(),
            emergency_relationship: entity
                .emergency_contact
                .relationship
                .clone()
                .unwrap_or_default(),
            emergency_phone: entity.emergency_contact.phone.clone().unwrap_or_default(),
            insurance_provider: entity.insurance.provider.clone().unwrap_or_default(),
            insurance_policy: entity.insurance.policy_number.clone().unwrap_or_default(),
            insurance_group: entity.insurance.group_number.clone().unwrap_or_default(),
            allergies: entity.allergies.join(", "),
            medical_history: entity.medical_history.join(", "),
            status: Some(entity.status),
        }
    }

    fn validate(&self) -> Result<Patient, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = draft::require(&mut errors, "first_name", &self.first_name);
        let last_name = draft::require(&mut errors, "last_name", &self.last_name);
        let date_of_birth = draft::parse_date(&mut errors, "date_of_birth", &self.date_of_birth);
        let email = match self.email.trim() {
            "" => None,
            raw => draft::check_email(&mut errors, "email", raw),
        };

        match (first_name, last_name, date_of_birth) {
            (Some(first_name), Some(last_name), Some(date_of_birth)) if errors.is_empty() => {
                Ok(Patient {
                    id: 0,
                    first_name,
                    last_name,
                    date_of_birth,
                    sex: draft::optional(&self.sex),
                    contact: ContactBlock {
                        phone: draft::optional(&self.phone),
                        email,
                        address: draft::optional(&self.address),
                    },
                    emergency_contact: EmergencyContact {
                        name: draft::optional(&self.emergency_name),
                        relationship: draft::optional(&self.emergency_relationship),
                        phone: draft::optional(&self.emergency_phone),
                    },
                    insurance: InsuranceBlock {
                        provider: draft::optional(&self.insurance_provider),
                        policy_number: draft::optional(&self.insurance_policy),
                        group_number: draft::optional(&self.insurance_group),
                    },
                    allergies: draft::split_list(&self.allergies),
                    medical_history: draft::split_list(&self.medical_history),
                    status: self.status.unwrap_or(PatientStatus::Active),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PatientDraft {
        PatientDraft {
            first_name: "John".into(),
            last_name: "Doe".into(),
            date_of_birth: "1984-03-09".into(),
            allergies: "penicillin, latex".into(),
            ..PatientDraft::default()
        }
    }

    #[test]
    fn minimal_draft_validates() {
        let patient = draft().validate().expect("should validate");
        assert_eq!(patient.full_name(), "John Doe");
        assert_eq!(patient.allergies, vec!["penicillin", "latex"]);
        assert_eq!(patient.status, PatientStatus::Active);
    }

    #[test]
    fn bad_email_and_bad_date_both_reported() {
        let mut d = draft();
        d.email = "not-an-address".into();
        d.date_of_birth = "03/09/1984".into();
        let errors = d.validate().unwrap_err();
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("date_of_birth"));
    }

    #[test]
    fn missing_blocks_deserialize_to_defaults() {
        let patient: Patient = serde_json::from_str(
            r#"{"id":7,"first_name":"Jane","last_name":"Roe",
                "date_of_birth":"1990-01-01","sex":null,"status":"Active"}"#,
        )
        .unwrap();
        assert_eq!(patient.contact, ContactBlock::default());
        assert!(patient.allergies.is_empty());
    }
}

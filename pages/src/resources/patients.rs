// pages/src/resources/patients.rs
use models::medical::{Patient, PatientDraft, PatientStatus};

use crate::list_controller::{FilterSet, Searchable};
use crate::page::ResourcePage;

impl Searchable for Patient {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.contact.email.clone().unwrap_or_default(),
            self.contact.phone.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientFilters {
    pub status: Option<PatientStatus>,
}

impl FilterSet<Patient> for PatientFilters {
    fn matches(&self, item: &Patient) -> bool {
        self.status.map_or(true, |s| item.status == s)
    }

    fn is_neutral(&self) -> bool {
        self.status.is_none()
    }
}

pub type PatientsPage = ResourcePage<Patient, PatientDraft, PatientFilters>;

// pages/src/resources/doctors.rs
use models::medical::{Doctor, DoctorDraft, EmploymentStatus};

use crate::list_controller::{FilterSet, Searchable};
use crate::page::ResourcePage;

impl Searchable for Doctor {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.full_name(), self.specialization.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DoctorFilters {
    pub status: Option<EmploymentStatus>,
    /// Exact specialization, compared case-insensitively.
    pub specialization: Option<String>,
}

impl FilterSet<Doctor> for DoctorFilters {
    fn matches(&self, item: &Doctor) -> bool {
        self.status.map_or(true, |s| item.status == s)
            && self.specialization.as_ref().map_or(true, |wanted| {
                item.specialization.eq_ignore_ascii_case(wanted)
            })
    }

    fn is_neutral(&self) -> bool {
        self.status.is_none() && self.specialization.is_none()
    }
}

pub type DoctorsPage = ResourcePage<Doctor, DoctorDraft, DoctorFilters>;

// pages/src/resources/staff.rs
use models::medical::{EmploymentStatus, StaffDraft, StaffMember, StaffRole};

use crate::list_controller::{FilterSet, Searchable};
use crate::page::ResourcePage;

impl Searchable for StaffMember {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.full_name(), self.department.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaffFilters {
    pub role: Option<StaffRole>,
    pub status: Option<EmploymentStatus>,
}

impl FilterSet<StaffMember> for StaffFilters {
    fn matches(&self, item: &StaffMember) -> bool {
        self.role.map_or(true, |r| item.role == r)
            && self.status.map_or(true, |s| item.status == s)
    }

    fn is_neutral(&self) -> bool {
        self.role.is_none() && self.status.is_none()
    }
}

pub type StaffPage = ResourcePage<StaffMember, StaffDraft, StaffFilters>;

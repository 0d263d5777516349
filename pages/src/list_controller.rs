// pages/src/list_controller.rs
//
// Holds the fetched collection plus the search term and filter state, and
// recomputes the visible rows synchronously on every change. Lists here are
// dozens to hundreds of rows, so a full scan per keystroke is fine. No
// pagination, no debouncing, no indexing.

/// Fields the page's search box scans, lowercased substring match.
pub trait Searchable {
    fn search_haystack(&self) -> Vec<String>;
}

/// A page's named filters. `matches` must be a pure function of the entity
/// and the filter state; `is_neutral` reports the all-"all" default.
pub trait FilterSet<T>: Default {
    fn matches(&self, item: &T) -> bool;
    fn is_neutral(&self) -> bool;
}

pub struct ListController<T, F> {
    items: Vec<T>,
    pub search_term: String,
    pub filters: F,
}

impl<T: Searchable, F: FilterSet<T>> ListController<T, F> {
    pub fn new() -> Self {
        ListController {
            items: Vec::new(),
            search_term: String::new(),
            filters: F::default(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wholesale replacement after a list fetch. This is the only write path.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Back to the identity view: empty search, default filters.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.filters = F::default();
    }

    /// Whether the view is narrowed at all. Render layers use this to tell
    /// "the list is empty" apart from "nothing matches the criteria".
    pub fn is_filtered(&self) -> bool {
        !self.search_term.trim().is_empty() || !self.filters.is_neutral()
    }

    /// Every visible item satisfies the search term and every active
    /// filter; with a blank term and neutral filters this is the whole
    /// list. Never mutates `items`.
    pub fn visible_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.matches_search(item) && self.filters.matches(item))
            .collect()
    }

    fn matches_search(&self, item: &T) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        item.search_haystack()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

impl<T: Searchable, F: FilterSet<T>> Default for ListController<T, F> {
    fn default() -> Self {
        ListController::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::appointments::AppointmentFilters;
    use crate::resources::patients::PatientFilters;
    use models::medical::{
        Appointment, AppointmentStatus, AppointmentType, Patient, PatientStatus, Priority,
    };

    fn appointment(id: i32, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_id: 1,
            doctor_id: 1,
            room_id: None,
            title: format!("Visit {id}"),
            start_time: "2026-09-01T09:00:00Z".parse().unwrap(),
            end_time: "2026-09-01T09:30:00Z".parse().unwrap(),
            appointment_type: AppointmentType::Consultation,
            status,
            priority: Priority::Normal,
            notes: None,
        }
    }

    fn patient(id: i32, first: &str, last: &str) -> Patient {
        Patient {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: "1980-01-01".parse().unwrap(),
            sex: None,
            contact: Default::default(),
            emergency_contact: Default::default(),
            insurance: Default::default(),
            allergies: vec![],
            medical_history: vec![],
            status: PatientStatus::Active,
        }
    }

    #[test]
    fn status_filter_keeps_only_matching_rows() {
        let mut list: ListController<Appointment, AppointmentFilters> = ListController::new();
        list.replace_items(vec![
            appointment(1, AppointmentStatus::Scheduled),
            appointment(2, AppointmentStatus::Cancelled),
        ]);
        list.filters.status = Some(AppointmentStatus::Cancelled);
        let visible = list.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut list: ListController<Patient, PatientFilters> = ListController::new();
        list.replace_items(vec![patient(1, "John", "Doe"), patient(2, "Jane", "Roe")]);
        list.set_search_term("john");
        let visible = list.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "John");
    }

    #[test]
    fn is_filtered_tracks_search_and_filters() {
        let mut list: ListController<Appointment, AppointmentFilters> = ListController::new();
        assert!(!list.is_filtered());
        list.set_search_term("  ");
        assert!(!list.is_filtered(), "blank search is still the identity view");
        list.set_search_term("visit");
        assert!(list.is_filtered());
        list.reset_filters();
        list.filters.status = Some(AppointmentStatus::Cancelled);
        assert!(list.is_filtered());
        list.reset_filters();
        assert!(!list.is_filtered());
    }

    #[test]
    fn identity_recovery_when_everything_is_reset() {
        let mut list: ListController<Appointment, AppointmentFilters> = ListController::new();
        list.replace_items(vec![
            appointment(1, AppointmentStatus::Scheduled),
            appointment(2, AppointmentStatus::Cancelled),
            appointment(3, AppointmentStatus::NoShow),
        ]);
        list.set_search_term("visit 2");
        list.filters.status = Some(AppointmentStatus::Cancelled);
        assert_eq!(list.visible_items().len(), 1);
        list.reset_filters();
        assert_eq!(list.visible_items().len(), list.items().len());
    }

    #[test]
    fn visible_is_always_a_subset_satisfying_every_filter() {
        let mut list: ListController<Appointment, AppointmentFilters> = ListController::new();
        let all = vec![
            appointment(1, AppointmentStatus::Scheduled),
            appointment(2, AppointmentStatus::Cancelled),
            appointment(3, AppointmentStatus::Scheduled),
        ];
        list.replace_items(all);
        list.set_search_term("visit");
        list.filters.status = Some(AppointmentStatus::Scheduled);
        for item in list.visible_items() {
            assert!(list.items().iter().any(|i| i.id == item.id));
            assert_eq!(item.status, AppointmentStatus::Scheduled);
        }
        // source list untouched by reads
        assert_eq!(list.items().len(), 3);
    }
}

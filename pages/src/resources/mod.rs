// pages/src/resources/mod.rs
//
// Per-resource wiring: which fields the search box scans, which named
// filters the page offers, and the page type aliases the console binds to.

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod readonly;
pub mod rooms;
pub mod staff;

pub use appointments::{AppointmentFilters, AppointmentsPage};
pub use doctors::{DoctorFilters, DoctorsPage};
pub use patients::{PatientFilters, PatientsPage};
pub use readonly::{
    LabFilters, LabResultsPage, MessageFilters, MessagesPage, RecordFilters, RecordsPage,
    SampleFilters, SamplesPage,
};
pub use rooms::{RoomFilters, RoomsPage};
pub use staff::{StaffFilters, StaffPage};

// models/src/medical/mod.rs

pub mod appointment;
pub mod doctor;
pub mod health_records;
pub mod lab_result;
pub mod med_sample;
pub mod medical_record;
pub mod message;
pub mod patient;
pub mod room;
pub mod settings;
pub mod staff;

pub use appointment::{
    Appointment, AppointmentDraft, AppointmentStatus, AppointmentType, Priority,
};
pub use doctor::{DayAvailability, Doctor, DoctorDraft, EmploymentStatus};
pub use health_records::{CalendarEntry, Encounter, HealthRecords, Prescription};
pub use lab_result::{LabResult, LabStatus};
pub use med_sample::{MedSample, SampleStatus};
pub use medical_record::{MedicalRecord, RecordStatus, RecordType};
pub use message::{Message, MessageStatus, MessageType};
pub use patient::{
    ContactBlock, EmergencyContact, InsuranceBlock, Patient, PatientDraft, PatientStatus,
};
pub use room::{Room, RoomDraft, RoomStatus, RoomType};
pub use settings::{ClinicSettings, SettingsDraft};
pub use staff::{StaffDraft, StaffMember, StaffRole};

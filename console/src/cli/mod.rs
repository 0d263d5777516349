// console/src/cli/mod.rs

pub mod cli;
pub mod handlers_analytics;
pub mod handlers_appointments;
pub mod handlers_doctors;
pub mod handlers_misc;
pub mod handlers_patients;
pub mod handlers_rooms;
pub mod handlers_settings;
pub mod handlers_staff;
pub mod handlers_utils;

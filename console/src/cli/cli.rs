// console/src/cli/cli.rs
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gateway::{ApiTransport, HttpTransport};
use pages::toast_channel;
use pages::{Toast, ToastLevel};

use crate::cli::handlers_analytics;
use crate::cli::handlers_appointments;
use crate::cli::handlers_doctors;
use crate::cli::handlers_misc;
use crate::cli::handlers_patients;
use crate::cli::handlers_rooms;
use crate::cli::handlers_settings;
use crate::cli::handlers_staff;
use crate::config::ConsoleConfig;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Clinic admin console", long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// Path to the YAML config (defaults to clinic_config.yaml)
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage appointments
    Appointments {
        #[clap(subcommand)]
        action: AppointmentAction,
    },
    /// Manage patients
    Patients {
        #[clap(subcommand)]
        action: PatientAction,
    },
    /// Manage doctors
    Doctors {
        #[clap(subcommand)]
        action: DoctorAction,
    },
    /// Manage rooms (seeded locally; the backend does not persist rooms)
    Rooms {
        #[clap(subcommand)]
        action: RoomAction,
    },
    /// Manage staff members
    Staff {
        #[clap(subcommand)]
        action: StaffAction,
    },
    /// List inbox messages
    Messages(SearchArgs),
    /// List lab results
    LabResults(LabArgs),
    /// List medication samples
    MedSamples(SearchArgs),
    /// List medical records
    Records(SearchArgs),
    /// Show or change clinic settings
    Settings {
        #[clap(subcommand)]
        action: SettingsAction,
    },
    /// Cross-resource summaries
    Analytics,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    #[clap(long)]
    pub search: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct LabArgs {
    #[clap(long)]
    pub search: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    /// Only rows flagged abnormal
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub abnormal: bool,
}

#[derive(Subcommand, Debug)]
pub enum AppointmentAction {
    List(AppointmentListArgs),
    Add(AppointmentForm),
    Update {
        id: i32,
        #[clap(flatten)]
        form: AppointmentForm,
    },
    Delete {
        id: i32,
    },
    /// Calendar-formatted view
    Calendar,
}

#[derive(Args, Debug, Default)]
pub struct AppointmentListArgs {
    #[clap(long)]
    pub search: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    #[clap(long = "type")]
    pub appointment_type: Option<String>,
    #[clap(long)]
    pub priority: Option<String>,
    /// Inclusive RFC 3339 lower bound on start time
    #[clap(long)]
    pub from: Option<String>,
    /// Inclusive RFC 3339 upper bound on start time
    #[clap(long)]
    pub to: Option<String>,
}

/// Form fields map 1:1 onto the draft; everything is a string until the
/// draft coerces it at submit time.
#[derive(Args, Debug, Default, Clone)]
pub struct AppointmentForm {
    #[clap(long)]
    pub patient_id: Option<String>,
    #[clap(long)]
    pub doctor_id: Option<String>,
    #[clap(long)]
    pub room_id: Option<String>,
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long)]
    pub start: Option<String>,
    #[clap(long)]
    pub end: Option<String>,
    #[clap(long = "type")]
    pub appointment_type: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    #[clap(long)]
    pub priority: Option<String>,
    #[clap(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PatientAction {
    List(SearchArgs),
    Add(PatientForm),
    Update {
        id: i32,
        #[clap(flatten)]
        form: PatientForm,
    },
    Delete {
        id: i32,
    },
    /// Show one patient; --health-records pulls the nested bundle
    View {
        id: i32,
        #[clap(long, action = clap::ArgAction::SetTrue)]
        health_records: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct PatientForm {
    #[clap(long)]
    pub first_name: Option<String>,
    #[clap(long)]
    pub last_name: Option<String>,
    /// YYYY-MM-DD
    #[clap(long)]
    pub date_of_birth: Option<String>,
    #[clap(long)]
    pub sex: Option<String>,
    #[clap(long)]
    pub phone: Option<String>,
    #[clap(long)]
    pub email: Option<String>,
    #[clap(long)]
    pub address: Option<String>,
    #[clap(long)]
    pub emergency_name: Option<String>,
    #[clap(long)]
    pub emergency_phone: Option<String>,
    #[clap(long)]
    pub insurance_provider: Option<String>,
    #[clap(long)]
    pub insurance_policy: Option<String>,
    /// Comma-separated
    #[clap(long)]
    pub allergies: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DoctorAction {
    List(DoctorListArgs),
    Add(DoctorForm),
    Update {
        id: i32,
        #[clap(flatten)]
        form: DoctorForm,
    },
    Delete {
        id: i32,
    },
}

#[derive(Args, Debug, Default)]
pub struct DoctorListArgs {
    #[clap(long)]
    pub search: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    #[clap(long)]
    pub specialization: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct DoctorForm {
    #[clap(long)]
    pub first_name: Option<String>,
    #[clap(long)]
    pub last_name: Option<String>,
    #[clap(long)]
    pub specialization: Option<String>,
    #[clap(long)]
    pub license_number: Option<String>,
    #[clap(long)]
    pub phone: Option<String>,
    #[clap(long)]
    pub email: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    /// Weekly schedule, e.g. "mon=09:00-17:00,tue=09:00-12:00,sat=off"
    #[clap(long)]
    pub availability: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RoomAction {
    List(RoomListArgs),
    Add(RoomForm),
    Update {
        id: i32,
        #[clap(flatten)]
        form: RoomForm,
    },
    Delete {
        id: i32,
    },
}

#[derive(Args, Debug, Default)]
pub struct RoomListArgs {
    #[clap(long)]
    pub search: Option<String>,
    #[clap(long = "type")]
    pub room_type: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RoomForm {
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long = "type")]
    pub room_type: Option<String>,
    #[clap(long)]
    pub capacity: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    /// Comma-separated
    #[clap(long)]
    pub equipment: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum StaffAction {
    List(StaffListArgs),
    Add(StaffForm),
    Update {
        id: i32,
        #[clap(flatten)]
        form: StaffForm,
    },
    Delete {
        id: i32,
    },
}

#[derive(Args, Debug, Default)]
pub struct StaffListArgs {
    #[clap(long)]
    pub search: Option<String>,
    #[clap(long)]
    pub role: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct StaffForm {
    #[clap(long)]
    pub first_name: Option<String>,
    #[clap(long)]
    pub last_name: Option<String>,
    #[clap(long)]
    pub role: Option<String>,
    #[clap(long)]
    pub department: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
    #[clap(long)]
    pub phone: Option<String>,
    #[clap(long)]
    pub email: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Fetch and print the current settings
    Show,
    /// Change settings fields and save
    Set(SettingsForm),
}

#[derive(Args, Debug, Default, Clone)]
pub struct SettingsForm {
    #[clap(long)]
    pub clinic_name: Option<String>,
    #[clap(long)]
    pub address: Option<String>,
    #[clap(long)]
    pub phone: Option<String>,
    #[clap(long)]
    pub email: Option<String>,
    /// HH:MM
    #[clap(long)]
    pub opening_time: Option<String>,
    /// HH:MM
    #[clap(long)]
    pub closing_time: Option<String>,
    #[clap(long)]
    pub slot_minutes: Option<String>,
}

/// Builds the transport and toast channel, runs the selected handler, and
/// prints whatever toasts the pages produced.
pub async fn dispatch(cli: Cli, config: ConsoleConfig) -> Result<()> {
    let transport: Arc<dyn ApiTransport> = Arc::new(
        HttpTransport::new(config.request_context()).context("failed to build HTTP transport")?,
    );
    let (toasts, mut toast_rx) = toast_channel(64);

    let result = match cli.command {
        Command::Appointments { action } => {
            handlers_appointments::handle(action, transport, &toasts).await
        }
        Command::Patients { action } => handlers_patients::handle(action, transport, &toasts).await,
        Command::Doctors { action } => handlers_doctors::handle(action, transport, &toasts).await,
        Command::Rooms { action } => handlers_rooms::handle(action, transport, &toasts).await,
        Command::Staff { action } => handlers_staff::handle(action, transport, &toasts).await,
        Command::Messages(args) => handlers_misc::handle_messages(args, transport, &toasts).await,
        Command::LabResults(args) => {
            handlers_misc::handle_lab_results(args, transport, &toasts).await
        }
        Command::MedSamples(args) => {
            handlers_misc::handle_med_samples(args, transport, &toasts).await
        }
        Command::Records(args) => handlers_misc::handle_records(args, transport, &toasts).await,
        Command::Settings { action } => {
            handlers_settings::handle(action, transport, &toasts).await
        }
        Command::Analytics => handlers_analytics::handle(transport, &toasts).await,
    };

    drop(toasts);
    while let Ok(toast) = toast_rx.try_recv() {
        print_toast(&toast);
    }

    result
}

fn print_toast(toast: &Toast) {
    let tag = match toast.level {
        ToastLevel::Success => "ok",
        ToastLevel::Error => "error",
        ToastLevel::Info => "info",
    };
    println!("[{tag}] {}", toast.text);
}

// console/src/cli/handlers_appointments.rs
use std::sync::Arc;

use anyhow::{bail, Result};

use gateway::{ApiTransport, ResourceClient};
use models::medical::{Appointment, AppointmentDraft};
use pages::resources::AppointmentsPage;
use pages::ToastSender;

use crate::cli::cli::{AppointmentAction, AppointmentForm, AppointmentListArgs};
use crate::cli::handlers_utils as utils;

pub async fn handle(
    action: AppointmentAction,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = AppointmentsPage::new(
        "appointments",
        ResourceClient::new(transport),
        toasts.clone(),
    );

    match action {
        AppointmentAction::List(args) => list(&mut page, args).await,
        AppointmentAction::Add(form) => {
            page.open_add();
            submit_form(&mut page, form).await
        }
        AppointmentAction::Update { id, form } => {
            page.refresh().await;
            let Some(existing) = page.list.items().iter().find(|a| a.id == id).cloned() else {
                bail!("no appointment with id {id}");
            };
            page.open_edit(&existing);
            submit_form(&mut page, form).await
        }
        AppointmentAction::Delete { id } => {
            page.refresh().await;
            let Some(target) = page.list.items().iter().find(|a| a.id == id).cloned() else {
                bail!("no appointment with id {id}");
            };
            page.open_delete(target);
            page.confirm_delete().await;
            Ok(())
        }
        AppointmentAction::Calendar => calendar(&page).await,
    }
}

async fn list(page: &mut AppointmentsPage, args: AppointmentListArgs) -> Result<()> {
    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_appointment_status(raw)?);
    }
    if let Some(raw) = &args.appointment_type {
        page.list.filters.appointment_type = Some(utils::parse_appointment_type(raw)?);
    }
    if let Some(raw) = &args.priority {
        page.list.filters.priority = Some(utils::parse_priority(raw)?);
    }
    if let Some(raw) = &args.from {
        page.list.filters.from = Some(utils::parse_timestamp("from", raw)?);
    }
    if let Some(raw) = &args.to {
        page.list.filters.to = Some(utils::parse_timestamp("to", raw)?);
    }
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    page.refresh().await;
    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "appointments",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for appt in visible {
        print_row(appt);
    }
    Ok(())
}

fn print_row(appt: &Appointment) {
    println!(
        "{:>4}  {}  {:<28} patient {:>4} doctor {:>4}  {} / {} / {}",
        appt.id,
        appt.start_time.format("%Y-%m-%d %H:%M"),
        appt.title,
        appt.patient_id,
        appt.doctor_id,
        utils::badge_cell(&appt.status),
        utils::badge_cell(&appt.appointment_type),
        utils::badge_cell(&appt.priority),
    );
}

/// Copies the given flags onto the open draft and submits. Field errors
/// (client- or server-side) leave the modal open; they are printed and the
/// command still exits cleanly, the same way the form stays up in a UI.
async fn submit_form(page: &mut AppointmentsPage, form: AppointmentForm) -> Result<()> {
    {
        let Some(draft) = page.modal.draft_mut() else {
            bail!("no open form to fill");
        };
        apply_form(draft, form)?;
    }
    page.submit().await;
    if let Some(errors) = page.modal.errors() {
        if !errors.is_empty() {
            println!("not saved:");
            utils::print_errors(errors);
        }
    }
    Ok(())
}

fn apply_form(draft: &mut AppointmentDraft, form: AppointmentForm) -> Result<()> {
    utils::apply(&mut draft.patient_id, form.patient_id);
    utils::apply(&mut draft.doctor_id, form.doctor_id);
    utils::apply(&mut draft.room_id, form.room_id);
    utils::apply(&mut draft.title, form.title);
    utils::apply(&mut draft.start_time, form.start);
    utils::apply(&mut draft.end_time, form.end);
    utils::apply(&mut draft.notes, form.notes);
    if let Some(raw) = form.appointment_type {
        draft.appointment_type = Some(utils::parse_appointment_type(&raw)?);
    }
    if let Some(raw) = form.status {
        draft.status = Some(utils::parse_appointment_status(&raw)?);
    }
    if let Some(raw) = form.priority {
        draft.priority = Some(utils::parse_priority(&raw)?);
    }
    Ok(())
}

async fn calendar(page: &AppointmentsPage) -> Result<()> {
    let entries = page.client().calendar().await?;
    for entry in &entries {
        println!(
            "{}  {} - {}  {:<28} {}",
            entry.id,
            entry.start_time.format("%Y-%m-%d %H:%M"),
            entry.end_time.format("%H:%M"),
            entry.title,
            entry.status.as_str(),
        );
    }
    Ok(())
}

// console/src/cli/handlers_patients.rs
use std::sync::Arc;

use anyhow::{bail, Result};

use gateway::{ApiTransport, ResourceClient};
use models::medical::{Patient, PatientDraft};
use pages::resources::PatientsPage;
use pages::ToastSender;

use crate::cli::cli::{PatientAction, PatientForm, SearchArgs};
use crate::cli::handlers_utils as utils;

pub async fn handle(
    action: PatientAction,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = PatientsPage::new("patients", ResourceClient::new(transport), toasts.clone());

    match action {
        PatientAction::List(args) => list(&mut page, args).await,
        PatientAction::Add(form) => {
            page.open_add();
            submit_form(&mut page, form).await
        }
        PatientAction::Update { id, form } => {
            let existing = find(&mut page, id).await?;
            page.open_edit(&existing);
            submit_form(&mut page, form).await
        }
        PatientAction::Delete { id } => {
            let target = find(&mut page, id).await?;
            page.open_delete(target);
            page.confirm_delete().await;
            Ok(())
        }
        PatientAction::View { id, health_records } => view(&mut page, id, health_records).await,
    }
}

async fn find(page: &mut PatientsPage, id: i32) -> Result<Patient> {
    page.refresh().await;
    match page.list.items().iter().find(|p| p.id == id) {
        Some(patient) => Ok(patient.clone()),
        None => bail!("no patient with id {id}"),
    }
}

async fn list(page: &mut PatientsPage, args: SearchArgs) -> Result<()> {
    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_patient_status(raw)?);
    }
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    page.refresh().await;
    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "patients",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for patient in visible {
        println!(
            "{:>4}  {:<28} born {}  {}",
            patient.id,
            patient.full_name(),
            patient.date_of_birth,
            utils::badge_cell(&patient.status),
        );
    }
    Ok(())
}

async fn submit_form(page: &mut PatientsPage, form: PatientForm) -> Result<()> {
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

fn apply_form(draft: &mut PatientDraft, form: PatientForm) -> Result<()> {
    utils::apply(&mut draft.first_name, form.first_name);
    utils::apply(&mut draft.last_name, form.last_name);
    utils::apply(&mut draft.date_of_birth, form.date_of_birth);
    utils::apply(&mut draft.sex, form.sex);
    utils::apply(&mut draft.phone, form.phone);
    utils::apply(&mut draft.email, form.email);
    utils::apply(&mut draft.address, form.address);
    utils::apply(&mut draft.emergency_name, form.emergency_name);
    utils::apply(&mut draft.emergency_phone, form.emergency_phone);
    utils::apply(&mut draft.insurance_provider, form.insurance_provider);
    utils::apply(&mut draft.insurance_policy, form.insurance_policy);
    utils::apply(&mut draft.allergies, form.allergies);
    if let Some(raw) = form.status {
        draft.status = Some(utils::parse_patient_status(&raw)?);
    }
    Ok(())
}

async fn view(page: &mut PatientsPage, id: i32, with_records: bool) -> Result<()> {
    let patient = find(page, id).await?;
    println!("{}  {}", patient.id, patient.full_name());
    println!("  born: {}", patient.date_of_birth);
    println!("  status: {}", utils::badge_cell(&patient.status));
    if let Some(phone) = &patient.contact.phone {
        println!("  phone: {phone}");
    }
    if let Some(email) = &patient.contact.email {
        println!("  email: {email}");
    }
    if !patient.allergies.is_empty() {
        println!("  allergies: {}", patient.allergies.join(", "));
    }

    if with_records {
        let records = page.client().health_records(id).await?;
        println!("appointments: {}", records.appointments.len());
        for appt in &records.appointments {
            println!(
                "  {}  {}  {}",
                appt.start_time.format("%Y-%m-%d %H:%M"),
                appt.title,
                appt.status.as_str()
            );
        }
        println!("encounters: {}", records.encounters.len());
        for enc in &records.encounters {
            println!(
                "  {}  {}: {}",
                enc.occurred_at.format("%Y-%m-%d"),
                enc.encounter_type,
                enc.summary
            );
        }
        println!("prescriptions: {}", records.prescriptions.len());
        for rx in &records.prescriptions {
            println!(
                "  {} {} {} (by {}, since {})",
                rx.medication, rx.dosage, rx.frequency, rx.prescribed_by, rx.started_on
            );
        }
    }
    Ok(())
}

// console/src/cli/handlers_doctors.rs
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use gateway::{ApiTransport, ResourceClient};
use models::medical::{DayAvailability, Doctor, DoctorDraft};
use models::Weekday;
use pages::resources::DoctorsPage;
use pages::ToastSender;

use crate::cli::cli::{DoctorAction, DoctorForm, DoctorListArgs};
use crate::cli::handlers_utils as utils;

pub async fn handle(
    action: DoctorAction,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = DoctorsPage::new("doctors", ResourceClient::new(transport), toasts.clone());

    match action {
        DoctorAction::List(args) => list(&mut page, args).await,
        DoctorAction::Add(form) => {
            page.open_add();
            submit_form(&mut page, form).await
        }
        DoctorAction::Update { id, form } => {
            let existing = find(&mut page, id).await?;
            page.open_edit(&existing);
            submit_form(&mut page, form).await
        }
        DoctorAction::Delete { id } => {
            let target = find(&mut page, id).await?;
            page.open_delete(target);
            page.confirm_delete().await;
            Ok(())
        }
    }
}

async fn find(page: &mut DoctorsPage, id: i32) -> Result<Doctor> {
    page.refresh().await;
    match page.list.items().iter().find(|d| d.id == id) {
        Some(doctor) => Ok(doctor.clone()),
        None => bail!("no doctor with id {id}"),
    }
}

async fn list(page: &mut DoctorsPage, args: DoctorListArgs) -> Result<()> {
    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_employment_status(raw)?);
    }
    page.list.filters.specialization = args.specialization;
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    page.refresh().await;
    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "doctors",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for doctor in visible {
        let days_on = doctor
            .availability
            .values()
            .filter(|slot| slot.available)
            .count();
        println!(
            "{:>4}  {:<28} {:<20} {}  {} days/week",
            doctor.id,
            doctor.full_name(),
            doctor.specialization,
            utils::badge_cell(&doctor.status),
            days_on,
        );
    }
    Ok(())
}

async fn submit_form(page: &mut DoctorsPage, form: DoctorForm) -> Result<()> {
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

fn apply_form(draft: &mut DoctorDraft, form: DoctorForm) -> Result<()> {
    utils::apply(&mut draft.first_name, form.first_name);
    utils::apply(&mut draft.last_name, form.last_name);
    utils::apply(&mut draft.specialization, form.specialization);
    utils::apply(&mut draft.license_number, form.license_number);
    utils::apply(&mut draft.phone, form.phone);
    utils::apply(&mut draft.email, form.email);
    if let Some(raw) = form.status {
        draft.status = Some(utils::parse_employment_status(&raw)?);
    }
    if let Some(raw) = form.availability {
        apply_availability(draft, &raw)?;
    }
    Ok(())
}

/// Parses the schedule flag, e.g. "mon=09:00-17:00,tue=09:00-12:00,sat=off".
/// Days not mentioned keep what the draft already holds.
fn apply_availability(draft: &mut DoctorDraft, raw: &str) -> Result<()> {
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (day_raw, window) = entry
            .split_once('=')
            .with_context(|| format!("expected day=window, got {entry:?}"))?;
        let day = Weekday::parse(day_raw.trim())?;
        let slot = parse_window(window.trim())
            .with_context(|| format!("bad window for {}", day.as_str()))?;
        draft.availability.insert(day, slot);
    }
    Ok(())
}

fn parse_window(window: &str) -> Result<DayAvailability> {
    if window.eq_ignore_ascii_case("off") {
        return Ok(DayAvailability {
            available: false,
            ..DayAvailability::default()
        });
    }
    let Some((start, end)) = window.split_once('-') else {
        bail!("expected HH:MM-HH:MM or \"off\", got {window:?}");
    };
    Ok(DayAvailability {
        start: start.trim().to_string(),
        end: end.trim().to_string(),
        available: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_flag_sets_only_named_days() {
        let mut draft = DoctorDraft::default();
        apply_availability(&mut draft, "mon=08:00-16:00,sat=off").unwrap();
        let monday = &draft.availability[&Weekday::Monday];
        assert_eq!(monday.start, "08:00");
        assert!(monday.available);
        assert!(!draft.availability[&Weekday::Saturday].available);
        // Tuesday untouched, keeps the default weekday window
        assert_eq!(draft.availability[&Weekday::Tuesday].start, "09:00");
    }

    #[test]
    fn malformed_window_is_rejected() {
        let mut draft = DoctorDraft::default();
        assert!(apply_availability(&mut draft, "mon=9to5").is_err());
        assert!(apply_availability(&mut draft, "someday=09:00-17:00").is_err());
    }
}

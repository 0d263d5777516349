// console/src/cli/handlers_settings.rs
use std::sync::Arc;

use anyhow::Result;

use gateway::{ApiTransport, SettingsClient};
use pages::{SettingsPage, ToastSender};

use crate::cli::cli::{SettingsAction, SettingsForm};
use crate::cli::handlers_utils as utils;

pub async fn handle(
    action: SettingsAction,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = SettingsPage::new(SettingsClient::new(transport), toasts.clone());
    page.load().await;

    match action {
        SettingsAction::Show => {
            print_draft(&page);
        }
        SettingsAction::Set(form) => {
            apply_form(&mut page, form);
            page.save().await;
            if page.errors.is_empty() {
                print_draft(&page);
            } else {
                println!("not saved:");
                utils::print_errors(&page.errors);
            }
        }
    }
    Ok(())
}

fn apply_form(page: &mut SettingsPage, form: SettingsForm) {
    utils::apply(&mut page.draft.clinic_name, form.clinic_name);
    utils::apply(&mut page.draft.address, form.address);
    utils::apply(&mut page.draft.phone, form.phone);
    utils::apply(&mut page.draft.email, form.email);
    utils::apply(&mut page.draft.opening_time, form.opening_time);
    utils::apply(&mut page.draft.closing_time, form.closing_time);
    utils::apply(&mut page.draft.slot_minutes, form.slot_minutes);
}

fn print_draft(page: &SettingsPage) {
    println!("clinic:  {}", page.draft.clinic_name);
    println!("address: {}", page.draft.address);
    println!("phone:   {}", page.draft.phone);
    println!("email:   {}", page.draft.email);
    println!(
        "hours:   {} - {}, {} minute slots",
        page.draft.opening_time, page.draft.closing_time, page.draft.slot_minutes
    );
}

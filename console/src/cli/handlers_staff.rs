// console/src/cli/handlers_staff.rs
use std::sync::Arc;

use anyhow::{bail, Result};

use gateway::{ApiTransport, ResourceClient};
use models::medical::{StaffDraft, StaffMember};
use pages::resources::StaffPage;
use pages::ToastSender;

use crate::cli::cli::{StaffAction, StaffForm, StaffListArgs};
use crate::cli::handlers_utils as utils;

pub async fn handle(
    action: StaffAction,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = StaffPage::new("staff", ResourceClient::new(transport), toasts.clone());

    match action {
        StaffAction::List(args) => list(&mut page, args).await,
        StaffAction::Add(form) => {
            page.open_add();
            submit_form(&mut page, form).await
        }
        StaffAction::Update { id, form } => {
            let existing = find(&mut page, id).await?;
            page.open_edit(&existing);
            submit_form(&mut page, form).await
        }
        StaffAction::Delete { id } => {
            let target = find(&mut page, id).await?;
            page.open_delete(target);
            page.confirm_delete().await;
            Ok(())
        }
    }
}

async fn find(page: &mut StaffPage, id: i32) -> Result<StaffMember> {
    page.refresh().await;
    match page.list.items().iter().find(|s| s.id == id) {
        Some(member) => Ok(member.clone()),
        None => bail!("no staff member with id {id}"),
    }
}

async fn list(page: &mut StaffPage, args: StaffListArgs) -> Result<()> {
    if let Some(raw) = &args.role {
        page.list.filters.role = Some(utils::parse_staff_role(raw)?);
    }
    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_employment_status(raw)?);
    }
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    page.refresh().await;
    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "staff members",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for member in visible {
        println!(
            "{:>4}  {:<28} {:<16} {}  {}",
            member.id,
            member.full_name(),
            member.department,
            utils::badge_cell(&member.role),
            utils::badge_cell(&member.status),
        );
    }
    Ok(())
}

async fn submit_form(page: &mut StaffPage, form: StaffForm) -> Result<()> {
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

fn apply_form(draft: &mut StaffDraft, form: StaffForm) -> Result<()> {
    utils::apply(&mut draft.first_name, form.first_name);
    utils::apply(&mut draft.last_name, form.last_name);
    utils::apply(&mut draft.department, form.department);
    utils::apply(&mut draft.phone, form.phone);
    utils::apply(&mut draft.email, form.email);
    if let Some(raw) = form.role {
        draft.role = Some(utils::parse_staff_role(&raw)?);
    }
    if let Some(raw) = form.status {
        draft.status = Some(utils::parse_employment_status(&raw)?);
    }
    Ok(())
}

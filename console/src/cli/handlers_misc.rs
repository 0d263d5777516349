// console/src/cli/handlers_misc.rs
//
// The read-only pages: messages, lab results, medication samples, medical
// records. List and view only; when the data service has nothing to offer
// the demo fixtures stand in so the pages are never blank.

use std::sync::Arc;

use anyhow::Result;
use log::info;

use gateway::{ApiTransport, ResourceClient};
use pages::resources::{LabResultsPage, MessagesPage, RecordsPage, SamplesPage};
use pages::{fixtures, ToastSender};

use crate::cli::cli::{LabArgs, SearchArgs};
use crate::cli::handlers_utils as utils;

pub async fn handle_messages(
    args: SearchArgs,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = MessagesPage::new("messages", ResourceClient::new(transport), toasts.clone());
    page.refresh().await;
    if page.list.is_empty() {
        info!("messages: nothing fetched, seeding demo rows");
        page.list.replace_items(fixtures::messages());
    }

    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_message_status(raw)?);
    }
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "messages",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for message in visible {
        println!(
            "{:>4}  {}  {:<20} {:<32} {}  {}",
            message.id,
            message.received_at.format("%Y-%m-%d %H:%M"),
            message.sender,
            message.subject,
            utils::badge_cell(&message.message_type),
            utils::badge_cell(&message.status),
        );
    }
    Ok(())
}

pub async fn handle_lab_results(
    args: LabArgs,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page =
        LabResultsPage::new("lab results", ResourceClient::new(transport), toasts.clone());
    page.refresh().await;
    if page.list.is_empty() {
        info!("lab results: nothing fetched, seeding demo rows");
        page.list.replace_items(fixtures::lab_results());
    }

    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_lab_status(raw)?);
    }
    page.list.filters.abnormal_only = args.abnormal;
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "lab results",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for result in visible {
        println!(
            "{:>4}  patient {:>4}  {:<16} {} {}  ref {}  flag {}  {}",
            result.id,
            result.patient_id,
            result.test_name,
            result.value,
            result.unit.as_deref().unwrap_or(""),
            result.reference_range.as_deref().unwrap_or("-"),
            result.abnormal_flag.as_deref().unwrap_or("-"),
            utils::badge_cell(&result.status),
        );
    }
    Ok(())
}

pub async fn handle_med_samples(
    args: SearchArgs,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = SamplesPage::new("med samples", ResourceClient::new(transport), toasts.clone());
    page.refresh().await;
    if page.list.is_empty() {
        info!("med samples: nothing fetched, seeding demo rows");
        page.list.replace_items(fixtures::med_samples());
    }

    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_sample_status(raw)?);
    }
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "med samples",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for sample in visible {
        println!(
            "{:>4}  {:<24} {:<16} lot {:<10} qty {:>3}  expires {}  {}",
            sample.id,
            sample.medication_name,
            sample.manufacturer,
            sample.lot_number,
            sample.quantity,
            sample.expires_on,
            utils::badge_cell(&sample.status),
        );
    }
    Ok(())
}

pub async fn handle_records(
    args: SearchArgs,
    transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut page = RecordsPage::new("records", ResourceClient::new(transport), toasts.clone());
    page.refresh().await;

    if let Some(raw) = &args.status {
        page.list.filters.status = Some(utils::parse_record_status(raw)?);
    }
    if let Some(term) = args.search {
        page.list.set_search_term(term);
    }

    let visible = page.list.visible_items();
    println!(
        "{}",
        utils::count_line(
            "records",
            visible.len(),
            page.list.len(),
            page.list.is_filtered()
        )
    );
    for record in visible {
        println!(
            "{:>4}  patient {:>4}  {}  {:<28} {}  {}",
            record.id,
            record.patient_id,
            record.recorded_at.format("%Y-%m-%d"),
            record.title,
            utils::badge_cell(&record.record_type),
            utils::badge_cell(&record.status),
        );
    }
    Ok(())
}

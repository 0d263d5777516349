// console/src/cli/handlers_analytics.rs
//
// Cross-resource summaries computed over freshly fetched collections: the
// analytics page never stores anything of its own.

use std::sync::Arc;

use anyhow::Result;

use gateway::{ApiTransport, ResourceClient};
use models::medical::{Appointment, Patient};
use pages::{analytics, fixtures, ToastSender};

pub async fn handle(transport: Arc<dyn ApiTransport>, toasts: &ToastSender) -> Result<()> {
    let appointments = match ResourceClient::<Appointment>::new(transport.clone())
        .list()
        .await
    {
        Ok(items) => items,
        Err(_) => {
            toasts.error("Failed to load appointments");
            Vec::new()
        }
    };
    let patients = match ResourceClient::<Patient>::new(transport).list().await {
        Ok(items) => items,
        Err(_) => {
            toasts.error("Failed to load patients");
            Vec::new()
        }
    };
    let rooms = fixtures::rooms();

    println!("appointments by status:");
    for (label, count) in analytics::appointments_by_status(&appointments) {
        println!("  {label:<12} {count}");
    }
    println!(
        "no-show rate: {:.1}%",
        analytics::no_show_rate(&appointments) * 100.0
    );

    println!("patients by status:");
    for (label, count) in analytics::patients_by_status(&patients) {
        println!("  {label:<12} {count}");
    }

    println!("room occupancy by type:");
    for (label, (occupied, total)) in analytics::occupancy_by_room_type(&rooms) {
        println!("  {label:<12} {occupied}/{total}");
    }

    Ok(())
}

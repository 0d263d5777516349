// gateway/src/resource.rs
use std::marker::PhantomData;
use std::sync::Arc;

use log::info;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use models::medical::{
    Appointment, CalendarEntry, ClinicSettings, Doctor, HealthRecords, LabResult, MedSample,
    MedicalRecord, Message, Patient, Room, StaffMember,
};
use models::Keyed;

use crate::envelope;
use crate::errors::{GatewayError, GatewayResult};
use crate::transport::ApiTransport;

/// Wire-contract knowledge for one CRUD resource: its URL segment, the
/// plural key its list envelope uses, and the singular key a mutation
/// response echoes the saved entity under.
pub trait ResourceDescriptor:
    Keyed + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const ENDPOINT: &'static str;
    const COLLECTION: &'static str;
    const SINGULAR: &'static str;
}

impl ResourceDescriptor for Appointment {
    const ENDPOINT: &'static str = "appointments";
    const COLLECTION: &'static str = "appointments";
    const SINGULAR: &'static str = "appointment";
}

impl ResourceDescriptor for Patient {
    const ENDPOINT: &'static str = "patients";
    const COLLECTION: &'static str = "patients";
    const SINGULAR: &'static str = "patient";
}

impl ResourceDescriptor for Doctor {
    const ENDPOINT: &'static str = "doctors";
    const COLLECTION: &'static str = "doctors";
    const SINGULAR: &'static str = "doctor";
}

impl ResourceDescriptor for Room {
    const ENDPOINT: &'static str = "rooms";
    const COLLECTION: &'static str = "rooms";
    const SINGULAR: &'static str = "room";
}

impl ResourceDescriptor for StaffMember {
    const ENDPOINT: &'static str = "staff";
    const COLLECTION: &'static str = "staff";
    const SINGULAR: &'static str = "staff_member";
}

impl ResourceDescriptor for Message {
    const ENDPOINT: &'static str = "messages";
    const COLLECTION: &'static str = "messages";
    const SINGULAR: &'static str = "message";
}

impl ResourceDescriptor for LabResult {
    const ENDPOINT: &'static str = "lab-results";
    const COLLECTION: &'static str = "lab_results";
    const SINGULAR: &'static str = "lab_result";
}

impl ResourceDescriptor for MedSample {
    const ENDPOINT: &'static str = "med-samples";
    const COLLECTION: &'static str = "med_samples";
    const SINGULAR: &'static str = "med_sample";
}

impl ResourceDescriptor for MedicalRecord {
    const ENDPOINT: &'static str = "records";
    const COLLECTION: &'static str = "records";
    const SINGULAR: &'static str = "record";
}

/// Typed CRUD client over one resource endpoint. Each call is a single
/// request/response exchange; callers re-fetch after mutations instead of
/// patching local state.
pub struct ResourceClient<R> {
    transport: Arc<dyn ApiTransport>,
    _marker: PhantomData<R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        ResourceClient {
            transport: self.transport.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: ResourceDescriptor> ResourceClient<R> {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        ResourceClient {
            transport,
            _marker: PhantomData,
        }
    }

    pub async fn list(&self) -> GatewayResult<Vec<R>> {
        let value = self.transport.get(R::ENDPOINT).await?;
        envelope::check_success(&value)?;
        envelope::collection(&value, R::COLLECTION)
    }

    pub async fn create(&self, entity: &R) -> GatewayResult<R> {
        let body = to_body(entity)?;
        let value = self
            .transport
            .send(Method::POST, R::ENDPOINT, Some(body))
            .await?;
        envelope::check_success(&value)?;
        info!("created {} ({})", R::SINGULAR, describe(&value));
        // Some endpoints only answer { success, message }; fall back to the
        // submitted entity so callers always get a value back.
        Ok(envelope::entity(&value, R::SINGULAR).unwrap_or_else(|| entity.clone()))
    }

    pub async fn update(&self, id: i32, entity: &R) -> GatewayResult<R> {
        let body = to_body(entity)?;
        let path = format!("{}/{}", R::ENDPOINT, id);
        let value = self.transport.send(Method::PUT, &path, Some(body)).await?;
        envelope::check_success(&value)?;
        info!("updated {} {}", R::SINGULAR, id);
        Ok(envelope::entity(&value, R::SINGULAR).unwrap_or_else(|| entity.clone()))
    }

    pub async fn delete(&self, id: i32) -> GatewayResult<()> {
        let path = format!("{}/{}", R::ENDPOINT, id);
        let value = self.transport.send(Method::DELETE, &path, None).await?;
        envelope::check_success(&value)?;
        info!("deleted {} {}", R::SINGULAR, id);
        Ok(())
    }
}

fn to_body<R: Serialize>(entity: &R) -> GatewayResult<Value> {
    serde_json::to_value(entity).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn describe(value: &Value) -> String {
    envelope::message(value).unwrap_or_else(|| "ok".to_string())
}

pub type AppointmentClient = ResourceClient<Appointment>;
pub type PatientClient = ResourceClient<Patient>;

impl ResourceClient<Patient> {
    /// Read-only nested bundle from `GET /patients/{id}/health-records`.
    pub async fn health_records(&self, id: i32) -> GatewayResult<HealthRecords> {
        let path = format!("patients/{id}/health-records");
        let value = self.transport.get(&path).await?;
        envelope::check_success(&value)?;
        serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

impl ResourceClient<Appointment> {
    /// Calendar-formatted projection from `GET /appointments/calendar/data`.
    pub async fn calendar(&self) -> GatewayResult<Vec<CalendarEntry>> {
        let value = self.transport.get("appointments/calendar/data").await?;
        envelope::check_success(&value)?;
        envelope::collection(&value, "appointments")
    }
}

/// Settings are a singleton form rather than a keyed list.
#[derive(Clone)]
pub struct SettingsClient {
    transport: Arc<dyn ApiTransport>,
}

impl SettingsClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        SettingsClient { transport }
    }

    pub async fn fetch(&self) -> GatewayResult<ClinicSettings> {
        let value = self.transport.get("settings").await?;
        envelope::check_success(&value)?;
        envelope::entity(&value, "settings")
            .ok_or_else(|| GatewayError::Decode("missing settings payload".to_string()))
    }

    pub async fn save(&self, settings: &ClinicSettings) -> GatewayResult<()> {
        let body = to_body(settings)?;
        let value = self
            .transport
            .send(Method::PUT, "settings", Some(body))
            .await?;
        envelope::check_success(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use serde_json::json;

    fn appointment_json(id: i32, status: &str) -> Value {
        json!({
            "id": id,
            "patient_id": 1,
            "doctor_id": 2,
            "room_id": null,
            "title": "Checkup",
            "start_time": "2026-09-01T09:00:00Z",
            "end_time": "2026-09-01T09:30:00Z",
            "appointment_type": "Consultation",
            "status": status,
            "priority": "Normal",
            "notes": null
        })
    }

    #[tokio::test]
    async fn list_decodes_typed_collection() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "GET",
            "appointments",
            Ok(json!({
                "success": true,
                "appointments": [appointment_json(1, "Scheduled"), appointment_json(2, "Cancelled")]
            })),
        );
        let client = AppointmentClient::new(transport);
        let items = client.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 2);
    }

    #[tokio::test]
    async fn create_surfaces_field_errors() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "POST",
            "appointments",
            Ok(json!({ "success": false, "errors": { "title": "required" } })),
        );
        let client = AppointmentClient::new(transport);
        let entity: Appointment = serde_json::from_value(appointment_json(0, "Scheduled")).unwrap();
        match client.create(&entity).await {
            Err(GatewayError::Validation(errors)) => {
                assert_eq!(errors.get("title").map(String::as_str), Some("required"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_falls_back_to_submitted_entity() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "POST",
            "appointments",
            Ok(json!({ "success": true, "message": "saved" })),
        );
        let client = AppointmentClient::new(transport.clone());
        let entity: Appointment = serde_json::from_value(appointment_json(0, "Scheduled")).unwrap();
        let saved = client.create(&entity).await.unwrap();
        assert_eq!(saved, entity);
        assert_eq!(transport.calls(), vec!["POST appointments"]);
    }

    #[tokio::test]
    async fn http_failure_maps_to_status() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "DELETE",
            "appointments/9",
            Err(GatewayError::Status { code: 503 }),
        );
        let client = AppointmentClient::new(transport);
        assert_eq!(
            client.delete(9).await,
            Err(GatewayError::Status { code: 503 })
        );
    }

    #[tokio::test]
    async fn calendar_reads_nested_endpoint() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "GET",
            "appointments/calendar/data",
            Ok(json!({
                "success": true,
                "appointments": [{
                    "id": 4,
                    "title": "Checkup",
                    "start_time": "2026-09-01T09:00:00Z",
                    "end_time": "2026-09-01T09:30:00Z",
                    "status": "Confirmed"
                }]
            })),
        );
        let client = AppointmentClient::new(transport);
        let entries = client.calendar().await.unwrap();
        assert_eq!(entries[0].id, 4);
    }
}

// gateway/src/lib.rs
//
// Remote Mutation Gateway: the only place that talks HTTP. One request per
// call, no retries, no backoff; failures are mapped into a small taxonomy
// the pages translate into field errors or toasts.

pub mod context;
pub mod envelope;
pub mod errors;
pub mod resource;
pub mod testing;
pub mod transport;

pub use context::RequestContext;
pub use errors::GatewayError;
pub use resource::{
    AppointmentClient, PatientClient, ResourceClient, ResourceDescriptor, SettingsClient,
};
pub use transport::{ApiTransport, HttpTransport};

// models/src/lib.rs

// Declare all top-level modules within the 'models' crate
pub mod badges;
pub mod draft;
pub mod errors;
pub mod weekday;

// Declare the 'medical' sub-module (one entity per file)
pub mod medical;

// Re-export common core types for convenience when other crates use 'models::*'
pub use badges::{Badge, Badged};
pub use draft::{Draft, FieldErrors};
pub use errors::ModelError;
pub use weekday::Weekday;

/// Anything held in a resource list and addressed as `/{resource}/{id}`.
pub trait Keyed {
    fn key(&self) -> i32;
}

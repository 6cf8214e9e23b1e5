//! `productcatalog-core` — domain building blocks shared by the catalog crates.
//!
//! Pure domain primitives only: no filesystem, no serialization formats, no tracing.

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;

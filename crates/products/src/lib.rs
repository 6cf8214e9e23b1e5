//! Products domain module.
//!
//! Product records as they appear in the catalog document, plus the in-memory
//! read operations over a loaded catalog. Pure domain logic: no IO, no tracing.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Money, Product, ProductId};

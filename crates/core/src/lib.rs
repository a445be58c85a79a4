//! `inventix-core`: shared building blocks for the inventory domain.
//!
//! Pure primitives shared by every other crate: the error model, backend
//! record identifiers and the lenient numeric coercion used when reading
//! loosely-typed JSON records.

pub mod coerce;
pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::RecordId;

//! `inventix-client`: typed access to the Inventix REST backend.
//!
//! The backend owns persistence; this crate fetches and mutates products,
//! users and orders over JSON/HTTP and hands the records to the pure domain
//! crates for reporting.

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod snapshot;

pub use client::InventixClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use snapshot::StoreSnapshot;

//! Store users and the customers among them.

pub mod user;

pub use user::{customers, Role, User};

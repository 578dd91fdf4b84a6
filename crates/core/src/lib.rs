//! Domain rules for the Luther site content service.
//!
//! Everything here is free of I/O so the repository layer, the HTTP layer
//! and tests can share it.

pub mod contact;
pub mod content;
pub mod error;
pub mod fallback;
pub mod hero;
pub mod notify;
pub mod roles;
pub mod site;
pub mod types;
pub mod uploads;

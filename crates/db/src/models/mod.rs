//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nullable text columns are cleared by sending an empty string in an update;
//! an absent field leaves the column unchanged.

pub mod contact;
pub mod faq;
pub mod hero;
pub mod how_we_work;
pub mod overview;
pub mod project;
pub mod role;
pub mod session;
pub mod testimonial;
pub mod user;

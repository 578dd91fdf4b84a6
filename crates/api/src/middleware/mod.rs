//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller identified by a Bearer access token.
//! - [`rbac::RequireAdmin`] -- `admin` only (messages, overview, users).
//! - [`rbac::RequireEditor`] -- `editor` or `admin` (content and uploads).
//! - [`rbac::RequireAuth`] -- any signed-in user.

pub mod auth;
pub mod rbac;

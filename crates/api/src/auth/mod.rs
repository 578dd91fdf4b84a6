//! Credentials and tokens.
//!
//! - [`password`] -- Argon2id hashing for CMS user passwords.
//! - [`jwt`] -- access tokens and refresh-token hashing.

pub mod jwt;
pub mod password;

//! Route definitions for the public `/site` reads.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Routes mounted at `/site`. None require authentication.
///
/// ```text
/// GET  /home            -> home
/// GET  /hero            -> hero
/// GET  /projects        -> projects
/// GET  /projects/{id}   -> project_detail
/// GET  /testimonials    -> testimonials
/// GET  /faqs            -> faqs
/// GET  /how-we-work     -> how_we_work
/// POST /contact         -> contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(site::home))
        .route("/hero", get(site::hero))
        .route("/projects", get(site::projects))
        .route("/projects/{id}", get(site::project_detail))
        .route("/testimonials", get(site::testimonials))
        .route("/faqs", get(site::faqs))
        .route("/how-we-work", get(site::how_we_work))
        .route("/contact", post(site::contact))
}

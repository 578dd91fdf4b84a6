//! Route definitions for content editing under `/admin`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{faqs, hero, how_we_work, projects, testimonials, uploads};
use crate::state::AppState;

/// Content routes mounted at `/admin`.
///
/// All routes require the `editor` or `admin` role (enforced by handler
/// extractors).
///
/// ```text
/// GET, POST          /projects                  -> list, create
/// GET, PUT, DELETE   /projects/{id}             -> get_by_id, update, delete
/// GET, POST          /testimonials              -> list, create
/// GET, PUT, DELETE   /testimonials/{id}         -> get_by_id, update, delete
/// GET, POST          /faqs                      -> list, create
/// GET, PUT, DELETE   /faqs/{id}                 -> get_by_id, update, delete
/// GET, POST          /how-we-work/steps         -> list_steps, create_step
/// GET, PUT, DELETE   /how-we-work/steps/{id}    -> get_step, update_step, delete_step
/// GET, POST          /how-we-work/stats         -> list_stats, create_stat
/// GET, PUT, DELETE   /how-we-work/stats/{id}    -> get_stat, update_stat, delete_stat
/// GET, POST          /how-we-work/services      -> list_services, create_service
/// GET, PUT, DELETE   /how-we-work/services/{id} -> get_service, update_service, delete_service
/// GET, POST          /hero                      -> get, create
/// PUT                /hero/{id}                 -> update
/// POST, DELETE       /uploads/{bucket}          -> upload, delete
/// ```
///
/// Only the uploads route raises the body limit, to `upload_body_limit`.
pub fn router(upload_body_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route(
            "/testimonials",
            get(testimonials::list).post(testimonials::create),
        )
        .route(
            "/testimonials/{id}",
            get(testimonials::get_by_id)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
        .route("/faqs", get(faqs::list).post(faqs::create))
        .route(
            "/faqs/{id}",
            get(faqs::get_by_id).put(faqs::update).delete(faqs::delete),
        )
        .route(
            "/how-we-work/steps",
            get(how_we_work::list_steps).post(how_we_work::create_step),
        )
        .route(
            "/how-we-work/steps/{id}",
            get(how_we_work::get_step)
                .put(how_we_work::update_step)
                .delete(how_we_work::delete_step),
        )
        .route(
            "/how-we-work/stats",
            get(how_we_work::list_stats).post(how_we_work::create_stat),
        )
        .route(
            "/how-we-work/stats/{id}",
            get(how_we_work::get_stat)
                .put(how_we_work::update_stat)
                .delete(how_we_work::delete_stat),
        )
        .route(
            "/how-we-work/services",
            get(how_we_work::list_services).post(how_we_work::create_service),
        )
        .route(
            "/how-we-work/services/{id}",
            get(how_we_work::get_service)
                .put(how_we_work::update_service)
                .delete(how_we_work::delete_service),
        )
        .route("/hero", get(hero::get).post(hero::create))
        .route("/hero/{id}", put(hero::update))
        .route(
            "/uploads/{bucket}",
            post(uploads::upload)
                .delete(uploads::delete)
                .layer(DefaultBodyLimit::max(upload_body_limit)),
        )
}

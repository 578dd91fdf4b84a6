pub mod admin;
pub mod auth;
pub mod content;
pub mod health;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current user (requires auth)
///
/// /site/home                                       home page bundle (public)
/// /site/hero                                       hero banner
/// /site/projects                                   project cards
/// /site/projects/{id}                              project detail
/// /site/testimonials?limit=                        testimonial cards
/// /site/faqs                                       FAQ list
/// /site/how-we-work                                steps, stats, services
/// /site/contact                                    contact form (POST)
///
/// /admin/projects                                  list, create (editor)
/// /admin/projects/{id}                             get, update, delete
/// /admin/testimonials                              list, create (editor)
/// /admin/testimonials/{id}                         get, update, delete
/// /admin/faqs                                      list, create (editor)
/// /admin/faqs/{id}                                 get, update, delete
/// /admin/how-we-work/steps                         list, create (editor)
/// /admin/how-we-work/steps/{id}                    get, update, delete
/// /admin/how-we-work/stats                         list, create (editor)
/// /admin/how-we-work/stats/{id}                    get, update, delete
/// /admin/how-we-work/services                      list, create (editor)
/// /admin/how-we-work/services/{id}                 get, update, delete
/// /admin/hero                                      get, create (editor)
/// /admin/hero/{id}                                 update
/// /admin/uploads/{bucket}                          upload, delete (editor)
///
/// /admin/messages?status=                          inbox (admin only)
/// /admin/messages/{id}                             get, update status, delete
/// /admin/overview                                  content counts
/// /admin/users                                     list, create
/// /admin/users/{id}                                deactivate
/// ```
///
/// Request bodies use axum's default limit except on uploads, which accept
/// up to `upload_body_limit` bytes.
pub fn api_routes(upload_body_limit: usize) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/site", site::router())
        // Content editing (editor) plus inbox, overview and accounts (admin).
        .nest("/admin", content::router(upload_body_limit).merge(admin::router()))
}

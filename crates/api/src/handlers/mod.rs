//! Request handlers, one module per resource.
//!
//! Content mutations finish through [`after_mutation`], which drops cached
//! public reads for the entity and produces the notification text returned
//! to the admin UI.

use luther_core::content::ContentKind;
use luther_core::error::CoreError;
use luther_core::notify::{success_message, Mutation};
use luther_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

pub mod auth;
pub mod faqs;
pub mod hero;
pub mod how_we_work;
pub mod messages;
pub mod overview;
pub mod projects;
pub mod site;
pub mod testimonials;
pub mod uploads;
pub mod users;

/// Invalidate cached reads of `kind` and return the success message.
pub(crate) async fn after_mutation(
    state: &AppState,
    kind: ContentKind,
    mutation: Mutation,
) -> String {
    state.cache.invalidate(kind).await;
    success_message(kind, mutation)
}

pub(crate) fn not_found(kind: ContentKind, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: kind.label(),
        id,
    })
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.
//!
//! Ordered content lists sort by `display_order`, then creation time.

pub mod contact_submission_repo;
pub mod faq_repo;
pub mod hero_repo;
pub mod how_we_work_stat_repo;
pub mod how_we_work_step_repo;
pub mod overview_repo;
pub mod project_repo;
pub mod role_repo;
pub mod service_marquee_repo;
pub mod session_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use contact_submission_repo::ContactSubmissionRepo;
pub use faq_repo::FaqRepo;
pub use hero_repo::HeroRepo;
pub use how_we_work_stat_repo::HowWeWorkStatRepo;
pub use how_we_work_step_repo::HowWeWorkStepRepo;
pub use overview_repo::OverviewRepo;
pub use project_repo::ProjectRepo;
pub use role_repo::RoleRepo;
pub use service_marquee_repo::ServiceMarqueeRepo;
pub use session_repo::SessionRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;

//! Public, unauthenticated reads that render the marketing site.
//!
//! Every section is loaded through the [`QueryCache`](crate::cache::QueryCache)
//! under its entity's list key and falls back to static defaults while its
//! table is empty. The home page is cached as one bundle under the `home`
//! key, which any content mutation drops.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luther_core::contact::ContactForm;
use luther_core::content::ContentKind;
use luther_core::fallback;
use luther_core::hero::resolve_services;
use luther_core::notify::Mutation;
use luther_core::site::{
    display_date, display_rating, neighbors, FaqItem, HeroView, ProcessStep, ProjectCard,
    ProjectDetail, Section, StatItem, TestimonialCard, DEFAULT_AVATAR, DEFAULT_PROJECT_IMAGE,
    HOME_TESTIMONIAL_LIMIT,
};
use luther_core::types::DbId;
use luther_db::models::contact::{ContactSubmission, CreateContactSubmission};
use luther_db::models::faq::Faq;
use luther_db::models::hero::HeroSettings;
use luther_db::models::how_we_work::{HowWeWorkStat, HowWeWorkStep, ServiceMarquee};
use luther_db::models::project::Project;
use luther_db::models::testimonial::Testimonial;
use luther_db::repositories::{
    ContactSubmissionRepo, FaqRepo, HeroRepo, HowWeWorkStatRepo, HowWeWorkStepRepo, ProjectRepo,
    ServiceMarqueeRepo, TestimonialRepo,
};
use serde::Serialize;

use super::{after_mutation, not_found};
use crate::cache::QueryKey;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::LimitParams;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// The hero banner and whether it came from the defaults.
#[derive(Debug, Clone, Serialize)]
pub struct HeroSection {
    pub hero: HeroView,
    pub is_fallback: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HowWeWorkView {
    pub steps: Section<ProcessStep>,
    pub stats: Section<StatItem>,
    pub services: Section<String>,
}

/// Everything the home page renders in one response.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub hero: HeroSection,
    pub projects: Section<ProjectCard>,
    pub testimonials: Section<TestimonialCard>,
    pub faqs: Section<FaqItem>,
    pub how_we_work: HowWeWorkView,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/site/home
pub async fn home(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomeView>>> {
    let state = &state;
    let view = state
        .cache
        .get_or_load(QueryKey::home(), || async move {
            let (hero, projects, testimonials, faqs, how_we_work) = tokio::try_join!(
                load_hero(state),
                load_projects(state),
                load_testimonials(state),
                load_faqs(state),
                load_how_we_work(state),
            )?;
            Ok::<_, AppError>(HomeView {
                hero,
                projects,
                testimonials: testimonials.truncated(Some(HOME_TESTIMONIAL_LIMIT)),
                faqs,
                how_we_work,
            })
        })
        .await?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/site/hero
pub async fn hero(State(state): State<AppState>) -> AppResult<Json<DataResponse<HeroSection>>> {
    let hero = load_hero(&state).await?;
    Ok(Json(DataResponse { data: hero }))
}

/// GET /api/v1/site/projects
pub async fn projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Section<ProjectCard>>>> {
    let projects = load_projects(&state).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/site/projects/{id}
///
/// Only stored projects have a detail page; the default cards do not.
pub async fn project_detail(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid project id '{raw_id}'")))?;

    let pool = &state.pool;
    let detail = state
        .cache
        .get_or_load(QueryKey::record(ContentKind::Project, id), || async move {
            let project = ProjectRepo::find_by_id(pool, id)
                .await?
                .ok_or_else(|| not_found(ContentKind::Project, id))?;
            let ordered = ProjectRepo::list_ids(pool).await?;
            Ok::<_, AppError>(project_detail_view(project, &ordered))
        })
        .await?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/site/testimonials?limit=
pub async fn testimonials(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<Json<DataResponse<Section<TestimonialCard>>>> {
    let testimonials = load_testimonials(&state).await?.truncated(params.limit);
    Ok(Json(DataResponse { data: testimonials }))
}

/// GET /api/v1/site/faqs
pub async fn faqs(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Section<FaqItem>>>> {
    let faqs = load_faqs(&state).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// GET /api/v1/site/how-we-work
pub async fn how_we_work(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<HowWeWorkView>>> {
    let view = load_how_we_work(&state).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/site/contact
pub async fn contact(
    State(state): State<AppState>,
    AppJson(form): AppJson<ContactForm>,
) -> AppResult<(StatusCode, Json<MutationResponse<ContactSubmission>>)> {
    let form = form.normalized()?;
    let submission =
        ContactSubmissionRepo::create(&state.pool, &CreateContactSubmission::from(form)).await?;

    tracing::info!(submission_id = submission.id, "Contact form submitted");
    let message = after_mutation(&state, ContentKind::ContactSubmission, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: submission,
            message,
        }),
    ))
}

// ---------------------------------------------------------------------------
// Cached section loaders
// ---------------------------------------------------------------------------

async fn load_hero(state: &AppState) -> AppResult<HeroSection> {
    let pool = &state.pool;
    state
        .cache
        .get_or_load(QueryKey::list(ContentKind::HeroSettings), || async move {
            let section = match HeroRepo::get(pool).await? {
                Some(row) => HeroSection {
                    hero: hero_view(row),
                    is_fallback: false,
                },
                None => HeroSection {
                    hero: fallback::hero(),
                    is_fallback: true,
                },
            };
            Ok::<_, AppError>(section)
        })
        .await
}

async fn load_projects(state: &AppState) -> AppResult<Section<ProjectCard>> {
    let pool = &state.pool;
    state
        .cache
        .get_or_load(QueryKey::list(ContentKind::Project), || async move {
            let rows = ProjectRepo::list(pool).await?;
            let cards = rows.iter().map(project_card).collect();
            Ok::<_, AppError>(Section::or_fallback(cards, fallback::projects))
        })
        .await
}

async fn load_testimonials(state: &AppState) -> AppResult<Section<TestimonialCard>> {
    let pool = &state.pool;
    state
        .cache
        .get_or_load(QueryKey::list(ContentKind::Testimonial), || async move {
            let rows = TestimonialRepo::list(pool).await?;
            let cards = rows.into_iter().map(testimonial_card).collect();
            Ok::<_, AppError>(Section::or_fallback(cards, fallback::testimonials))
        })
        .await
}

async fn load_faqs(state: &AppState) -> AppResult<Section<FaqItem>> {
    let pool = &state.pool;
    state
        .cache
        .get_or_load(QueryKey::list(ContentKind::Faq), || async move {
            let rows = FaqRepo::list(pool).await?;
            let items = rows.into_iter().map(faq_item).collect();
            Ok::<_, AppError>(Section::or_fallback(items, fallback::faqs))
        })
        .await
}

/// The three how-we-work sections are cached separately, so editing one
/// does not reload the others.
async fn load_how_we_work(state: &AppState) -> AppResult<HowWeWorkView> {
    let pool = &state.pool;
    let steps = state
        .cache
        .get_or_load(QueryKey::list(ContentKind::HowWeWorkStep), || async move {
            let rows = HowWeWorkStepRepo::list(pool).await?;
            let steps = rows.into_iter().map(process_step).collect();
            Ok::<_, AppError>(Section::or_fallback(steps, fallback::process_steps))
        });
    let stats = state
        .cache
        .get_or_load(QueryKey::list(ContentKind::HowWeWorkStat), || async move {
            let rows = HowWeWorkStatRepo::list(pool).await?;
            let stats = rows.into_iter().map(stat_item).collect();
            Ok::<_, AppError>(Section::or_fallback(stats, fallback::stats))
        });
    let services = state
        .cache
        .get_or_load(QueryKey::list(ContentKind::ServiceMarquee), || async move {
            let rows = ServiceMarqueeRepo::list(pool).await?;
            let names = rows.into_iter().map(service_name).collect();
            Ok::<_, AppError>(Section::or_fallback(names, fallback::services_marquee))
        });

    let (steps, stats, services) = tokio::try_join!(steps, stats, services)?;
    Ok(HowWeWorkView {
        steps,
        stats,
        services,
    })
}

// ---------------------------------------------------------------------------
// Row -> view conversions
// ---------------------------------------------------------------------------

fn hero_view(row: HeroSettings) -> HeroView {
    let services = resolve_services(row.services.as_deref());
    HeroView {
        background_type: row.background_type,
        video_url: row.video_url,
        image_url: row.image_url,
        poster_url: row.poster_url,
        tagline: row.tagline,
        title: row.title,
        button_text: row.button_text,
        services,
    }
}

fn project_card(row: &Project) -> ProjectCard {
    ProjectCard {
        id: row.id.to_string(),
        title: row.title.clone(),
        description: row.description.clone().unwrap_or_default(),
        date: display_date(row.date.as_deref(), row.created_at),
        time: row.duration.clone().unwrap_or_default(),
        image: row
            .image_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string()),
        logo: row.logo_url.clone(),
        category: row.category.clone(),
    }
}

fn project_detail_view(row: Project, ordered: &[DbId]) -> ProjectDetail {
    let card = project_card(&row);
    let (previous_id, next_id) = match neighbors(ordered, row.id) {
        Some((prev, next)) => (Some(prev.to_string()), Some(next.to_string())),
        None => (None, None),
    };
    ProjectDetail {
        card,
        featured_image: row.featured_image_url.or(row.image_url),
        content: row.content,
        previous_id,
        next_id,
    }
}

fn testimonial_card(row: Testimonial) -> TestimonialCard {
    TestimonialCard {
        id: row.id.to_string(),
        name: row.author_name,
        role: row.author_role,
        avatar: row
            .author_avatar
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
        rating: display_rating(row.rating),
        content: row.content,
    }
}

fn faq_item(row: Faq) -> FaqItem {
    FaqItem {
        id: row.id.to_string(),
        question: row.question,
        answer: row.answer,
    }
}

fn process_step(row: HowWeWorkStep) -> ProcessStep {
    ProcessStep {
        phase: row.phase,
        number: row.step_number,
        title: row.title,
        duration: row.duration.unwrap_or_default(),
        points: row.points,
    }
}

fn stat_item(row: HowWeWorkStat) -> StatItem {
    StatItem {
        value: row.stat_value,
        label: row.label,
        unit: row.unit,
        is_highlighted: row.is_highlighted,
    }
}

fn service_name(row: ServiceMarquee) -> String {
    row.service_name
}

//! Public site reads: fallback content, presentation and cache invalidation.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, editor_token, get, post_json, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(app: axum::Router, token: &str, title: &str, order: i32) -> i64 {
    let response = post_json_auth(
        app,
        "/api/v1/admin/projects",
        json!({ "title": title, "display_order": order, "date": "Spring 2025" }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_tables_render_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/v1/site/projects").await).await;
    assert_eq!(json["data"]["is_fallback"], true);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 5);

    let json = body_json(get(app.clone(), "/api/v1/site/faqs").await).await;
    assert_eq!(json["data"]["is_fallback"], true);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 5);

    let json = body_json(get(app.clone(), "/api/v1/site/hero").await).await;
    assert_eq!(json["data"]["is_fallback"], true);
    assert_eq!(json["data"]["hero"]["title"], "Luther");
    assert_eq!(json["data"]["hero"]["background_type"], "video");
    assert_eq!(json["data"]["hero"]["services"].as_array().unwrap().len(), 4);

    let json = body_json(get(app, "/api/v1/site/how-we-work").await).await;
    assert_eq!(json["data"]["steps"]["items"].as_array().unwrap().len(), 4);
    assert_eq!(json["data"]["stats"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"]["services"]["items"].as_array().unwrap().len(), 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_home_bundle_limits_testimonials(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);

    for i in 0..6 {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/admin/testimonials",
            json!({ "author_name": format!("Client {i}"), "content": "Excellent work", "display_order": i }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app.clone(), "/api/v1/site/home").await).await;
    let home = &json["data"];
    assert_eq!(home["testimonials"]["is_fallback"], false);
    assert_eq!(home["testimonials"]["items"].as_array().unwrap().len(), 4);
    assert_eq!(home["projects"]["is_fallback"], true);
    assert_eq!(home["hero"]["is_fallback"], true);

    let json = body_json(get(app.clone(), "/api/v1/site/testimonials").await).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 6);
    assert_eq!(json["data"]["items"][0]["rating"], 5);
    assert!(json["data"]["items"][0]["avatar"].is_string());

    let json = body_json(get(app, "/api/v1/site/testimonials?limit=2").await).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Cache invalidation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reads_after_writes_see_the_write(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);

    // Prime the cache with fallback content.
    let json = body_json(get(app.clone(), "/api/v1/site/projects").await).await;
    assert_eq!(json["data"]["is_fallback"], true);
    let json = body_json(get(app.clone(), "/api/v1/site/home").await).await;
    assert_eq!(json["data"]["projects"]["is_fallback"], true);

    let id = create_project(app.clone(), &token, "Orion", 0).await;

    let json = body_json(get(app.clone(), "/api/v1/site/projects").await).await;
    assert_eq!(json["data"]["is_fallback"], false);
    assert_eq!(json["data"]["items"][0]["title"], "Orion");
    let json = body_json(get(app.clone(), "/api/v1/site/home").await).await;
    assert_eq!(json["data"]["projects"]["items"][0]["id"], id.to_string());

    // Updates invalidate single-record keys too.
    let json = body_json(get(app.clone(), &format!("/api/v1/site/projects/{id}")).await).await;
    assert_eq!(json["data"]["title"], "Orion");

    put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/projects/{id}"),
        json!({ "title": "Orion Tower" }),
        &token,
    )
    .await;
    let json = body_json(get(app.clone(), &format!("/api/v1/site/projects/{id}")).await).await;
    assert_eq!(json["data"]["title"], "Orion Tower");

    // Deleting the last row brings the defaults back.
    delete_auth(app.clone(), &format!("/api/v1/admin/projects/{id}"), &token).await;
    let json = body_json(get(app, "/api/v1/site/projects").await).await;
    assert_eq!(json["data"]["is_fallback"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_mutation_keeps_cached_read(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);

    create_project(app.clone(), &token, "Fairmont", 0).await;
    body_json(get(app.clone(), "/api/v1/site/projects").await).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/projects",
        json!({ "title": "" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app, "/health").await).await;
    assert!(json["cached_queries"].as_u64().unwrap() >= 1);
}

// ---------------------------------------------------------------------------
// Project detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_detail_neighbors_wrap(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);

    let a = create_project(app.clone(), &token, "Avantgarde", 0).await;
    let b = create_project(app.clone(), &token, "Orion", 1).await;
    let c = create_project(app.clone(), &token, "Unity Living", 2).await;

    let json = body_json(get(app.clone(), &format!("/api/v1/site/projects/{a}")).await).await;
    assert_eq!(json["data"]["previous_id"], c.to_string());
    assert_eq!(json["data"]["next_id"], b.to_string());
    assert_eq!(json["data"]["date"], "Spring 2025");
    assert_eq!(json["data"]["description"], "");

    let response = get(app.clone(), "/api/v1/site/projects/avantgarde").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/v1/site/projects/987654").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stored_hero_replaces_defaults(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);

    body_json(get(app.clone(), "/api/v1/site/hero").await).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/hero",
        json!({ "title": "Studio Luther", "services": [] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/v1/site/hero").await).await;
    assert_eq!(json["data"]["is_fallback"], false);
    assert_eq!(json["data"]["hero"]["title"], "Studio Luther");
    assert!(json["data"]["hero"]["services"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_form_submission(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/site/contact",
        json!({
            "name": "  Jana Novak ",
            "email": "jana@example.com",
            "phone": "",
            "message": "We would like a new brand identity.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Message sent successfully!");
    assert_eq!(json["data"]["name"], "Jana Novak");
    assert_eq!(json["data"]["status"], "new");
    assert!(json["data"]["phone"].is_null());

    let response = post_json(
        app,
        "/api/v1/site/contact",
        json!({ "name": "J", "email": "not-an-email", "message": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("Name must be at least 2 characters"));
    assert!(error.contains("Please enter a valid email"));
    assert!(error.contains("Message must be at least 10 characters"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_rejects_oversized_input(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/api/v1/site/contact",
        json!({
            "name": "Jana Novak",
            "email": "jana@example.com",
            "message": "x".repeat(5001),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Message must be at most 5000 characters");

    // Bodies past the default request limit never reach the handler.
    let response = post_json(
        app,
        "/api/v1/site/contact",
        json!({
            "name": "Jana Novak",
            "email": "jana@example.com",
            "message": "x".repeat(3 * 1024 * 1024),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_requests_return_json_errors(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/site/contact",
        json!({ "name": "Jana Novak", "email": "jana@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("message"));

    let response = get(app.clone(), "/api/v1/site/testimonials?limit=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("limit"));

    let response = common::get_auth(app, "/api/v1/admin/projects/abc", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

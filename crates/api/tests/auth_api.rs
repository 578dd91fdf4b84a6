//! HTTP-level tests for login, refresh, logout, RBAC and user management.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_user, delete_auth, editor_token, get, get_auth, post_json,
    post_json_auth, TEST_PASSWORD,
};
use luther_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

async fn login(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_user(&pool, "ada", "editor").await;
    let app = common::build_test_app(pool);

    let json = login(app, "ada", TEST_PASSWORD).await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["expires_in"], 15 * 60);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["role"], "editor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password_and_unknown_user(pool: PgPool) {
    create_user(&pool, "ada", "editor").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "ada", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "ghost", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_deactivated_account_is_forbidden(pool: PgPool) {
    let user = create_user(&pool, "gone", "editor").await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "gone", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_locks_after_five_failures(pool: PgPool) {
    create_user(&pool, "lockme", "editor").await;
    let app = common::build_test_app(pool.clone());

    for _ in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/auth/login",
            json!({ "username": "lockme", "password": "wrong-password" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Correct password is now rejected until the lock expires.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "lockme", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let user = UserRepo::find_by_username(&pool, "lockme")
        .await
        .unwrap()
        .unwrap();
    assert!(user.locked_until.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_lock_does_not_relock_on_next_failure(pool: PgPool) {
    let user = create_user(&pool, "relock", "editor").await;
    let already_expired = chrono::Utc::now() - chrono::Duration::minutes(1);
    for _ in 0..5 {
        UserRepo::record_failed_login(&pool, user.id, 5, already_expired)
            .await
            .unwrap();
    }
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "relock", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let user = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(user.failed_login_count, 1);
    assert!(user.locked_until.is_none());

    login(app, "relock", TEST_PASSWORD).await;
}

// ---------------------------------------------------------------------------
// Refresh / logout / me
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    create_user(&pool, "rotor", "admin").await;
    let app = common::build_test_app(pool);

    let first = login(app.clone(), "rotor", TEST_PASSWORD).await;
    let old_refresh = first["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_ne!(second["refresh_token"], first["refresh_token"]);

    // The old token was revoked by the rotation.
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_refresh_accepts_token_once(pool: PgPool) {
    create_user(&pool, "racer", "editor").await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let tokens = login(app.clone(), "racer", TEST_PASSWORD).await;
        let refresh_token = tokens["refresh_token"].as_str().unwrap().to_string();

        let (a, b) = tokio::join!(
            post_json(
                app.clone(),
                "/api/v1/auth/refresh",
                json!({ "refresh_token": refresh_token }),
            ),
            post_json(
                app.clone(),
                "/api/v1/auth/refresh",
                json!({ "refresh_token": refresh_token }),
            ),
        );

        let mut statuses = [a.status(), b.status()];
        statuses.sort();
        assert_eq!(statuses, [StatusCode::OK, StatusCode::UNAUTHORIZED]);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    create_user(&pool, "leaver", "editor").await;
    let app = common::build_test_app(pool);

    let session = login(app.clone(), "leaver", TEST_PASSWORD).await;
    let access = session["access_token"].as_str().unwrap();

    let response = post_json_auth(app.clone(), "/api/v1/auth/logout", json!({}), access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": session["refresh_token"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_returns_current_user(pool: PgPool) {
    create_user(&pool, "whoami", "editor").await;
    let app = common::build_test_app(pool);

    let session = login(app.clone(), "whoami", TEST_PASSWORD).await;
    let access = session["access_token"].as_str().unwrap();

    let response = get_auth(app.clone(), "/api/v1/auth/me", access).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "whoami");
    assert_eq!(json["data"]["role"], "editor");
    assert!(json["data"].get("password_hash").is_none());

    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_missing_and_bad_tokens(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/admin/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/admin/projects", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_editor_cannot_reach_admin_only_routes(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/admin/users",
        "/api/v1/admin/messages",
        "/api/v1/admin/overview",
    ] {
        let response = get_auth(app.clone(), uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    let response = get_auth(app, "/api/v1/admin/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_creates_and_lists_users(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/users",
        json!({
            "username": "new_editor",
            "email": "new_editor@test.com",
            "password": "a-long-enough-password",
            "role": "editor",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "editor");
    assert_eq!(json["message"], "User created successfully");

    let response = get_auth(app, "/api/v1/admin/users", &token).await;
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"new_editor"));
    assert!(names.contains(&"admin_user"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_validation(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let cases = [
        json!({ "username": "shorty", "email": "s@test.com", "password": "short", "role": "editor" }),
        json!({ "username": "bad_email", "email": "nope", "password": "a-long-enough-password", "role": "editor" }),
        json!({ "username": "bad_role", "email": "r@test.com", "password": "a-long-enough-password", "role": "owner" }),
    ];
    for body in cases {
        let response = post_json_auth(app.clone(), "/api/v1/admin/users", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Duplicate username hits the unique constraint.
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        json!({
            "username": "admin_user",
            "email": "other@test.com",
            "password": "a-long-enough-password",
            "role": "editor",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Username is already taken");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_user(pool: PgPool) {
    let token = admin_token(&pool).await;
    let target = create_user(&pool, "retiring", "editor").await;
    let admin = UserRepo::find_by_username(&pool, "admin_user")
        .await
        .unwrap()
        .unwrap();
    let app = common::build_test_app(pool.clone());

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/admin/users/{}", target.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let row = UserRepo::find_by_id(&pool, target.id).await.unwrap().unwrap();
    assert!(!row.is_active);

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/admin/users/{}", admin.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_auth(app, "/api/v1/admin/users/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

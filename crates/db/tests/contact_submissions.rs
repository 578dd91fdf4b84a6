use luther_core::contact::{StatusFilter, SubmissionStatus};
use luther_db::models::contact::CreateContactSubmission;
use luther_db::repositories::ContactSubmissionRepo;
use sqlx::PgPool;

fn submission(name: &str) -> CreateContactSubmission {
    CreateContactSubmission {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        company: None,
        message: "I would like a quote for a new site.".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_submissions_start_as_new(pool: PgPool) {
    let created = ContactSubmissionRepo::create(&pool, &submission("Ada"))
        .await
        .unwrap();
    assert_eq!(created.status, "new");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_newest_first_with_filter(pool: PgPool) {
    let first = ContactSubmissionRepo::create(&pool, &submission("Ada"))
        .await
        .unwrap();
    let second = ContactSubmissionRepo::create(&pool, &submission("Grace"))
        .await
        .unwrap();

    let all = ContactSubmissionRepo::list(&pool, StatusFilter::All)
        .await
        .unwrap();
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, [second.id, first.id]);

    ContactSubmissionRepo::update_status(&pool, first.id, SubmissionStatus::Replied)
        .await
        .unwrap()
        .unwrap();

    let replied = ContactSubmissionRepo::list(
        &pool,
        StatusFilter::Only(SubmissionStatus::Replied),
    )
    .await
    .unwrap();
    assert_eq!(replied.len(), 1);
    assert_eq!(replied[0].id, first.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_check_constraint(pool: PgPool) {
    let created = ContactSubmissionRepo::create(&pool, &submission("Ada"))
        .await
        .unwrap();
    let result = sqlx::query("UPDATE contact_submissions SET status = 'spam' WHERE id = $1")
        .bind(created.id)
        .execute(&pool)
        .await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_submission(pool: PgPool) {
    let created = ContactSubmissionRepo::create(&pool, &submission("Ada"))
        .await
        .unwrap();
    assert!(ContactSubmissionRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ContactSubmissionRepo::delete(&pool, created.id).await.unwrap());
}

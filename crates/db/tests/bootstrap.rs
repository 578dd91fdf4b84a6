use sqlx::PgPool;

/// Connect, migrate and check the seeded roles.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    luther_db::health_check(&pool).await.unwrap();

    let roles: Vec<(String,)> = sqlx::query_as("SELECT name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    let names: Vec<&str> = roles.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(names, ["admin", "editor"]);
}

/// Content tables start empty so the public site falls back to defaults.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_content_tables_start_empty(pool: PgPool) {
    let tables = [
        "projects",
        "testimonials",
        "faqs",
        "hero_settings",
        "how_we_work_steps",
        "how_we_work_stats",
        "services_marquee",
        "contact_submissions",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

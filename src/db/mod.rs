use sqlx::PgPool;

/// Connect to Postgres and bring the schema up to date.
pub async fn create_pool(database_url: &str) -> PgPool {
    let pool = PgPool::connect(database_url)
        .await
        .expect("Failed to connect to the database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    pool
}

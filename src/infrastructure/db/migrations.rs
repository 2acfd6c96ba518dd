use sqlx::PgPool;

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    // Single embed point for the sqlx migration files; every statement is idempotent.
    sqlx::migrate!("./migrations").run(pool).await
}

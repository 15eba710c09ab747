//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    db::{
        EmployeeRepository, FeedbackRepository, PostgresSentimentStore, ProductRepository,
        RosterRepository,
    },
    services::SentimentService,
    Result,
};

/// Shared application state passed to all handlers.
///
/// Every binary builds the full state; each router only touches the
/// repositories belonging to its service.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: PgPool,
    pub products: ProductRepository,
    pub feedback: FeedbackRepository,
    pub employees: EmployeeRepository,
    pub roster: RosterRepository,
    pub sentiment: Arc<SentimentService>,
}

impl AppState {
    /// Initialize the application state: connect the pool, run migrations,
    /// wire up repositories and services.
    pub async fn new(config: Config) -> Result<Self> {
        tracing::info!("Initializing application state...");

        let config = Arc::new(config);
        let db_pool = create_db_pool(&config).await?;

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .map_err(|e| crate::Error::Internal(format!("Migration failed: {e}")))?;

        let products = ProductRepository::new(db_pool.clone());
        let feedback = FeedbackRepository::new(db_pool.clone());
        let employees = EmployeeRepository::new(db_pool.clone());
        let roster = RosterRepository::new(db_pool.clone());

        let sentiment_store = Arc::new(PostgresSentimentStore::new(db_pool.clone()));
        let sentiment = Arc::new(SentimentService::new(sentiment_store));

        tracing::info!("Application state initialized successfully");

        Ok(Self {
            config,
            db_pool,
            products,
            feedback,
            employees,
            roster,
            sentiment,
        })
    }
}

async fn create_db_pool(config: &Config) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let statement_timeout = config.database.statement_timeout_seconds;
    let lock_timeout = config.database.lock_timeout_seconds;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                // Bound query execution time per request
                sqlx::query(&format!("SET statement_timeout = '{}s'", statement_timeout))
                    .execute(&mut *conn)
                    .await?;

                // Fail fast on contended locks
                sqlx::query(&format!("SET lock_timeout = '{}s'", lock_timeout))
                    .execute(&mut *conn)
                    .await?;

                Ok(())
            })
        })
        .connect(&config.database.url)
        .await
        .map_err(crate::Error::Database)?;

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.database.pool_min_size,
        config.database.pool_max_size
    );

    Ok(pool)
}

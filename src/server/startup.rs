use axum::{http::HeaderValue, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "courses=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG` when it is set, otherwise falls back to info level for this crate
/// and the HTTP trace layer.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations to ensure the `course`
/// table exists before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the configured origin, if any.
///
/// # Returns
/// - `Ok(None)` - No origin configured, CORS headers are not emitted
/// - `Ok(Some(CorsLayer))` - Layer allowing the configured origin
/// - `Err(AppError)` - The origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_allowed_origin.as_deref() else {
        return Ok(None);
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.to_string(),
        reason: e.to_string(),
    })?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    ))
}

/// Assembles the full application: routes, state, request tracing and CORS.
pub fn build_app(state: AppState, config: &Config) -> Result<Router, AppError> {
    let app = router::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    Ok(match cors_layer(config)? {
        Some(cors) => app.layer(cors),
        None => app,
    })
}

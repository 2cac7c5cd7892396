use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, service::user::UserService};

/// Installs the global tracing subscriber.
///
/// Verbosity is controlled by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on a SQLite-backed session store.
///
/// The store shares the application's connection pool and keeps its own table, which is
/// created on first start. Sessions expire after a week of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool the store reuses
/// - `secure` - Whether the session cookie is marked `Secure`
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to attach to the router
/// - `Err(AppError::InternalError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    secure: bool,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(session_layer(session_store, secure))
}

pub fn session_layer(store: SqliteStore, secure: bool) -> SessionManagerLayer<SqliteStore> {
    SessionManagerLayer::new(store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Grants the admin role to every configured admin email.
pub async fn seed_admins(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if config.admin_emails.is_empty() {
        tracing::warn!("ADMIN_EMAILS is empty; no admin users were seeded");
        return Ok(());
    }

    UserService::new(db)
        .seed_admins(&config.admin_emails)
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}

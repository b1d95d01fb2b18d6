//! cafe-booking server binary.
//!
//! Loads configuration from the environment, wires the adapters and serves
//! the REST API until the process is stopped.

use std::path::Path;
use std::sync::Arc;

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use cafe_booking::adapters::http::{app_router, AppState};
use cafe_booking::adapters::postgres::{
    PostgresBookingReader, PostgresBookingRepository, PostgresCafeRepository,
    PostgresStatsReader, PostgresUserRepository,
};
use cafe_booking::adapters::{Argon2PasswordHasher, InMemoryStore, JwtCredentialService};
use cafe_booking::application::SeedAdminCommand;
use cafe_booking::config::AppConfig;

const MIGRATIONS_DIR: &str = "./migrations";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    tracing::info!(
        environment = ?config.server.environment,
        "Starting cafe-booking"
    );

    let tokens = Arc::new(JwtCredentialService::new(&config.auth));
    let hasher = Arc::new(Argon2PasswordHasher::new());
    let unit_price = config.booking.unit_price;

    let state = if config.database.is_configured() {
        let db = &config.database;
        let pool = PgPoolOptions::new()
            .min_connections(db.min_connections)
            .max_connections(db.max_connections)
            .acquire_timeout(db.acquire_timeout())
            .idle_timeout(db.idle_timeout())
            .max_lifetime(db.max_lifetime())
            .connect(&db.url)
            .await?;

        if db.run_migrations {
            Migrator::new(Path::new(MIGRATIONS_DIR))
                .await?
                .run(&pool)
                .await?;
            tracing::info!("Database migrations applied");
        }

        AppState {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            cafes: Arc::new(PostgresCafeRepository::new(pool.clone())),
            bookings: Arc::new(PostgresBookingRepository::new(pool.clone())),
            booking_reader: Arc::new(PostgresBookingReader::new(pool.clone())),
            stats_reader: Arc::new(PostgresStatsReader::new(pool)),
            hasher,
            token_issuer: tokens.clone(),
            verifier: tokens,
            unit_price,
        }
    } else {
        tracing::warn!("No database configured; using in-memory store, data will not persist");
        AppState::with_store(
            Arc::new(InMemoryStore::new()),
            hasher,
            tokens.clone(),
            tokens,
            unit_price,
        )
    };

    if let Some((email, password)) = config.auth.admin_credentials() {
        state
            .seed_admin_handler()
            .handle(SeedAdminCommand {
                name: "Administrator".to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
    }

    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("cafe-booking listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// JSON lines in production, human-readable output elsewhere.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `todo::TodoError`.

mod config;

use clap::Parser;
use config::{Cli, Command, DatabaseArgs, ServerArgs};
use kernel::error::conversions::sqlx_error_kind;
use platform::retry::retry;
use sqlx::postgres::PgPoolOptions;
use todo::{PgTodoRepository, TodoError, todo_router};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,todo=info,platform=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve => serve(&cli.database, &cli.server).await,
        Command::Migrate => {
            connect(&cli.database).await?;
            tracing::info!("Migrations completed");
            Ok(())
        }
    }
}

/// Connect to the database and ensure the schema, retrying transient failures
async fn connect(database: &DatabaseArgs) -> anyhow::Result<PgTodoRepository> {
    let options = database.connect_options()?;
    let policy = database.retry_policy();

    tracing::info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or("<default>"),
        "Ensuring database exists and is up to date"
    );

    let pool = retry(
        &policy,
        "connect",
        |e: &sqlx::Error| sqlx_error_kind(e).is_retryable(),
        || {
            PgPoolOptions::new()
                .max_connections(database.max_connections)
                .connect_with(options.clone())
        },
    )
    .await?;

    tracing::info!("Connected to database");

    let repo = PgTodoRepository::new(pool);

    retry(&policy, "ensure_schema", TodoError::is_transient, || {
        repo.ensure_schema()
    })
    .await?;

    Ok(repo)
}

async fn serve(database: &DatabaseArgs, server: &ServerArgs) -> anyhow::Result<()> {
    let repo = connect(database).await?;

    let app = todo_router(repo, server.todo_config())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(server.cors_layer()?);

    tracing::info!("Listening on {}", server.bind);

    let listener = TcpListener::bind(server.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

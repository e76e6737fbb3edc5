//! Command line and environment configuration
//!
//! Every option can be given as a flag or through the environment
//! (a `.env` file is loaded first).

use anyhow::Context;
use axum::http::HeaderValue;
use clap::{Args, Parser, Subcommand};
use platform::retry::RetryPolicy;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::time::Duration;
use todo::TodoConfig;
use tower_http::cors::{Any, CorsLayer};

#[derive(Parser, Debug)]
#[command(name = "api")]
#[command(about = "Todo CRUD service over PostgreSQL")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Ensure the schema and serve HTTP (default)
    #[default]
    Serve,
    /// Ensure the schema and exit
    Migrate,
}

#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Retries for transient failures while connecting and migrating
    #[arg(long, env = "DB_CONNECT_RETRIES", default_value_t = 5)]
    pub connect_retries: u32,

    /// Cap on the backoff delay between retries
    #[arg(long, env = "DB_RETRY_MAX_DELAY_SECS", default_value_t = 10)]
    pub retry_max_delay_secs: u64,
}

impl DatabaseArgs {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        self.database_url
            .parse::<PgConnectOptions>()
            .context("DATABASE_URL is not a valid PostgreSQL connection string")
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.connect_retries, self.retry_max_delay_secs)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(short, long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Comma separated origins; unset allows any origin
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub cors_allowed_origins: Vec<String>,

    /// Path of the API description; unmatched routes redirect here
    #[arg(long, env = "DOCS_PATH", default_value = "/swagger", value_parser = parse_docs_path)]
    pub docs_path: String,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl ServerArgs {
    pub fn todo_config(&self) -> TodoConfig {
        TodoConfig::with_docs_path(self.docs_path.clone())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        let origins: Vec<&str> = self
            .cors_allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .collect();

        if origins.is_empty() {
            return Ok(cors.allow_origin(Any));
        }

        let allowed = origins
            .into_iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid CORS origin: {origin}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(cors.allow_origin(allowed))
    }
}

fn parse_docs_path(value: &str) -> Result<String, String> {
    if !value.starts_with('/') || value.len() < 2 {
        return Err("docs path must start with '/' and name a page".to_string());
    }
    if value.contains(['{', '}', '*']) {
        return Err("docs path must be a literal path without '{', '}' or '*'".to_string());
    }
    if value == "/todos" || value.starts_with("/todos/") {
        return Err("docs path must not overlap the /todos routes".to_string());
    }
    Ok(value.to_string())
}

//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `SQLite` connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://trolley.db")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5_u32)]
    pub database_max_connections: u32,
}

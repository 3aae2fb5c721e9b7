//! Auth Config

use clap::Args;

/// Basic authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Username accepted by the API
    #[arg(long, env = "AUTH_USERNAME")]
    pub auth_username: String,

    /// Password accepted by the API
    #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    pub auth_password: String,
}

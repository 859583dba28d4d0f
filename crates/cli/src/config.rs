//! Configuration loaded from environment variables.

/// Default upstream base URL (Sportmonks v3 football API).
const DEFAULT_BASE_URL: &str = "https://api.sportmonks.com/v3/football";

/// Everything the binary needs, loaded once at startup and passed
/// explicitly into constructors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Sportmonks API token, sent as a query parameter.
    pub api_token: String,
    /// Upstream base URL; overridable for testing against a stub.
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required | Default                                  |
    /// |------------------------|----------|------------------------------------------|
    /// | `DATABASE_URL`         | yes      | --                                       |
    /// | `SPORTMONKS_API_TOKEN` | yes      | --                                       |
    /// | `SPORTMONKS_BASE_URL`  | no       | `https://api.sportmonks.com/v3/football` |
    ///
    /// Exits the process when a required variable is missing.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::error!("DATABASE_URL environment variable is required");
            std::process::exit(1);
        });

        let api_token = std::env::var("SPORTMONKS_API_TOKEN").unwrap_or_else(|_| {
            tracing::error!("SPORTMONKS_API_TOKEN environment variable is required");
            std::process::exit(1);
        });

        let base_url =
            std::env::var("SPORTMONKS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            database_url,
            api_token,
            base_url,
        }
    }
}

//! `futsync` -- console synchronizer for football data.
//!
//! Fetches team squads, leagues and single-league detail from the
//! Sportmonks API, upserts them into Postgres and appends an audit row
//! per operation.  Driven by a numbered console menu.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                     |
//! |------------------------|----------|---------|---------------------------------|
//! | `DATABASE_URL`         | yes      | --      | Postgres connection string      |
//! | `SPORTMONKS_API_TOKEN` | yes      | --      | Upstream API token              |
//! | `SPORTMONKS_BASE_URL`  | no       | v3 API  | Override for testing            |
//! | `RUST_LOG`             | no       | `futsync=info` | Tracing filter           |

mod config;
mod menu;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use futsync_sportmonks::SportmonksClient;

use config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "futsync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let pool = futsync_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    futsync_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    futsync_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let client = SportmonksClient::new(config.base_url, config.api_token);

    menu::run(&client, &pool).await;

    tracing::info!("Shutting down");
}

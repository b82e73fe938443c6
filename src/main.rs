use tracing_subscriber::{EnvFilter, fmt};

use scheduled_events::config::Settings;
use scheduled_events::shell::{app, build_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings = Settings::from_env()?;
    let state = build_state(&settings)?;

    let addr = settings.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("REST endpoint: http://{}/events", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

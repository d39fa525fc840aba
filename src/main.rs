mod model;
mod server;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, router, service::lol::LolApiClient, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::session_layer(&db).await?;
    let http_client = startup::setup_http_client()?;

    let lol_api = LolApiClient::new(
        http_client,
        config.lol_api_base_url.clone(),
        config.lol_api_key.clone(),
    );
    let state = AppState::new(db, lol_api);

    let app = router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(CorsLayer::permissive());

    tracing::info!("listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, service::notifier::InviteNotifier, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let cors = startup::setup_cors(&config)?;

    let notifier = InviteNotifier::new(http_client, &config);
    if !notifier.is_enabled() {
        tracing::warn!("EMAIL_API_KEY is not set, invitation emails will not be sent");
    }

    let app = router::router()
        .with_state(AppState::new(db, notifier))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, scheduler::waitlist_sweep, startup,
    state::AppState, util::upload::UploadStore,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    startup::ensure_uploads_dir(&config).await?;

    let mut scheduler = waitlist_sweep::start_scheduler(db.clone()).await?;

    let uploads = UploadStore::new(&config.uploads_dir, config.public_url.clone());
    let app = router::router(uploads.dir()).with_state(AppState::new(
        db.clone(),
        http_client,
        config.jwt_key.clone(),
        config.twilio.clone(),
        uploads,
    ));

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped, shutting down scheduler");

    scheduler.shutdown().await?;
    db.close().await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

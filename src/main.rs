mod app;
mod config;
mod db;
mod errors;
mod jobs;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::config::Settings;
use crate::db::Database;
use crate::logging::LoggingConfig;
use crate::models::ScoringTables;
use crate::services::automation_engine::AutomationEngine;
use crate::services::notifier::{LogNotifier, Notifier};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())?;

    let settings = Settings::from_env();

    let db = Arc::new(Database::connect(&settings.database_url).await?);
    db.init().await?;

    let tables = Arc::new(ScoringTables::default());
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

    let engine = Arc::new(AutomationEngine::new(
        Arc::clone(&db),
        Arc::clone(&tables),
        notifier,
        Duration::from_secs(settings.poll_interval_secs),
    ));
    engine.start();

    let state = AppState {
        db,
        tables,
        engine: Arc::clone(&engine),
    };
    let app = app::create_app(state);

    let host: IpAddr = settings
        .host
        .parse()
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let addr = SocketAddr::from((host, settings.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("workforce backend running at http://{}/", addr);

    axum::serve(listener, app).await?;

    engine.stop().await;

    Ok(())
}

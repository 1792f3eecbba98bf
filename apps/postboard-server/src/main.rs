//! # Postboard Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod startup;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use startup::StartupError;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    if let Err(e) = run(AppConfig::from_env()).await {
        tracing::error!(error = %e, "Startup failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    let state = startup::build_state(&config).await?;

    tracing::info!(
        "Starting Postboard server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

mod config;
mod handlers;
mod models;
mod services;

#[cfg(feature = "http-server")]
mod server;

use anyhow::Result;
use std::sync::Arc;

use config::Config;
use handlers::AnalyzeHandler;
use services::OpenAIRecognizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    log::info!("🚀 Starting Food Calorie API...");

    let config = Config::from_env()?;

    let recognizer = Arc::new(OpenAIRecognizer::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    ));
    log::info!(
        "✅ Recognizer initialized with model: {} ({})",
        config.openai_model,
        config.openai_base_url
    );

    let analyze_handler = Arc::new(AnalyzeHandler::new(recognizer));

    #[cfg(feature = "http-server")]
    {
        let addr = format!("0.0.0.0:{}", config.port);
        let app = server::create_router(analyze_handler, config.body_limit_bytes);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        log::info!("🌐 Listening on http://{}", addr);
        log::info!("📸 POST image data URLs to http://{}/api/analyze", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }

    #[cfg(not(feature = "http-server"))]
    {
        let _ = analyze_handler;
        log::warn!("⚠️ Built without the http-server feature, nothing to serve");
    }

    log::info!("🛑 Shutting down...");

    Ok(())
}

#[cfg(feature = "http-server")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("❌ Failed to listen for Ctrl+C: {}", e);
    }
}

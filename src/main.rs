use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicedrop_relay::controllers::download::DownloadController;
use voicedrop_relay::domain::relay::RelayService;
use voicedrop_relay::infrastructure::config::{Config, LogFormat};
use voicedrop_relay::infrastructure::http::start_http_server;
use voicedrop_relay::infrastructure::repositories::HttpAudioSourceRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting VoiceDrop relay v{} on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.host,
        config.port
    );

    if config.allowed_hosts.is_empty() {
        tracing::warn!("RELAY_ALLOWED_HOSTS not set. Any upstream host can be relayed");
    } else {
        tracing::info!(allowed_hosts = ?config.allowed_hosts, "Upstream host allow-list enabled");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Outbound audio fetcher
    let audio_source = Arc::new(HttpAudioSourceRepository::with_timeout(
        config.upstream_timeout(),
    )?);
    tracing::info!(
        timeout_secs = ?config.upstream_timeout_secs,
        "Upstream HTTP client initialized"
    );

    // 2. Services
    let relay_service = Arc::new(RelayService::new(
        audio_source,
        config.default_filename.clone(),
        config.allowed_hosts.clone(),
    ));

    // 3. Controllers
    let download_controller = Arc::new(DownloadController::new(relay_service));

    start_http_server(config, download_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicedrop_relay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicedrop_relay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

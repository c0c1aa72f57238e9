use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use voicedrop_relay::{
    controllers::download::DownloadController,
    domain::relay::RelayService,
    infrastructure::{
        config::{Config, Environment, LogFormat},
        http::build_router,
        repositories::HttpAudioSourceRepository,
    },
};

pub mod api_client;

use api_client::TestClient;
use upstream::UpstreamServer;

pub struct TestContext {
    pub client: TestClient,
    pub upstream: UpstreamServer,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let upstream = UpstreamServer::start().await;
            let config = test_config(Vec::new());
            let client = spawn_relay(config.clone()).await;

            Self {
                client,
                upstream,
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Servers stop with the test runtime
        }
    }
}

pub fn test_config(allowed_hosts: Vec<String>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        default_filename: "audio.mp3".to_string(),
        allowed_hosts,
        upstream_timeout_secs: Some(10),
    }
}

/// Start the relay on an ephemeral port and return a client pointed at it
pub async fn spawn_relay(config: Config) -> TestClient {
    // Loopback fixtures must not be routed through an ambient HTTP_PROXY
    let mut http_client = reqwest::Client::builder().no_proxy();
    if let Some(timeout) = config.upstream_timeout() {
        http_client = http_client.timeout(timeout);
    }
    let audio_source = Arc::new(HttpAudioSourceRepository::new(
        http_client.build().expect("Failed to build upstream client"),
    ));
    let relay_service = Arc::new(RelayService::new(
        audio_source,
        config.default_filename.clone(),
        config.allowed_hosts.clone(),
    ));
    let app = build_router(Arc::new(DownloadController::new(relay_service)));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to be ready
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

    TestClient::new(&base_url)
}

/// Path for the download endpoint with both parameters url-encoded
pub fn download_path(url: &str, filename: Option<&str>) -> String {
    let mut path = format!("/api/download?url={}", urlencoding::encode(url));
    if let Some(filename) = filename {
        path.push_str("&filename=");
        path.push_str(&urlencoding::encode(filename));
    }
    path
}

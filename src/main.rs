use spotirelay::{config::Config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load a local .env when present; real deployments set the environment
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    tracing::info!(
        "starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    server::start(config).await;
}

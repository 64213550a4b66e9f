use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;
use vault_api::{config::Config, gateway::RpcGateway, routes};
use vault_client::VaultClient;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let client = VaultClient::new(&config.rpc_url, config.vault_program_id);
    let app = routes::router(RpcGateway::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, %addr, "failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!(port = config.port, rpc_url = %config.rpc_url, "server is running");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }
}

//! `api-gateway` binary: REST/JSON in front of the company gRPC service.

use anyhow::Context;
use clap::Parser;
use company_proto::client::CompanyServiceClient;
use tokio::net::TcpListener;
use tonic::transport::Channel;
use tracing::info;

use api_gateway::service::GrpcCompanyService;
use api_gateway::{build_router, telemetry, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init(&config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "api-gateway starting"
    );

    // Connects on first use; an unreachable backend surfaces per request as 503.
    let backend = config.company_service_uri();
    let channel = Channel::from_shared(backend.clone())
        .with_context(|| format!("invalid company service address {backend:?}"))?
        .connect_lazy();
    let companies = GrpcCompanyService::new(CompanyServiceClient::new(channel));

    let addr = config.listen_addr()?;
    let app = build_router(AppState::new(config, companies));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, %backend, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("api-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

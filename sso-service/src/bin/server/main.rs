use std::sync::Arc;

use anyhow::Context;
use auth::PasswordHasher;
use sso_service::config::Config;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::repositories::PostgresStorage;
use sso_service::proto::auth_server::AuthServer;
use tokio::task::JoinHandle;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        token_ttl_secs = config.token.ttl_secs,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let storage = Arc::new(PostgresStorage::connect(&config.database).await?);
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    storage.run_migrations().await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_cost(
        config.password.memory_kib,
        config.password.iterations,
        config.password.parallelism,
    )?;

    let auth_service = Arc::new(
        AuthService::new(
            Arc::clone(&storage),
            Arc::clone(&storage),
            Arc::clone(&storage),
            config.token.ttl(),
        )
        .with_password_hasher(password_hasher),
    );

    let request_timeout = config.server.request_timeout();

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(Arc::clone(&auth_service), request_timeout);
    let http_server = tokio::spawn(async move {
        axum::serve(http_listener, http_application)
            .await
            .context("http server failed")
    });

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(Arc::clone(&auth_service));
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .timeout(request_timeout)
            .add_service(AuthServer::new(grpc_service))
            .serve(grpc_address)
            .await
            .context("grpc server failed")
    });

    // The first server to fail takes the process down with it.
    if let Err(e) = tokio::try_join!(flatten(http_server), flatten(grpc_server)) {
        tracing::error!(error = %e, "Server error");
        return Err(e);
    }

    tracing::info!("Servers exited successfully");

    Ok(())
}

async fn flatten(handle: JoinHandle<anyhow::Result<()>>) -> anyhow::Result<()> {
    handle.await.context("server task panicked")?
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_first_server_failure_ends_the_join() {
        let failing: JoinHandle<anyhow::Result<()>> =
            tokio::spawn(async { Err(anyhow::anyhow!("bind lost")) });
        let running: JoinHandle<anyhow::Result<()>> = tokio::spawn(async {
            std::future::pending::<()>().await;
            Ok(())
        });

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            async { tokio::try_join!(flatten(failing), flatten(running)) },
        )
        .await
        .expect("join should not wait on the running server");

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "bind lost");
    }

    #[tokio::test]
    async fn test_panicked_server_is_an_error() {
        let panicked: JoinHandle<anyhow::Result<()>> = tokio::spawn(async { panic!("boom") });

        assert!(flatten(panicked).await.is_err());
    }
}

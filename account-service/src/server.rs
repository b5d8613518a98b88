//! Server bootstrap for the account service

use std::future::Future;
use std::sync::Arc;

use common::error::{IntoError, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{error, info};

use crate::config::AccountServiceConfig;
use crate::grpc::AccountsGrpcService;
use crate::service::AccountService;

/// Bind the configured address and serve until a shutdown signal arrives
pub async fn serve(config: &AccountServiceConfig, service: Arc<AccountService>) -> Result<()> {
    config.validate()?;

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| e.into_error(&format!("failed to listen on {}", addr)))?;

    serve_with_listener(listener, &config.host, service, shutdown_signal()).await
}

/// Serve the accounts gRPC service on an already bound listener
///
/// Returns when `shutdown` resolves or the listener fails. `host` is only
/// used for the startup log line; the port is taken from the listener so
/// ephemeral ports are reported correctly.
pub async fn serve_with_listener<F>(
    listener: TcpListener,
    host: &str,
    service: Arc<AccountService>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let local_addr = listener
        .local_addr()
        .map_err(|e| e.into_error("failed to read listener address"))?;

    let grpc = AccountsGrpcService::new(service).into_server();

    info!("Server listening on http://{}:{}", host, local_addr.port());

    Server::builder()
        .add_service(grpc)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .map_err(|e| e.into_error("failed to serve"))?;

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Error waiting for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}

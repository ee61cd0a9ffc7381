//! HTTP server lifecycle.
//!
//! `serve_on` runs the router on an already-bound listener until the given
//! shutdown future resolves; `serve` binds an address and stops on ctrl-c.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::api::router::api_router;
use crate::api::types::ApiContext;

/// Serve on `listener` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_on<F>(listener: TcpListener, ctx: ApiContext, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Server started");

    axum::serve(listener, api_router(ctx))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind `addr` and serve in the foreground until ctrl-c.
pub async fn serve(ctx: ApiContext, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;

    serve_on(listener, ctx, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install ctrl-c handler: {e}");
        }
        tracing::info!("Ctrl-c received, shutting down");
    })
    .await
}

use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use todo_api::{config::Config, error::ServerError, logging, route::create_router, store, AppState};

// Entry point of the application
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenv::dotenv().ok();
    logging::init_tracing();

    let config = Config::parse();

    let store = store::connect(&config).await?;
    store.ensure_schema().await?;
    tracing::info!("todo table ready");

    let app = create_router(Arc::new(AppState::new(store)));

    let addr = config.listen_addr();
    let server = axum::Server::try_bind(&addr)?.serve(app.into_make_service());
    tracing::info!("server listening at http://{}", addr);

    server.with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}

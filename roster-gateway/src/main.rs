//! Entry point for the `roster-gateway` HTTP server.

use roster_gateway::routes::create_router;
use roster_store::Repository;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://roster.db".to_owned());
    let addr =
        std::env::var("ROSTER_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".to_owned());

    let pool = match roster_store::connect(&database_url).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(url = %database_url, error = %e, "failed to open store");
            std::process::exit(1);
        }
    };
    let app = create_router(Repository::new(pool));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "roster-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

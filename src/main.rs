use chat_backend::config::AppConfig;
use chat_backend::routes::configure_routes;
use chat_backend::store::{DocumentStore, Persistence, PostgresDocumentStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let persistence = init_persistence(&config);

    let addr: SocketAddr = (config.host, config.port).into();
    let routes = configure_routes(persistence, Arc::new(config));

    tracing::info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chat_backend=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the document store, or run without one when it is not configured
/// or cannot be constructed.
fn init_persistence(config: &AppConfig) -> Persistence {
    if !config.persistence_configured() {
        tracing::warn!("DATABASE_URL / DATABASE_NAME not set, running without persistence");
        return Persistence::disabled();
    }

    match PostgresDocumentStore::connect(config) {
        Ok(store) => {
            tracing::info!("Document store configured for database '{}'", store.name());
            Persistence::new(Arc::new(store))
        }
        Err(err) => {
            tracing::warn!("Document store unavailable, running without persistence: {}", err);
            Persistence::disabled()
        }
    }
}

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use std::net::SocketAddr;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::database::Database;
use crate::database::DatabaseConfig;
use crate::search::SearchCatalog;
use crate::utils::env_var_or_else;

mod accommodations;
mod api;
mod database;
mod destinations;
mod graceful_shutdown;
mod health;
mod itinerary_items;
mod notes;
mod patch;
mod search;
#[cfg(test)]
mod tests;
mod transports;
mod trips;
mod utils;

const DEFAULT_RUST_LOG: &str = "travel_planner=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let catalog = SearchCatalog::from_env()?;
    tracing::info!("Search catalog holds {} entries", catalog.entry_count());

    let app = setup_app(DatabaseConfig::DetectConfig, catalog).await?;

    let address = setup_address()?;
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its dependencies
///
/// # Errors
///
/// Will return `Err` if any of its dependencies fail to load:
/// - Database connection
/// - Schema migrations
pub async fn setup_app(config: DatabaseConfig, catalog: SearchCatalog) -> Result<Router> {
    let database = Database::from_config(config).await?;

    Ok(create_router(database, catalog))
}

/// Create the router for the travel planner
fn create_router(database: Database, catalog: SearchCatalog) -> Router {
    Router::new()
        .route("/", get(health::health))
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(database))
        .layer(Extension(catalog))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}

fn setup_address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS)).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Ok(port) = std::env::var("PORT") {
        // only check non-empty strings
        if !port.is_empty() {
            let port = port.parse::<u16>()?;

            address.set_port(port);
        }
    }

    Ok(address)
}

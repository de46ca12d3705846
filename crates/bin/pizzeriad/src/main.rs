//! # pizzeriad — pizzeria daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`pizzeria.toml` + env vars)
//! - Initialise logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Optionally seed demo data
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;
mod seed;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pizzeria_adapter_http_axum::state::AppState;
use pizzeria_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqlitePizzaRepository, SqliteRestaurantPizzaRepository,
    SqliteRestaurantRepository,
};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await
    .with_context(|| format!("failed to open database {}", config.database.url))?;
    let pool = db.pool().clone();

    // Services
    let restaurant_service =
        Arc::new(RestaurantService::new(SqliteRestaurantRepository::new(pool.clone())));
    let pizza_service = Arc::new(PizzaService::new(SqlitePizzaRepository::new(pool.clone())));
    let restaurant_pizza_service = Arc::new(RestaurantPizzaService::new(
        SqliteRestaurantPizzaRepository::new(pool),
    ));

    if config.database.seed_demo_data {
        seed::run(
            &restaurant_service,
            &pizza_service,
            &restaurant_pizza_service,
        )
        .await
        .context("failed to seed demo data")?;
    }

    // HTTP
    let state = AppState::from_arcs(restaurant_service, pizza_service, restaurant_pizza_service);
    let app = pizzeria_adapter_http_axum::router::build(state);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "pizzeriad listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("pizzeriad stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}

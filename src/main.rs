mod config;
mod errors;
mod handlers;
mod ifttt;
mod models;
mod routes;
mod state;
mod urls;
mod vitemadose;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let bind = (config.bind_address.clone(), config.port);

    tracing::info!(
        address = %bind.0,
        port = bind.1,
        feed = %config.feed_base_url,
        default_departement = %config.default_departement,
        "starting chronodose notifier"
    );

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind(bind)?
        .run()
        .await?;

    Ok(())
}

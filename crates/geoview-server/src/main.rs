use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use clap::Parser;
use tracing::info;

use geoview_server::logging::init_logging;
use geoview_server::{Args, ServerConfig, routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServerConfig::from_args(Args::parse())
        .context("failed to resolve the catalog root")?;
    info!(root = %config.root.path().display(), bind = %config.bind, "starting geoview-server");

    let root = web::Data::new(config.root);
    HttpServer::new(move || {
        App::new()
            .app_data(root.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(config.bind)
    .with_context(|| format!("failed to bind {}", config.bind))?
    .run()
    .await
    .context("server error")
}

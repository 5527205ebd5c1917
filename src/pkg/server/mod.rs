pub mod handlers;
pub mod router;
pub mod state;

use crate::{conf::Settings, prelude::Result};
use router::build_routes;

pub async fn listen(conf: &Settings) -> Result<()> {
    let app = build_routes(conf)?;
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", conf.listen_port)).await?;
    tracing::info!("Listening at port {}", conf.listen_port);
    tokio::select! {
        r = axum::serve(listener, app) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use axum_server::Handle;
use tracing::info;

use crate::api::handlers;
use crate::config::Config;
use crate::service::rate::{cbr, RateProvider};

const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

mod urls {
    pub const ROOT: &str = "/";
}

pub struct AppState<P> {
    pub rate_provider: Arc<P>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self { rate_provider: self.rate_provider.clone() }
    }
}

pub fn router<P: RateProvider + 'static>(rate_provider: P) -> Router {
    Router::new()
        .route(urls::ROOT, get(handlers::convert::<P>)
            .head(handlers::not_implemented)
            .fallback(handlers::not_implemented),
        )
        .with_state(AppState { rate_provider: Arc::new(rate_provider) })
}

pub async fn run(cfg: Config) -> Result<(), String> {
    let rate_provider = cbr::Provider::new(
        cfg.rate_source_url.clone(),
        Duration::from_secs(cfg.rate_timeout_secs),
    ).map_err(|err| format!("unable to create rate provider: {err}"))?;

    let addr = tokio::net::lookup_host((cfg.address.as_str(), cfg.port)).await
        .map_err(|err| format!("unable to resolve address={}: {err}", cfg.address))?
        .next()
        .ok_or_else(|| format!("no socket address for address={}", cfg.address))?;

    let handle = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    info!("listening on {addr}, rate source={}", cfg.rate_source_url);

    axum_server::bind(addr)
        .handle(handle)
        .serve(router(rate_provider).into_make_service()).await
        .map_err(|err| format!("unable to serve requests on {addr}: {err}"))
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("got ctrl-c, shutting down...");
        handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
    }
}

//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound HTTP clients and services from [`Config`], then runs
//! the Axum server until Ctrl+C or SIGTERM.

use crate::application::services::{
    PreviewService, RedirectResolver, SubscriptionService, ThreadService,
};
use crate::config::Config;
use crate::domain::clients::ContactListClient;
use crate::infrastructure::http::{
    BrevoClient, HtmlMetadataFetcher, HttpThreadSource, ReqwestRedirectProbe,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Timeout for calls to the mailing list and thread APIs.
const API_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds every service from configuration.
///
/// Nothing is contacted here; clients connect lazily on first use.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built or `THREADS_API_URL`
/// does not parse.
pub fn build_state(config: &Config) -> Result<AppState> {
    let probe = ReqwestRedirectProbe::new(&config.user_agent)
        .context("Failed to build redirect probe client")?;
    let fetcher = HtmlMetadataFetcher::new(&config.user_agent)
        .context("Failed to build metadata fetcher client")?;

    let preview_service = PreviewService::new(
        config.shortener_domains.clone(),
        RedirectResolver::new(Arc::new(probe), config.max_redirect_hops),
        Arc::new(fetcher),
        config.preview_timeout,
    );

    let api_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(API_TIMEOUT)
        .build()
        .context("Failed to build API client")?;

    let contact_client = config.brevo_api_key.as_ref().map(|key| {
        Arc::new(BrevoClient::new(
            api_client.clone(),
            config.brevo_api_url.clone(),
            key.clone(),
        )) as Arc<dyn ContactListClient>
    });
    if !config.is_subscription_enabled() {
        tracing::warn!("BREVO_API_KEY not set, subscriptions will fail");
    }
    let subscription_service = SubscriptionService::new(contact_client, config.brevo_list_id);

    let threads_url = Url::parse(&config.threads_api_url).context("Invalid THREADS_API_URL")?;
    let thread_service = ThreadService::new(Arc::new(HttpThreadSource::new(api_client, threads_url)));

    Ok(AppState::new(
        Arc::new(preview_service),
        Arc::new(subscription_service),
        Arc::new(thread_service),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - A client or service cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}

//! `reqwest` implementations of the domain client traits.
//!
//! - [`ReqwestRedirectProbe`] - HEAD requests with redirects disabled
//! - [`HtmlMetadataFetcher`] - Page download and meta tag extraction
//! - [`BrevoClient`] - Brevo contacts API
//! - [`HttpThreadSource`] - Upstream thread API

pub mod brevo_client;
pub mod metadata_fetcher;
pub mod redirect_probe;
pub mod thread_source;

pub use brevo_client::BrevoClient;
pub use metadata_fetcher::HtmlMetadataFetcher;
pub use redirect_probe::ReqwestRedirectProbe;
pub use thread_source::HttpThreadSource;

/// Desktop browser User-Agent. Several shorteners refuse non-browser clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

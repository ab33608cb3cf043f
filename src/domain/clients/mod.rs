//! Client trait definitions for outbound I/O.
//!
//! Every call the service makes to a third-party server goes through one of
//! these traits. Concrete implementations live in
//! `crate::infrastructure::http`; mocks are generated with `mockall` for unit
//! tests.
//!
//! # Available Clients
//!
//! - [`RedirectProbe`] - Single HEAD request that reports a redirect without following it
//! - [`MetadataFetcher`] - Page download and metadata extraction
//! - [`ContactListClient`] - Mailing list provider
//! - [`ThreadSource`] - Upstream curated thread API

pub mod contact_list;
pub mod metadata_fetcher;
pub mod redirect_probe;
pub mod thread_source;

pub use contact_list::{ContactListClient, ContactListError};
pub use metadata_fetcher::{FetchError, MetadataFetcher};
pub use redirect_probe::{ProbeError, ProbeResponse, RedirectProbe};
pub use thread_source::{ThreadSource, ThreadsError};

#[cfg(test)]
pub use contact_list::MockContactListClient;
#[cfg(test)]
pub use metadata_fetcher::MockMetadataFetcher;
#[cfg(test)]
pub use redirect_probe::MockRedirectProbe;
#[cfg(test)]
pub use thread_source::MockThreadSource;

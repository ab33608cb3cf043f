//! Shortened URL resolution by walking redirect chains.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::clients::RedirectProbe;
use crate::utils::location::resolve_location;

/// Default maximum number of redirects followed.
pub const DEFAULT_MAX_HOPS: usize = 5;

/// One traversed redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectHop {
    pub status: u16,
    pub from: String,
    pub to: String,
}

impl RedirectHop {
    pub fn new(status: u16, from: String, to: String) -> Self {
        Self { status, from, to }
    }
}

/// Outcome of a resolution: the last URL reached and how we got there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub final_url: String,
    pub hops: Vec<RedirectHop>,
}

/// Follows HTTP redirects one HEAD request at a time.
///
/// Resolution is best effort and never fails:
///
/// - a non-3xx response ends the chain
/// - a 3xx response without `Location` ends the chain at the URL that produced it
/// - a transport error ends the chain at the last URL reached
/// - after `max_hops` redirects the chain is cut silently
///
/// [`RedirectResolver::resolve`] only returns the final URL; use
/// [`RedirectResolver::resolve_chain`] to see which hops were taken.
pub struct RedirectResolver {
    probe: Arc<dyn RedirectProbe>,
    max_hops: usize,
}

impl RedirectResolver {
    /// Creates a resolver that follows at most `max_hops` redirects.
    pub fn new(probe: Arc<dyn RedirectProbe>, max_hops: usize) -> Self {
        Self { probe, max_hops }
    }

    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Returns the final URL reached from `url`.
    pub async fn resolve(&self, url: &str) -> String {
        self.resolve_chain(url).await.final_url
    }

    /// Walks the redirect chain starting at `url`, recording every hop.
    ///
    /// Issues at most `max_hops` requests; hop `N + 1` is only sent once hop
    /// `N` has answered.
    pub async fn resolve_chain(&self, url: &str) -> Resolution {
        let mut current = url.to_string();
        let mut hops = Vec::new();

        while hops.len() < self.max_hops {
            debug!(attempt = hops.len() + 1, url = %current, "Resolving URL");

            let response = match self.probe.head(&current).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(step = hops.len(), url = %current, error = %e, "Error resolving URL");
                    break;
                }
            };

            if !response.is_redirect() {
                break;
            }

            let Some(location) = response.location else {
                debug!(status = response.status, url = %current, "Redirect without Location");
                break;
            };

            let Some(next) = resolve_location(&current, &location) else {
                warn!(url = %current, location = %location, "Unresolvable Location header");
                break;
            };

            debug!(status = response.status, to = %next, "Redirected");
            hops.push(RedirectHop::new(response.status, current, next.clone()));
            current = next;
        }

        info!(original = %url, resolved = %current, hops = hops.len(), "Final resolved URL");

        Resolution {
            final_url: current,
            hops,
        }
    }
}

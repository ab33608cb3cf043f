//! Newsletter subscription service.

use std::sync::Arc;

use tracing::{error, info, warn};
use validator::ValidateEmail;

use crate::domain::clients::{ContactListClient, ContactListError};
use crate::domain::entities::NewContact;

/// Default mailing list contacts are added to.
pub const DEFAULT_LIST_ID: i64 = 2;

/// Failure kinds of a subscription.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubscribeError {
    #[error("invalid email address")]
    InvalidEmail,

    /// No provider API key was configured at startup.
    #[error("mailing list provider is not configured")]
    NotConfigured,

    /// The provider refused the contact; its status and message are forwarded.
    #[error("provider rejected the subscription with status {status}")]
    Upstream { status: u16, message: String },

    #[error("provider unreachable: {0}")]
    Transport(String),
}

/// Relays newsletter signups to the mailing list provider.
///
/// The provider client is optional: when no API key is configured the
/// service still validates input but every valid signup fails with
/// [`SubscribeError::NotConfigured`].
pub struct SubscriptionService {
    client: Option<Arc<dyn ContactListClient>>,
    list_id: i64,
}

impl SubscriptionService {
    /// Creates a new subscription service.
    pub fn new(client: Option<Arc<dyn ContactListClient>>, list_id: i64) -> Self {
        Self { client, list_id }
    }

    /// Returns whether a provider client is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Subscribes `email` to the configured list.
    ///
    /// The email is validated before the configuration is checked, so a bad
    /// address is always reported as such.
    ///
    /// # Errors
    ///
    /// - [`SubscribeError::InvalidEmail`] for malformed addresses
    /// - [`SubscribeError::NotConfigured`] when the provider key is missing
    /// - [`SubscribeError::Upstream`] when the provider refuses the contact
    /// - [`SubscribeError::Transport`] when the provider cannot be reached
    pub async fn subscribe(&self, email: &str) -> Result<(), SubscribeError> {
        let email = email.trim();
        if !email.validate_email() {
            return Err(SubscribeError::InvalidEmail);
        }

        let Some(client) = &self.client else {
            error!("Mailing list API key not configured");
            return Err(SubscribeError::NotConfigured);
        };

        let contact = NewContact::for_list(email, self.list_id);

        match client.add_contact(contact).await {
            Ok(()) => {
                info!(list_id = self.list_id, "Subscription successful");
                Ok(())
            }
            Err(ContactListError::Rejected { status, message }) => {
                warn!(status, message = ?message, "Mailing list provider rejected contact");
                Err(SubscribeError::Upstream {
                    status,
                    message: message.unwrap_or_else(|| "Subscription failed".to_string()),
                })
            }
            Err(ContactListError::Transport(e)) => {
                error!(error = %e, "Mailing list provider unreachable");
                Err(SubscribeError::Transport(e))
            }
        }
    }
}

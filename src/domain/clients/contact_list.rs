//! Client trait for the mailing list provider.

use crate::domain::entities::NewContact;
use async_trait::async_trait;

/// Errors returned by the mailing list provider.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactListError {
    /// The provider answered with a non-success status.
    #[error("provider rejected contact with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(String),
}

/// Adds contacts to a mailing list.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::BrevoClient`] - Brevo contacts API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactListClient: Send + Sync {
    /// Creates or updates a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ContactListError::Rejected`] when the provider refuses the
    /// contact and [`ContactListError::Transport`] when it cannot be reached.
    async fn add_contact(&self, contact: NewContact) -> Result<(), ContactListError>;
}

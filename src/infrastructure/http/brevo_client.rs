//! Brevo contacts API client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::clients::{ContactListClient, ContactListError};
use crate::domain::entities::NewContact;

/// Default Brevo endpoint for creating contacts.
pub const DEFAULT_BREVO_API_URL: &str = "https://api.brevo.com/v3/contacts";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateContactBody<'a> {
    email: &'a str,
    email_blacklisted: bool,
    sms_blacklisted: bool,
    list_ids: &'a [i64],
    update_enabled: bool,
}

#[derive(Debug, Deserialize)]
struct BrevoErrorBody {
    message: Option<String>,
}

/// [`ContactListClient`] posting to the Brevo contacts endpoint.
#[derive(Clone)]
pub struct BrevoClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl BrevoClient {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ContactListClient for BrevoClient {
    async fn add_contact(&self, contact: NewContact) -> Result<(), ContactListError> {
        let body = CreateContactBody {
            email: &contact.email,
            email_blacklisted: false,
            sms_blacklisted: false,
            list_ids: &contact.list_ids,
            update_enabled: contact.update_enabled,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContactListError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<BrevoErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message);

        Err(ContactListError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

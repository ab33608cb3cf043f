//! DTOs for the newsletter subscription endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/subscribe`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(
        required(message = "Invalid email address"),
        email(message = "Invalid email address")
    )]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub message: String,
}

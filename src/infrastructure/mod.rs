//! Infrastructure layer for external integrations.
//!
//! This layer implements the client traits defined by the domain layer on
//! top of `reqwest`.
//!
//! # Modules
//!
//! - [`http`] - Redirect probe, metadata fetcher, Brevo and thread API clients

pub mod http;

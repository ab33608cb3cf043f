//! Domain layer containing entities and client contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (previews, threads, contacts, shortener set)
//! - [`clients`] - Trait definitions for every outbound call
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Client traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod clients;
pub mod entities;

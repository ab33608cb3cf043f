//! Utility functions for URL handling, HTML parsing and pagination.
//!
//! - [`target_url`] - Validation of user-supplied preview targets
//! - [`location`] - `Location` header resolution for redirect chains
//! - [`html_meta`] - Open Graph / Twitter card metadata extraction
//! - [`page_window`] - Page navigation controls for thread listings

pub mod html_meta;
pub mod location;
pub mod page_window;
pub mod target_url;

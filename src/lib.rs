//! Button Kit
//!
//! A themeable, variant-driven button component for Leptos, plus a gallery
//! server for exercising its style permutations.
//!
//! # Architecture
//!
//! - **Style derivation**: pure mapping from size, theme, variant and flags to Tailwind classes
//! - **Components**: Leptos SSR `Button` and `ButtonIcon`
//! - **Gallery**: Axum server rendering a demo page, stories and live previews
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, CLI, environment)
//! - [`server`]: Gallery HTTP routes
//! - [`ui`]: Components and gallery pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod server;
pub mod ui;

use crate::config::AppConfig;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

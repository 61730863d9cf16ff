//! UI components and the gallery that renders them.
//!
//! # Structure
//!
//! - [`components`]: Button, icon wrapper, icons and style derivation
//! - [`gallery`]: Stories and demo pages

pub mod components;
pub mod gallery;

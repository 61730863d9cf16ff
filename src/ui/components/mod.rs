//! Reusable button components.
//!
//! Rendered via Leptos SSR and styled with Tailwind utilities.
//!
//! # Components
//!
//! - [`Button`]: Themeable button with sizes, variants and icon slots
//! - [`ButtonIcon`]: Size-scaled icon wrapper used by [`Button`]
//! - [`icons`]: SVG icon components
//! - [`style`]: Pure class derivation behind [`Button`]

mod button;
pub mod icons;
pub mod style;

pub use button::{Button, ButtonIcon};
pub use icons::*;
pub use style::{ButtonStyle, Size, StyleError, Theme, Variant, color_classes};

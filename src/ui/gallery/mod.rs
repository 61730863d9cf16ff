//! Gallery harness for visually exercising button permutations.
//!
//! - [`stories`]: Named button stories and preview argument parsing
//! - [`page`]: Demo page, story page and preview page rendering

pub mod page;
pub mod stories;

pub use page::{gallery_page, html_shell, preview_page, story_page};
pub use stories::{IconKind, PreviewQuery, Story, StoryArgs, find_story, stories};

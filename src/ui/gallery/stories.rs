//! Story definitions.
//!
//! A story is a named, fixed set of button args rendered in isolation. The
//! preview endpoint builds ad-hoc args from query parameters with
//! [`StoryArgs::from_query`].

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ui::components::{
    ArrowRightIcon, Button, ButtonStyle, CheckIcon, PlusIcon, Size, SparklesIcon, StyleError,
    Theme, TrashIcon, Variant,
};

/// Icon choices available to stories and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKind {
    /// Plus sign.
    Plus,
    /// Arrow pointing right.
    ArrowRight,
    /// Check mark.
    Check,
    /// Trash can.
    Trash,
    /// Sparkles.
    Sparkles,
}

impl IconKind {
    /// All icons in display order.
    pub const ALL: [Self; 5] = [
        Self::Plus,
        Self::ArrowRight,
        Self::Check,
        Self::Trash,
        Self::Sparkles,
    ];

    /// Name used in query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::ArrowRight => "arrowRight",
            Self::Check => "check",
            Self::Trash => "trash",
            Self::Sparkles => "sparkles",
        }
    }

    /// Parses an icon slot value. Empty and `none` mean no icon.
    pub fn parse(name: &str) -> Result<Option<Self>, StyleError> {
        match name.trim() {
            "" | "none" => Ok(None),
            "arrow-right" => Ok(Some(Self::ArrowRight)),
            other => Self::ALL
                .into_iter()
                .find(|icon| icon.as_str() == other)
                .map(Some)
                .ok_or_else(|| StyleError::UnknownIcon(other.to_string())),
        }
    }

    /// Icon view factory for a `Button` icon slot.
    #[must_use]
    pub fn view_fn(self) -> ViewFn {
        match self {
            Self::Plus => ViewFn::from(|| view! { <PlusIcon/> }),
            Self::ArrowRight => ViewFn::from(|| view! { <ArrowRightIcon/> }),
            Self::Check => ViewFn::from(|| view! { <CheckIcon/> }),
            Self::Trash => ViewFn::from(|| view! { <TrashIcon/> }),
            Self::Sparkles => ViewFn::from(|| view! { <SparklesIcon/> }),
        }
    }
}

/// Args for a single rendered button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryArgs {
    /// Style props.
    pub style: ButtonStyle,
    /// Label text, `None` renders no label span.
    pub label: Option<String>,
    /// Icon before the label.
    pub left_icon: Option<IconKind>,
    /// Icon after the label.
    pub right_icon: Option<IconKind>,
}

/// Query parameters accepted by the preview and class endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewQuery {
    /// Size name.
    pub size: Option<String>,
    /// Theme name.
    pub theme: Option<String>,
    /// Variant name.
    pub variant: Option<String>,
    /// Capsule shape.
    pub pill: Option<bool>,
    /// Icon-only layout.
    pub icon_only: Option<bool>,
    /// Disabled state.
    pub disabled: Option<bool>,
    /// Label text.
    pub label: Option<String>,
    /// Left icon name.
    pub left_icon: Option<String>,
    /// Right icon name.
    pub right_icon: Option<String>,
}

impl StoryArgs {
    /// Labelled button with the given style.
    #[must_use]
    pub fn labelled(style: ButtonStyle, label: &str) -> Self {
        Self {
            style,
            label: Some(label.to_string()),
            ..Self::default()
        }
    }

    /// Builds args from preview query parameters.
    ///
    /// Unparseable enum names fall back to their defaults and are returned
    /// alongside the args so the caller can report them.
    #[must_use]
    pub fn from_query(query: &PreviewQuery, default_label: &str) -> (Self, Vec<StyleError>) {
        let mut errors = Vec::new();
        let size: Size = parse_or_default(query.size.as_deref(), &mut errors);
        let theme: Theme = parse_or_default(query.theme.as_deref(), &mut errors);
        let variant: Variant = parse_or_default(query.variant.as_deref(), &mut errors);

        let icon_only = query.icon_only.unwrap_or(false);
        let left_icon = parse_icon(query.left_icon.as_deref(), &mut errors);
        let right_icon = parse_icon(query.right_icon.as_deref(), &mut errors);

        let label = match &query.label {
            Some(label) if label.is_empty() => None,
            Some(label) => Some(label.clone()),
            None if icon_only => None,
            None => Some(default_label.to_string()),
        };

        let args = Self {
            style: ButtonStyle {
                size,
                theme,
                variant,
                pill: query.pill.unwrap_or(false),
                icon_only,
                disabled: query.disabled.unwrap_or(false),
            },
            label,
            // Icon-only buttons without an explicit icon still need something to show.
            left_icon: left_icon.or((icon_only && right_icon.is_none()).then_some(IconKind::Plus)),
            right_icon,
        };

        (args, errors)
    }

    /// Renders the button these args describe.
    pub fn render(&self) -> AnyView {
        let ButtonStyle {
            size,
            theme,
            variant,
            pill,
            icon_only,
            disabled,
        } = self.style;
        let left_icon = self.left_icon.map(IconKind::view_fn);
        let right_icon = self.right_icon.map(IconKind::view_fn);

        match self.label.clone() {
            Some(label) => view! {
                <Button
                    size=size
                    theme=theme
                    variant=variant
                    pill=pill
                    icon_only=icon_only
                    disabled=disabled
                    left_icon=left_icon
                    right_icon=right_icon
                >
                    {label}
                </Button>
            }
            .into_any(),
            None => view! {
                <Button
                    size=size
                    theme=theme
                    variant=variant
                    pill=pill
                    icon_only=icon_only
                    disabled=disabled
                    left_icon=left_icon
                    right_icon=right_icon
                />
            }
            .into_any(),
        }
    }
}

fn parse_or_default<T>(raw: Option<&str>, errors: &mut Vec<StyleError>) -> T
where
    T: std::str::FromStr<Err = StyleError> + Default,
{
    match raw.map(str::parse::<T>) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            errors.push(e);
            T::default()
        }
        None => T::default(),
    }
}

fn parse_icon(raw: Option<&str>, errors: &mut Vec<StyleError>) -> Option<IconKind> {
    match raw.map(IconKind::parse) {
        Some(Ok(icon)) => icon,
        Some(Err(e)) => {
            errors.push(e);
            None
        }
        None => None,
    }
}

/// A named story.
#[derive(Debug, Clone, Serialize)]
pub struct Story {
    /// URL-safe name.
    pub name: &'static str,
    /// Human readable title.
    pub title: &'static str,
    /// Button args.
    pub args: StoryArgs,
}

/// All stories in display order.
#[must_use]
pub fn stories() -> Vec<Story> {
    let filled = ButtonStyle {
        variant: Variant::Filled,
        ..ButtonStyle::default()
    };

    vec![
        Story {
            name: "default",
            title: "Default",
            args: StoryArgs::labelled(ButtonStyle::default(), "Button"),
        },
        Story {
            name: "filled",
            title: "Filled",
            args: StoryArgs::labelled(filled, "Filled"),
        },
        Story {
            name: "outlined",
            title: "Outlined",
            args: StoryArgs::labelled(
                ButtonStyle {
                    variant: Variant::Outlined,
                    ..ButtonStyle::default()
                },
                "Outlined",
            ),
        },
        Story {
            name: "primary-duo",
            title: "Primary duo",
            args: StoryArgs::labelled(
                ButtonStyle {
                    theme: Theme::PrimaryDuo,
                    ..filled
                },
                "Primary duo",
            ),
        },
        Story {
            name: "pill",
            title: "Pill",
            args: StoryArgs::labelled(ButtonStyle { pill: true, ..filled }, "Pill"),
        },
        Story {
            name: "icon-only",
            title: "Icon only",
            args: StoryArgs {
                style: ButtonStyle {
                    icon_only: true,
                    ..filled
                },
                label: None,
                left_icon: Some(IconKind::Plus),
                right_icon: None,
            },
        },
        Story {
            name: "with-icons",
            title: "With icons",
            args: StoryArgs {
                left_icon: Some(IconKind::Sparkles),
                right_icon: Some(IconKind::ArrowRight),
                ..StoryArgs::labelled(
                    ButtonStyle {
                        theme: Theme::Accent,
                        size: Size::Lg,
                        ..filled
                    },
                    "Continue",
                )
            },
        },
        Story {
            name: "destructive",
            title: "Destructive",
            args: StoryArgs {
                left_icon: Some(IconKind::Trash),
                ..StoryArgs::labelled(
                    ButtonStyle {
                        theme: Theme::Error,
                        variant: Variant::Outlined,
                        ..ButtonStyle::default()
                    },
                    "Delete",
                )
            },
        },
        Story {
            name: "disabled",
            title: "Disabled",
            args: StoryArgs::labelled(
                ButtonStyle {
                    disabled: true,
                    ..filled
                },
                "Disabled",
            ),
        },
    ]
}

/// Looks up a story by name.
#[must_use]
pub fn find_story(name: &str) -> Option<Story> {
    stories().into_iter().find(|story| story.name == name)
}

//! Button style derivation.
//!
//! Maps the enumerated button props onto Tailwind utility classes. Everything
//! here is a pure function of [`ButtonStyle`]; the Leptos components only
//! render what this module computes.
//!
//! Class groups are composed in a fixed order:
//!
//! 1. base classes
//! 2. padding, keyed by `(size, icon_only)`
//! 3. shape (`rounded-full` for pill or icon-only buttons)
//! 4. transparent border for text and filled buttons
//! 5. color theming, looked up by `(variant, theme)`
//! 6. caller classes (appended by the component)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classes applied to every button.
pub const BASE_CLASSES: &str = "flex items-center font-medium justify-center gap-1 transition-all \
                                disabled:opacity-50 disabled:pointer-events-none box-border border";

/// Forces the wrapped icon to fill its container.
const ICON_FILL: &str = "*:h-full *:w-full";

/// Error returned when parsing a style name from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// Size name not recognized.
    #[error("unknown button size: {0}")]
    UnknownSize(String),
    /// Theme name not recognized.
    #[error("unknown button theme: {0}")]
    UnknownTheme(String),
    /// Variant name not recognized.
    #[error("unknown button variant: {0}")]
    UnknownVariant(String),
    /// Icon name not recognized.
    #[error("unknown button icon: {0}")]
    UnknownIcon(String),
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium (default).
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    /// Name used in props, query strings and story args.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Padding classes for this size.
    ///
    /// Icon-only buttons get symmetric padding, labelled buttons get wider
    /// horizontal padding.
    #[must_use]
    pub fn padding(self, icon_only: bool) -> &'static str {
        match (self, icon_only) {
            (Self::Xs, false) => "px-4 py-2",
            (Self::Xs, true) => "p-2",
            (Self::Sm, false) => "px-5 py-2.5",
            (Self::Sm, true) => "p-2.5",
            (Self::Md, false) => "px-6 py-3",
            (Self::Md, true) => "p-3",
            (Self::Lg, false) => "px-8 py-4",
            (Self::Lg, true) => "p-4",
        }
    }

    /// Dimension classes for the icon wrapper.
    ///
    /// Only `md` shrinks for icon-only buttons.
    #[must_use]
    pub fn icon_dimensions(self, icon_only: bool) -> &'static str {
        match (self, icon_only) {
            (Self::Xs, _) => "h-4 w-4",
            (Self::Sm, _) | (Self::Md, true) => "h-5 w-5",
            (Self::Md, false) | (Self::Lg, _) => "h-6 w-6",
        }
    }

    /// Line height of the label span.
    #[must_use]
    pub fn label_leading(self) -> &'static str {
        match self {
            Self::Xs => "leading-4",
            Self::Sm => "leading-5",
            Self::Md | Self::Lg => "leading-6",
        }
    }
}

/// Button color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    /// Brand color (default).
    #[default]
    Primary,
    /// Brand color with an inverted filled treatment.
    #[serde(alias = "primary-duo", alias = "primary_duo")]
    PrimaryDuo,
    /// Greys.
    Neutral,
    /// Secondary accent color.
    Accent,
    /// Positive outcome.
    Success,
    /// Destructive or failed outcome.
    Error,
    /// Caution.
    Warning,
}

impl Theme {
    /// All themes in display order.
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::PrimaryDuo,
        Self::Neutral,
        Self::Accent,
        Self::Success,
        Self::Error,
        Self::Warning,
    ];

    /// Name used in props, query strings and story args.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryDuo => "primaryDuo",
            Self::Neutral => "neutral",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Button visual treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Solid background.
    Filled,
    /// Colored border, transparent background.
    Outlined,
    /// Label only (default).
    #[default]
    Text,
}

impl Variant {
    /// All variants in display order.
    pub const ALL: [Self; 3] = [Self::Filled, Self::Outlined, Self::Text];

    /// Name used in props, query strings and story args.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Text => "text",
        }
    }
}

macro_rules! impl_text_conversions {
    ($ty:ty, $err:ident, [$($extra:literal => $value:expr),* $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if let Some(found) = Self::ALL.into_iter().find(|v| v.as_str() == trimmed) {
                    return Ok(found);
                }
                match trimmed {
                    $($extra => Ok($value),)*
                    other => Err(StyleError::$err(other.to_string())),
                }
            }
        }
    };
}

impl_text_conversions!(Size, UnknownSize, []);
impl_text_conversions!(Theme, UnknownTheme, [
    "primary-duo" => Theme::PrimaryDuo,
    "primary_duo" => Theme::PrimaryDuo,
]);
impl_text_conversions!(Variant, UnknownVariant, []);

/// Color utilities for a `(variant, theme)` pair.
///
/// Outlined entries carry their own border colors. `primary` and
/// `primaryDuo` only differ when filled.
#[must_use]
pub fn color_classes(variant: Variant, theme: Theme) -> &'static str {
    use Theme::{Accent, Error, Neutral, Primary, PrimaryDuo, Success, Warning};
    use Variant::{Filled, Outlined, Text};

    match (variant, theme) {
        (Text, Primary | PrimaryDuo) => {
            "text-info-500 hover:text-info-400 active:focus:text-info-600"
        }
        (Text, Neutral) => {
            "text-neutral-300 hover:text-neutral-200 active:focus:text-neutral-400"
        }
        (Text, Accent) => {
            "text-primary-500 hover:text-primary-400 active:focus:text-primary-700"
        }
        (Text, Success) => {
            "text-success-500 hover:text-success-400 active:focus:text-success-700"
        }
        (Text, Error) => "text-error-600 hover:text-error-400 active:focus:text-error-700",
        (Text, Warning) => {
            "text-warning-500 hover:text-warning-400 active:focus:text-warning-600"
        }

        (Outlined, Primary | PrimaryDuo) => {
            "border-info-500 text-info-500 hover:border-info-400 hover:text-info-400 \
             active:focus:border-info-600 active:focus:text-info-600"
        }
        (Outlined, Neutral) => {
            "border-neutral-75 text-neutral-300 hover:border-neutral-100 hover:text-neutral-100 \
             active:focus:border-neutral-400 active:focus:text-neutral-400 \
             disabled:border-neutral-100 disabled:text-neutral-100"
        }
        (Outlined, Accent) => {
            "border-primary-500 text-primary-500 hover:border-primary-400 hover:text-primary-400 \
             active:focus:border-primary-700 active:focus:text-primary-700"
        }
        (Outlined, Success) => {
            "border-success-500 text-success-500 hover:border-success-400 hover:text-success-400 \
             active:focus:border-success-700 active:focus:text-success-700"
        }
        (Outlined, Error) => {
            "border-error-600 text-error-600 hover:border-error-400 hover:text-error-400 \
             active:focus:border-error-700 active:focus:text-error-700"
        }
        (Outlined, Warning) => {
            "border-warning-500 text-warning-500 hover:border-warning-400 hover:text-warning-400 \
             active:focus:border-warning-600 active:focus:text-warning-600"
        }

        (Filled, Primary) => "bg-info-500 text-white hover:bg-info-400 active:focus:bg-info-600",
        (Filled, PrimaryDuo) => {
            "bg-info-50 text-info-500 hover:bg-info-400 hover:text-white \
             active:focus:bg-info-600 active:focus:text-white \
             disabled:bg-info-500 disabled:text-white"
        }
        (Filled, Neutral) => {
            "bg-neutral-300 text-white hover:bg-neutral-200 active:focus:bg-neutral-400"
        }
        (Filled, Accent) => {
            "bg-primary-500 text-white hover:bg-primary-400 active:focus:bg-primary-700"
        }
        (Filled, Success) => {
            "bg-success-500 text-white hover:bg-success-400 active:focus:bg-success-700"
        }
        (Filled, Error) => "bg-error-600 text-white hover:bg-error-400 active:focus:bg-error-700",
        (Filled, Warning) => {
            "bg-warning-500 text-white hover:bg-warning-400 active:focus:bg-warning-600"
        }
    }
}

/// The style-relevant props of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonStyle {
    /// Button size.
    pub size: Size,
    /// Color theme.
    pub theme: Theme,
    /// Visual treatment.
    pub variant: Variant,
    /// Capsule shape.
    pub pill: bool,
    /// Icon-only layout.
    pub icon_only: bool,
    /// Native disabled state.
    pub disabled: bool,
}

impl ButtonStyle {
    /// Padding rule for this style.
    #[must_use]
    pub fn padding(&self) -> &'static str {
        self.size.padding(self.icon_only)
    }

    /// Corner rounding.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        if self.pill || self.icon_only {
            "rounded-full"
        } else {
            "rounded-lg"
        }
    }

    /// Transparent border for text and filled buttons.
    ///
    /// The border width stays in [`BASE_CLASSES`] so every variant has the
    /// same box size. Outlined buttons get their border color from
    /// [`color_classes`].
    #[must_use]
    pub fn border(&self) -> Option<&'static str> {
        match self.variant {
            Variant::Text | Variant::Filled => Some("border-transparent"),
            Variant::Outlined => None,
        }
    }

    /// Color entry for this style.
    #[must_use]
    pub fn colors(&self) -> &'static str {
        color_classes(self.variant, self.theme)
    }

    /// Class groups in application order, caller classes excluded.
    #[must_use]
    pub fn class_list(&self) -> Vec<&'static str> {
        let mut list = vec![BASE_CLASSES, self.padding(), self.shape()];
        list.extend(self.border());
        list.push(self.colors());
        list
    }

    /// Full class string with `extra` appended last.
    #[must_use]
    pub fn classes(&self, extra: &str) -> String {
        let mut classes = self.class_list().join(" ");
        let extra = extra.trim();
        if !extra.is_empty() {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }

    /// Classes for the icon wrapper.
    #[must_use]
    pub fn icon_classes(&self) -> String {
        format!("{} {ICON_FILL}", self.size.icon_dimensions(self.icon_only))
    }

    /// Classes for the label span.
    #[must_use]
    pub fn label_classes(&self) -> &'static str {
        self.size.label_leading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_styles() -> impl Iterator<Item = ButtonStyle> {
        Size::ALL.into_iter().flat_map(|size| {
            Theme::ALL.into_iter().flat_map(move |theme| {
                Variant::ALL.into_iter().flat_map(move |variant| {
                    [false, true].into_iter().flat_map(move |pill| {
                        [false, true].into_iter().flat_map(move |icon_only| {
                            [false, true].into_iter().map(move |disabled| ButtonStyle {
                                size,
                                theme,
                                variant,
                                pill,
                                icon_only,
                                disabled,
                            })
                        })
                    })
                })
            })
        })
    }

    const PADDINGS: [&str; 8] = [
        "px-4 py-2",
        "p-2",
        "px-5 py-2.5",
        "p-2.5",
        "px-6 py-3",
        "p-3",
        "px-8 py-4",
        "p-4",
    ];

    #[test]
    fn defaults_match_documented_props() {
        let style = ButtonStyle::default();
        assert_eq!(style.size, Size::Md);
        assert_eq!(style.theme, Theme::Primary);
        assert_eq!(style.variant, Variant::Text);
        assert!(!style.pill && !style.icon_only && !style.disabled);
    }

    #[test]
    fn base_classes_text() {
        assert_eq!(
            BASE_CLASSES,
            "flex items-center font-medium justify-center gap-1 transition-all \
             disabled:opacity-50 disabled:pointer-events-none box-border border"
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    #[test]
    fn filled_primary_md_scenario() {
        let style = ButtonStyle {
            variant: Variant::Filled,
            ..ButtonStyle::default()
        };
        assert_eq!(
            style.classes(""),
            "flex items-center font-medium justify-center gap-1 transition-all \
             disabled:opacity-50 disabled:pointer-events-none box-border border \
             px-6 py-3 rounded-lg border-transparent \
             bg-info-500 text-white hover:bg-info-400 active:focus:bg-info-600"
        );
    }

    #[test]
    fn default_text_primary_uses_text_hover_colors() {
        let classes = ButtonStyle::default().classes("");
        assert!(classes.contains("hover:text-info-400"));
        assert!(classes.contains("active:focus:text-info-600"));
        assert!(!classes.contains("hover:bg-"));
    }

    #[test]
    fn xs_icon_only_scenario() {
        let style = ButtonStyle {
            size: Size::Xs,
            icon_only: true,
            ..ButtonStyle::default()
        };
        assert_eq!(style.padding(), "p-2");
        assert_eq!(style.shape(), "rounded-full");
        assert_eq!(style.icon_classes(), "h-4 w-4 *:h-full *:w-full");
    }

    #[test]
    fn padding_table() {
        let expected = [
            (Size::Xs, "px-4 py-2", "p-2"),
            (Size::Sm, "px-5 py-2.5", "p-2.5"),
            (Size::Md, "px-6 py-3", "p-3"),
            (Size::Lg, "px-8 py-4", "p-4"),
        ];
        for (size, labelled, icon_only) in expected {
            assert_eq!(size.padding(false), labelled, "{size}");
            assert_eq!(size.padding(true), icon_only, "{size}");
        }
    }

    #[test]
    fn exactly_one_padding_rule_applies() {
        for style in all_styles() {
            let list = style.class_list();
            let hits = PADDINGS.iter().filter(|p| list.contains(p)).count();
            assert_eq!(hits, 1, "{style:?}");
        }
    }

    #[test]
    fn icon_dimensions_table() {
        let expected = [
            (Size::Xs, "h-4 w-4", "h-4 w-4"),
            (Size::Sm, "h-5 w-5", "h-5 w-5"),
            (Size::Md, "h-6 w-6", "h-5 w-5"),
            (Size::Lg, "h-6 w-6", "h-6 w-6"),
        ];
        for (size, labelled, icon_only) in expected {
            assert_eq!(size.icon_dimensions(false), labelled, "{size}");
            assert_eq!(size.icon_dimensions(true), icon_only, "{size}");
        }
    }

    #[test]
    fn rounding_follows_pill_or_icon_only() {
        for style in all_styles() {
            let list = style.class_list();
            let full = style.pill || style.icon_only;
            assert_eq!(list.contains(&"rounded-full"), full, "{style:?}");
            assert_eq!(list.contains(&"rounded-lg"), !full, "{style:?}");
        }
    }

    #[test]
    fn border_is_transparent_except_outlined() {
        for style in all_styles() {
            let list = style.class_list();
            if style.variant == Variant::Outlined {
                assert!(!list.contains(&"border-transparent"), "{style:?}");
                assert!(style.colors().starts_with("border-"), "{style:?}");
            } else {
                assert!(list.contains(&"border-transparent"), "{style:?}");
            }
        }
    }

    #[test]
    fn color_table() {
        use Theme::{Accent, Error, Neutral, Primary, PrimaryDuo, Success, Warning};
        use Variant::{Filled, Outlined, Text};

        let expected: [(Variant, Theme, &str); 21] = [
            (Text, Primary, "text-info-500 hover:text-info-400 active:focus:text-info-600"),
            (Text, PrimaryDuo, "text-info-500 hover:text-info-400 active:focus:text-info-600"),
            (Text, Neutral, "text-neutral-300 hover:text-neutral-200 active:focus:text-neutral-400"),
            (Text, Accent, "text-primary-500 hover:text-primary-400 active:focus:text-primary-700"),
            (Text, Success, "text-success-500 hover:text-success-400 active:focus:text-success-700"),
            (Text, Error, "text-error-600 hover:text-error-400 active:focus:text-error-700"),
            (Text, Warning, "text-warning-500 hover:text-warning-400 active:focus:text-warning-600"),
            (
                Outlined,
                Primary,
                "border-info-500 text-info-500 hover:border-info-400 hover:text-info-400 active:focus:border-info-600 active:focus:text-info-600",
            ),
            (
                Outlined,
                PrimaryDuo,
                "border-info-500 text-info-500 hover:border-info-400 hover:text-info-400 active:focus:border-info-600 active:focus:text-info-600",
            ),
            (
                Outlined,
                Neutral,
                "border-neutral-75 text-neutral-300 hover:border-neutral-100 hover:text-neutral-100 active:focus:border-neutral-400 active:focus:text-neutral-400 disabled:border-neutral-100 disabled:text-neutral-100",
            ),
            (
                Outlined,
                Accent,
                "border-primary-500 text-primary-500 hover:border-primary-400 hover:text-primary-400 active:focus:border-primary-700 active:focus:text-primary-700",
            ),
            (
                Outlined,
                Success,
                "border-success-500 text-success-500 hover:border-success-400 hover:text-success-400 active:focus:border-success-700 active:focus:text-success-700",
            ),
            (
                Outlined,
                Error,
                "border-error-600 text-error-600 hover:border-error-400 hover:text-error-400 active:focus:border-error-700 active:focus:text-error-700",
            ),
            (
                Outlined,
                Warning,
                "border-warning-500 text-warning-500 hover:border-warning-400 hover:text-warning-400 active:focus:border-warning-600 active:focus:text-warning-600",
            ),
            (Filled, Primary, "bg-info-500 text-white hover:bg-info-400 active:focus:bg-info-600"),
            (
                Filled,
                PrimaryDuo,
                "bg-info-50 text-info-500 hover:bg-info-400 hover:text-white active:focus:bg-info-600 active:focus:text-white disabled:bg-info-500 disabled:text-white",
            ),
            (Filled, Neutral, "bg-neutral-300 text-white hover:bg-neutral-200 active:focus:bg-neutral-400"),
            (Filled, Accent, "bg-primary-500 text-white hover:bg-primary-400 active:focus:bg-primary-700"),
            (Filled, Success, "bg-success-500 text-white hover:bg-success-400 active:focus:bg-success-700"),
            (Filled, Error, "bg-error-600 text-white hover:bg-error-400 active:focus:bg-error-700"),
            (Filled, Warning, "bg-warning-500 text-white hover:bg-warning-400 active:focus:bg-warning-600"),
        ];

        for (variant, theme, classes) in expected {
            assert_eq!(color_classes(variant, theme), classes, "{variant} {theme}");
        }
    }

    #[test]
    fn color_entry_closes_class_list() {
        for style in all_styles() {
            let list = style.class_list();
            assert_eq!(list.last(), Some(&style.colors()), "{style:?}");
        }
    }

    #[test]
    fn disabled_styling_always_present() {
        for style in all_styles().filter(|s| s.disabled) {
            let classes = style.classes("");
            assert!(classes.contains("disabled:opacity-50"));
            assert!(classes.contains("disabled:pointer-events-none"));
        }
    }

    #[test]
    fn caller_classes_appended_last() {
        let style = ButtonStyle::default();
        let classes = style.classes("  w-full mt-4 ");
        assert!(classes.ends_with("active:focus:text-info-600 w-full mt-4"));
        assert_eq!(style.classes(""), style.class_list().join(" "));
    }

    #[test]
    fn derivation_is_deterministic() {
        for style in all_styles() {
            assert_eq!(style.classes("x"), style.classes("x"));
        }
    }

    #[test]
    fn label_leading_per_size() {
        assert_eq!(Size::Xs.label_leading(), "leading-4");
        assert_eq!(Size::Sm.label_leading(), "leading-5");
        assert_eq!(Size::Md.label_leading(), "leading-6");
        assert_eq!(Size::Lg.label_leading(), "leading-6");
    }

    #[test]
    fn enums_parse_from_names() {
        assert_eq!("lg".parse::<Size>(), Ok(Size::Lg));
        assert_eq!("primaryDuo".parse::<Theme>(), Ok(Theme::PrimaryDuo));
        assert_eq!("primary-duo".parse::<Theme>(), Ok(Theme::PrimaryDuo));
        assert_eq!(" outlined ".parse::<Variant>(), Ok(Variant::Outlined));
        assert_eq!(
            "huge".parse::<Size>(),
            Err(StyleError::UnknownSize("huge".to_string()))
        );
        assert!(matches!(
            "ghost".parse::<Variant>(),
            Err(StyleError::UnknownVariant(_))
        ));
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn style_deserializes_with_defaults() {
        let style: ButtonStyle =
            serde_json::from_str(r#"{"size":"xs","theme":"primaryDuo","iconOnly":true}"#).unwrap();
        assert_eq!(style.size, Size::Xs);
        assert_eq!(style.theme, Theme::PrimaryDuo);
        assert_eq!(style.variant, Variant::Text);
        assert!(style.icon_only);
    }
}

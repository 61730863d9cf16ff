//! Button component with sizes, themes and variants.

use leptos::prelude::*;

use super::style::{ButtonStyle, Size, Theme, Variant};

/// Themeable button.
///
/// Classes are derived by [`ButtonStyle::classes`]; `class` is appended last
/// so caller utilities win. Native attributes and event handlers not listed
/// here are spread onto the `<button>` element by Leptos.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button
///         theme=Theme::Success
///         variant=Variant::Filled
///         left_icon=ViewFn::from(|| view! { <PlusIcon/> })
///         on:click=move |_| save()
///     >
///         "Save"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button size.
    #[prop(optional)]
    size: Size,
    /// Color theme.
    #[prop(optional)]
    theme: Theme,
    /// Visual treatment.
    #[prop(optional)]
    variant: Variant,
    /// Capsule shape.
    #[prop(optional)]
    pill: bool,
    /// Icon-only layout.
    #[prop(optional)]
    icon_only: bool,
    /// Whether the button is disabled.
    #[prop(optional)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Icon rendered before the label.
    #[prop(default = None, into)]
    left_icon: Option<ViewFn>,
    /// Icon rendered after the label.
    #[prop(default = None, into)]
    right_icon: Option<ViewFn>,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Label content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let style = ButtonStyle {
        size,
        theme,
        variant,
        pill,
        icon_only,
        disabled,
    };
    let classes = style.classes(&class);

    let left = left_icon.map(|icon| {
        view! {
            <ButtonIcon size=size icon_only=icon_only>
                {icon.run()}
            </ButtonIcon>
        }
    });
    let label = children.map(|children| {
        view! { <span class=style.label_classes()>{children()}</span> }
    });
    let right = right_icon.map(|icon| {
        view! {
            <ButtonIcon size=size icon_only=icon_only>
                {icon.run()}
            </ButtonIcon>
        }
    });

    view! {
        <button type=button_type class=classes disabled=disabled>
            {left}
            {label}
            {right}
        </button>
    }
}

/// Size-scaled wrapper for a button icon.
///
/// The child is stretched to fill the wrapper whatever its own size classes.
#[component]
pub fn ButtonIcon(
    /// Size of the owning button.
    #[prop(optional)]
    size: Size,
    /// Whether the owning button is icon-only.
    #[prop(optional)]
    icon_only: bool,
    /// The icon.
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle {
        size,
        icon_only,
        ..ButtonStyle::default()
    };

    view! {
        <span class=style.icon_classes() aria-hidden="true">
            {children()}
        </span>
    }
}

//! Demo page and HTML shell.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::stories::{IconKind, Story, StoryArgs, stories};
use crate::ui::components::{ButtonStyle, Size, Theme, Variant};

/// Wraps rendered content in the page shell.
#[must_use]
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-white text-neutral-900 antialiased">
    <main class="container mx-auto px-4 md:px-6 py-8 max-w-6xl space-y-10">
        {content}
    </main>
</body>
</html>"#
    )
}

/// Full demo page with every style permutation.
#[must_use]
pub fn gallery_page(title: &str, label: &str) -> String {
    let content = view! {
        <header class="space-y-2">
            <h1 class="text-2xl font-bold">{title.to_string()}</h1>
            <StoryIndex/>
        </header>
        {Size::ALL
            .into_iter()
            .map(|size| view! { <SizeSection size=size label=label.to_string()/> })
            .collect_view()}
        <ModifierSection label=label.to_string()/>
    }
    .to_html();

    html_shell(title, &content)
}

/// Page for a single story.
#[must_use]
pub fn story_page(title: &str, story: &Story) -> String {
    let content = view! {
        <section class="space-y-4">
            <a href="/" class="text-sm text-info-500 hover:underline">"All buttons"</a>
            <h1 class="text-2xl font-bold">{story.title}</h1>
            <div class="flex items-center gap-4 p-8 rounded-lg border border-neutral-200">
                {story.args.render()}
            </div>
        </section>
    }
    .to_html();

    html_shell(&format!("{} - {title}", story.title), &content)
}

/// Playground page: controls for every prop above one live button.
///
/// The form submits back to `/preview` with GET, so the controls always
/// reflect the args that produced the rendered button.
#[must_use]
pub fn preview_page(title: &str, args: &StoryArgs) -> String {
    let content = view! {
        <a href="/" class="text-sm text-info-500 hover:underline">"All buttons"</a>
        <Playground args=args.clone()/>
        <hr class="w-full border-neutral-200"/>
        <div id="preview" class="flex items-center justify-center p-8">
            {args.render()}
        </div>
    }
    .to_html();

    html_shell(&format!("Preview - {title}"), &content)
}

#[component]
fn StoryIndex() -> impl IntoView {
    view! {
        <nav class="flex flex-wrap gap-3 text-sm">
            <a href="/preview" class="font-medium text-info-500 hover:underline">"Playground"</a>
            {stories()
                .into_iter()
                .map(|story| {
                    view! {
                        <a href=format!("/stories/{}", story.name) class="text-info-500 hover:underline">
                            {story.title}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// One `<select>` whose options are `(value, selected)` pairs.
fn select_field(
    label: &'static str,
    name: &'static str,
    options: Vec<(&'static str, bool)>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm font-medium">
            {label}
            <select name=name class="rounded-lg border border-neutral-200 px-3 py-2">
                {options
                    .into_iter()
                    .map(|(value, selected)| view! { <option value=value selected=selected>{value}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

fn switch_field(label: &'static str, name: &'static str, checked: bool) -> impl IntoView {
    view! {
        <label class="inline-flex items-center gap-2 text-sm font-medium">
            <input type="checkbox" name=name value="true" checked=checked/>
            {label}
        </label>
    }
}

fn icon_options(current: Option<IconKind>) -> Vec<(&'static str, bool)> {
    std::iter::once(("none", current.is_none()))
        .chain(IconKind::ALL.into_iter().map(|icon| (icon.as_str(), current == Some(icon))))
        .collect()
}

#[component]
fn Playground(args: StoryArgs) -> impl IntoView {
    let style = args.style;
    view! {
        <form method="get" action="/preview" class="space-y-6">
            <div class="flex flex-wrap gap-4">
                {select_field(
                    "Theme",
                    "theme",
                    Theme::ALL.into_iter().map(|t| (t.as_str(), t == style.theme)).collect(),
                )}
                {select_field(
                    "Variant",
                    "variant",
                    Variant::ALL.into_iter().map(|v| (v.as_str(), v == style.variant)).collect(),
                )}
                {select_field(
                    "Size",
                    "size",
                    Size::ALL.into_iter().map(|s| (s.as_str(), s == style.size)).collect(),
                )}
                {select_field("Left icon", "left_icon", icon_options(args.left_icon))}
                {select_field("Right icon", "right_icon", icon_options(args.right_icon))}
            </div>
            <div class="flex flex-wrap gap-8">
                {switch_field("Pill shaped", "pill", style.pill)}
                {switch_field("Icon only", "icon_only", style.icon_only)}
                {switch_field("Disabled", "disabled", style.disabled)}
            </div>
            <div class="flex items-end gap-4">
                <label class="flex flex-col gap-1 text-sm font-medium">
                    "Label"
                    <input
                        type="text"
                        name="label"
                        value=args.label.unwrap_or_default()
                        class="rounded-lg border border-neutral-200 px-3 py-2"
                    />
                </label>
                <button type="submit" class="rounded-lg border border-neutral-200 px-4 py-2 text-sm font-medium hover:bg-neutral-100">
                    "Apply"
                </button>
            </div>
        </form>
    }
}

/// Theme × variant grid for one size.
#[component]
fn SizeSection(size: Size, label: String) -> impl IntoView {
    let rows = Variant::ALL
        .into_iter()
        .map(|variant| {
            let cells = Theme::ALL
                .into_iter()
                .map(|theme| {
                    let args = StoryArgs::labelled(
                        ButtonStyle {
                            size,
                            theme,
                            variant,
                            ..ButtonStyle::default()
                        },
                        &label,
                    );
                    view! { <td class="p-2">{args.render()}</td> }
                })
                .collect_view();
            view! {
                <tr>
                    <th class="p-2 text-left text-sm font-medium text-neutral-500">
                        {variant.as_str()}
                    </th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="space-y-3">
            <h2 class="text-lg font-semibold">{format!("Size {size}")}</h2>
            <table class="border-separate border-spacing-0">
                <thead>
                    <tr>
                        <th></th>
                        {Theme::ALL
                            .into_iter()
                            .map(|theme| {
                                view! {
                                    <th class="p-2 text-left text-sm font-medium text-neutral-500">
                                        {theme.as_str()}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

/// Pill, icon-only, icon slot and disabled rows across sizes.
#[component]
fn ModifierSection(label: String) -> impl IntoView {
    let filled = ButtonStyle {
        variant: Variant::Filled,
        ..ButtonStyle::default()
    };

    let row = |name: &'static str, make: &dyn Fn(Size) -> StoryArgs| {
        let cells = Size::ALL
            .into_iter()
            .map(|size| view! { <div>{make(size).render()}</div> })
            .collect_view();
        view! {
            <div class="flex items-center gap-4">
                <span class="w-24 text-sm font-medium text-neutral-500">{name}</span>
                {cells}
            </div>
        }
    };

    view! {
        <section class="space-y-3">
            <h2 class="text-lg font-semibold">"Modifiers"</h2>
            {row("pill", &|size| StoryArgs::labelled(ButtonStyle { size, pill: true, ..filled }, &label))}
            {row("icon only", &|size| StoryArgs {
                style: ButtonStyle { size, icon_only: true, ..filled },
                label: None,
                left_icon: Some(IconKind::Plus),
                right_icon: None,
            })}
            {row("icons", &|size| StoryArgs {
                left_icon: Some(IconKind::Check),
                right_icon: Some(IconKind::ArrowRight),
                ..StoryArgs::labelled(ButtonStyle { size, ..filled }, &label)
            })}
            {row("disabled", &|size| StoryArgs::labelled(ButtonStyle { size, disabled: true, ..filled }, &label))}
        </section>
    }
}

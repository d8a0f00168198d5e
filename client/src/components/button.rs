//! Shared button with variants, sizes, and a loading state.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Danger,
    Warning,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// CSS class list for a button.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Success => "btn--success",
        ButtonVariant::Danger => "btn--danger",
        ButtonVariant::Warning => "btn--warning",
    };
    let size = match size {
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Md => "btn--md",
        ButtonSize::Lg => "btn--lg",
    };
    let mut class = format!("btn {variant} {size}");
    if full_width {
        class.push_str(" btn--full");
    }
    class
}

/// Button that disables itself and shows a spinner while `loading`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] submit: bool,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let content = children();

    view! {
        <button
            class=button_class(variant, size, full_width)
            type=if submit { "submit" } else { "button" }
            title=title
            prop:disabled=is_loading
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <span class="btn__spinner" class:hidden=move || !is_loading()>
                "Loading..."
            </span>
            <span class="btn__content" class:hidden=is_loading>
                {content}
            </span>
        </button>
    }
}

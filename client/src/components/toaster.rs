//! Transient notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every remote call ends in a toast: a success message for mutations, the
//! failure text otherwise. Toasts live in `RwSignal<ToastState>` context and
//! dismiss themselves after `TOAST_TTL_MS` in the browser.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Dismiss toast `id` once `TOAST_TTL_MS` has passed.
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (toasts, id);
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|state| id = state.success(message));
    schedule_dismiss(toasts, id);
}

pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|state| id = state.error(message));
    schedule_dismiss(toasts, id);
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Fixed stack of active toasts; click one to dismiss it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast_class(toast.kind)
                            on:click=move |_| toasts.update(|state| state.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Create/edit dialog for user accounts.
//!
//! Creating signs the account up and inserts its profile; editing patches
//! the profile's name and admin flag. Email and password are only asked for
//! on create.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::forms::UserForm;
use crate::state::toast::ToastState;
use gateway::model::Profile;

#[component]
pub fn UserModal(editing: Option<Profile>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let is_edit = editing.is_some();
    let target_id = editing.as_ref().map(|profile| profile.id.clone());
    let form = RwSignal::new(editing.as_ref().map_or_else(UserForm::for_new, UserForm::for_edit));
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(message) = current.validate(is_edit) {
            notify_error(toasts, message);
            return;
        }
        busy.set(true);
        let state = auth.get_untracked();
        let target_id = target_id.clone();
        leptos::task::spawn_local(async move {
            let result = match api::gateway(&state) {
                Ok(gateway) => match &target_id {
                    Some(id) => gateway.update_profile(id, &current.patch()).await.map(|()| "User updated."),
                    None => gateway.create_user(&current.new_user()).await.map(|_| "User created."),
                },
                Err(e) => Err(e),
            };
            busy.set(false);
            match result {
                Ok(message) => {
                    notify_success(toasts, message);
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("user modal: save failed: {e}");
                    notify_error(toasts, e.to_string());
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit user" } else { "New user" }}</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !is_edit>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Password"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || form.get().password
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_admin
                            on:change=move |ev| form.update(|f| f.is_admin = event_target_checked(&ev))
                        />
                        "Administrator"
                    </label>
                    <div class="dialog__actions">
                        <Button variant=ButtonVariant::Danger on_click=on_close>
                            "Cancel"
                        </Button>
                        <Button submit=true loading=busy>
                            {if is_edit { "Save" } else { "Create" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

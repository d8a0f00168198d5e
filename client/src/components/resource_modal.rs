//! Dialog for adding a resource.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::forms::ResourceForm;
use crate::state::toast::ToastState;
use gateway::model::ResourceKind;

#[component]
pub fn ResourceModal(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ResourceForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let resource = match form.get_untracked().validate() {
            Ok(resource) => resource,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        busy.set(true);
        let state = auth.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match api::gateway(&state) {
                Ok(gateway) => gateway.create_resource(&resource).await,
                Err(e) => Err(e),
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    notify_success(toasts, "Resource created.");
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("resource modal: create failed: {e}");
                    notify_error(toasts, "Could not create the resource.");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New resource"</h2>
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
                    <label class="dialog__label">
                        "Type"
                        <select
                            class="dialog__input"
                            prop:value=move || form.get().kind.as_str()
                            on:change=move |ev| {
                                let kind = event_target_value(&ev).parse::<ResourceKind>().unwrap_or_default();
                                form.update(|f| f.kind = kind);
                            }
                        >
                            <option value=ResourceKind::Room.as_str()>{ResourceKind::Room.label()}</option>
                            <option value=ResourceKind::Equipment.as_str()>{ResourceKind::Equipment.label()}</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <Button variant=ButtonVariant::Danger on_click=on_close>
                            "Cancel"
                        </Button>
                        <Button submit=true loading=busy>
                            "Create"
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

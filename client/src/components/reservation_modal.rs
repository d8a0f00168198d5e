//! Dialog for booking a resource.
//!
//! Loads the resource list once when opened. New reservations are always
//! created `pending` for the signed-in user; overlap and time-range checks
//! are left to the store.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::forms::ReservationForm;
use crate::state::list::ListState;
use crate::state::toast::ToastState;
use gateway::GatewayError;
use gateway::model::Resource;

#[component]
pub fn ReservationModal(
    #[prop(optional)] resource_id: Option<String>,
    on_close: Callback<()>,
    #[prop(optional)] on_saved: Option<Callback<()>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ReservationForm::for_resource(resource_id));
    let resources = RwSignal::new(ListState::<Resource>::default());
    let busy = RwSignal::new(false);

    let state = auth.get_untracked();
    leptos::task::spawn_local(async move {
        let result = match api::gateway(&state) {
            Ok(gateway) => gateway.list_resources().await,
            Err(e) => Err(e),
        };
        let mut outcome = Ok(());
        resources.update(|list| outcome = list.finish_load(result));
        if let Err(e) = outcome {
            log::error!("reservation modal: resource load failed: {e}");
            notify_error(toasts, "Could not load resources.");
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let state = auth.get_untracked();
        let Some(user_id) = state.user().map(|user| user.id.clone()) else {
            notify_error(toasts, GatewayError::NotSignedIn.to_string());
            return;
        };
        let reservation = match form.get_untracked().validate(&user_id) {
            Ok(reservation) => reservation,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = match api::gateway(&state) {
                Ok(gateway) => gateway.create_reservation(&reservation).await,
                Err(e) => Err(e),
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    notify_success(toasts, "Reservation requested.");
                    if let Some(on_saved) = on_saved {
                        on_saved.run(());
                    }
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("reservation modal: create failed: {e}");
                    notify_error(toasts, "Could not create the reservation.");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New reservation"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Resource"
                        <select
                            class="dialog__input"
                            prop:value=move || form.get().resource_id
                            prop:disabled=move || resources.get().loading
                            on:change=move |ev| form.update(|f| f.resource_id = event_target_value(&ev))
                        >
                            <option value="">"Choose a resource"</option>
                            {move || {
                                resources
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|resource| {
                                        let selected = form.get_untracked().resource_id == resource.id;
                                        view! {
                                            <option value=resource.id selected=selected>
                                                {format!("{} ({})", resource.name, resource.kind.label())}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Start"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || form.get().start_time
                            on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "End"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || form.get().end_time
                            on:input=move |ev| form.update(|f| f.end_time = event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <Button variant=ButtonVariant::Danger on_click=on_close>
                            "Cancel"
                        </Button>
                        <Button submit=true loading=busy>
                            "Reserve"
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

//! Reservation list with status badges and confirm/cancel actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come back oldest start first with the resource and owner embedded.
//! Which rows a user sees is decided by the store's row-level policies.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::reservation_modal::ReservationModal;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::list::ListState;
use crate::state::reservations::{ReservationAction, actions_for, status_badge_class};
use crate::state::toast::ToastState;
use crate::util::format::format_reservation_window;
use crate::util::remote::{load_into, mutate};
use gateway::model::Reservation;

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let list = RwSignal::new(ListState::<Reservation>::default());
    let show_create = RwSignal::new(false);

    let reload = move || {
        let state = auth.get_untracked();
        load_into(list, toasts, "Could not load reservations.", async move {
            api::gateway(&state)?.list_reservations().await
        });
    };
    reload();

    let run_action = move |id: String, action: ReservationAction| {
        let state = auth.get_untracked();
        mutate(
            toasts,
            action.success_message(),
            action.failure_message(),
            async move {
                api::gateway(&state)?
                    .set_reservation_status(&id, action.target_status())
                    .await
            },
            reload,
        );
    };

    view! {
        <div class="page page--narrow">
            <div class="page__header">
                <h1>"My reservations"</h1>
                <Button on_click=Callback::new(move |()| show_create.set(true))>"New reservation"</Button>
            </div>

            <Show
                when=move || !list.get().loading
                fallback=|| view! { <div class="page-loading">"Loading reservations..."</div> }
            >
                <div class="stack">
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|reservation| {
                                let window = format_reservation_window(
                                    &reservation.start_time,
                                    &reservation.end_time,
                                );
                                let owner = reservation
                                    .user
                                    .as_ref()
                                    .map(|profile| format!("Booked by {}", profile.display_name()));
                                let status = reservation.status;
                                let buttons = actions_for(status)
                                    .iter()
                                    .map(|&action| {
                                        let id = reservation.id.clone();
                                        let variant = match action {
                                            ReservationAction::Cancel => ButtonVariant::Danger,
                                            ReservationAction::Confirm => ButtonVariant::Primary,
                                        };
                                        view! {
                                            <Button
                                                variant=variant
                                                on_click=Callback::new(move |()| run_action(id.clone(), action))
                                            >
                                                {action.label()}
                                            </Button>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <div class="card reservation-card">
                                        <div class="reservation-card__head">
                                            <div>
                                                <h2>{reservation.resource_name().to_owned()}</h2>
                                                <p class="reservation-card__window">{window}</p>
                                                {owner.map(|owner| view! { <p class="reservation-card__owner">{owner}</p> })}
                                            </div>
                                            <span class=status_badge_class(status)>{status.label()}</span>
                                        </div>
                                        <div class="reservation-card__actions">{buttons}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || list.get().is_empty()>
                        <div class="card card--empty">"No reservations found."</div>
                    </Show>
                </div>
            </Show>

            {move || {
                show_create
                    .get()
                    .then(|| {
                        view! {
                            <ReservationModal
                                on_close=Callback::new(move |()| show_create.set(false))
                                on_saved=Callback::new(move |()| reload())
                            />
                        }
                    })
            }}
        </div>
    }
}

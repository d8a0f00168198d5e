//! Resource catalogue with type filter, creation, and booking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `resources` table once on mount and again after every create.
//! "Reserve" opens the reservation dialog preset to that resource.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::reservation_modal::ReservationModal;
use crate::components::resource_modal::ResourceModal;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::list::ListState;
use crate::state::resources::ResourceFilter;
use crate::state::toast::ToastState;
use crate::util::remote::load_into;
use gateway::model::{Resource, ResourceKind};

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let list = RwSignal::new(ListState::<Resource>::default());
    let filter = RwSignal::new(ResourceFilter::All);
    let show_create = RwSignal::new(false);
    let reserve_for = RwSignal::new(None::<String>);

    let reload = move || {
        let state = auth.get_untracked();
        load_into(list, toasts, "Could not load resources.", async move {
            api::gateway(&state)?.list_resources().await
        });
    };
    reload();

    let visible = move || filter.get().visible(&list.get().items);

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Available resources"</h1>
                    <p class="page__subtitle">"Find and book what you need."</p>
                </div>
                <div class="page__toolbar">
                    <div class="tabs">
                        {ResourceFilter::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        class=move || {
                                            if filter.get() == option { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                                        }
                                        on:click=move |_| filter.set(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <Button on_click=Callback::new(move |()| show_create.set(true))>"New resource"</Button>
                </div>
            </div>

            <Show
                when=move || !list.get().loading
                fallback=|| view! { <div class="page-loading">"Loading resources..."</div> }
            >
                <div class="card-grid">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|resource| {
                                let id = resource.id.clone();
                                let icon = match resource.kind {
                                    ResourceKind::Room => "card__icon card__icon--room",
                                    ResourceKind::Equipment => "card__icon card__icon--equipment",
                                };
                                view! {
                                    <div class="card resource-card">
                                        <div class=icon></div>
                                        <div class="resource-card__head">
                                            <h2>{resource.name}</h2>
                                            <span class="badge badge--info">{resource.kind.label()}</span>
                                        </div>
                                        <p class="resource-card__description">{resource.description}</p>
                                        <p class="resource-card__availability">"Available now"</p>
                                        <Button
                                            full_width=true
                                            on_click=Callback::new(move |()| reserve_for.set(Some(id.clone())))
                                        >
                                            "Reserve"
                                        </Button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || visible().is_empty()>
                        <div class="card card--empty">"No resources available."</div>
                    </Show>
                </div>
            </Show>

            {move || {
                show_create
                    .get()
                    .then(|| {
                        view! {
                            <ResourceModal
                                on_close=Callback::new(move |()| show_create.set(false))
                                on_saved=Callback::new(move |()| reload())
                            />
                        }
                    })
            }}
            {move || {
                reserve_for
                    .get()
                    .map(|resource_id| {
                        view! {
                            <ReservationModal
                                resource_id=resource_id
                                on_close=Callback::new(move |()| reserve_for.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

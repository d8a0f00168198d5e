//! Administrator user management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in an admin-only `PrivateRoute`, but still runs its own
//! `is_admin` lookup on mount and sends non-admins back to the dashboard.
//! The profile list loads in parallel with that check.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::user_modal::UserModal;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::list::ListState;
use crate::state::toast::ToastState;
use crate::util::access::{AdminDecision, AdminFallback, admin_decision};
use crate::util::browser;
use crate::util::format::format_date;
use crate::util::remote::{load_into, mutate};
use gateway::model::Profile;

/// Which user dialog is open.
#[derive(Clone, Debug, PartialEq, Eq)]
enum UserDialog {
    New,
    Edit(Profile),
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let list = RwSignal::new(ListState::<Profile>::default());
    let dialog = RwSignal::new(None::<UserDialog>);

    let state = auth.get_untracked();
    leptos::task::spawn_local(async move {
        let result = api::check_admin(&state).await;
        if let Err(e) = &result {
            log::warn!("users: admin check failed: {e}");
        }
        if let AdminDecision::Redirect(path) = admin_decision(&result, AdminFallback::Redirect) {
            navigate(path, NavigateOptions::default());
        }
    });

    let reload = move || {
        let state = auth.get_untracked();
        load_into(list, toasts, "Could not load users.", async move {
            api::gateway(&state)?.list_profiles().await
        });
    };
    reload();

    let toggle_admin = move |id: String, is_admin: bool| {
        let state = auth.get_untracked();
        mutate(
            toasts,
            "Administrator status updated.",
            "Could not update administrator status.",
            async move { api::gateway(&state)?.set_admin(&id, !is_admin).await },
            reload,
        );
    };

    let delete_user = move |id: String| {
        if !browser::confirm("Delete this user?") {
            return;
        }
        let state = auth.get_untracked();
        mutate(
            toasts,
            "User deleted.",
            "Could not delete the user.",
            async move { api::gateway(&state)?.delete_user(&id).await },
            reload,
        );
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"User management"</h1>
                    <p class="page__subtitle">"Manage every user of the system."</p>
                </div>
                <Button on_click=Callback::new(move |()| dialog.set(Some(UserDialog::New)))>"New user"</Button>
            </div>

            <Show
                when=move || !list.get().loading
                fallback=|| view! { <div class="page-loading">"Loading users..."</div> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Email"</th>
                            <th>"Registered"</th>
                            <th>"Status"</th>
                            <th class="table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|profile| {
                                    let edit_target = profile.clone();
                                    let toggle_id = profile.id.clone();
                                    let delete_id = profile.id.clone();
                                    let is_admin = profile.is_admin;
                                    let badge = if is_admin { "badge badge--info" } else { "badge" };
                                    view! {
                                        <tr>
                                            <td>{profile.display_name().to_owned()}</td>
                                            <td>{profile.email.clone().unwrap_or_default()}</td>
                                            <td>{format_date(&profile.created_at)}</td>
                                            <td>
                                                <span class=badge>{profile.role_label()}</span>
                                            </td>
                                            <td class="table__actions">
                                                <Button
                                                    size=ButtonSize::Sm
                                                    title="Edit"
                                                    on_click=Callback::new(move |()| {
                                                        dialog.set(Some(UserDialog::Edit(edit_target.clone())));
                                                    })
                                                >
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Sm
                                                    variant=if is_admin { ButtonVariant::Warning } else { ButtonVariant::Primary }
                                                    title="Toggle administrator"
                                                    on_click=Callback::new(move |()| toggle_admin(toggle_id.clone(), is_admin))
                                                >
                                                    {if is_admin { "Revoke admin" } else { "Make admin" }}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Sm
                                                    variant=ButtonVariant::Danger
                                                    title="Delete"
                                                    on_click=Callback::new(move |()| delete_user(delete_id.clone()))
                                                >
                                                    "Delete"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            {move || {
                dialog
                    .get()
                    .map(|open| {
                        let editing = match open {
                            UserDialog::New => None,
                            UserDialog::Edit(profile) => Some(profile),
                        };
                        view! {
                            <UserModal
                                editing=editing
                                on_close=Callback::new(move |()| dialog.set(None))
                                on_saved=Callback::new(move |()| reload())
                            />
                        }
                    })
            }}
        </div>
    }
}

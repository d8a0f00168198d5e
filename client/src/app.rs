//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::navbar::Navbar;
use crate::components::private_route::PrivateRoute;
use crate::components::toaster::Toaster;
use crate::net::api;
use crate::pages::{
    home::HomePage, login::LoginPage, register::RegisterPage, reservations::ReservationsPage,
    resources::ResourcesPage, users::UserManagementPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_session_refresh;

/// Root application component.
///
/// Provides the auth and toast contexts, restores any stored session and
/// keeps it refreshed, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    leptos::task::spawn_local(async move {
        let session = api::restore_session().await;
        auth.set(AuthState { session, loading: false });
    });
    install_session_refresh(auth);

    view! {
        <Title text="ReservaFácil"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><HomePage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("resources")
                        view=|| view! { <PrivateRoute><ResourcesPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("reservations")
                        view=|| view! { <PrivateRoute><ReservationsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <PrivateRoute admin_only=true><UserManagementPage/></PrivateRoute> }
                    />
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}

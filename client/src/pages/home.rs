//! Signed-in landing page.

use leptos::prelude::*;
use leptos_router::components::A;

struct Card {
    title: &'static str,
    body: &'static str,
    href: &'static str,
    action: &'static str,
}

const CARDS: [Card; 3] = [
    Card {
        title: "My reservations",
        body: "See and manage all of your reservations in one place, with their current status.",
        href: "/reservations",
        action: "View my reservations",
    },
    Card {
        title: "Resources",
        body: "Browse the rooms and equipment available to book.",
        href: "/resources",
        action: "View resources",
    },
    Card {
        title: "Scheduling",
        body: "Book quickly by picking a resource and the time that suits you.",
        href: "/resources",
        action: "Make a reservation",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Welcome to ReservaFácil"</h1>
                <p>"Simple, efficient booking for shared rooms and equipment."</p>
            </header>
            <div class="home-page__cards">
                {CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="card">
                                <h2>{card.title}</h2>
                                <p>{card.body}</p>
                                <A href=card.href>
                                    <span class="btn btn--primary btn--md btn--full">{card.action}</span>
                                </A>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

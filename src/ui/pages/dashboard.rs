//! Dashboard page component
//!
//! Landing spot after a successful login. Guards against anonymous access by
//! bouncing back to the login page, and offers sign-out, which drops the
//! session cookie.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{SessionState, session, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    // Anonymous visitors go to the login page. `Unknown` means the cookie
    // has not been checked yet, so no redirect until it resolves.
    Effect::new(move |_| {
        if auth.session.get() == SessionState::Anonymous {
            let navigate = use_navigate();
            navigate("/login", Default::default());
        }
    });

    let on_sign_out = move |_| {
        if session::clear_token().is_ok() {
            auth.mark_anonymous();
        }
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::GAVEL class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"BidHall"</span>
                        </A>

                        <button
                            class="flex items-center gap-2 px-3 py-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                            on:click=on_sign_out
                        >
                            <Icon name=icons::LOGOUT class="w-4 h-4" />
                            "Sign out"
                        </button>
                    </div>
                </div>
            </header>

            <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <h1 class="text-2xl font-bold text-theme-primary">"Your auctions"</h1>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Listings you follow and lots you are bidding on will appear here."
                </p>
            </main>
        </div>
    }
}

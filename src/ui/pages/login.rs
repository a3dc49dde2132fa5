//! Login page component
//!
//! A standalone page for signing in, redirects to the dashboard on success.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::auth::FormMode;
use crate::ui::auth::{AuthForm, SessionState, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already signed in
    Effect::new(move |_| {
        if auth.session.get() == SessionState::SignedIn {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
    });

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::GAVEL class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"BidHall"</span>
                        </A>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <AuthForm mode=FormMode::Login />
                </div>
            </main>

            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2025 BidHall. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}

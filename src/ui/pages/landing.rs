//! Landing page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <div class="flex items-center gap-3">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::GAVEL class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"BidHall"</span>
                        </div>
                        <nav class="flex items-center gap-4">
                            <A
                                href="/login"
                                attr:class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                            >
                                "Login"
                            </A>
                            <A
                                href="/register"
                                attr:class="px-4 py-2 text-sm font-medium bg-accent-primary hover:bg-accent-primary-hover text-white rounded-lg transition-colors"
                            >
                                "Register"
                            </A>
                        </nav>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="text-center max-w-2xl">
                    <h1 class="text-4xl font-bold text-theme-primary">
                        "Bid on what matters"
                    </h1>
                    <p class="mt-4 text-lg text-theme-secondary">
                        "Live auctions, sealed lots, and a hammer price you set yourself. Create an account to start bidding."
                    </p>
                    <div class="mt-8">
                        <A
                            href="/register"
                            attr:class="px-6 py-3 text-base font-medium bg-accent-primary hover:bg-accent-primary-hover text-white rounded-lg transition-colors"
                        >
                            "Get started"
                        </A>
                    </div>
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

//! BidHall - Auction Platform Web Client
//!
//! The web frontend of the BidHall auction platform, built with Leptos and
//! WebAssembly. Implements the login/registration/OTP flow against the
//! auction backend's auth endpoints.

#![recursion_limit = "2048"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

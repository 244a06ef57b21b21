//! MediBook Page
//!
//! Browser front end built with Leptos (WASM): one page with the
//! appointments list, the backend health badge and the booking form.
//!
//! The backend URL is fixed at build time through `MEDIBOOK_API_URL`.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

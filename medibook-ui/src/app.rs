//! App Root Component
//!
//! Page header with the health badge, the booking form and the list.

use leptos::*;

use crate::components::{AppointmentForm, AppointmentList, StatusBadge};
use crate::state::ShellState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let shell = ShellState::new();
    shell.initialize();

    view! {
        <div class="min-h-screen bg-gray-100 text-gray-900">
            <header class="bg-white shadow">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"Medical Appointments System"</h1>
                    <StatusBadge shell=shell />
                </div>
            </header>

            <main class="container mx-auto px-4 py-8 grid gap-8 lg:grid-cols-3">
                <section class="lg:col-span-1">
                    <AppointmentForm on_created=move |_| shell.on_appointment_created() />
                </section>
                <section class="lg:col-span-2">
                    <AppointmentList shell=shell />
                </section>
            </main>
        </div>
    }
}

//! Backend health badge.

use leptos::*;

use crate::state::ShellState;

#[component]
pub fn StatusBadge(shell: ShellState) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 text-sm">
            <span class="text-gray-500">"API Status:"</span>
            <span class=move || {
                if shell.is_healthy() {
                    "flex items-center space-x-1 text-green-600"
                } else {
                    "flex items-center space-x-1 text-red-600"
                }
            }>
                <span class=move || {
                    if shell.is_healthy() {
                        "w-2 h-2 bg-green-500 rounded-full"
                    } else {
                        "w-2 h-2 bg-red-500 rounded-full"
                    }
                } />
                <span>{move || shell.health_label()}</span>
            </span>
        </div>
    }
}

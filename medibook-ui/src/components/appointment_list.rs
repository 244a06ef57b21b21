//! Appointments List Component
//!
//! Table of appointments with a refresh button, or the loading/error/empty
//! placeholder in its place.

use leptos::*;

use medibook::models::{messages, Appointment, AppointmentStatus};

use crate::state::{ListSection, ShellState};

#[component]
pub fn AppointmentList(shell: ShellState) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"Appointments List"</h2>

            {move || match shell.section() {
                ListSection::Loading { with_error } => view! {
                    <div class="flex items-center justify-center py-12 text-gray-500">
                        <div class="loading-spinner w-6 h-6 mr-3" />
                        <span>{messages::LOADING}</span>
                    </div>
                    {with_error.then(|| view! { <ListError shell=shell /> })}
                }.into_view(),
                ListSection::Error => view! { <ListError shell=shell /> }.into_view(),
                ListSection::Empty => view! {
                    <RefreshButton shell=shell />
                    <p class="text-center text-gray-500 py-8">{messages::EMPTY_LIST}</p>
                }.into_view(),
                ListSection::Items => view! {
                    <RefreshButton shell=shell />
                    <AppointmentTable items=shell.appointments />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ListError(shell: ShellState) -> impl IntoView {
    view! {
        <div class="bg-red-100 text-red-700 rounded-lg px-4 py-3">
            {move || shell.error.get().unwrap_or_default()}
        </div>
    }
}

#[component]
fn RefreshButton(shell: ShellState) -> impl IntoView {
    view! {
        <div class="flex justify-end mb-3">
            <button
                type="button"
                on:click=move |_| shell.refresh()
                class="px-4 py-2 rounded-lg text-sm font-medium bg-blue-600 hover:bg-blue-700 text-white"
            >
                "Refresh"
            </button>
        </div>
    }
}

#[component]
fn AppointmentTable(#[prop(into)] items: Signal<Vec<Appointment>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead class="bg-gray-50 text-left text-gray-600">
                    <tr>
                        <th class="px-3 py-2">"Patient"</th>
                        <th class="px-3 py-2">"Doctor"</th>
                        <th class="px-3 py-2">"Specialty"</th>
                        <th class="px-3 py-2">"Date"</th>
                        <th class="px-3 py-2">"Duration"</th>
                        <th class="px-3 py-2">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|apt| view! {
                        <AppointmentRow apt=apt />
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AppointmentRow(apt: Appointment) -> impl IntoView {
    let status = apt.status;
    view! {
        <tr class="border-t border-gray-100">
            <td class="px-3 py-2">
                <div class="font-medium">{apt.patient_name.clone()}</div>
                <div class="text-gray-500 text-xs">{apt.patient_email.clone()}</div>
            </td>
            <td class="px-3 py-2">{apt.doctor_name.clone()}</td>
            <td class="px-3 py-2">{apt.specialty_label().to_string()}</td>
            <td class="px-3 py-2">{apt.display_date()}</td>
            <td class="px-3 py-2">{format!("{} min", apt.duration_minutes)}</td>
            <td class="px-3 py-2">
                <span class=status_class(status)>{status.as_str()}</span>
            </td>
        </tr>
    }
}

fn status_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Confirmed | AppointmentStatus::Completed => "px-2 py-1 rounded-full text-xs bg-green-100 text-green-700",
        AppointmentStatus::Cancelled | AppointmentStatus::NoShow => "px-2 py-1 rounded-full text-xs bg-red-100 text-red-700",
        _ => "px-2 py-1 rounded-full text-xs bg-blue-100 text-blue-700",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert!(status_class(AppointmentStatus::Confirmed).contains("green"));
        assert!(status_class(AppointmentStatus::NoShow).contains("red"));
        assert!(status_class(AppointmentStatus::Unknown).contains("blue"));
    }
}

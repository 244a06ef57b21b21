//! Appointment Form Component
//!
//! Booking form. The browser runs the input constraints before the submit
//! handler fires; the handler re-checks them against the draft.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use medibook::models::{
    messages, AppointmentDraft, Field, Specialty, DEFAULT_DURATION_MINUTES, DURATION_MAX,
    DURATION_MIN, DURATION_STEP,
};

use crate::api;

/// How long the success banner stays up
const SUCCESS_BANNER_MS: u32 = 3_000;

/// Empty first option of the specialty selector
const SPECIALTY_PLACEHOLDER: &str = "Select specialty...";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Banner {
    Success,
    Error(String),
}

impl Banner {
    fn text(&self) -> &str {
        match self {
            Banner::Success => messages::CREATE_SUCCEEDED,
            Banner::Error(message) => message,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Banner::Success => "bg-green-100 text-green-700 rounded-lg px-4 py-3 mb-4",
            Banner::Error(_) => "bg-red-100 text-red-700 rounded-lg px-4 py-3 mb-4",
        }
    }
}

fn blank_draft() -> AppointmentDraft {
    AppointmentDraft::with_duration(DEFAULT_DURATION_MINUTES)
}

#[component]
pub fn AppointmentForm(#[prop(into)] on_created: Callback<()>) -> impl IntoView {
    let draft = create_rw_signal(blank_draft());
    let banner = create_rw_signal(None::<Banner>);
    let (submitting, set_submitting) = create_signal(false);

    let success_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    {
        let success_timer = Rc::clone(&success_timer);
        on_cleanup(move || {
            if let Some(timer) = success_timer.borrow_mut().take() {
                let _ = timer.cancel();
            }
        });
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(violations) = current.validate() {
            for violation in violations {
                web_sys::console::log_1(&violation.to_string().into());
            }
            return;
        }

        if let Some(timer) = success_timer.borrow_mut().take() {
            let _ = timer.cancel();
        }
        banner.set(None);
        set_submitting.set(true);

        let request = current.to_request();
        let success_timer = Rc::clone(&success_timer);
        spawn_local(async move {
            match api::create_appointment(&request).await {
                Ok(()) => {
                    if banner.try_set(Some(Banner::Success)).is_some() {
                        return;
                    }
                    let _ = draft.try_set(blank_draft());
                    let _ = set_submitting.try_set(false);

                    let timeout = Timeout::new(SUCCESS_BANNER_MS, move || {
                        let _ = banner.try_update(|current| {
                            if *current == Some(Banner::Success) {
                                *current = None;
                            }
                        });
                    });
                    *success_timer.borrow_mut() = Some(timeout);

                    on_created.call(());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error creating appointment: {}", e).into());
                    let message = e.user_message(messages::CREATE_FAILED);
                    let _ = banner.try_set(Some(Banner::Error(message)));
                    let _ = set_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"Book Appointment"</h2>

            {move || banner.get().map(|b| view! {
                <div class=b.class()>{b.text().to_string()}</div>
            })}

            <form on:submit=on_submit class="space-y-4">
                <TextInput draft=draft field=Field::PatientName input_type="text" />
                <TextInput draft=draft field=Field::PatientEmail input_type="email" />
                <TextInput draft=draft field=Field::PatientPhone input_type="tel" />
                <TextInput draft=draft field=Field::DoctorName input_type="text" />
                <SpecialtySelect draft=draft />
                <TextInput draft=draft field=Field::AppointmentDate input_type="datetime-local" />
                <DurationInput draft=draft />
                <ReasonInput draft=draft />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                           disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold"
                >
                    {move || if submitting.get() { "Creating..." } else { "Create Appointment" }}
                </button>
            </form>
        </div>
    }
}

fn edit(draft: RwSignal<AppointmentDraft>, field: Field, value: String) {
    draft.update(|d| {
        if let Err(e) = d.set(field, value) {
            web_sys::console::error_1(&e.to_string().into());
        }
    });
}

fn label_text(field: Field) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

const INPUT_CLASS: &str = "w-full rounded-lg px-4 py-2 border border-gray-300 \
                           focus:border-blue-500 focus:outline-none";

#[component]
fn TextInput(
    draft: RwSignal<AppointmentDraft>,
    field: Field,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class="block text-sm text-gray-600 mb-1">{label_text(field)}</label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                required=field.is_required()
                prop:value=move || draft.with(|d| d.get(field))
                on:input=move |ev| edit(draft, field, event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

#[component]
fn SpecialtySelect(draft: RwSignal<AppointmentDraft>) -> impl IntoView {
    let field = Field::Specialty;
    view! {
        <div>
            <label for=field.name() class="block text-sm text-gray-600 mb-1">{label_text(field)}</label>
            <select
                id=field.name()
                name=field.name()
                required=true
                prop:value=move || draft.with(|d| d.get(field))
                on:change=move |ev| edit(draft, field, event_target_value(&ev))
                class=INPUT_CLASS
            >
                <option value="">{SPECIALTY_PLACEHOLDER}</option>
                {Specialty::ALL.into_iter().map(|sp| view! {
                    <option value=sp.as_str()>{sp.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn DurationInput(draft: RwSignal<AppointmentDraft>) -> impl IntoView {
    let field = Field::DurationMinutes;
    view! {
        <div>
            <label for=field.name() class="block text-sm text-gray-600 mb-1">{label_text(field)}</label>
            <input
                id=field.name()
                name=field.name()
                type="number"
                required=true
                min=DURATION_MIN
                max=DURATION_MAX
                step=DURATION_STEP
                prop:value=move || draft.with(|d| d.get(field))
                on:input=move |ev| edit(draft, field, event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

#[component]
fn ReasonInput(draft: RwSignal<AppointmentDraft>) -> impl IntoView {
    let field = Field::Reason;
    view! {
        <div>
            <label for=field.name() class="block text-sm text-gray-600 mb-1">{label_text(field)}</label>
            <textarea
                id=field.name()
                name=field.name()
                rows=3
                prop:value=move || draft.with(|d| d.get(field))
                on:input=move |ev| edit(draft, field, event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_text() {
        assert_eq!(Banner::Success.text(), "Appointment created successfully!");
        assert_eq!(Banner::Error("Conflict".to_string()).text(), "Conflict");
    }

    #[test]
    fn test_blank_draft_keeps_default_duration() {
        assert_eq!(blank_draft().get(Field::DurationMinutes), "30");
        assert_eq!(blank_draft().get(Field::PatientName), "");
    }

    #[test]
    fn test_specialty_placeholder() {
        assert_eq!(SPECIALTY_PLACEHOLDER, "Select specialty...");
    }

    #[test]
    fn test_required_marker() {
        assert_eq!(label_text(Field::PatientPhone), Field::PatientPhone.label());
        assert!(label_text(Field::DoctorName).ends_with(" *"));
    }
}

//! Shell State
//!
//! List, loading flag, list error and backend health for the page. The
//! struct is `Copy` and handed to child components as a prop.

use leptos::*;

use medibook::models::{health_label, messages, Appointment, HealthStatus};

use crate::api;

#[derive(Clone, Copy)]
pub struct ShellState {
    pub appointments: RwSignal<Vec<Appointment>>,
    /// True until the first list fetch settles
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// `None` until the health check settles
    pub health: RwSignal<Option<HealthStatus>>,
}

/// What the list area shows. Loading and error are independent and either
/// one hides the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSection {
    /// In flight; `with_error` keeps an earlier failure on screen
    Loading { with_error: bool },
    Error,
    Empty,
    Items,
}

impl ListSection {
    pub fn pick(loading: bool, has_error: bool, count: usize) -> Self {
        if loading {
            ListSection::Loading {
                with_error: has_error,
            }
        } else if has_error {
            ListSection::Error
        } else if count == 0 {
            ListSection::Empty
        } else {
            ListSection::Items
        }
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            appointments: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
            health: create_rw_signal(None),
        }
    }

    /// Health check and list fetch, launched independently
    pub fn initialize(self) {
        self.check_health();
        self.fetch_appointments();
    }

    pub fn check_health(self) {
        spawn_local(async move {
            let status = match api::check_health().await {
                Ok(status) => status,
                Err(e) => {
                    web_sys::console::error_1(&format!("Health check failed: {}", e).into());
                    HealthStatus::unhealthy()
                }
            };
            if self.health.try_set(Some(status)).is_some() {
                web_sys::console::log_1(&"Health result dropped: page disposed".into());
            }
        });
    }

    /// Re-fetch the whole list. Items from an earlier fetch stay in place on
    /// failure but are hidden behind the error.
    pub fn fetch_appointments(self) {
        let _ = self.loading.try_set(true);
        spawn_local(async move {
            match api::fetch_appointments().await {
                Ok(items) => {
                    if self.appointments.try_set(items).is_some() {
                        web_sys::console::log_1(&"List result dropped: page disposed".into());
                        return;
                    }
                    let _ = self.error.try_set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching appointments: {}", e).into());
                    let _ = self.error.try_set(Some(messages::LIST_FAILED.to_string()));
                }
            }
            let _ = self.loading.try_set(false);
        });
    }

    /// Manual retry from the list header
    pub fn refresh(self) {
        self.fetch_appointments();
    }

    /// Called by the form after a successful creation
    pub fn on_appointment_created(self) {
        self.fetch_appointments();
    }

    pub fn section(self) -> ListSection {
        ListSection::pick(
            self.loading.get(),
            self.error.with(Option::is_some),
            self.appointments.with(Vec::len),
        )
    }

    pub fn health_label(self) -> String {
        self.health.with(|h| health_label(h.as_ref()).to_string())
    }

    pub fn is_healthy(self) -> bool {
        self.health.with(|h| h.as_ref().is_some_and(HealthStatus::is_healthy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_and_error_hide_items() {
        assert_eq!(
            ListSection::pick(true, false, 3),
            ListSection::Loading { with_error: false }
        );
        assert_eq!(ListSection::pick(false, true, 3), ListSection::Error);
    }

    #[test]
    fn test_retry_keeps_error_next_to_loading() {
        assert_eq!(
            ListSection::pick(true, true, 3),
            ListSection::Loading { with_error: true }
        );
    }

    #[test]
    fn test_empty_and_items() {
        assert_eq!(ListSection::pick(false, false, 0), ListSection::Empty);
        assert_eq!(ListSection::pick(false, false, 2), ListSection::Items);
    }
}

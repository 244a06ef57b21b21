//! Page state held in Leptos signals.

pub mod shell;

pub use shell::{ListSection, ShellState};

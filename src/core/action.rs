//! # Actions
//!
//! Everything that happens to a screen becomes an `Action`.
//! Screen mounted or Retry pressed? That's `Action::Load`.
//! API responded? That's `Action::Loaded(data)` or `Action::Failed { .. }`.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! No I/O here. Screens perform the request and feed the outcome back in.

use log::debug;

use crate::core::state::ScreenState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// Start (or restart) a fetch.
    Load,
    /// The fetch succeeded.
    Loaded(T),
    /// The fetch failed. `fallback` replaces the data when given.
    Failed { message: String, fallback: Option<T> },
    /// Nothing to fetch; stop showing the spinner.
    Idle,
}

pub fn update<T>(state: &mut ScreenState<T>, action: Action<T>) {
    match action {
        Action::Load => {
            debug!("Screen action: Load");
            state.loading = true;
            state.error = None;
        }
        Action::Loaded(data) => {
            debug!("Screen action: Loaded");
            state.loading = false;
            state.error = None;
            state.data = Some(data);
        }
        Action::Failed { message, fallback } => {
            debug!("Screen action: Failed ({message})");
            state.loading = false;
            state.error = Some(message);
            if let Some(fallback) = fallback {
                state.data = Some(fallback);
            }
        }
        Action::Idle => {
            debug!("Screen action: Idle");
            state.loading = false;
        }
    }
}

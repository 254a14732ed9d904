//! # Screen State
//!
//! Every screen tracks the same three things while it talks to the API:
//!
//! ```text
//! ScreenState<T>
//! ├── loading: bool          // request in flight
//! ├── error: Option<String>  // user-facing message
//! └── data: Option<T>        // what to render
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> ScreenState<T> {
    /// A freshly mounted screen is loading and has nothing to show yet.
    pub fn new() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self::new()
    }
}

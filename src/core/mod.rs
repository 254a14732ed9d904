//! # Core Application Logic
//!
//! Screen state, the reducer that drives it, configuration and the small
//! pieces of presentation logic that don't depend on any output format.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ScreenState          │
//!                    │  • Action / update()    │
//!                    │  • config, media, dates │
//!                    │                         │
//!                    │  No I/O. No rendering.  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │  screens   │                          │    api     │
//!     │  (text)    │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ScreenState<T>`, what a screen knows while fetching
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered configuration
//! - [`media`]: image URL rewriting
//! - [`dates`]: timestamp display

pub mod action;
pub mod config;
pub mod dates;
pub mod media;
pub mod state;

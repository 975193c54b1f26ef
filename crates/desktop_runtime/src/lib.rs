//! Window state machine, drag controller, and Leptos shell for the retro portfolio desktop.
//!
//! Transition logic ([`window_manager`], [`drag`], [`reducer`]) is pure and runs without a
//! browser. [`components`] and the host layer translate it to DOM events and inline styles.

pub mod components;
pub mod config;
pub mod drag;
mod effect_executor;
pub mod host;
pub mod model;
pub mod presentation;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{desktop_config, ConfigError, DesktopConfig};
pub use drag::{DragController, DragTarget, DragToken, PointerOrigin};
pub use model::*;
pub use presentation::{window_presentation, WindowPresentation, WindowStyle};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};

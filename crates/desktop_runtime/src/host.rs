//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer transitions stay pure; everything that touches timers, the clipboard, or the document
//! goes through [`DesktopHostContext`].

mod host_ui;
mod timers;

use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local};
use thiserror::Error;

use crate::{
    config::desktop_config,
    model::WindowRect,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use host_ui::{current_page_url, simulated_load_seconds};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures of browser-side effects. They are logged, never surfaced to the reducer.
pub enum HostError {
    /// The page has no usable `window`/`document`.
    #[error("browser document unavailable")]
    NoDocument,
    /// `navigator.clipboard.writeText` is missing.
    #[error("clipboard API unavailable")]
    ClipboardUnavailable,
    /// The clipboard write promise was rejected or could not be started.
    #[error("clipboard write failed: {0}")]
    ClipboardRejected(String),
    /// Creating or clicking the download anchor failed.
    #[error("download failed: {0}")]
    Download(String),
}

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    animations: timers::AnimationTimers,
}

impl DesktopHostContext {
    /// Returns the desktop viewport rectangle used for maximize operations.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        host_ui::desktop_viewport_rect(taskbar_height_px)
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        let effects = &desktop_config().effects;
        match effect {
            RuntimeEffect::ScheduleAnimation {
                window_id,
                animation,
            } => self.animations.schedule(
                runtime,
                window_id,
                animation,
                Duration::from_millis(u64::from(effects.minimize_fade_ms)),
            ),
            RuntimeEffect::CancelAnimation { window_id } => self.animations.cancel(window_id),
            RuntimeEffect::WriteClipboard {
                text,
                success_message,
            } => spawn_local(async move {
                match host_ui::write_clipboard(&text).await {
                    Ok(()) => runtime.dispatch_action(DesktopAction::PushToast {
                        message: success_message,
                    }),
                    Err(err) => logging::warn!("{err}"),
                }
            }),
            RuntimeEffect::ScheduleToastDismiss(toast_id) => set_timeout(
                move || runtime.dispatch_action(DesktopAction::DismissToast { toast_id }),
                Duration::from_millis(u64::from(effects.toast_lifetime_ms)),
            ),
            RuntimeEffect::DownloadFile(path) => {
                if let Err(err) = host_ui::download_file(&path) {
                    logging::warn!("download of `{path}` failed: {err}");
                }
            }
        }
    }
}

//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the command
//! surface used by components. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::desktop_config,
    drag::DragTarget,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, WindowId, WindowRect, WindowState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Desktop area above the taskbar, measured now.
    pub fn viewport(&self) -> WindowRect {
        self.host
            .get_value()
            .desktop_viewport_rect(desktop_config().taskbar.height_px)
    }

    /// Hides a window and flashes its taskbar item.
    pub fn minimize(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    }

    /// Maximizes a window into the viewport, or returns it to its pre-maximize geometry.
    pub fn toggle_maximize(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            viewport: self.viewport(),
        });
    }

    /// Hides a window together with its taskbar item.
    pub fn close(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::CloseWindow { window_id });
    }

    /// Shows a minimized or closed window again.
    pub fn restore(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::RestoreWindow { window_id });
    }

    /// Desktop-icon double-click: the window always ends up visible and un-maximized.
    pub fn open_from_icon_activation(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::OpenFromIcon {
            window_id,
            viewport: self.viewport(),
        });
    }

    /// Makes a window or icon draggable by `handle` (or by its whole surface).
    ///
    /// Returns `false` when the target was already attached; the first binding wins.
    pub fn attach_draggable(&self, target: DragTarget, handle: Option<&'static str>) -> bool {
        if self.interaction.get_untracked().drag.binding(target).is_some() {
            return false;
        }
        self.dispatch_action(DesktopAction::AttachDraggable { target, handle });
        self.interaction.get_untracked().drag.binding(target).is_some()
    }

    /// Current lifecycle state of a window, or `None` when it does not exist.
    pub fn current_state(&self, window_id: WindowId) -> Option<WindowState> {
        self.state.get_untracked().current_state(window_id)
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and builds the page-load state.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let config = desktop_config();
    logging::log!(
        "desktop boot: {} windows, {} icons, {} start menu entries",
        config.windows.len(),
        config.icons.len(),
        config.start_menu.len()
    );

    let host = store_value(DesktopHostContext::default());
    let state = create_rw_signal(DesktopState::from_config(config));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::debug_warn!("desktop reducer ignored action: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    config::StartMenuAction,
    drag::{DragTarget, DragToken, PointerOrigin},
    model::{
        DesktopIcon, DesktopState, DialogKind, IconId, InteractionState, MenuId, PointerPosition,
        Position, ShutdownOption, Toast, ToastId, WindowAnimation, WindowGeometry, WindowId,
        WindowRecord, WindowRect, WindowState,
    },
    window_manager,
};

/// Toasts kept on screen at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Hide a window and flash its taskbar item.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Show a minimized or closed window again.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Maximize into the viewport, or undo a maximize.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Desktop area above the taskbar.
        viewport: WindowRect,
    },
    /// Hide a window and its taskbar item.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Desktop-icon double-click on the icon that opens `window_id`.
    OpenFromIcon {
        /// Window the icon opens.
        window_id: WindowId,
        /// Desktop area above the taskbar.
        viewport: WindowRect,
    },
    /// Taskbar item click: restore when minimized, minimize otherwise.
    ToggleTaskbarItem {
        /// Window bound to the taskbar item.
        window_id: WindowId,
    },
    /// The browser viewport changed size.
    ViewportResized {
        /// New desktop area above the taskbar.
        viewport: WindowRect,
    },
    /// A deferred cosmetic effect finished.
    CompleteAnimation {
        /// Window that owned the effect.
        window_id: WindowId,
        /// Generation the effect was scheduled with.
        generation: u64,
    },
    /// Register drag behavior for a target.
    AttachDraggable {
        /// Window or icon to make draggable.
        target: DragTarget,
        /// Grab handle selector inside the target.
        handle: Option<&'static str>,
    },
    /// Pointer-down on a drag handle.
    BeginDrag {
        /// Target under the pointer.
        target: DragTarget,
        /// Pointer position.
        pointer: PointerPosition,
        /// Whether the pointer-down started on an interactive control.
        origin: PointerOrigin,
        /// On-screen origin of the target, used when it has no explicit position yet.
        measured: Position,
    },
    /// Pointer-move during a drag.
    UpdateDrag {
        /// Session token from [`DesktopAction::BeginDrag`].
        token: DragToken,
        /// Pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up anywhere in the document.
    EndDrag {
        /// Session token from [`DesktopAction::BeginDrag`].
        token: DragToken,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Activate a start-menu entry.
    ActivateStartMenuEntry {
        /// Entry label.
        label: String,
        /// Configured behavior.
        action: StartMenuAction,
        /// Desktop area above the taskbar.
        viewport: WindowRect,
    },
    /// Toggle a window menubar dropdown; any other dropdown closes.
    ToggleMenu {
        /// Dropdown to toggle.
        menu: MenuId,
    },
    /// Close every menubar dropdown.
    CloseMenus,
    /// Activate a tab of a window.
    SelectTab {
        /// Window owning the tabs.
        window_id: WindowId,
        /// Zero-based tab index.
        index: usize,
    },
    /// Show a dialog, replacing any open one.
    OpenDialog {
        /// Dialog to show.
        dialog: DialogKind,
    },
    /// Dismiss the open dialog.
    CloseDialog,
    /// Change the selected option of the shutdown dialog.
    SelectShutdownOption {
        /// Selected option.
        option: ShutdownOption,
    },
    /// Accept the close-confirmation dialog.
    ConfirmClose,
    /// Accept the shutdown dialog.
    PerformShutdown,
    /// Copy text to the clipboard and toast on success.
    CopyToClipboard {
        /// Text to copy.
        text: String,
        /// Toast shown after the copy succeeded.
        success_message: String,
    },
    /// Download a static file.
    DownloadFile {
        /// Site-relative path of the file.
        path: String,
    },
    /// Show a transient notification.
    PushToast {
        /// Notification text.
        message: String,
    },
    /// Remove a notification.
    DismissToast {
        /// Notification to remove.
        toast_id: ToastId,
    },
    /// Advance the status-bar visitor counter.
    TickVisitors,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Start the timer for a deferred cosmetic effect, replacing any pending one for the window.
    ScheduleAnimation {
        /// Window owning the effect.
        window_id: WindowId,
        /// Effect and generation to report back on completion.
        animation: WindowAnimation,
    },
    /// Drop the pending deferred effect timer of a window.
    CancelAnimation {
        /// Window owning the effect.
        window_id: WindowId,
    },
    /// Write text to the system clipboard.
    WriteClipboard {
        /// Text to copy.
        text: String,
        /// Toast to push once the copy succeeded.
        success_message: String,
    },
    /// Start the auto-dismiss timer of a toast.
    ScheduleToastDismiss(ToastId),
    /// Trigger a browser download.
    DownloadFile(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions naming something that is not on the page.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window {0:?} not found")]
    WindowNotFound(WindowId),
    /// The target desktop icon was not found in the current state.
    #[error("desktop icon {0:?} not found")]
    IconNotFound(IconId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action names a window or icon that is not present; the state
/// is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::MinimizeWindow { window_id } => {
            with_window(state, window_id, &mut effects, |window| {
                window_manager::minimize(window);
            })?;
            cancel_drag_of(interaction, DragTarget::Window(window_id));
        }
        DesktopAction::RestoreWindow { window_id } => {
            with_window(state, window_id, &mut effects, window_manager::restore)?;
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            with_window(state, window_id, &mut effects, |window| {
                window_manager::toggle_maximize(window, viewport)
            })?;
        }
        DesktopAction::CloseWindow { window_id } => {
            with_window(state, window_id, &mut effects, window_manager::close)?;
            cancel_drag_of(interaction, DragTarget::Window(window_id));
        }
        DesktopAction::OpenFromIcon {
            window_id,
            viewport,
        } => {
            with_window(state, window_id, &mut effects, |window| {
                window_manager::open_from_icon_activation(window, viewport)
            })?;
        }
        DesktopAction::ToggleTaskbarItem { window_id } => {
            with_window(state, window_id, &mut effects, |window| {
                if window.state.is_hidden() {
                    window_manager::restore(window);
                } else {
                    window_manager::minimize(window);
                }
            })?;
            if state.window(window_id).is_some_and(|w| w.state.is_hidden()) {
                cancel_drag_of(interaction, DragTarget::Window(window_id));
            }
        }
        DesktopAction::ViewportResized { viewport } => {
            for window in &mut state.windows {
                window_manager::refit_maximized(window, viewport);
            }
        }
        DesktopAction::CompleteAnimation {
            window_id,
            generation,
        } => {
            let window = find_window_mut(state, window_id)?;
            window_manager::complete_animation(window, generation);
        }
        DesktopAction::AttachDraggable { target, handle } => {
            ensure_target_exists(state, target)?;
            interaction.drag.attach(target, handle);
        }
        DesktopAction::BeginDrag {
            target,
            pointer,
            origin,
            measured,
        } => {
            ensure_target_exists(state, target)?;
            let maximized = match target {
                DragTarget::Window(window_id) => {
                    state.current_state(window_id) == Some(WindowState::Maximized)
                }
                DragTarget::Icon(_) => false,
            };
            if interaction
                .drag
                .begin(target, origin, maximized, pointer)
                .is_ok()
            {
                materialize_position(state, target, measured)?;
            }
        }
        DesktopAction::UpdateDrag { token, pointer } => {
            if let Some(step) = interaction.drag.track(token, pointer) {
                match step.target {
                    DragTarget::Window(window_id) => {
                        let window = find_window_mut(state, window_id)?;
                        if window.state != WindowState::Maximized {
                            window.geometry = window.geometry.translated(step.dx, step.dy);
                        }
                    }
                    DragTarget::Icon(icon_id) => {
                        let icon = find_icon_mut(state, icon_id)?;
                        icon.position = icon.position.map(|p| p.offset(step.dx, step.dy));
                    }
                }
            }
        }
        DesktopAction::EndDrag { token } => {
            interaction.drag.release(token);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
            state.open_menu = None;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::ActivateStartMenuEntry {
            label,
            action,
            viewport,
        } => {
            match action {
                StartMenuAction::Announce => {
                    push_toast(state, format!("Opening: {}", label.trim()), &mut effects);
                }
                StartMenuAction::Open { window } => {
                    let window_id = WindowId(window);
                    with_window(state, window_id, &mut effects, |window| {
                        window_manager::open_from_icon_activation(window, viewport)
                    })?;
                }
                StartMenuAction::Shutdown => {
                    open_dialog(state, DialogKind::Shutdown(ShutdownOption::default()));
                }
            }
            state.start_menu_open = false;
        }
        DesktopAction::ToggleMenu { menu } => {
            state.open_menu = if state.open_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
            state.start_menu_open = false;
        }
        DesktopAction::CloseMenus => {
            state.open_menu = None;
        }
        DesktopAction::SelectTab { window_id, index } => {
            let window = find_window_mut(state, window_id)?;
            if index < window.tab_count {
                window.active_tab = index;
            }
        }
        DesktopAction::OpenDialog { dialog } => {
            if let DialogKind::ConfirmClose(window_id) = dialog {
                find_window_mut(state, window_id)?;
            }
            open_dialog(state, dialog);
        }
        DesktopAction::CloseDialog => {
            state.dialog = None;
        }
        DesktopAction::SelectShutdownOption { option } => {
            if let Some(DialogKind::Shutdown(selected)) = state.dialog.as_mut() {
                *selected = option;
            }
        }
        DesktopAction::ConfirmClose => {
            if let Some(DialogKind::ConfirmClose(window_id)) = state.dialog {
                with_window(state, window_id, &mut effects, window_manager::close)?;
                state.dialog = None;
                cancel_drag_of(interaction, DragTarget::Window(window_id));
            }
        }
        DesktopAction::PerformShutdown => {
            if let Some(DialogKind::Shutdown(option)) = state.dialog {
                state.dialog = None;
                push_toast(
                    state,
                    format!(
                        "Performing: {}  Just kidding! This is a portfolio website.",
                        option.label()
                    ),
                    &mut effects,
                );
            }
        }
        DesktopAction::CopyToClipboard {
            text,
            success_message,
        } => {
            state.open_menu = None;
            effects.push(RuntimeEffect::WriteClipboard {
                text,
                success_message,
            });
        }
        DesktopAction::DownloadFile { path } => {
            state.open_menu = None;
            effects.push(RuntimeEffect::DownloadFile(path));
        }
        DesktopAction::PushToast { message } => {
            push_toast(state, message, &mut effects);
        }
        DesktopAction::DismissToast { toast_id } => {
            state.toasts.retain(|toast| toast.id != toast_id);
        }
        DesktopAction::TickVisitors => {
            state.visitors = state.visitors.saturating_add(1);
        }
    }

    Ok(effects)
}

/// Runs a lifecycle transition and emits timer effects for any animation it started or cancelled.
fn with_window(
    state: &mut DesktopState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
    transition: impl FnOnce(&mut WindowRecord),
) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    let before = window.animation;
    transition(window);
    let after = window.animation;

    if before != after {
        if before.is_some() {
            effects.push(RuntimeEffect::CancelAnimation { window_id });
        }
        if let Some(animation) = after {
            effects.push(RuntimeEffect::ScheduleAnimation {
                window_id,
                animation,
            });
        }
    }
    Ok(())
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

fn find_icon_mut(
    state: &mut DesktopState,
    icon_id: IconId,
) -> Result<&mut DesktopIcon, ReducerError> {
    state
        .icons
        .iter_mut()
        .find(|i| i.id == icon_id)
        .ok_or(ReducerError::IconNotFound(icon_id))
}

fn ensure_target_exists(state: &DesktopState, target: DragTarget) -> Result<(), ReducerError> {
    match target {
        DragTarget::Window(window_id) => state
            .window(window_id)
            .map(|_| ())
            .ok_or(ReducerError::WindowNotFound(window_id)),
        DragTarget::Icon(icon_id) => state
            .icon(icon_id)
            .map(|_| ())
            .ok_or(ReducerError::IconNotFound(icon_id)),
    }
}

/// Converts a stylesheet-placed target to an explicit offset at its current on-screen origin.
fn materialize_position(
    state: &mut DesktopState,
    target: DragTarget,
    measured: Position,
) -> Result<(), ReducerError> {
    match target {
        DragTarget::Window(window_id) => {
            let window = find_window_mut(state, window_id)?;
            if window.geometry == WindowGeometry::Auto {
                window.geometry = WindowGeometry::Offset(measured);
            }
        }
        DragTarget::Icon(icon_id) => {
            let icon = find_icon_mut(state, icon_id)?;
            icon.position.get_or_insert(measured);
        }
    }
    Ok(())
}

fn cancel_drag_of(interaction: &mut InteractionState, target: DragTarget) {
    if interaction.dragging() == Some(target) {
        interaction.drag.cancel();
    }
}

fn open_dialog(state: &mut DesktopState, dialog: DialogKind) {
    state.dialog = Some(dialog);
    state.start_menu_open = false;
    state.open_menu = None;
}

fn push_toast(state: &mut DesktopState, message: String, effects: &mut Vec<RuntimeEffect>) {
    let id = ToastId(state.next_toast_id);
    state.next_toast_id = state.next_toast_id.saturating_add(1);
    state.toasts.push(Toast { id, message });
    if state.toasts.len() > MAX_VISIBLE_TOASTS {
        let overflow = state.toasts.len() - MAX_VISIBLE_TOASTS;
        state.toasts.drain(0..overflow);
    }
    effects.push(RuntimeEffect::ScheduleToastDismiss(id));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::DesktopConfig,
        presentation::{window_presentation, Positioning},
    };

    const PORTFOLIO: WindowId = WindowId(1);
    const ICON: IconId = IconId(1);
    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 760,
    };

    fn desktop() -> (DesktopState, InteractionState) {
        let mut state = DesktopState::from_config(&DesktopConfig::default());
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::AttachDraggable {
                target: DragTarget::Window(PORTFOLIO),
                handle: Some(".ui-window-titlebar"),
            },
        )
        .expect("attach window");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::AttachDraggable {
                target: DragTarget::Icon(ICON),
                handle: None,
            },
        )
        .expect("attach icon");
        (state, interaction)
    }

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn portfolio(state: &DesktopState) -> &WindowRecord {
        state.window(PORTFOLIO).expect("portfolio window")
    }

    fn drag_window(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        from: PointerPosition,
        to: PointerPosition,
    ) {
        reduce(
            state,
            interaction,
            DesktopAction::BeginDrag {
                target: DragTarget::Window(PORTFOLIO),
                pointer: from,
                origin: PointerOrigin::Handle,
                measured: Position { x: 200, y: 100 },
            },
        );
        let token = interaction.drag.active().map(|s| s.token);
        if let Some(token) = token {
            reduce(
                state,
                interaction,
                DesktopAction::UpdateDrag { token, pointer: to },
            );
            reduce(state, interaction, DesktopAction::EndDrag { token });
        }
    }

    #[test]
    fn minimize_restore_maximize_scenario() {
        let (mut state, mut interaction) = desktop();
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Normal));

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: PORTFOLIO,
            },
        );
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Minimized));
        assert!(portfolio(&state).taskbar.visible);
        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ScheduleAnimation { window_id, .. }] if *window_id == PORTFOLIO
        ));

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                window_id: PORTFOLIO,
            },
        );
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Normal));
        assert!(window_presentation(portfolio(&state)).visible);
        assert_eq!(
            effects,
            vec![RuntimeEffect::CancelAnimation {
                window_id: PORTFOLIO
            }]
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: PORTFOLIO,
                viewport: VIEWPORT,
            },
        );
        let maximized = window_presentation(portfolio(&state));
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Maximized));
        assert_eq!(maximized.style.width, Some(VIEWPORT.w));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: PORTFOLIO,
                viewport: VIEWPORT,
            },
        );
        let restored = window_presentation(portfolio(&state));
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Normal));
        assert_ne!(restored.style.position, Some(Positioning::Fixed));
        assert!(!restored.style.zero_margin);
    }

    #[test]
    fn drag_moves_window_by_pointer_delta() {
        let (mut state, mut interaction) = desktop();

        drag_window(
            &mut state,
            &mut interaction,
            PointerPosition { x: 250, y: 110 },
            PointerPosition { x: 275, y: 150 },
        );

        assert_eq!(
            portfolio(&state).geometry,
            WindowGeometry::Offset(Position { x: 225, y: 140 })
        );
        assert_eq!(interaction.drag.active(), None);
    }

    #[test]
    fn zero_delta_drag_only_pins_the_window_in_place() {
        let (mut state, mut interaction) = desktop();
        let pointer = PointerPosition { x: 250, y: 110 };

        drag_window(&mut state, &mut interaction, pointer, pointer);

        assert_eq!(
            portfolio(&state).geometry,
            WindowGeometry::Offset(Position { x: 200, y: 100 })
        );
    }

    #[test]
    fn drag_on_maximized_window_is_ignored() {
        let (mut state, mut interaction) = desktop();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: PORTFOLIO,
                viewport: VIEWPORT,
            },
        );
        let before = portfolio(&state).clone();

        drag_window(
            &mut state,
            &mut interaction,
            PointerPosition { x: 10, y: 10 },
            PointerPosition { x: 90, y: 60 },
        );

        assert_eq!(portfolio(&state), &before);
        assert_eq!(interaction.drag.active(), None);
    }

    #[test]
    fn pointer_down_on_a_control_does_not_convert_positioning() {
        let (mut state, mut interaction) = desktop();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                target: DragTarget::Window(PORTFOLIO),
                pointer: PointerPosition { x: 5, y: 5 },
                origin: PointerOrigin::Control,
                measured: Position { x: 200, y: 100 },
            },
        );

        assert_eq!(portfolio(&state).geometry, WindowGeometry::Auto);
        assert_eq!(interaction.drag.active(), None);
    }

    #[test]
    fn maximize_after_drag_restores_the_dragged_position() {
        let (mut state, mut interaction) = desktop();
        drag_window(
            &mut state,
            &mut interaction,
            PointerPosition { x: 0, y: 0 },
            PointerPosition { x: 40, y: -20 },
        );
        let dragged = portfolio(&state).geometry;

        for _ in 0..2 {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMaximize {
                    window_id: PORTFOLIO,
                    viewport: VIEWPORT,
                },
            );
        }

        assert_eq!(portfolio(&state).geometry, dragged);
    }

    #[test]
    fn icons_drag_independently_of_window_state() {
        let (mut state, mut interaction) = desktop();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: PORTFOLIO,
                viewport: VIEWPORT,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                target: DragTarget::Icon(ICON),
                pointer: PointerPosition { x: 20, y: 20 },
                origin: PointerOrigin::Handle,
                measured: Position { x: 8, y: 8 },
            },
        );
        let token = interaction.drag.active().expect("icon session").token;
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                token,
                pointer: PointerPosition { x: 60, y: 45 },
            },
        );

        assert_eq!(
            state.icon(ICON).and_then(|icon| icon.position),
            Some(Position { x: 48, y: 33 })
        );
    }

    #[test]
    fn closing_mid_drag_drops_the_session() {
        let (mut state, mut interaction) = desktop();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                target: DragTarget::Window(PORTFOLIO),
                pointer: PointerPosition { x: 0, y: 0 },
                origin: PointerOrigin::Handle,
                measured: Position { x: 0, y: 0 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: PORTFOLIO,
            },
        );

        assert_eq!(interaction.drag.active(), None);
        assert!(!portfolio(&state).taskbar.visible);
    }

    #[test]
    fn minimizing_mid_drag_stops_moving_the_window() {
        for hide in [
            DesktopAction::MinimizeWindow {
                window_id: PORTFOLIO,
            },
            DesktopAction::ToggleTaskbarItem {
                window_id: PORTFOLIO,
            },
        ] {
            let (mut state, mut interaction) = desktop();
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::BeginDrag {
                    target: DragTarget::Window(PORTFOLIO),
                    pointer: PointerPosition { x: 0, y: 0 },
                    origin: PointerOrigin::Handle,
                    measured: Position { x: 0, y: 0 },
                },
            );
            let token = interaction.drag.active().map(|s| s.token).expect("live session");

            reduce(&mut state, &mut interaction, hide);
            let geometry = portfolio(&state).geometry;
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateDrag {
                    token,
                    pointer: PointerPosition { x: 40, y: 40 },
                },
            );

            assert_eq!(interaction.drag.active(), None);
            assert_eq!(portfolio(&state).geometry, geometry);
            assert!(portfolio(&state).state.is_hidden());
        }
    }

    #[test]
    fn missing_window_is_reported_and_state_is_untouched() {
        let (mut state, mut interaction) = desktop();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: WindowId(42),
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::WindowNotFound(WindowId(42)));
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_item_toggles_between_minimized_and_normal() {
        let (mut state, mut interaction) = desktop();
        let toggle = DesktopAction::ToggleTaskbarItem {
            window_id: PORTFOLIO,
        };

        reduce(&mut state, &mut interaction, toggle.clone());
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Minimized));
        assert!(portfolio(&state).taskbar.flashing);

        reduce(&mut state, &mut interaction, toggle);
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Normal));
        assert!(!portfolio(&state).taskbar.flashing);
    }

    #[test]
    fn close_requires_confirmation_dialog_acceptance() {
        let (mut state, mut interaction) = desktop();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenDialog {
                dialog: DialogKind::ConfirmClose(PORTFOLIO),
            },
        );
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Normal));

        reduce(&mut state, &mut interaction, DesktopAction::ConfirmClose);

        assert_eq!(state.dialog, None);
        assert_eq!(state.current_state(PORTFOLIO), Some(WindowState::Closed));
    }

    #[test]
    fn shutdown_entry_opens_dialog_and_perform_toasts_selected_option() {
        let (mut state, mut interaction) = desktop();
        state.start_menu_open = true;
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateStartMenuEntry {
                label: "Shut Down...".to_string(),
                action: StartMenuAction::Shutdown,
                viewport: VIEWPORT,
            },
        );
        assert!(!state.start_menu_open);
        assert_eq!(
            state.dialog,
            Some(DialogKind::Shutdown(ShutdownOption::ShutDown))
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectShutdownOption {
                option: ShutdownOption::Restart,
            },
        );
        let effects = reduce(&mut state, &mut interaction, DesktopAction::PerformShutdown);

        assert_eq!(state.dialog, None);
        assert_eq!(state.toasts.len(), 1);
        assert!(state.toasts[0].message.contains("Restart"));
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleToastDismiss(state.toasts[0].id)]
        );
    }

    #[test]
    fn announce_entry_toasts_and_closes_start_menu() {
        let (mut state, mut interaction) = desktop();
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateStartMenuEntry {
                label: " Programs ".to_string(),
                action: StartMenuAction::Announce,
                viewport: VIEWPORT,
            },
        );

        assert!(!state.start_menu_open);
        assert_eq!(state.toasts[0].message, "Opening: Programs");
    }

    #[test]
    fn menus_are_mutually_exclusive() {
        let (mut state, mut interaction) = desktop();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu { menu: MenuId::File },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu { menu: MenuId::Help },
        );
        assert_eq!(state.open_menu, Some(MenuId::Help));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu { menu: MenuId::Help },
        );
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn copy_closes_menus_and_defers_toast_to_the_host() {
        let (mut state, mut interaction) = desktop();
        state.open_menu = Some(MenuId::Edit);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CopyToClipboard {
                text: "hello@retro-portfolio.dev".to_string(),
                success_message: "Email copied!".to_string(),
            },
        );

        assert_eq!(state.open_menu, None);
        assert!(state.toasts.is_empty());
        assert_eq!(
            effects,
            vec![RuntimeEffect::WriteClipboard {
                text: "hello@retro-portfolio.dev".to_string(),
                success_message: "Email copied!".to_string(),
            }]
        );
    }

    #[test]
    fn toast_overflow_drops_the_oldest() {
        let (mut state, mut interaction) = desktop();
        for n in 0..(MAX_VISIBLE_TOASTS + 2) {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::PushToast {
                    message: format!("toast {n}"),
                },
            );
        }

        assert_eq!(state.toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(state.toasts[0].message, "toast 2");
    }

    #[test]
    fn out_of_range_tab_selection_is_ignored() {
        let mut state = DesktopState::default();
        state
            .windows
            .push(WindowRecord::new(PORTFOLIO, "Portfolio", "computer").with_tabs(3));
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTab {
                window_id: PORTFOLIO,
                index: 2,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTab {
                window_id: PORTFOLIO,
                index: 7,
            },
        );

        assert_eq!(portfolio(&state).active_tab, 2);
    }

    #[test]
    fn viewport_resize_refits_maximized_windows() {
        let (mut state, mut interaction) = desktop();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: PORTFOLIO,
                viewport: VIEWPORT,
            },
        );
        let smaller = WindowRect {
            w: 900,
            h: 600,
            ..VIEWPORT
        };
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized { viewport: smaller },
        );

        assert_eq!(portfolio(&state).geometry, WindowGeometry::Rect(smaller));
    }
}

//! Window lifecycle state machine used by the desktop reducer.
//!
//! Every transition is total over [`WindowState`]; callers never need to check the current state
//! before invoking one. Geometry overrides applied on entering [`WindowState::Maximized`] are
//! undone on every path out of it.

use crate::model::{
    AnimationKind, WindowAnimation, WindowGeometry, WindowRecord, WindowRect, WindowState,
};

/// Hides the window and flags its taskbar item for attention.
///
/// Returns the minimize fade to schedule when the window was visible beforehand.
pub fn minimize(window: &mut WindowRecord) -> Option<WindowAnimation> {
    let was_visible = !window.state.is_hidden();
    leave_maximized(window);
    window.state = WindowState::Minimized;
    window.taskbar.visible = true;
    window.taskbar.flashing = true;

    if was_visible {
        Some(start_animation(window, AnimationKind::MinimizeFade))
    } else {
        cancel_animation(window);
        None
    }
}

/// Shows the window and its taskbar item and clears the attention flash.
///
/// A maximized window stays maximized.
pub fn restore(window: &mut WindowRecord) {
    cancel_animation(window);
    window.taskbar.visible = true;
    window.taskbar.flashing = false;
    if window.state.is_hidden() {
        window.state = WindowState::Normal;
    }
}

/// Maximizes into `viewport`, or returns a maximized window to its saved geometry.
///
/// Hidden windows are restored first.
pub fn toggle_maximize(window: &mut WindowRecord, viewport: WindowRect) {
    if window.state.is_hidden() {
        restore(window);
    }

    if window.state == WindowState::Maximized {
        leave_maximized(window);
        return;
    }

    window.saved_geometry = Some(window.geometry);
    window.geometry = WindowGeometry::Rect(maximized_rect(viewport));
    window.state = WindowState::Maximized;
}

/// Hides the window together with its taskbar item.
pub fn close(window: &mut WindowRecord) {
    cancel_animation(window);
    leave_maximized(window);
    window.state = WindowState::Closed;
    window.taskbar.visible = false;
    window.taskbar.flashing = false;
}

/// Brings a window back from a desktop-icon double-click, always ending in [`WindowState::Normal`].
pub fn open_from_icon_activation(window: &mut WindowRecord, viewport: WindowRect) {
    restore(window);
    if window.state == WindowState::Maximized {
        toggle_maximize(window, viewport);
    }
}

/// Resizes a maximized window to a new viewport. Returns `true` when the geometry changed.
pub fn refit_maximized(window: &mut WindowRecord, viewport: WindowRect) -> bool {
    if window.state != WindowState::Maximized {
        return false;
    }
    let next = WindowGeometry::Rect(maximized_rect(viewport));
    if window.geometry == next {
        return false;
    }
    window.geometry = next;
    true
}

/// Clears a finished deferred effect. Completions from superseded effects are ignored.
pub fn complete_animation(window: &mut WindowRecord, generation: u64) -> bool {
    match window.animation {
        Some(animation) if animation.generation == generation => {
            window.animation = None;
            true
        }
        _ => false,
    }
}

/// Full-viewport rectangle pinned to the top-left corner.
pub fn maximized_rect(viewport: WindowRect) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.w,
        h: viewport.h,
    }
}

fn leave_maximized(window: &mut WindowRecord) {
    if window.state != WindowState::Maximized {
        return;
    }
    window.geometry = window.saved_geometry.take().unwrap_or_default();
    window.state = WindowState::Normal;
}

fn start_animation(window: &mut WindowRecord, kind: AnimationKind) -> WindowAnimation {
    window.animation_generation = window.animation_generation.saturating_add(1);
    let animation = WindowAnimation {
        kind,
        generation: window.animation_generation,
    };
    window.animation = Some(animation);
    animation
}

fn cancel_animation(window: &mut WindowRecord) {
    window.animation = None;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Position, TaskbarItem, WindowId};

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 760,
    };

    fn window() -> WindowRecord {
        WindowRecord::new(WindowId(1), "Portfolio", "computer")
    }

    fn window_in(state: WindowState) -> WindowRecord {
        let mut window = window();
        match state {
            WindowState::Normal => {}
            WindowState::Minimized => {
                minimize(&mut window);
            }
            WindowState::Maximized => toggle_maximize(&mut window, VIEWPORT),
            WindowState::Closed => close(&mut window),
        }
        assert_eq!(window.state, state);
        window
    }

    const ALL_STATES: [WindowState; 4] = [
        WindowState::Normal,
        WindowState::Minimized,
        WindowState::Maximized,
        WindowState::Closed,
    ];

    #[test]
    fn close_hides_window_and_taskbar_item_from_every_state() {
        for state in ALL_STATES {
            let mut window = window_in(state);
            close(&mut window);

            assert_eq!(window.state, WindowState::Closed, "from {state:?}");
            assert!(window.state.is_hidden());
            assert!(!window.taskbar.visible);
            assert_eq!(window.saved_geometry, None);
        }
    }

    #[test]
    fn restore_from_hidden_states_shows_window_and_taskbar_item() {
        for state in [WindowState::Minimized, WindowState::Closed] {
            let mut window = window_in(state);
            restore(&mut window);

            assert_eq!(window.state, WindowState::Normal);
            assert_eq!(
                window.taskbar,
                TaskbarItem {
                    visible: true,
                    flashing: false
                }
            );
            assert_eq!(window.animation, None);
        }
    }

    #[test]
    fn restore_from_normal_changes_nothing() {
        let mut window = window();
        window.geometry = WindowGeometry::Offset(Position { x: 40, y: 70 });
        let before = window.clone();

        restore(&mut window);

        assert_eq!(window, before);
    }

    #[test]
    fn restore_keeps_maximized_state() {
        let mut window = window_in(WindowState::Maximized);
        restore(&mut window);
        assert_eq!(window.state, WindowState::Maximized);
    }

    #[test]
    fn minimize_flashes_taskbar_item_and_starts_fade() {
        let mut window = window();
        let animation = minimize(&mut window).expect("fade from a visible window");

        assert_eq!(window.state, WindowState::Minimized);
        assert!(window.taskbar.visible);
        assert!(window.taskbar.flashing);
        assert_eq!(animation.kind, AnimationKind::MinimizeFade);
        assert_eq!(window.animation, Some(animation));
    }

    #[test]
    fn minimize_of_hidden_window_does_not_fade() {
        let mut window = window_in(WindowState::Closed);
        assert_eq!(minimize(&mut window), None);
        assert!(window.taskbar.visible);
    }

    #[test]
    fn toggle_maximize_twice_restores_the_dragged_geometry() {
        let mut window = window();
        let dragged = WindowGeometry::Offset(Position { x: 120, y: 64 });
        window.geometry = dragged;
        let before = window.clone();

        toggle_maximize(&mut window, VIEWPORT);
        assert_eq!(window.state, WindowState::Maximized);
        assert_eq!(window.geometry, WindowGeometry::Rect(VIEWPORT));
        assert_eq!(window.saved_geometry, Some(dragged));

        toggle_maximize(&mut window, VIEWPORT);
        assert_eq!(window, before);
    }

    #[test]
    fn toggle_maximize_from_hidden_states_ends_visible_and_maximized() {
        for state in [WindowState::Minimized, WindowState::Closed] {
            let mut window = window_in(state);
            toggle_maximize(&mut window, VIEWPORT);

            assert_eq!(window.state, WindowState::Maximized, "from {state:?}");
            assert_eq!(
                window.taskbar,
                TaskbarItem {
                    visible: true,
                    flashing: false
                }
            );
            assert_eq!(window.animation, None);
            assert_eq!(window.geometry, WindowGeometry::Rect(VIEWPORT));
            assert_eq!(window.saved_geometry, Some(WindowGeometry::Auto));
        }
    }

    #[test]
    fn minimize_from_maximized_drops_maximize_overrides() {
        let mut window = window_in(WindowState::Maximized);
        minimize(&mut window);
        restore(&mut window);

        assert_eq!(window.state, WindowState::Normal);
        assert_eq!(window.geometry, WindowGeometry::Auto);
        assert_eq!(window.saved_geometry, None);
    }

    #[test]
    fn icon_activation_always_lands_in_normal() {
        for state in ALL_STATES {
            let mut window = window_in(state);
            open_from_icon_activation(&mut window, VIEWPORT);

            assert_eq!(window.state, WindowState::Normal, "from {state:?}");
            assert!(window.taskbar.visible);
            assert_eq!(window.geometry, WindowGeometry::Auto);
        }
    }

    #[test]
    fn refit_only_touches_maximized_windows() {
        let resized = WindowRect {
            w: 800,
            h: 560,
            ..VIEWPORT
        };
        let mut normal = window();
        assert!(!refit_maximized(&mut normal, resized));

        let mut maximized = window_in(WindowState::Maximized);
        assert!(refit_maximized(&mut maximized, resized));
        assert_eq!(maximized.geometry, WindowGeometry::Rect(resized));
        assert!(!refit_maximized(&mut maximized, resized));
    }

    #[test]
    fn superseded_animation_completion_is_ignored() {
        let mut window = window();
        let first = minimize(&mut window).unwrap();
        restore(&mut window);
        let second = minimize(&mut window).unwrap();

        assert!(!complete_animation(&mut window, first.generation));
        assert_eq!(window.animation, Some(second));
        assert!(complete_animation(&mut window, second.generation));
        assert_eq!(window.animation, None);
    }
}

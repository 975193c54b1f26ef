//! Pointer-drag protocol for windows and desktop icons.
//!
//! The controller only tracks bindings and the live session; the reducer applies the resulting
//! deltas to whichever geometry the target owns. Each accepted pointer-down issues a fresh
//! [`DragToken`], and moves or releases carrying any other token are ignored.

use crate::model::{IconId, PointerPosition, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Something that can be dragged around the desktop.
pub enum DragTarget {
    Window(WindowId),
    Icon(IconId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifies one drag session from pointer-down to pointer-up.
pub struct DragToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the initiating pointer-down landed inside the handle.
pub enum PointerOrigin {
    /// Plain handle surface.
    Handle,
    /// An interactive control (button, input, link) inside the handle.
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Reasons a pointer-down does not start a drag.
pub enum DragRefusal {
    NotAttached,
    Maximized,
    Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragBinding {
    pub target: DragTarget,
    /// CSS selector of the grab handle inside the target; the whole target when `None`.
    pub handle: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub token: DragToken,
    pub target: DragTarget,
    pub last_pointer: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Displacement produced by one pointer-move.
pub struct DragStep {
    pub target: DragTarget,
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragController {
    bindings: Vec<DragBinding>,
    session: Option<DragSession>,
    next_token: u64,
}

impl DragController {
    /// Registers drag behavior for `target`. Returns `false` (and keeps the first binding) when
    /// the target is already attached.
    pub fn attach(&mut self, target: DragTarget, handle: Option<&'static str>) -> bool {
        if self.binding(target).is_some() {
            return false;
        }
        self.bindings.push(DragBinding { target, handle });
        true
    }

    pub fn binding(&self, target: DragTarget) -> Option<&DragBinding> {
        self.bindings.iter().find(|b| b.target == target)
    }

    pub fn active(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// `true` while a session for `target` is live.
    pub fn is_dragging(&self, target: DragTarget) -> bool {
        self.session.as_ref().is_some_and(|s| s.target == target)
    }

    /// Starts a session for a pointer-down on `target`'s handle.
    ///
    /// An accepted pointer-down replaces any live session, so at most one target is dragged at a
    /// time.
    pub fn begin(
        &mut self,
        target: DragTarget,
        origin: PointerOrigin,
        target_maximized: bool,
        pointer: PointerPosition,
    ) -> Result<DragToken, DragRefusal> {
        if self.binding(target).is_none() {
            return Err(DragRefusal::NotAttached);
        }
        if target_maximized {
            return Err(DragRefusal::Maximized);
        }
        if origin == PointerOrigin::Control {
            return Err(DragRefusal::Control);
        }

        self.next_token = self.next_token.saturating_add(1);
        let token = DragToken(self.next_token);
        self.session = Some(DragSession {
            token,
            target,
            last_pointer: pointer,
        });
        Ok(token)
    }

    /// Records a pointer-move and returns the displacement since the previous one.
    pub fn track(&mut self, token: DragToken, pointer: PointerPosition) -> Option<DragStep> {
        let session = self.session.as_mut().filter(|s| s.token == token)?;
        let step = DragStep {
            target: session.target,
            dx: pointer.x - session.last_pointer.x,
            dy: pointer.y - session.last_pointer.y,
        };
        session.last_pointer = pointer;
        Some(step)
    }

    /// Ends the session owning `token`, returning its target.
    pub fn release(&mut self, token: DragToken) -> Option<DragTarget> {
        match self.session.as_ref() {
            Some(session) if session.token == token => {
                self.session.take().map(|session| session.target)
            }
            _ => None,
        }
    }

    /// Drops the live session regardless of token.
    pub fn cancel(&mut self) -> Option<DragTarget> {
        self.session.take().map(|session| session.target)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const WINDOW: DragTarget = DragTarget::Window(WindowId(1));
    const ICON: DragTarget = DragTarget::Icon(IconId(1));

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn attached() -> DragController {
        let mut drag = DragController::default();
        assert!(drag.attach(WINDOW, Some(".ui-window-titlebar")));
        assert!(drag.attach(ICON, None));
        drag
    }

    #[test]
    fn attaching_twice_keeps_the_first_binding() {
        let mut drag = attached();

        assert!(!drag.attach(WINDOW, None));
        assert_eq!(
            drag.binding(WINDOW).and_then(|b| b.handle),
            Some(".ui-window-titlebar")
        );
    }

    #[test]
    fn pointer_down_is_refused_for_unattached_maximized_or_control_targets() {
        let mut drag = DragController::default();
        assert_eq!(
            drag.begin(WINDOW, PointerOrigin::Handle, false, at(0, 0)),
            Err(DragRefusal::NotAttached)
        );

        let mut drag = attached();
        assert_eq!(
            drag.begin(WINDOW, PointerOrigin::Handle, true, at(0, 0)),
            Err(DragRefusal::Maximized)
        );
        assert_eq!(
            drag.begin(WINDOW, PointerOrigin::Control, false, at(0, 0)),
            Err(DragRefusal::Control)
        );
        assert_eq!(drag.active(), None);
    }

    #[test]
    fn only_an_accepted_press_counts_as_dragging_its_target() {
        let mut drag = attached();
        assert!(drag.begin(WINDOW, PointerOrigin::Handle, true, at(0, 0)).is_err());
        assert!(!drag.is_dragging(WINDOW));

        let token = drag
            .begin(WINDOW, PointerOrigin::Handle, false, at(0, 0))
            .unwrap();
        assert!(drag.is_dragging(WINDOW));
        assert!(!drag.is_dragging(ICON));

        assert_eq!(drag.release(token), Some(WINDOW));
        assert!(!drag.is_dragging(WINDOW));
    }

    #[test]
    fn moves_report_deltas_since_the_previous_pointer() {
        let mut drag = attached();
        let token = drag
            .begin(WINDOW, PointerOrigin::Handle, false, at(10, 10))
            .unwrap();

        assert_eq!(
            drag.track(token, at(15, 30)),
            Some(DragStep {
                target: WINDOW,
                dx: 5,
                dy: 20
            })
        );
        assert_eq!(
            drag.track(token, at(12, 30)),
            Some(DragStep {
                target: WINDOW,
                dx: -3,
                dy: 0
            })
        );
        assert_eq!(drag.release(token), Some(WINDOW));
        assert_eq!(drag.active(), None);
    }

    #[test]
    fn stale_tokens_cannot_move_or_release_a_newer_session() {
        let mut drag = attached();
        let first = drag
            .begin(WINDOW, PointerOrigin::Handle, false, at(0, 0))
            .unwrap();
        let second = drag.begin(ICON, PointerOrigin::Handle, false, at(0, 0)).unwrap();

        assert_ne!(first, second);
        assert_eq!(drag.track(first, at(50, 50)), None);
        assert_eq!(drag.release(first), None);
        assert_eq!(drag.active().map(|s| s.target), Some(ICON));
        assert_eq!(drag.release(second), Some(ICON));
        assert_eq!(drag.track(second, at(1, 1)), None);
    }
}

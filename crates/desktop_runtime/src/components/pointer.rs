//! DOM-side half of the drag protocol: reading pointer events and measuring targets.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use leptos::SignalGetUntracked;

use crate::{
    drag::{DragTarget, PointerOrigin},
    model::{PointerPosition, Position},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

/// Elements whose pointer-down must reach the element instead of starting a drag.
pub(super) const INTERACTIVE_CONTROLS: &str = "button, input, textarea, select, a";

pub(super) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(super) fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Secondary mouse buttons and non-primary touches never drag.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()?.dyn_into::<web_sys::Element>().ok()
}

#[cfg(target_arch = "wasm32")]
fn current_element(ev: &web_sys::Event) -> Option<web_sys::HtmlElement> {
    ev.current_target()?.dyn_into::<web_sys::HtmlElement>().ok()
}

/// `true` when the event target sits inside an element matching `selector`.
pub(super) fn event_within(ev: &web_sys::Event, selector: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        event_element(ev)
            .and_then(|element| element.closest(selector).ok().flatten())
            .is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (ev, selector);
        false
    }
}

/// Classifies the pointer-down location. A control that is the draggable element itself counts
/// as plain handle surface.
fn pointer_origin(ev: &web_sys::Event) -> PointerOrigin {
    #[cfg(target_arch = "wasm32")]
    {
        let control = event_element(ev)
            .and_then(|element| element.closest(INTERACTIVE_CONTROLS).ok().flatten());
        let current: Option<web_sys::Element> = current_element(ev).map(Into::into);
        match (control, current) {
            (Some(control), Some(current)) if control != current => PointerOrigin::Control,
            (Some(_), None) => PointerOrigin::Control,
            _ => PointerOrigin::Handle,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
        PointerOrigin::Handle
    }
}

/// Offset of the draggable element inside its positioning parent.
fn measured_origin(ev: &web_sys::Event) -> Position {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = current_element(ev) {
            return Position {
                x: element.offset_left(),
                y: element.offset_top(),
            };
        }
    }
    let _ = ev;
    Position::default()
}

/// Captures the pointer on the grab handle itself, so the click and double-click that follow a
/// press still target the handle.
#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent, handle: Option<&str>) {
    let element = match handle {
        Some(handle) => event_element(ev).and_then(|element| element.closest(handle).ok().flatten()),
        None => current_element(ev).map(Into::into),
    };
    if let Some(element) = element {
        let _ = element.set_pointer_capture(ev.pointer_id());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent, _: Option<&str>) {}

/// Handles pointer-down on a draggable element registered through `attach_draggable`.
///
/// Presses outside the binding's handle are ignored here; the reducer decides whether the press
/// starts a session, and only an accepted press captures the pointer.
pub(super) fn begin_drag_from_event(
    runtime: DesktopRuntimeContext,
    target: DragTarget,
    ev: &web_sys::PointerEvent,
) {
    if !is_primary_press(ev) {
        return;
    }
    let Some(binding) = runtime.interaction.get_untracked().drag.binding(target).cloned() else {
        return;
    };
    if let Some(handle) = binding.handle {
        if !event_within(ev, handle) {
            return;
        }
    }

    runtime.dispatch_action(DesktopAction::BeginDrag {
        target,
        pointer: pointer_from_pointer_event(ev),
        origin: pointer_origin(ev),
        measured: measured_origin(ev),
    });
    // Refused presses (controls, maximized windows) keep native pointer routing.
    if runtime.interaction.get_untracked().drag.is_dragging(target) {
        try_set_pointer_capture(ev, binding.handle);
        ev.prevent_default();
    }
}

/// Forwards a document-level pointer-move to the live drag session.
pub(super) fn track_drag(runtime: DesktopRuntimeContext, ev: &web_sys::PointerEvent) {
    let Some(token) = runtime
        .interaction
        .get_untracked()
        .drag
        .active()
        .map(|session| session.token)
    else {
        return;
    };
    runtime.dispatch_action(DesktopAction::UpdateDrag {
        token,
        pointer: pointer_from_pointer_event(ev),
    });
}

/// Ends the live drag session on pointer-up or pointer-cancel anywhere in the document.
pub(super) fn end_drag(runtime: DesktopRuntimeContext) {
    if let Some(token) = runtime
        .interaction
        .get_untracked()
        .drag
        .active()
        .map(|session| session.token)
    {
        runtime.dispatch_action(DesktopAction::EndDrag { token });
    }
}

use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};

use leptos::{leptos_dom::helpers::TimeoutHandle, logging, set_timeout_with_handle};

use crate::{
    model::{WindowAnimation, WindowId},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone, Default)]
/// At most one pending deferred-effect timer per window.
pub(super) struct AnimationTimers {
    pending: Rc<RefCell<HashMap<WindowId, TimeoutHandle>>>,
}

impl AnimationTimers {
    pub(super) fn schedule(
        &self,
        runtime: DesktopRuntimeContext,
        window_id: WindowId,
        animation: WindowAnimation,
        delay: Duration,
    ) {
        self.cancel(window_id);

        let complete = DesktopAction::CompleteAnimation {
            window_id,
            generation: animation.generation,
        };
        if delay.is_zero() {
            runtime.dispatch_action(complete);
            return;
        }

        let pending = Rc::clone(&self.pending);
        let on_timeout = {
            let complete = complete.clone();
            move || {
                pending.borrow_mut().remove(&window_id);
                runtime.dispatch_action(complete);
            }
        };
        match set_timeout_with_handle(on_timeout, delay) {
            Ok(handle) => {
                self.pending.borrow_mut().insert(window_id, handle);
            }
            Err(err) => {
                logging::warn!("animation timer for window {} failed: {err:?}", window_id.0);
                runtime.dispatch_action(complete);
            }
        }
    }

    pub(super) fn cancel(&self, window_id: WindowId) {
        if let Some(handle) = self.pending.borrow_mut().remove(&window_id) {
            handle.clear();
        }
    }
}

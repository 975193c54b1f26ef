//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod dialogs;
mod menus;
mod pointer;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{
    desktop_icons::DesktopIcons,
    dialogs::{DialogLayer, ToastStack},
    menus::{WindowMenuBar, MENUBAR_SELECTOR},
    pointer::{
        begin_drag_from_event, end_drag, event_within, stop_mouse_event, track_drag,
        INTERACTIVE_CONTROLS,
    },
    taskbar::DesktopTaskbar,
    window::DesktopWindow,
};
use crate::{
    config::{desktop_config, StartMenuAction},
    drag::DragTarget,
    host::{current_page_url, simulated_load_seconds},
    model::{DialogKind, IconId, MenuId, ShutdownOption, WindowId},
    presentation::{icon_style, window_presentation},
    reducer::DesktopAction,
};
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer, Icon, IconName, IconSize};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI and installs the document-level pointer listeners.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_ids: Vec<WindowId> = state.get_untracked().windows.iter().map(|w| w.id).collect();

    let pointer_move_listener = window_event_listener(ev::pointermove, move |ev| {
        track_drag(runtime, &ev);
    });
    on_cleanup(move || pointer_move_listener.remove());

    let pointer_up_listener = window_event_listener(ev::pointerup, move |_| end_drag(runtime));
    on_cleanup(move || pointer_up_listener.remove());

    let pointer_cancel_listener =
        window_event_listener(ev::pointercancel, move |_| end_drag(runtime));
    on_cleanup(move || pointer_cancel_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ViewportResized {
            viewport: runtime.viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let menu_dismiss_listener = window_event_listener(ev::click, move |ev| {
        if runtime.state.get_untracked().open_menu.is_some() && !event_within(&ev, MENUBAR_SELECTOR)
        {
            runtime.dispatch_action(DesktopAction::CloseMenus);
        }
    });
    on_cleanup(move || menu_dismiss_listener.remove());

    let visitor_interval_ms = desktop_config().status.visitor_interval_ms;
    if let Ok(interval) = set_interval_with_handle(
        move || runtime.dispatch_action(DesktopAction::TickVisitors),
        Duration::from_millis(u64::from(visitor_interval_ms)),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <DesktopRoot id="desktop-shell-root".to_string() tabindex=-1>
            <DesktopBackdrop>
                <DesktopIcons />
                <DesktopWindowLayer>
                    {window_ids
                        .into_iter()
                        .map(|window_id| view! { <DesktopWindow window_id=window_id /> })
                        .collect_view()}
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <DesktopTaskbar />
            <DialogLayer />
            <ToastStack />
        </DesktopRoot>
    }
}

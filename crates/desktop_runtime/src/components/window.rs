use super::*;
use desktop_app_terminal::{TerminalApp, TerminalProfile};
use system_ui::{
    StatusBar, StatusBarItem, Tab, TabList, TabPanel, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Grab handle of a managed window.
pub(super) const TITLEBAR_HANDLE: &str = ".ui-window-titlebar";

fn tab_dom_id(window_id: WindowId, index: usize) -> String {
    format!("window-{}-tab-{index}", window_id.0)
}

fn tab_panel_dom_id(window_id: WindowId, index: usize) -> String {
    format!("window-{}-panel-{index}", window_id.0)
}

fn terminal_profile() -> TerminalProfile {
    let profile = &desktop_config().profile;
    TerminalProfile {
        owner: profile.owner.clone(),
        email: profile.email.clone(),
        about: profile.about.clone(),
        skills: profile.skills.clone(),
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let tabs = desktop_config()
        .window(window_id)
        .map(|config| config.tabs.clone())
        .unwrap_or_default();

    runtime.attach_draggable(DragTarget::Window(window_id), Some(TITLEBAR_HANDLE));

    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    let presentation = create_memo(move |_| window.get().as_ref().map(window_presentation));
    let title = Signal::derive(move || window.get().map(|w| w.title).unwrap_or_default());
    let icon = Signal::derive(move || {
        window
            .get()
            .map(|w| IconName::from_id(&w.icon_id))
            .unwrap_or(IconName::Document)
    });
    let maximized = Signal::derive(move || presentation.get().is_some_and(|p| p.maximized));
    let active_tab = Signal::derive(move || window.get().map(|w| w.active_tab).unwrap_or(0));
    let load_time = format!("Load: {:.2}s", simulated_load_seconds());

    let on_frame_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        begin_drag_from_event(runtime, DragTarget::Window(window_id), &ev);
    });
    let on_titlebar_dblclick = Callback::new(move |ev: web_sys::MouseEvent| {
        if event_within(&ev, INTERACTIVE_CONTROLS) {
            return;
        }
        stop_mouse_event(&ev);
        runtime.toggle_maximize(window_id);
    });

    let tab_buttons = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let tab_title = tab.title.clone();
            view! {
                <Tab
                    id=tab_dom_id(window_id, index)
                    controls=tab_panel_dom_id(window_id, index)
                    selected=Signal::derive(move || active_tab.get() == index)
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::SelectTab { window_id, index });
                    })
                >
                    {tab_title}
                </Tab>
            }
        })
        .collect_view();
    let tab_panels = tabs
        .into_iter()
        .enumerate()
        .map(|(index, tab)| {
            let content = if tab.terminal {
                view! { <TerminalApp profile=terminal_profile() /> }.into_view()
            } else {
                tab.lines
                    .into_iter()
                    .map(|line| view! { <p>{line}</p> })
                    .collect_view()
            };
            view! {
                <TabPanel
                    id=tab_panel_dom_id(window_id, index)
                    labelled_by=tab_dom_id(window_id, index)
                    active=Signal::derive(move || active_tab.get() == index)
                >
                    {content}
                </TabPanel>
            }
        })
        .collect_view();

    view! {
        <WindowFrame
            style=Signal::derive(move || {
                presentation.get().map(|p| p.style.to_css()).unwrap_or_default()
            })
            aria_label=title
            hidden=Signal::derive(move || !presentation.get().is_some_and(|p| p.visible))
            fading=Signal::derive(move || presentation.get().is_some_and(|p| p.fading_out))
            maximized=maximized
            on_pointerdown=on_frame_pointerdown
        >
            <WindowTitleBar on_dblclick=on_titlebar_dblclick>
                <WindowTitle>
                    {move || view! { <Icon icon=icon.get() size=IconSize::Sm /> }}
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize".to_string()
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            runtime.minimize(window_id);
                        })
                    >
                        <Icon icon=IconName::Minimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            if maximized.get() { "Restore" } else { "Maximize" }.to_string()
                        })
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            runtime.toggle_maximize(window_id);
                        })
                    >
                        {move || {
                            let glyph = if maximized.get() {
                                IconName::Restore
                            } else {
                                IconName::Maximize
                            };
                            view! { <Icon icon=glyph size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Close".to_string()
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::OpenDialog {
                                dialog: DialogKind::ConfirmClose(window_id),
                            });
                        })
                    >
                        <Icon icon=IconName::Close size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>

            <WindowMenuBar window_id=window_id />

            <WindowBody>
                <TabList aria_label="Portfolio sections".to_string()>{tab_buttons}</TabList>
                {tab_panels}
            </WindowBody>

            <StatusBar>
                <StatusBarItem>
                    {move || format!("Visitors: {}", runtime.state.get().visitors)}
                </StatusBarItem>
                <StatusBarItem>{load_time}</StatusBarItem>
                <StatusBarItem>
                    {move || window.get().map(|w| w.state.label()).unwrap_or_default()}
                </StatusBarItem>
            </StatusBar>
        </WindowFrame>
    }
}

use super::*;
use system_ui::{
    ClockButton, LauncherMenu, MenuItem, MenuSeparator, Taskbar, TaskbarButton, TaskbarSection,
};

const START_BUTTON_SLOT: &str = "start-button";
/// Presses inside these keep the start menu open; any other press closes it.
const START_MENU_SELECTOR: &str = ".ui-launcher-menu, [data-ui-slot=\"start-button\"]";

fn dismisses_start_menu(menu_open: bool, inside_start_menu: bool) -> bool {
    menu_open && !inside_start_menu
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let config = desktop_config();
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_millis(u64::from(config.taskbar.clock_refresh_ms)),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::pointerdown, move |ev| {
        let menu_open = runtime.state.get_untracked().start_menu_open;
        if dismisses_start_menu(menu_open, event_within(&ev, START_MENU_SELECTOR)) {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let start_open = Signal::derive(move || state.get().start_menu_open);
    let window_ids: Vec<WindowId> = state.get_untracked().windows.iter().map(|w| w.id).collect();

    let start_entries = move || {
        config
            .start_menu
            .iter()
            .map(|entry| {
                let label = entry.label.clone();
                let action = entry.action;
                let is_shutdown = matches!(action, StartMenuAction::Shutdown);
                let item = view! {
                    <MenuItem
                        role="menuitem".to_string()
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            runtime.dispatch_action(DesktopAction::ActivateStartMenuEntry {
                                label: label.clone(),
                                action,
                                viewport: runtime.viewport(),
                            });
                        })
                    >
                        <Icon icon=IconName::from_id(&entry.icon) size=IconSize::Sm />
                        <span>{entry.label.clone()}</span>
                    </MenuItem>
                };
                if is_shutdown {
                    view! { <MenuSeparator />{item} }.into_view()
                } else {
                    item.into_view()
                }
            })
            .collect_view()
    };

    view! {
        <Taskbar
            aria_label="Taskbar".to_string()
            height_px=config.taskbar.height_px
        >
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    ui_slot=START_BUTTON_SLOT
                    aria_haspopup="menu".to_string()
                    aria_expanded=start_open
                    pressed=start_open
                    on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::Start size=IconSize::Sm />
                    <span>"Start"</span>
                </TaskbarButton>
                <Show when=move || start_open.get() fallback=|| ()>
                    <LauncherMenu title=config.profile.owner.clone()>{start_entries()}</LauncherMenu>
                </Show>
            </TaskbarSection>

            <TaskbarSection
                ui_slot="running"
                role="toolbar".to_string()
                aria_label="Open windows".to_string()
            >
                {window_ids
                    .into_iter()
                    .map(|window_id| view! { <TaskbarWindowItem window_id=window_id /> })
                    .collect_view()}
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <ClockButton aria_label="Clock".to_string()>
                    <Icon icon=IconName::Clock size=IconSize::Xs />
                    <span>{move || clock_now.get().label()}</span>
                </ClockButton>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarWindowItem(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    let visible = Signal::derive(move || window.get().is_some_and(|w| w.taskbar.visible));
    let flashing = Signal::derive(move || window.get().is_some_and(|w| w.taskbar.flashing));
    let shown = Signal::derive(move || window.get().is_some_and(|w| !w.state.is_hidden()));
    let title = Signal::derive(move || window.get().map(|w| w.title).unwrap_or_default());

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <TaskbarButton
                title=title
                aria_label=title
                pressed=shown
                flashing=flashing
                on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::ToggleTaskbarItem { window_id });
                })
            >
                {move || {
                    let glyph = window
                        .get()
                        .map(|w| IconName::from_id(&w.icon_id))
                        .unwrap_or(IconName::Document);
                    view! { <Icon icon=glyph size=IconSize::Sm /> }
                }}
                <span>{title}</span>
            </TaskbarButton>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{dismisses_start_menu, ClockSnapshot, START_BUTTON_SLOT, START_MENU_SELECTOR};

    #[test]
    fn clock_label_is_zero_padded_hours_and_minutes() {
        assert_eq!(ClockSnapshot { hour: 9, minute: 5 }.label(), "09:05");
        assert_eq!(ClockSnapshot { hour: 23, minute: 59 }.label(), "23:59");
    }

    #[test]
    fn presses_outside_the_launcher_and_start_button_close_the_menu() {
        assert!(dismisses_start_menu(true, false));
        assert!(!dismisses_start_menu(true, true));
        assert!(!dismisses_start_menu(false, false));
    }

    #[test]
    fn start_menu_selector_covers_the_launcher_and_its_button() {
        assert!(START_MENU_SELECTOR.contains(".ui-launcher-menu"));
        assert!(START_MENU_SELECTOR.contains(&format!("[data-ui-slot=\"{START_BUTTON_SLOT}\"]")));
    }
}

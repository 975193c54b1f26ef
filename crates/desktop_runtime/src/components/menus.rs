use super::*;
use system_ui::{MenuBar, MenuItem, MenuSeparator, MenuSurface};

/// Class carried by every menubar so document clicks inside it do not close the open dropdown.
pub(super) const MENUBAR_SELECTOR: &str = ".ui-menubar";

#[component]
pub(super) fn WindowMenuBar(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let profile = &desktop_config().profile;
    let email = profile.email.clone();
    let resume_path = profile.resume_path.clone();

    let menu_open = move |menu: MenuId| runtime.state.get().open_menu == Some(menu);

    let download_resume = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::DownloadFile {
            path: resume_path.clone(),
        });
    });
    let close_window = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseMenus);
        runtime.dispatch_action(DesktopAction::OpenDialog {
            dialog: DialogKind::ConfirmClose(window_id),
        });
    });
    let copy_email = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CopyToClipboard {
            text: email.clone(),
            success_message: "Email copied!".to_string(),
        });
    });
    let copy_link = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CopyToClipboard {
            text: current_page_url(),
            success_message: "Link copied!".to_string(),
        });
    });
    let show_about = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::OpenDialog {
            dialog: DialogKind::About,
        });
    });

    let dropdown = move |menu: MenuId| -> View {
        match menu {
            MenuId::File => view! {
                <MenuItem on_click=download_resume>
                    <Icon icon=IconName::Download size=IconSize::Xs />
                    "Download Resume"
                </MenuItem>
                <MenuSeparator />
                <MenuItem on_click=close_window>"Close"</MenuItem>
            }
            .into_view(),
            MenuId::Edit => view! {
                <MenuItem on_click=copy_email>
                    <Icon icon=IconName::Mail size=IconSize::Xs />
                    "Copy Email"
                </MenuItem>
                <MenuItem on_click=copy_link>
                    <Icon icon=IconName::Link size=IconSize::Xs />
                    "Copy Link"
                </MenuItem>
            }
            .into_view(),
            MenuId::Help => view! {
                <MenuItem on_click=show_about>
                    <Icon icon=IconName::Info size=IconSize::Xs />
                    "About"
                </MenuItem>
            }
            .into_view(),
        }
    };

    view! {
        <MenuBar aria_label="Window menu".to_string()>
            {MenuId::ALL
                .into_iter()
                .map(|menu| {
                    view! {
                        <div data-ui-slot="menu">
                            <MenuItem
                                aria_haspopup="menu".to_string()
                                selected=Signal::derive(move || menu_open(menu))
                                on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    runtime.dispatch_action(DesktopAction::ToggleMenu { menu });
                                })
                            >
                                {menu.title()}
                            </MenuItem>
                            <Show when=move || menu_open(menu) fallback=|| ()>
                                <MenuSurface id=menu.dom_id().to_string() role="menu".to_string()>
                                    {dropdown(menu)}
                                </MenuSurface>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </MenuBar>
    }
}

use super::*;
use system_ui::{Button, ButtonVariant, Modal, Toast as ToastSurface, ToastRegion};

#[component]
pub(super) fn DialogLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dialog = create_memo(move |_| runtime.state.get().dialog);
    let close = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseDialog);
    });

    move || match dialog.get() {
        None => ().into_view(),
        Some(DialogKind::About) => view! { <AboutDialog on_close=close /> }.into_view(),
        Some(DialogKind::ConfirmClose(window_id)) => {
            view! { <ConfirmCloseDialog window_id on_cancel=close /> }.into_view()
        }
        Some(DialogKind::Shutdown(selected)) => {
            view! { <ShutdownDialog selected on_cancel=close /> }.into_view()
        }
    }
}

#[component]
fn AboutDialog(on_close: Callback<web_sys::MouseEvent>) -> impl IntoView {
    let profile = &desktop_config().profile;

    view! {
        <Modal title="About".to_string() icon=IconName::Info on_close=on_close>
            <p>
                <strong>{profile.owner.clone()}</strong>
            </p>
            <p>{profile.about.clone()}</p>
            <div data-ui-slot="actions">
                <Button variant=ButtonVariant::Primary on_click=on_close>"OK"</Button>
            </div>
        </Modal>
    }
}

#[component]
fn ConfirmCloseDialog(
    window_id: WindowId,
    on_cancel: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let title = runtime
        .state
        .get_untracked()
        .window(window_id)
        .map(|window| window.title.clone())
        .unwrap_or_default();

    view! {
        <Modal title="Close".to_string() icon=IconName::Close on_close=on_cancel>
            <p>{format!("Are you sure you want to close {title}?")}</p>
            <div data-ui-slot="actions">
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ConfirmClose);
                    })
                >
                    "Yes"
                </Button>
                <Button on_click=on_cancel>"No"</Button>
            </div>
        </Modal>
    }
}

#[component]
fn ShutdownDialog(
    selected: ShutdownOption,
    on_cancel: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Modal title="Shut Down".to_string() icon=IconName::Power on_close=on_cancel>
            <p>"What do you want the computer to do?"</p>
            <div role="radiogroup" data-ui-slot="options">
                {ShutdownOption::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="shutdown-option"
                                    checked=option == selected
                                    on:change=move |_| {
                                        runtime.dispatch_action(DesktopAction::SelectShutdownOption {
                                            option,
                                        });
                                    }
                                />
                                <span>{option.label()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div data-ui-slot="actions">
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::PerformShutdown);
                    })
                >
                    "OK"
                </Button>
                <Button on_click=on_cancel>"Cancel"</Button>
            </div>
        </Modal>
    }
}

#[component]
pub(super) fn ToastStack() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <ToastRegion>
            <For
                each=move || runtime.state.get().toasts
                key=|toast| toast.id.0
                let:toast
            >
                {{
                    let toast_id = toast.id;
                    view! {
                        <ToastSurface on_dismiss=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::DismissToast { toast_id });
                        })>
                            {toast.message}
                        </ToastSurface>
                    }
                }}
            </For>
        </ToastRegion>
    }
}

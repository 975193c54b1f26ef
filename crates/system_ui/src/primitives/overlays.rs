use super::*;

#[component]
/// Shared overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role=role.unwrap_or_else(|| "menuitem".to_string())
            aria_haspopup=aria_haspopup
            selected=selected
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(forward(on_click))
        >
            {children()}
        </Button>
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Modal dialog over a dimmed backdrop.
///
/// Clicking the backdrop does nothing; the titlebar close button calls `on_close`.
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(default = IconName::Info)] icon: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-modal-backdrop" data-ui-primitive="true" data-ui-kind="modal-backdrop">
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=title.clone()
                data-ui-primitive="true"
                data-ui-kind="modal"
            >
                <header class="ui-window-titlebar" data-ui-slot="header">
                    <div class="ui-window-title">
                        <Icon icon size=IconSize::Sm />
                        <span>{title}</span>
                    </div>
                    <Button
                        aria_label="Close".to_string()
                        ui_slot="window-control"
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        on_click=Callback::new(forward(on_close))
                    >
                        <Icon icon=IconName::Close size=IconSize::Xs />
                    </Button>
                </header>
                <div data-ui-slot="body">{children()}</div>
            </div>
        </div>
    }
}

#[component]
/// Fixed stack that hosts transient notifications.
pub fn ToastRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-region", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast-region"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single notification bubble. Clicking it dismisses early.
pub fn Toast(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast", layout_class)
            data-ui-primitive="true"
            data-ui-kind="toast"
            on:click=forward(on_dismiss)
        >
            {children()}
        </div>
    }
}

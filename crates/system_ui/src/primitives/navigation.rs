use super::*;

#[component]
/// Shared menubar primitive.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menubar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menubar"
            role="menubar"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared status bar primitive.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Sunken cell inside a [`StatusBar`].
pub fn StatusBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-statusbar-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar-item"
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared tab list primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(into)] controls: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            id=id
            role="tab".to_string()
            aria_controls=controls
            aria_selected=Signal::derive(move || Some(selected.get()))
            selected=selected
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(forward(on_click))
        >
            {children()}
        </Button>
    }
}

#[component]
/// Content region owned by a [`Tab`]. Inactive panels stay mounted but hidden.
pub fn TabPanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(into)] labelled_by: String,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-panel", layout_class)
            id=id
            role="tabpanel"
            aria-labelledby=labelled_by
            hidden=move || !active.get()
            data-ui-primitive="true"
            data-ui-kind="tab-panel"
            data-ui-active=move || bool_token(active.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Start-menu flyout with the vertical banner strip.
pub fn LauncherMenu(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <MenuSurface
            layout_class=layout_class.unwrap_or("ui-launcher-menu")
            role="menu".to_string()
            aria_label="Start menu".to_string()
        >
            {title.map(|title| view! { <div data-ui-slot="banner" aria-hidden="true">{title}</div> })}
            <div data-ui-slot="entries">{children()}</div>
        </MenuSurface>
    }
}

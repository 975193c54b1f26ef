use super::*;

#[component]
/// Scrollable terminal surface.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_live: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
            node_ref=node_ref
            role=role
            aria-live=aria_live
            on:click=forward(on_click)
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal line surface.
pub fn TerminalLine(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-line", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal prompt row.
pub fn TerminalPrompt(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-prompt", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-prompt"
        >
            {children()}
        </div>
    }
}

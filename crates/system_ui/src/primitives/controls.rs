use super::*;

#[component]
/// Shared button primitive with standardized states and `data-ui-*` tokens.
///
/// `pressed` wins over `selected` when both are set; `attention` drives the blinking taskbar
/// treatment independently of either.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<Option<bool>>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] aria_selected: MaybeSignal<Option<bool>>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] tabindex: Option<i32>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional, into)] attention: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    view! {
        <button
            type="button"
            class=class
            id=id
            role=role
            aria-label=move || Some(aria_label.get()).filter(|label| !label.is_empty())
            aria-controls=move || Some(aria_controls.get()).filter(|id| !id.is_empty())
            aria-expanded=move || aria_expanded.get().map(bool_token)
            aria-haspopup=move || Some(aria_haspopup.get()).filter(|kind| !kind.is_empty())
            aria-selected=move || aria_selected.get().map(bool_token)
            title=move || Some(title.get()).filter(|title| !title.is_empty())
            tabindex=tabindex
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if pressed.get() {
                    "pressed"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-attention=move || bool_token(attention.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=forward(on_click)
            on:mousedown=forward(on_mousedown)
            on:dblclick=forward(on_dblclick)
            on:pointerdown=forward(on_pointerdown)
        >
            {children()}
        </button>
    }
}

use super::*;
use system_ui::{DesktopIconButton, DesktopIconGrid};

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icons = runtime.state.get_untracked().icons;

    view! {
        <DesktopIconGrid>
            {icons
                .into_iter()
                .map(|icon| view! { <DesktopIconEntry icon_id=icon.id opens=icon.opens /> })
                .collect_view()}
        </DesktopIconGrid>
    }
}

#[component]
fn DesktopIconEntry(icon_id: IconId, opens: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    runtime.attach_draggable(DragTarget::Icon(icon_id), None);

    let icon = create_memo(move |_| runtime.state.get().icon(icon_id).cloned());
    let label = Signal::derive(move || icon.get().map(|i| i.label).unwrap_or_default());
    let glyph = Signal::derive(move || {
        icon.get()
            .map(|i| IconName::from_id(&i.icon_id))
            .unwrap_or(IconName::Document)
    });

    view! {
        <DesktopIconButton
            style=Signal::derive(move || icon.get().map(|i| icon_style(&i)).unwrap_or_default())
            aria_label=label
            on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                begin_drag_from_event(runtime, DragTarget::Icon(icon_id), &ev);
            })
            on_dblclick=Callback::new(move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                runtime.open_from_icon_activation(opens);
            })
        >
            <span>{move || view! { <Icon icon=glyph.get() size=IconSize::Lg /> }}</span>
            <span>{label}</span>
        </DesktopIconButton>
    }
}

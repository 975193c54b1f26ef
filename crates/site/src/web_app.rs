use desktop_runtime::{desktop_config, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let profile = &desktop_config().profile;

    view! {
        <Title text=format!("{} | RetroOS", profile.owner) />
        <Meta name="description" content="A retro desktop-style portfolio with draggable windows." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

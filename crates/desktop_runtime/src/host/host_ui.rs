#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

use super::HostError;
use crate::model::WindowRect;

pub(super) fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - taskbar_height_px).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768 - taskbar_height_px,
    }
}

/// URL of the page currently shown, used by "Copy Link".
pub fn current_page_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(href) = web_sys::window().and_then(|window| window.location().href().ok()) {
            return href;
        }
    }
    String::new()
}

/// Fake page-load duration in seconds, between 0.20 and 0.70.
pub fn simulated_load_seconds() -> f64 {
    #[cfg(target_arch = "wasm32")]
    let sample = js_sys::Math::random();
    #[cfg(not(target_arch = "wasm32"))]
    let sample = 0.5;

    0.2 + sample * 0.5
}

pub(super) async fn write_clipboard(text: &str) -> Result<(), HostError> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or(HostError::NoDocument)?;
        let navigator = window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|err| HostError::ClipboardRejected(format!("{err:?}")))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(HostError::ClipboardUnavailable);
        }

        let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .ok_or(HostError::ClipboardUnavailable)?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|err| HostError::ClipboardRejected(format!("{err:?}")))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|err| HostError::ClipboardRejected(format!("{err:?}")))?;

        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|err| HostError::ClipboardRejected(format!("{err:?}")))?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Err(HostError::ClipboardUnavailable)
    }
}

pub(super) fn download_file(path: &str) -> Result<(), HostError> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(HostError::NoDocument)?;
        let anchor = document
            .create_element("a")
            .map_err(|err| HostError::Download(format!("{err:?}")))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| HostError::Download("anchor element expected".to_string()))?;

        let file_name = path.rsplit('/').next().unwrap_or(path);
        anchor.set_href(path);
        anchor.set_download(file_name);
        anchor.click();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(HostError::NoDocument)
    }
}

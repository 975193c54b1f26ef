//! Shared structural, shell, overlay, navigation, control, and terminal primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod navigation;
mod overlays;
mod shell;
mod terminal;

pub use controls::Button;
pub use navigation::{LauncherMenu, MenuBar, StatusBar, StatusBarItem, Tab, TabList, TabPanel};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface, Modal, Toast, ToastRegion};
pub use shell::{
    ClockButton, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
pub use terminal::{TerminalLine, TerminalPrompt, TerminalSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Primary emphasized action button, drawn with the default-button outline.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn forward<E: 'static>(callback: Option<Callback<E>>) -> impl Fn(E) + 'static {
    move |ev| {
        if let Some(callback) = callback.as_ref() {
            callback.call(ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_to_the_base_class() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("start-button")),
            "ui-button start-button"
        );
    }

    #[test]
    fn tokens_are_stable_attribute_values() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(TextTone::Accent.token(), "accent");
    }
}

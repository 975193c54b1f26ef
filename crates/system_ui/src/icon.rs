//! Centralized icon catalog.
//!
//! Icons render as text glyphs inside a tagged span so the shell CSS can swap in sprite art
//! through `data-ui-icon` without touching call sites.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Every icon the desktop shell knows how to draw.
pub enum IconName {
    /// "My Computer" style workstation.
    Computer,
    /// Closed folder.
    Folder,
    /// Plain document sheet. Also the fallback for unknown ids.
    Document,
    /// Command prompt window.
    Terminal,
    /// Power button.
    Power,
    /// Start button logo.
    Start,
    /// Window minimize control.
    Minimize,
    /// Window maximize control.
    Maximize,
    /// Window restore control.
    Restore,
    /// Window close control.
    Close,
    /// Information balloon.
    Info,
    /// Envelope.
    Mail,
    /// Chain link.
    Link,
    /// Download arrow.
    Download,
    /// Taskbar clock.
    Clock,
}

impl IconName {
    /// Resolves a config-file icon id, falling back to [`IconName::Document`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "computer" => Self::Computer,
            "folder" => Self::Folder,
            "document" => Self::Document,
            "terminal" => Self::Terminal,
            "power" => Self::Power,
            "start" => Self::Start,
            "minimize" => Self::Minimize,
            "maximize" => Self::Maximize,
            "restore" => Self::Restore,
            "close" => Self::Close,
            "info" => Self::Info,
            "mail" => Self::Mail,
            "link" => Self::Link,
            "download" => Self::Download,
            "clock" => Self::Clock,
            _ => Self::Document,
        }
    }

    /// Stable id written to `data-ui-icon`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Folder => "folder",
            Self::Document => "document",
            Self::Terminal => "terminal",
            Self::Power => "power",
            Self::Start => "start",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
            Self::Close => "close",
            Self::Info => "info",
            Self::Mail => "mail",
            Self::Link => "link",
            Self::Download => "download",
            Self::Clock => "clock",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Computer => "\u{1f5a5}",
            Self::Folder => "\u{1f4c1}",
            Self::Document => "\u{1f4c4}",
            Self::Terminal => ">_",
            Self::Power => "\u{23fb}",
            Self::Start => "\u{229e}",
            Self::Minimize => "_",
            Self::Maximize => "\u{25a1}",
            Self::Restore => "\u{2750}",
            Self::Close => "\u{2715}",
            Self::Info => "\u{2139}",
            Self::Mail => "\u{2709}",
            Self::Link => "\u{1f517}",
            Self::Download => "\u{2913}",
            Self::Clock => "\u{1f552}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Titlebar controls.
    Xs,
    /// Menus and taskbar buttons.
    #[default]
    Sm,
    /// Dialog headers.
    Md,
    /// Desktop icons.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative icon glyph. Hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.id()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_ids_resolve_case_insensitively() {
        assert_eq!(IconName::from_id("computer"), IconName::Computer);
        assert_eq!(IconName::from_id(" Power "), IconName::Power);
    }

    #[test]
    fn unknown_ids_fall_back_to_document() {
        assert_eq!(IconName::from_id("spreadsheet"), IconName::Document);
        assert_eq!(IconName::from_id(""), IconName::Document);
    }

    #[test]
    fn ids_round_trip_through_the_catalog() {
        for icon in [IconName::Folder, IconName::Clock, IconName::Restore] {
            assert_eq!(IconName::from_id(icon.id()), icon);
        }
    }
}

//! Shared UI primitive library for the retro desktop shell and its window contents.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell stylesheet.
//! Shell code should compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, ClockButton, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, LauncherMenu, MenuBar, MenuItem,
    MenuSeparator, MenuSurface, Modal, StatusBar, StatusBarItem, Tab, TabList, TabPanel, Taskbar,
    TaskbarButton, TaskbarSection, TerminalLine, TerminalPrompt, TerminalSurface, TextTone, Toast,
    ToastRegion, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for crates rendering inside the desktop shell.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize, MenuItem, MenuSeparator,
        MenuSurface, Modal, StatusBar, StatusBarItem, Tab, TabList, TabPanel, TerminalLine,
        TerminalPrompt, TerminalSurface, TextTone,
    };
}

use serde::{Deserialize, Serialize};

use crate::{
    config::DesktopConfig,
    drag::{DragController, DragTarget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Lifecycle state of a simulated window.
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Closed,
}

impl WindowState {
    /// `true` when the window's visible area is hidden.
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Minimized | Self::Closed)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn origin(self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Explicit placement of a window, or none at all.
pub enum WindowGeometry {
    /// No overrides; the stylesheet positions and sizes the window.
    #[default]
    Auto,
    /// Explicit top/left offset (after a drag); size still comes from the stylesheet.
    Offset(Position),
    /// Explicit rectangle (while maximized).
    Rect(WindowRect),
}

impl WindowGeometry {
    /// Explicit top-left corner, if any.
    pub fn origin(self) -> Option<Position> {
        match self {
            Self::Auto => None,
            Self::Offset(position) => Some(position),
            Self::Rect(rect) => Some(rect.origin()),
        }
    }

    /// Moves an explicit geometry by a delta. [`WindowGeometry::Auto`] has no origin and is
    /// returned unchanged.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        match self {
            Self::Auto => Self::Auto,
            Self::Offset(position) => Self::Offset(position.offset(dx, dy)),
            Self::Rect(rect) => Self::Rect(rect.offset(dx, dy)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Taskbar strip entry bound 1:1 to a window.
pub struct TaskbarItem {
    pub visible: bool,
    /// Attention state raised by minimize.
    pub flashing: bool,
}

impl Default for TaskbarItem {
    fn default() -> Self {
        Self {
            visible: true,
            flashing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKind {
    MinimizeFade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A pending deferred cosmetic effect for one window.
pub struct WindowAnimation {
    pub kind: AnimationKind,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon_id: String,
    pub state: WindowState,
    pub geometry: WindowGeometry,
    /// Geometry captured on entering [`WindowState::Maximized`].
    pub saved_geometry: Option<WindowGeometry>,
    pub taskbar: TaskbarItem,
    pub animation: Option<WindowAnimation>,
    pub animation_generation: u64,
    pub active_tab: usize,
    pub tab_count: usize,
}

impl WindowRecord {
    pub fn new(id: WindowId, title: impl Into<String>, icon_id: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            icon_id: icon_id.into(),
            state: WindowState::Normal,
            geometry: WindowGeometry::Auto,
            saved_geometry: None,
            taskbar: TaskbarItem::default(),
            animation: None,
            animation_generation: 0,
            active_tab: 0,
            tab_count: 0,
        }
    }

    pub fn with_tabs(mut self, tab_count: usize) -> Self {
        self.tab_count = tab_count;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: IconId,
    pub label: String,
    pub icon_id: String,
    pub opens: WindowId,
    /// `None` keeps the icon in its grid slot.
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuId {
    File,
    Edit,
    Help,
}

impl MenuId {
    pub const ALL: [MenuId; 3] = [Self::File, Self::Edit, Self::Help];

    pub fn title(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Edit => "Edit",
            Self::Help => "Help",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::File => "menu-file",
            Self::Edit => "menu-edit",
            Self::Help => "menu-help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShutdownOption {
    #[default]
    ShutDown,
    Restart,
    LogOff,
}

impl ShutdownOption {
    pub const ALL: [ShutdownOption; 3] = [Self::ShutDown, Self::Restart, Self::LogOff];

    pub fn label(self) -> &'static str {
        match self {
            Self::ShutDown => "Shut down the computer?",
            Self::Restart => "Restart the computer?",
            Self::LogOff => "Close all programs and log on as a different user?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogKind {
    About,
    /// Asks before closing the given window.
    ConfirmClose(WindowId),
    Shutdown(ShutdownOption),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub icons: Vec<DesktopIcon>,
    pub start_menu_open: bool,
    pub open_menu: Option<MenuId>,
    pub dialog: Option<DialogKind>,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
    pub visitors: u64,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            icons: Vec::new(),
            start_menu_open: false,
            open_menu: None,
            dialog: None,
            toasts: Vec::new(),
            next_toast_id: 1,
            visitors: 0,
        }
    }
}

impl DesktopState {
    /// Builds the page-load state: every configured window `Normal`, icons in their grid slots.
    pub fn from_config(config: &DesktopConfig) -> Self {
        let windows = config
            .windows
            .iter()
            .map(|w| WindowRecord::new(WindowId(w.id), &w.title, &w.icon).with_tabs(w.tabs.len()))
            .collect();
        let icons = config
            .icons
            .iter()
            .enumerate()
            .map(|(idx, icon)| DesktopIcon {
                id: IconId(idx as u32 + 1),
                label: icon.label.clone(),
                icon_id: icon.icon.clone(),
                opens: WindowId(icon.opens),
                position: None,
            })
            .collect();

        Self {
            windows,
            icons,
            visitors: config.status.visitor_seed,
            ..Self::default()
        }
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn icon(&self, icon_id: IconId) -> Option<&DesktopIcon> {
        self.icons.iter().find(|i| i.id == icon_id)
    }

    /// Lifecycle state of a window, or `None` when the window does not exist.
    pub fn current_state(&self, window_id: WindowId) -> Option<WindowState> {
        self.window(window_id).map(|w| w.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Pointer interaction state that never leaves the page session.
pub struct InteractionState {
    pub drag: DragController,
}

impl InteractionState {
    pub fn dragging(&self) -> Option<DragTarget> {
        self.drag.active().map(|session| session.target)
    }
}

//! Rendering adapter from the window/icon model to inline styles and visibility flags.
//!
//! Components never build positioning CSS themselves; they read a [`WindowPresentation`] so the
//! full set of overrides for each state lives in one place.

use std::fmt::Write as _;

use crate::model::{AnimationKind, DesktopIcon, WindowGeometry, WindowRecord, WindowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    Absolute,
    Fixed,
}

impl Positioning {
    fn css(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Inline style overrides on top of the stylesheet. `None`/`false` means "not set".
pub struct WindowStyle {
    pub position: Option<Positioning>,
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub zero_margin: bool,
    pub unbounded_width: bool,
    pub square_corners: bool,
}

impl WindowStyle {
    pub fn for_geometry(geometry: WindowGeometry, state: WindowState) -> Self {
        match geometry {
            WindowGeometry::Auto => Self::default(),
            WindowGeometry::Offset(position) => Self {
                position: Some(Positioning::Absolute),
                top: Some(position.y),
                left: Some(position.x),
                zero_margin: true,
                ..Self::default()
            },
            WindowGeometry::Rect(rect) if state == WindowState::Maximized => Self {
                position: Some(Positioning::Fixed),
                top: Some(rect.y),
                left: Some(rect.x),
                width: Some(rect.w),
                height: Some(rect.h),
                zero_margin: true,
                unbounded_width: true,
                square_corners: true,
            },
            WindowGeometry::Rect(rect) => Self {
                position: Some(Positioning::Absolute),
                top: Some(rect.y),
                left: Some(rect.x),
                width: Some(rect.w),
                height: Some(rect.h),
                zero_margin: true,
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Serializes only the properties that are set.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(position) = self.position {
            let _ = write!(css, "position:{};", position.css());
        }
        for (name, value) in [
            ("top", self.top),
            ("left", self.left),
            ("width", self.width),
            ("height", self.height),
        ] {
            if let Some(value) = value {
                let _ = write!(css, "{name}:{value}px;");
            }
        }
        if self.zero_margin {
            css.push_str("margin:0;");
        }
        if self.unbounded_width {
            css.push_str("max-width:none;");
        }
        if self.square_corners {
            css.push_str("border-radius:0;");
        }
        css
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPresentation {
    pub style: WindowStyle,
    pub visible: bool,
    /// Minimize fade still running; the window is rendered but fading out.
    pub fading_out: bool,
    pub maximized: bool,
}

pub fn window_presentation(window: &WindowRecord) -> WindowPresentation {
    let fading_out = window.state == WindowState::Minimized
        && matches!(
            window.animation,
            Some(animation) if animation.kind == AnimationKind::MinimizeFade
        );

    WindowPresentation {
        style: WindowStyle::for_geometry(window.geometry, window.state),
        visible: !window.state.is_hidden() || fading_out,
        fading_out,
        maximized: window.state == WindowState::Maximized,
    }
}

/// Inline style for a desktop icon; empty while it sits in its grid slot.
pub fn icon_style(icon: &DesktopIcon) -> String {
    icon.position
        .map(|position| {
            WindowStyle::for_geometry(WindowGeometry::Offset(position), WindowState::Normal)
                .to_css()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{IconId, Position, WindowId, WindowRect},
        window_manager,
    };

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1440,
        h: 860,
    };

    #[test]
    fn untouched_window_has_no_overrides() {
        let window = WindowRecord::new(WindowId(1), "Portfolio", "computer");
        let presentation = window_presentation(&window);

        assert!(presentation.style.is_empty());
        assert_eq!(presentation.style.to_css(), "");
        assert!(presentation.visible);
    }

    #[test]
    fn maximized_window_pins_to_viewport_without_chrome_offsets() {
        let mut window = WindowRecord::new(WindowId(1), "Portfolio", "computer");
        window_manager::toggle_maximize(&mut window, VIEWPORT);

        assert_eq!(
            window_presentation(&window).style.to_css(),
            "position:fixed;top:0px;left:0px;width:1440px;height:860px;margin:0;max-width:none;border-radius:0;"
        );
    }

    #[test]
    fn maximize_round_trip_leaves_no_residual_overrides() {
        let mut window = WindowRecord::new(WindowId(1), "Portfolio", "computer");
        window.geometry = WindowGeometry::Offset(Position { x: 30, y: 90 });
        let before = window_presentation(&window);

        window_manager::toggle_maximize(&mut window, VIEWPORT);
        window_manager::toggle_maximize(&mut window, VIEWPORT);
        let after = window_presentation(&window);

        assert_eq!(after, before);
        assert_ne!(after.style.position, Some(Positioning::Fixed));
        assert!(!after.style.unbounded_width);
    }

    #[test]
    fn minimized_window_stays_rendered_until_the_fade_completes() {
        let mut window = WindowRecord::new(WindowId(1), "Portfolio", "computer");
        let fade = window_manager::minimize(&mut window).unwrap();

        let fading = window_presentation(&window);
        assert!(fading.visible);
        assert!(fading.fading_out);

        window_manager::complete_animation(&mut window, fade.generation);
        let hidden = window_presentation(&window);
        assert!(!hidden.visible);
        assert!(!hidden.fading_out);
    }

    #[test]
    fn icon_style_is_empty_until_the_icon_is_placed() {
        let mut icon = DesktopIcon {
            id: IconId(1),
            label: "My Portfolio".to_string(),
            icon_id: "computer".to_string(),
            opens: WindowId(1),
            position: None,
        };
        assert_eq!(icon_style(&icon), "");

        icon.position = Some(Position { x: 8, y: 112 });
        assert_eq!(icon_style(&icon), "position:absolute;top:112px;left:8px;margin:0;");
    }
}

//! Reusable egui widget components for the FlowPad UI.
//!
//! - **Buttons**: control buttons and toggles for the canvas overlays
//! - **Menu**: menu items, separators, section labels, panel frames

pub mod buttons;
pub mod menu;

pub use buttons::{ControlButton, ToggleButton};
pub use menu::{menu_item, menu_separator, panel_frame, section_label};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Control button size (zoom/fit buttons)
    pub const CONTROL: f32 = 26.0;
    /// Menu item height
    pub const MENU_ITEM: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets and the canvas.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Canvas background
    pub const CANVAS_BG: Color32 = Color32::from_rgb(252, 252, 253);
    /// Edge strokes
    pub const EDGE: Color32 = Color32::from_rgb(148, 148, 156);
    /// Background grid dots
    pub const GRID_DOT: Color32 = Color32::from_rgb(210, 210, 214);
}

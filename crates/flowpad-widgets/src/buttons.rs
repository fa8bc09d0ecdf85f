//! Button components for the canvas control overlays.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Response, Sense, Stroke, Ui,
};

use crate::{sizing, theme};

/// Square glyph button used in the canvas controls (zoom, fit, reset).
pub struct ControlButton<'a> {
    glyph: &'a str,
    tooltip: &'a str,
}

impl<'a> ControlButton<'a> {
    pub fn new(glyph: &'a str, tooltip: &'a str) -> Self {
        Self { glyph, tooltip }
    }

    /// Show the button. Returns the response; check `clicked()`.
    pub fn show(self, ui: &mut Ui) -> Response {
        let size = vec2(sizing::CONTROL, sizing::CONTROL);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(14.0),
                theme::TEXT,
            );
        }

        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// Two-state toggle with a label, used for the drop-policy switch.
pub struct ToggleButton<'a> {
    label: &'a str,
    active: bool,
    tooltip: &'a str,
}

impl<'a> ToggleButton<'a> {
    pub fn new(label: &'a str, active: bool, tooltip: &'a str) -> Self {
        Self {
            label,
            active,
            tooltip,
        }
    }

    /// Show the toggle. Returns the response; check `clicked()`.
    pub fn show(self, ui: &mut Ui) -> Response {
        let text_width = self.label.len() as f32 * 7.0 + 16.0;
        let size = vec2(text_width.max(sizing::CONTROL), sizing::CONTROL);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, text_color) = if self.active {
                (theme::ACCENT, Color32::WHITE)
            } else if response.hovered() {
                (theme::HOVER_BG, theme::TEXT)
            } else {
                (Color32::TRANSPARENT, theme::TEXT_MUTED)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            if !self.active {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, theme::BORDER),
                    egui::StrokeKind::Inside,
                );
            }

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(12.0),
                text_color,
            );
        }

        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand)
    }
}

//! Overlay panels: placement menu, canvas controls, minimap.

use egui::{vec2, Align2, Context, CornerRadius, Pos2, Sense, Stroke, StrokeKind};
use flowpad_core::{DropPolicy, Editor, NodePreset};
use flowpad_widgets::{
    menu_item, menu_separator, panel_frame, section_label, theme, ControlButton, ToggleButton,
};
use kurbo::Point;

/// Zoom factor applied by the control buttons.
const ZOOM_STEP: f64 = 1.2;

/// The placement menu overlay, shown at the recorded release position.
pub fn placement_menu(ctx: &Context, editor: &mut Editor) {
    let Some(menu) = editor.menu.clone() else {
        return;
    };
    let pos = Pos2::new(menu.screen_pos.x as f32, menu.screen_pos.y as f32);

    let mut chosen: Option<NodePreset> = None;
    let mut cancelled = false;
    egui::Area::new(egui::Id::new("placement-menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(190.0);
                section_label(ui, "Select node type");
                for preset in NodePreset::ALL {
                    if menu_item(ui, preset.label()) {
                        chosen = Some(preset);
                    }
                }
                menu_separator(ui);
                if menu_item(ui, "Cancel") {
                    cancelled = true;
                }
            });
        });

    if let Some(preset) = chosen {
        editor.choose_preset(preset);
    } else if cancelled {
        editor.cancel_menu();
    }
}

/// Zoom/pan controls and the drop-policy toggle (bottom-left).
pub fn controls(ctx: &Context, editor: &mut Editor) {
    egui::Area::new(egui::Id::new("canvas-controls"))
        .anchor(Align2::LEFT_BOTTOM, vec2(12.0, -12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    let center = Point::new(
                        editor.viewport_size.width / 2.0,
                        editor.viewport_size.height / 2.0,
                    );
                    if ControlButton::new("+", "Zoom in").show(ui).clicked() {
                        editor.camera.zoom_at(center, ZOOM_STEP);
                    }
                    if ControlButton::new("\u{2212}", "Zoom out").show(ui).clicked() {
                        editor.camera.zoom_at(center, 1.0 / ZOOM_STEP);
                    }
                    if ControlButton::new("\u{26F6}", "Fit view").show(ui).clicked() {
                        editor.fit_to_content();
                    }
                    if ControlButton::new("\u{27F2}", "Reset view").show(ui).clicked() {
                        editor.camera.reset();
                    }
                    ui.add_space(4.0);
                    let gated = editor.drop_policy() == DropPolicy::MenuGated;
                    let toggle = ToggleButton::new(
                        "menu",
                        gated,
                        "Open the placement menu when a connection is dropped on empty canvas \
                         (off: create a default node immediately)",
                    );
                    if toggle.show(ui).clicked() {
                        editor.set_drop_policy(if gated {
                            DropPolicy::Immediate
                        } else {
                            DropPolicy::MenuGated
                        });
                    }
                });
            });
        });
}

/// Read-only minimap of the node collection and the viewport (bottom-right).
pub fn minimap(ctx: &Context, editor: &Editor) {
    egui::Area::new(egui::Id::new("minimap"))
        .anchor(Align2::RIGHT_BOTTOM, vec2(-12.0, -12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(vec2(180.0, 120.0), Sense::hover());
                let rect = response.rect;
                painter.rect_filled(rect, CornerRadius::same(4), theme::CANVAS_BG);

                let Some(bounds) = editor.document.bounds() else {
                    return;
                };

                // Map the union of content and viewport into the minimap.
                let view0 = editor.camera.screen_to_canvas(Point::ZERO);
                let view1 = editor.camera.screen_to_canvas(Point::new(
                    editor.viewport_size.width,
                    editor.viewport_size.height,
                ));
                let view = kurbo::Rect::new(view0.x, view0.y, view1.x, view1.y);
                let world = bounds.union(view).inflate(20.0, 20.0);
                let scale = (rect.width() as f64 / world.width())
                    .min(rect.height() as f64 / world.height());
                let to_map = |p: Point| -> Pos2 {
                    Pos2::new(
                        rect.left() + ((p.x - world.x0) * scale) as f32,
                        rect.top() + ((p.y - world.y0) * scale) as f32,
                    )
                };

                for node in &editor.document.nodes {
                    let b = node.bounds();
                    let r = egui::Rect::from_min_max(
                        to_map(Point::new(b.x0, b.y0)),
                        to_map(Point::new(b.x1, b.y1)),
                    );
                    painter.rect_filled(r, CornerRadius::same(1), theme::BORDER);
                }

                let view_rect = egui::Rect::from_min_max(
                    to_map(Point::new(view.x0, view.y0)),
                    to_map(Point::new(view.x1, view.y1)),
                );
                painter.rect_stroke(
                    view_rect,
                    CornerRadius::ZERO,
                    Stroke::new(1.0, theme::ACCENT),
                    StrokeKind::Inside,
                );
            });
        });
}

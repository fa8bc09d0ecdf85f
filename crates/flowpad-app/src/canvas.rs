//! Canvas painting and pointer routing.

use egui::{
    Align2, Color32, CornerRadius, FontId, Painter, Pos2, Response, Sense, Stroke, StrokeKind, Ui,
};
use flowpad_core::{BorderStyle, Editor, NodeId};
use flowpad_widgets::theme;
use kurbo::{Point, Vec2};

/// Base grid spacing in canvas units.
const GRID_SPACING: f64 = 24.0;

/// Minimum on-screen spacing before the grid coarsens.
const MIN_GRID_PIXELS: f64 = 20.0;

/// Screen-space radius of the source connection handle.
const HANDLE_RADIUS: f32 = 5.0;

/// Screen-space hit radius for grabbing a connection handle.
const HANDLE_HIT_RADIUS: f64 = 9.0;

/// What the active pointer drag is doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragAction {
    #[default]
    Idle,
    /// Dragging a node body.
    MoveNode(NodeId),
    /// Dragging out of a connection handle.
    Connect,
    /// Panning the camera.
    Pan,
}

/// Paint the canvas and route pointer input into the editor.
pub fn show(ui: &mut Ui, editor: &mut Editor, drag: &mut DragAction) {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
    let rect = response.rect;
    editor.set_viewport_size(rect.width() as f64, rect.height() as f64);

    handle_input(ui, &response, editor, drag);

    paint_grid(&painter, rect, editor);
    paint_edges(&painter, editor);
    paint_nodes(&painter, editor);
    let pointer = response.interact_pointer_pos().or_else(|| response.hover_pos());
    paint_connect_preview(&painter, editor, pointer);
}

fn handle_input(ui: &Ui, response: &Response, editor: &mut Editor, drag: &mut DragAction) {
    // Zoom keeps the pointer position fixed.
    if let Some(pos) = response.hover_pos() {
        let zoom_delta = ui.input(|i| i.zoom_delta()) as f64;
        let scroll = ui.input(|i| i.smooth_scroll_delta.y) as f64;
        if (zoom_delta - 1.0).abs() > f64::EPSILON {
            editor.camera.zoom_at(to_point(pos), zoom_delta);
        } else if scroll.abs() > f64::EPSILON {
            editor.camera.zoom_at(to_point(pos), (scroll / 300.0).exp());
        }
    }

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            *drag = begin_drag(editor, pos);
        }
    }

    if response.dragged() {
        let delta = response.drag_delta();
        match drag {
            DragAction::MoveNode(id) => {
                let id = id.clone();
                let zoom = editor.camera.zoom;
                editor.translate_node(
                    &id,
                    Vec2::new(delta.x as f64 / zoom, delta.y as f64 / zoom),
                );
            }
            DragAction::Pan => {
                editor.camera.pan(Vec2::new(delta.x as f64, delta.y as f64));
            }
            DragAction::Connect | DragAction::Idle => {}
        }
    }

    if response.drag_stopped() {
        if *drag == DragAction::Connect {
            match response.interact_pointer_pos() {
                Some(pos) => editor.end_connection(to_point(pos)),
                None => editor.cancel_connection(),
            }
        }
        *drag = DragAction::Idle;
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let canvas = editor.camera.screen_to_canvas(to_point(pos));
            let hit = editor.document.node_at_point(canvas).map(|n| n.id.clone());
            match hit {
                Some(id) => editor.select(id),
                None => editor.clear_selection(),
            }
        }
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        editor.cancel_menu();
        editor.cancel_connection();
    }
}

/// Classify a starting drag: connection handle, node body, or empty canvas.
fn begin_drag(editor: &mut Editor, pos: Pos2) -> DragAction {
    let screen = to_point(pos);
    if let Some(id) = handle_at(editor, screen) {
        editor.begin_connection(id);
        return DragAction::Connect;
    }

    let canvas = editor.camera.screen_to_canvas(screen);
    let hit = editor.document.node_at_point(canvas).map(|n| n.id.clone());
    if let Some(id) = hit {
        editor.select(id.clone());
        return DragAction::MoveNode(id);
    }

    DragAction::Pan
}

/// Topmost source handle within grab range of a screen point.
fn handle_at(editor: &Editor, screen: Point) -> Option<NodeId> {
    editor.document.nodes.iter().rev().find_map(|node| {
        let anchor = editor.camera.canvas_to_screen(node.source_anchor());
        let d = Vec2::new(screen.x - anchor.x, screen.y - anchor.y);
        (d.hypot() <= HANDLE_HIT_RADIUS).then(|| node.id.clone())
    })
}

fn paint_grid(painter: &Painter, rect: egui::Rect, editor: &Editor) {
    painter.rect_filled(rect, CornerRadius::ZERO, theme::CANVAS_BG);

    let camera = &editor.camera;
    let step = grid_step(camera.zoom);

    let top_left = camera.screen_to_canvas(to_point(rect.min));
    let bottom_right = camera.screen_to_canvas(to_point(rect.max));
    let x0 = (top_left.x / step).floor() as i64;
    let x1 = (bottom_right.x / step).ceil() as i64;
    let y0 = (top_left.y / step).floor() as i64;
    let y1 = (bottom_right.y / step).ceil() as i64;

    for gx in x0..=x1 {
        for gy in y0..=y1 {
            let dot = camera.canvas_to_screen(Point::new(gx as f64 * step, gy as f64 * step));
            painter.circle_filled(to_pos2(dot), 1.0, theme::GRID_DOT);
        }
    }
}

/// Grid spacing in canvas units, coarsened so dots stay readable when
/// zoomed out.
fn grid_step(zoom: f64) -> f64 {
    let mut step = GRID_SPACING;
    while step * zoom < MIN_GRID_PIXELS {
        step *= 2.0;
    }
    step
}

fn paint_edges(painter: &Painter, editor: &Editor) {
    let doc = &editor.document;
    for edge in &doc.edges {
        // Dangling references render as missing connections.
        let (Some(source), Some(target)) = (doc.node(&edge.source), doc.node(&edge.target))
        else {
            continue;
        };
        let a = to_pos2(editor.camera.canvas_to_screen(source.source_anchor()));
        let b = to_pos2(editor.camera.canvas_to_screen(target.target_anchor()));
        painter.line_segment([a, b], Stroke::new(1.5, theme::EDGE));
        paint_arrowhead(painter, a, b, theme::EDGE);
    }
}

fn paint_arrowhead(painter: &Painter, from: Pos2, tip: Pos2, color: Color32) {
    let dir = tip - from;
    let len = dir.length();
    if len < f32::EPSILON {
        return;
    }
    let unit = dir / len;
    let normal = egui::vec2(-unit.y, unit.x);
    let base = tip - unit * 9.0;
    painter.add(egui::Shape::convex_polygon(
        vec![tip, base + normal * 4.5, base - normal * 4.5],
        color,
        Stroke::NONE,
    ));
}

/// Dashed line from the source handle to the pointer while connecting.
fn paint_connect_preview(painter: &Painter, editor: &Editor, pointer: Option<Pos2>) {
    let Some(source) = editor.connector.source() else {
        return;
    };
    let Some(node) = editor.document.node(source) else {
        return;
    };
    let Some(pointer) = pointer else {
        return;
    };
    let a = to_pos2(editor.camera.canvas_to_screen(node.source_anchor()));
    painter.extend(egui::Shape::dashed_line(
        &[a, pointer],
        Stroke::new(1.5, theme::ACCENT),
        6.0,
        4.0,
    ));
}

fn paint_nodes(painter: &Painter, editor: &Editor) {
    let camera = &editor.camera;
    let zoom = camera.zoom;

    for node in &editor.document.nodes {
        let bounds = node.bounds();
        let rect = egui::Rect::from_min_max(
            to_pos2(camera.canvas_to_screen(Point::new(bounds.x0, bounds.y0))),
            to_pos2(camera.canvas_to_screen(Point::new(bounds.x1, bounds.y1))),
        );
        let radius = (node.corner_radius() * zoom).round().clamp(0.0, 127.0) as u8;

        painter.rect_filled(
            rect,
            CornerRadius::same(radius),
            color32(node.style.fill_color),
        );

        let stroke = Stroke::new(
            (node.style.stroke_width * zoom).max(1.0) as f32,
            color32(node.style.stroke_color),
        );
        match node.style.border {
            BorderStyle::Solid => {
                painter.rect_stroke(rect, CornerRadius::same(radius), stroke, StrokeKind::Inside);
            }
            BorderStyle::Dotted => paint_dotted_rect(painter, rect, stroke),
        }

        if editor.is_selected(&node.id) {
            painter.rect_stroke(
                rect.expand(3.0),
                CornerRadius::same(radius.saturating_add(2)),
                Stroke::new(1.5, theme::ACCENT),
                StrokeKind::Outside,
            );
        }

        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &node.label,
            FontId::proportional((13.0 * zoom as f32).clamp(8.0, 26.0)),
            theme::TEXT,
        );

        let target = to_pos2(camera.canvas_to_screen(node.target_anchor()));
        painter.circle_filled(target, 3.0, theme::EDGE);

        let source = to_pos2(camera.canvas_to_screen(node.source_anchor()));
        painter.circle_filled(source, HANDLE_RADIUS, Color32::from_rgb(82, 82, 94));
        painter.circle_stroke(source, HANDLE_RADIUS, Stroke::new(1.5, Color32::WHITE));
    }
}

/// Dashed outline approximating a dotted border.
fn paint_dotted_rect(painter: &Painter, rect: egui::Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    for i in 0..4 {
        painter.extend(egui::Shape::dashed_line(
            &[corners[i], corners[(i + 1) % 4]],
            stroke,
            4.0,
            4.0,
        ));
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

fn color32(color: flowpad_core::Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

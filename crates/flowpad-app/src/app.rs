//! Application state and frame orchestration.

use crate::canvas::{self, DragAction};
use crate::ui;
use eframe::CreationContext;
use flowpad_core::{Edge, Editor, GraphDocument, Node, NodeId, NodeStyle};
use kurbo::Point;

/// Seed content shown on launch: two nodes joined by one edge.
pub fn seed_document() -> GraphDocument {
    let mut doc = GraphDocument::new();
    doc.name = "Demo diagram".to_string();
    doc.add_node(Node::new(
        NodeId::from("1"),
        Point::new(250.0, 0.0),
        "Node 1",
        NodeStyle::default(),
    ));
    doc.add_node(Node::new(
        NodeId::from("2"),
        Point::new(100.0, 100.0),
        "Node 2",
        NodeStyle::default(),
    ));
    doc.add_edge(Edge::between(NodeId::from("1"), NodeId::from("2")));
    doc
}

/// Top-level application state.
pub struct FlowPadApp {
    editor: Editor,
    /// What the active pointer drag is doing.
    drag: DragAction,
    /// Fit the seeded content once the viewport size is known.
    needs_initial_fit: bool,
}

impl FlowPadApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            editor: Editor::with_document(seed_document()),
            drag: DragAction::Idle,
            needs_initial_fit: true,
        }
    }
}

impl eframe::App for FlowPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_initial_fit {
            let rect = ctx.screen_rect();
            self.editor
                .set_viewport_size(rect.width() as f64, rect.height() as f64);
            self.editor.fit_to_content();
            self.needs_initial_fit = false;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                canvas::show(ui, &mut self.editor, &mut self.drag);
            });

        ui::controls(ctx, &mut self.editor);
        ui::minimap(ctx, &self.editor);
        ui::placement_menu(ctx, &mut self.editor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_document() {
        let mut doc = seed_document();
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.edge_count(), 1);
        assert_eq!(doc.edges[0].id.as_str(), "e1-2");
        // Seeded ids are observed by the generator: the next mint is "3".
        assert_eq!(doc.reserve_node_id().as_str(), "3");
    }
}

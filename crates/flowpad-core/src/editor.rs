//! The editor: the single stateful component the app shell drives.

use crate::camera::Camera;
use crate::connect::{Connector, DropOutcome, DropPolicy, DropTarget};
use crate::graph::GraphDocument;
use crate::id::NodeId;
use crate::menu::PlacementMenu;
use crate::node::NodePreset;
use kurbo::{Point, Size, Vec2};

/// Runtime editor state: document, camera, gesture interpreter, menu and
/// selection, all scoped to one editor instance.
///
/// Every mutation of the graph flows through this type; the app shell
/// repaints from it each frame.
#[derive(Debug, Clone)]
pub struct Editor {
    /// The diagram being edited.
    pub document: GraphDocument,
    /// View transform between screen and canvas coordinates.
    pub camera: Camera,
    /// Connection gesture interpreter.
    pub connector: Connector,
    /// Placement menu, present while a drop awaits a preset choice.
    pub menu: Option<PlacementMenu>,
    /// Currently selected node, if any.
    pub selection: Option<NodeId>,
    /// Viewport size in screen units.
    pub viewport_size: Size,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor over an empty document.
    pub fn new() -> Self {
        Self::with_document(GraphDocument::new())
    }

    /// Create an editor over an existing document.
    pub fn with_document(document: GraphDocument) -> Self {
        Self {
            document,
            camera: Camera::new(),
            connector: Connector::new(),
            menu: None,
            selection: None,
            viewport_size: Size::new(800.0, 600.0),
        }
    }

    /// Set the viewport size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = Size::new(width, height);
    }

    /// The configured behavior for releases over empty canvas.
    pub fn drop_policy(&self) -> DropPolicy {
        self.connector.policy
    }

    /// Reconfigure the behavior for releases over empty canvas.
    pub fn set_drop_policy(&mut self, policy: DropPolicy) {
        self.connector.policy = policy;
    }

    /// Begin a connection drag from a node's handle.
    pub fn begin_connection(&mut self, source: NodeId) {
        log::debug!("connection started from node {source}");
        self.connector.begin(source);
    }

    /// Abandon the connection drag in progress.
    pub fn cancel_connection(&mut self) {
        self.connector.cancel();
    }

    /// Release a connection drag at a screen point.
    ///
    /// Translates to canvas space, resolves the drop target (topmost node
    /// vs empty canvas) and applies the outcome. A release with no drag in
    /// progress is a no-op.
    pub fn end_connection(&mut self, screen_pos: Point) {
        let canvas_pos = self.camera.screen_to_canvas(screen_pos);
        let target = match self.document.node_at_point(canvas_pos) {
            Some(node) => DropTarget::Node(node.id.clone()),
            None => DropTarget::Canvas,
        };

        match self
            .connector
            .end(target, canvas_pos, screen_pos, &mut self.document)
        {
            DropOutcome::Ignored => {}
            DropOutcome::Connected(edge) => {
                log::debug!("edge {} connected", edge.id);
                self.document.add_edge(edge);
            }
            DropOutcome::Created { node, edge } => {
                log::debug!("node {} created at {:?}", node.id, node.position);
                self.document.add_node(node);
                self.document.add_edge(edge);
            }
            DropOutcome::MenuRequested(menu) => {
                self.menu = Some(menu);
            }
        }
    }

    /// Commit the open placement menu with the chosen preset.
    ///
    /// Appends exactly one node and one edge. No-op when no menu is open.
    pub fn choose_preset(&mut self, preset: NodePreset) {
        let Some(menu) = self.menu.take() else {
            log::debug!("preset chosen with no menu open");
            return;
        };
        let (node, edge) = menu.commit(preset);
        log::debug!("node {} placed via menu", node.id);
        self.document.add_node(node);
        self.document.add_edge(edge);
    }

    /// Close the placement menu without touching the graph.
    pub fn cancel_menu(&mut self) {
        self.menu = None;
    }

    /// Select a node (single selection; replaces any previous one).
    pub fn select(&mut self, id: NodeId) {
        self.selection = Some(id);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Check if a node is selected.
    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selection.as_ref() == Some(id)
    }

    /// Move a node by a canvas-space delta.
    pub fn translate_node(&mut self, id: &NodeId, delta: Vec2) {
        if let Some(node) = self.document.node_mut(id) {
            node.translate(delta);
        }
    }

    /// Fit the view to show all nodes.
    pub fn fit_to_content(&mut self) {
        if let Some(bounds) = self.document.bounds() {
            self.camera.fit_to_bounds(bounds, self.viewport_size, 50.0);
        }
    }
}

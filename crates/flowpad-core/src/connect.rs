//! Connection gesture interpretation.

use crate::graph::GraphDocument;
use crate::id::NodeId;
use crate::menu::{PendingEdge, PlacementMenu};
use crate::node::{Edge, Node, NodePreset};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What happens when a connection drag is released over empty canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DropPolicy {
    /// Open the placement menu and let the user pick a preset.
    #[default]
    MenuGated,
    /// Create a default node and its edge immediately.
    Immediate,
}

/// Where a connection drag was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Released over an existing node.
    Node(NodeId),
    /// Released over empty canvas.
    Canvas,
}

/// Result of releasing a connection drag.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// No drag was in progress; nothing to do.
    Ignored,
    /// Released over an existing node: the edge connects directly.
    Connected(Edge),
    /// Released over empty canvas with the immediate policy.
    Created { node: Node, edge: Edge },
    /// Released over empty canvas with the menu-gated policy.
    MenuRequested(PlacementMenu),
}

/// State of an in-progress connection drag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectState {
    #[default]
    Idle,
    /// Dragging out of a node's connection handle.
    Connecting { source: NodeId },
}

/// Interprets connection-handle drags.
///
/// Two states: Idle and Connecting. A release resolves against the drop
/// target and the configured [`DropPolicy`]; a release with no recorded
/// source is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Connector {
    state: ConnectState,
    /// Behavior for releases over empty canvas.
    pub policy: DropPolicy,
}

impl Connector {
    /// Create a connector with the default (menu-gated) policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connector with an explicit drop policy.
    pub fn with_policy(policy: DropPolicy) -> Self {
        Self {
            state: ConnectState::Idle,
            policy,
        }
    }

    /// Begin a connection drag from a node's handle.
    pub fn begin(&mut self, source: NodeId) {
        self.state = ConnectState::Connecting { source };
    }

    /// The originating node of the drag in progress, if any.
    pub fn source(&self) -> Option<&NodeId> {
        match &self.state {
            ConnectState::Connecting { source } => Some(source),
            ConnectState::Idle => None,
        }
    }

    /// Check if a connection drag is in progress.
    pub fn is_connecting(&self) -> bool {
        matches!(self.state, ConnectState::Connecting { .. })
    }

    /// Abandon the drag in progress without effect.
    pub fn cancel(&mut self) {
        self.state = ConnectState::Idle;
    }

    /// Release the drag at a point given in both coordinate spaces.
    ///
    /// The document supplies reserved identifiers; nothing is appended here.
    /// The caller applies the returned outcome.
    pub fn end(
        &mut self,
        target: DropTarget,
        canvas_pos: Point,
        screen_pos: Point,
        document: &mut GraphDocument,
    ) -> DropOutcome {
        let ConnectState::Connecting { source } = std::mem::take(&mut self.state) else {
            return DropOutcome::Ignored;
        };

        match target {
            DropTarget::Node(target) => DropOutcome::Connected(Edge::between(source, target)),
            DropTarget::Canvas => match self.policy {
                DropPolicy::MenuGated => {
                    let reserved = document.reserve_node_id();
                    log::debug!("reserved node id {reserved} for pending edge from {source}");
                    DropOutcome::MenuRequested(PlacementMenu::new(
                        screen_pos,
                        canvas_pos,
                        PendingEdge {
                            source,
                            target: reserved,
                        },
                    ))
                }
                DropPolicy::Immediate => {
                    let id = document.reserve_node_id();
                    let node = Node::at_anchor(
                        id.clone(),
                        canvas_pos,
                        format!("Node {id}"),
                        NodePreset::Plain.style(),
                    );
                    let edge = Edge::between(source, id);
                    DropOutcome::Created { node, edge }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeStyle;

    fn doc_with_nodes() -> GraphDocument {
        let mut doc = GraphDocument::new();
        doc.add_node(Node::new(
            NodeId::from("1"),
            Point::new(0.0, 0.0),
            "Node 1",
            NodeStyle::default(),
        ));
        doc.add_node(Node::new(
            NodeId::from("2"),
            Point::new(200.0, 0.0),
            "Node 2",
            NodeStyle::default(),
        ));
        doc
    }

    #[test]
    fn test_release_without_begin_is_ignored() {
        let mut doc = doc_with_nodes();
        let mut connector = Connector::new();
        let outcome = connector.end(
            DropTarget::Canvas,
            Point::new(300.0, 200.0),
            Point::new(300.0, 200.0),
            &mut doc,
        );
        assert_eq!(outcome, DropOutcome::Ignored);
    }

    #[test]
    fn test_release_over_node_connects_directly() {
        let mut doc = doc_with_nodes();
        let mut connector = Connector::new();
        connector.begin(NodeId::from("1"));
        let outcome = connector.end(
            DropTarget::Node(NodeId::from("2")),
            Point::new(210.0, 10.0),
            Point::new(210.0, 10.0),
            &mut doc,
        );
        let DropOutcome::Connected(edge) = outcome else {
            panic!("expected direct connection");
        };
        assert_eq!(edge.source, NodeId::from("1"));
        assert_eq!(edge.target, NodeId::from("2"));
        assert!(!connector.is_connecting());
    }

    #[test]
    fn test_menu_gated_release_reserves_target_id() {
        let mut doc = doc_with_nodes();
        let mut connector = Connector::new();
        connector.begin(NodeId::from("1"));
        let outcome = connector.end(
            DropTarget::Canvas,
            Point::new(300.0, 200.0),
            Point::new(310.0, 205.0),
            &mut doc,
        );
        let DropOutcome::MenuRequested(menu) = outcome else {
            panic!("expected a placement menu");
        };
        assert_eq!(menu.pending().source, NodeId::from("1"));
        // Seeded nodes 1 and 2 exist, so the reserved id is 3.
        assert_eq!(menu.pending().target, NodeId::from("3"));
        assert!((menu.canvas_pos.x - 300.0).abs() < f64::EPSILON);
        assert!((menu.screen_pos.x - 310.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_immediate_release_creates_node_and_edge() {
        let mut doc = doc_with_nodes();
        let mut connector = Connector::with_policy(DropPolicy::Immediate);
        connector.begin(NodeId::from("2"));
        let outcome = connector.end(
            DropTarget::Canvas,
            Point::new(400.0, 300.0),
            Point::new(400.0, 300.0),
            &mut doc,
        );
        let DropOutcome::Created { node, edge } = outcome else {
            panic!("expected immediate creation");
        };
        assert_eq!(node.id, NodeId::from("3"));
        assert_eq!(node.label, "Node 3");
        assert_eq!(edge.source, NodeId::from("2"));
        assert_eq!(edge.target, node.id);
    }

    #[test]
    fn test_cancel_clears_the_drag() {
        let mut doc = doc_with_nodes();
        let mut connector = Connector::new();
        connector.begin(NodeId::from("1"));
        assert!(connector.is_connecting());
        connector.cancel();
        assert!(!connector.is_connecting());

        let outcome = connector.end(
            DropTarget::Canvas,
            Point::ZERO,
            Point::ZERO,
            &mut doc,
        );
        assert_eq!(outcome, DropOutcome::Ignored);
    }
}

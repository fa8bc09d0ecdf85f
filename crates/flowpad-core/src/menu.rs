//! Placement menu state: the transient overlay that gates node creation.

use crate::id::NodeId;
use crate::node::{Edge, Node, NodePreset};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An edge awaiting a style choice.
///
/// The target identifier is reserved when the connection drag is released
/// and must be the identifier of the node the commit ultimately creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEdge {
    /// Node the drag started from.
    pub source: NodeId,
    /// Identifier reserved for the node the menu will create.
    pub target: NodeId,
}

/// Transient state of the preset-selection overlay.
///
/// Present on the editor only between a release over empty canvas and the
/// user's choice. Cancel drops the value without touching the graph; the
/// reserved identifier is abandoned and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementMenu {
    /// Where the overlay is drawn, in screen coordinates.
    pub screen_pos: Point,
    /// Where the node will be placed, in canvas coordinates.
    pub canvas_pos: Point,
    pending: PendingEdge,
}

impl PlacementMenu {
    /// Open a menu for a release at the given point in both coordinate spaces.
    pub fn new(screen_pos: Point, canvas_pos: Point, pending: PendingEdge) -> Self {
        Self {
            screen_pos,
            canvas_pos,
            pending,
        }
    }

    /// The edge awaiting confirmation.
    pub fn pending(&self) -> &PendingEdge {
        &self.pending
    }

    /// Commit the chosen preset: exactly one node and one edge.
    ///
    /// The node takes the identifier reserved when the menu opened and is
    /// horizontally centered on the recorded canvas point.
    pub fn commit(self, preset: NodePreset) -> (Node, Edge) {
        let PendingEdge { source, target } = self.pending;
        let node = Node::at_anchor(target.clone(), self.canvas_pos, preset.label(), preset.style());
        let edge = Edge::between(source, target);
        (node, edge)
    }
}

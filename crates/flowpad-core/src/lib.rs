//! FlowPad Core Library
//!
//! Platform-agnostic state and logic for the FlowPad diagram editor.

pub mod camera;
pub mod connect;
pub mod editor;
pub mod graph;
pub mod id;
pub mod menu;
pub mod node;

pub use camera::Camera;
pub use connect::{ConnectState, Connector, DropOutcome, DropPolicy, DropTarget};
pub use editor::Editor;
pub use graph::GraphDocument;
pub use id::{EdgeId, IdGenerator, NodeId};
pub use menu::{PendingEdge, PlacementMenu};
pub use node::{
    BorderStyle, DEFAULT_NODE_SIZE, Edge, Node, NodePreset, NodeShape, NodeStyle, Rgba,
};

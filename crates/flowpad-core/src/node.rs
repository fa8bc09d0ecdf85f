//! Node and edge data model, and the placement menu's style presets.

use crate::id::{EdgeId, NodeId};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

/// Outline style of a node border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dotted,
}

/// Base geometry of a node body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeShape {
    #[default]
    Rectangle,
    Ellipse,
}

/// Default node body size when the style carries no override.
pub const DEFAULT_NODE_SIZE: Size = Size::new(150.0, 42.0);

/// Corner radius of the ellipse variant, as a fraction of its smaller side.
const ELLIPSE_RADIUS_RATIO: f64 = 0.3;

/// Visual style attributes of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Border color.
    pub stroke_color: Rgba,
    /// Border width.
    pub stroke_width: f64,
    /// Body fill color.
    pub fill_color: Rgba,
    /// Border outline style.
    pub border: BorderStyle,
    /// Body geometry.
    pub shape: NodeShape,
    /// Fixed size override; `None` uses [`DEFAULT_NODE_SIZE`].
    pub size: Option<Size>,
    /// Corner radius for rectangular bodies.
    pub corner_radius: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            stroke_width: 1.0,
            fill_color: Rgba::white(),
            border: BorderStyle::Solid,
            shape: NodeShape::Rectangle,
            size: None,
            corner_radius: 5.0,
        }
    }
}

/// Style presets offered by the placement menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodePreset {
    /// Default solid border.
    Plain,
    /// Dashed border variant.
    Dotted,
    /// Rounded, fixed-size variant.
    Ellipse,
}

impl NodePreset {
    /// All presets, in menu order.
    pub const ALL: [NodePreset; 3] = [NodePreset::Plain, NodePreset::Dotted, NodePreset::Ellipse];

    /// Display label for nodes created from this preset.
    pub fn label(self) -> &'static str {
        match self {
            NodePreset::Plain => "Node",
            NodePreset::Dotted => "Node (Dotted Border)",
            NodePreset::Ellipse => "Node (Ellipse)",
        }
    }

    /// Style applied to nodes created from this preset.
    pub fn style(self) -> NodeStyle {
        match self {
            NodePreset::Plain => NodeStyle::default(),
            NodePreset::Dotted => NodeStyle {
                stroke_width: 2.0,
                border: BorderStyle::Dotted,
                ..NodeStyle::default()
            },
            NodePreset::Ellipse => NodeStyle {
                shape: NodeShape::Ellipse,
                size: Some(Size::new(100.0, 100.0)),
                ..NodeStyle::default()
            },
        }
    }
}

/// A placeable diagram vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Top-left corner in canvas space.
    pub position: Point,
    /// Display label.
    pub label: String,
    /// Style attributes.
    pub style: NodeStyle,
}

impl Node {
    /// Create a node at a top-left position.
    pub fn new(id: NodeId, position: Point, label: impl Into<String>, style: NodeStyle) -> Self {
        Self {
            id,
            position,
            label: label.into(),
            style,
        }
    }

    /// Create a node placed so that `anchor` is its top-center point.
    ///
    /// Drop gestures center the new node horizontally on the release point.
    pub fn at_anchor(id: NodeId, anchor: Point, label: impl Into<String>, style: NodeStyle) -> Self {
        let size = style.size.unwrap_or(DEFAULT_NODE_SIZE);
        let position = Point::new(anchor.x - size.width / 2.0, anchor.y);
        Self::new(id, position, label, style)
    }

    /// Body size in canvas units.
    pub fn size(&self) -> Size {
        self.style.size.unwrap_or(DEFAULT_NODE_SIZE)
    }

    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + size.width,
            self.position.y + size.height,
        )
    }

    /// Corner radius of the body, accounting for the shape variant.
    pub fn corner_radius(&self) -> f64 {
        let size = self.size();
        match self.style.shape {
            NodeShape::Rectangle => self.style.corner_radius,
            NodeShape::Ellipse => ELLIPSE_RADIUS_RATIO * size.width.min(size.height),
        }
    }

    /// Top-center point, where incoming edges attach.
    pub fn target_anchor(&self) -> Point {
        let bounds = self.bounds();
        Point::new(bounds.center().x, bounds.y0)
    }

    /// Bottom-center point: the connection handle where outgoing edges start.
    pub fn source_anchor(&self) -> Point {
        let bounds = self.bounds();
        Point::new(bounds.center().x, bounds.y1)
    }

    /// Check if a canvas-space point hits this node's body.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Move the node by a canvas-space delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

/// A directed connection between two node identifiers.
///
/// Endpoints are not validated against the node collection; a dangling
/// reference simply renders as a broken connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    /// Create an edge with an explicit identifier.
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target }
    }

    /// Create an edge with the derived `e{source}-{target}` identifier.
    pub fn between(source: NodeId, target: NodeId) -> Self {
        let id = EdgeId::between(&source, &target);
        Self { id, source, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_at_anchor_centers_horizontally() {
        let node = Node::at_anchor(
            NodeId::from("3"),
            Point::new(300.0, 200.0),
            "Node",
            NodeStyle::default(),
        );
        assert!((node.position.x - (300.0 - DEFAULT_NODE_SIZE.width / 2.0)).abs() < f64::EPSILON);
        assert!((node.position.y - 200.0).abs() < f64::EPSILON);
        let anchor = node.target_anchor();
        assert!((anchor.x - 300.0).abs() < f64::EPSILON);
        assert!((anchor.y - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let node = Node::new(
            NodeId::from("1"),
            Point::new(0.0, 0.0),
            "Node 1",
            NodeStyle::default(),
        );
        assert!(node.hit_test(Point::new(10.0, 10.0)));
        assert!(!node.hit_test(Point::new(-1.0, 10.0)));
        assert!(!node.hit_test(Point::new(10.0, 100.0)));
    }

    #[test]
    fn test_anchors() {
        let node = Node::new(
            NodeId::from("1"),
            Point::new(100.0, 50.0),
            "Node 1",
            NodeStyle::default(),
        );
        let top = node.target_anchor();
        let bottom = node.source_anchor();
        assert!((top.x - bottom.x).abs() < f64::EPSILON);
        assert!((top.y - 50.0).abs() < f64::EPSILON);
        assert!((bottom.y - (50.0 + DEFAULT_NODE_SIZE.height)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_preset_styles() {
        let plain = NodePreset::Plain.style();
        assert_eq!(plain.border, BorderStyle::Solid);
        assert!((plain.stroke_width - 1.0).abs() < f64::EPSILON);

        let dotted = NodePreset::Dotted.style();
        assert_eq!(dotted.border, BorderStyle::Dotted);
        assert!((dotted.stroke_width - 2.0).abs() < f64::EPSILON);

        let ellipse = NodePreset::Ellipse.style();
        assert_eq!(ellipse.shape, NodeShape::Ellipse);
        assert_eq!(ellipse.size, Some(Size::new(100.0, 100.0)));
    }

    #[test]
    fn test_ellipse_corner_radius_tracks_size() {
        let node = Node::new(
            NodeId::from("1"),
            Point::ZERO,
            "Node (Ellipse)",
            NodePreset::Ellipse.style(),
        );
        assert!((node.corner_radius() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edge_between_derives_id() {
        let edge = Edge::between(NodeId::from("1"), NodeId::from("2"));
        assert_eq!(edge.id.as_str(), "e1-2");
        assert_eq!(edge.source, NodeId::from("1"));
        assert_eq!(edge.target, NodeId::from("2"));
    }
}

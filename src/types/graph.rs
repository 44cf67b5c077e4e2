//! Graph payload types consumed by the network widget

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Color used for every edge
pub const EDGE_COLOR: &str = "#97C2FC";

/// Fixed size of nodes rendered as images
pub const IMAGE_NODE_SIZE: f64 = 20.0;

/// How a node is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeShape {
    #[serde(rename = "dot")]
    Dot,
    #[serde(rename = "circularImage")]
    CircularImage,
}

/// Node of the rendered graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Extra scalar fields carried from the source record (counts, urls)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl GraphNode {
    /// Plain dot node with no extra attributes
    pub fn dot(id: impl Into<String>, size: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            shape: NodeShape::Dot,
            size,
            image: None,
            attributes: Map::new(),
        }
    }

    /// Numeric value of an attribute, if present
    pub fn attribute_f64(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(Value::as_f64)
    }
}

/// Edge color block, shaped the way the widget expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeColor {
    pub color: String,
}

impl Default for EdgeColor {
    fn default() -> Self {
        Self {
            color: EDGE_COLOR.to_string(),
        }
    }
}

/// Edge of the rendered graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub color: EdgeColor,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl GraphEdge {
    /// Create an edge, its id derived from the endpoints
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            id: edge_id(&from, &to),
            from,
            to,
            color: EdgeColor::default(),
            attributes: Map::new(),
        }
    }
}

/// Deterministic edge id
pub fn edge_id(from: &str, to: &str) -> String {
    format!("{}__{}", from, to)
}

/// Nodes and edges handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphPayload {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Find a node by id
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

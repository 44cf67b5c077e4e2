//! Scaler - turns edge/node tables into a graph payload plus scaling bounds

use serde_json::Value;
use tracing::warn;

use super::SizeConfig;
use crate::types::{
    value_to_string, Bounds, GraphEdge, GraphNode, GraphPayload, MedialError, MedialResult,
    NodeShape, Row, ScalingBounds, ScalingState, Table, IMAGE_NODE_SIZE,
};

/// Node column holding an image url
pub const NODE_IMAGE_FIELD: &str = "node_image_url";

/// Node fields the scaler writes itself
const GENERATED_NODE_FIELDS: &[&str] = &["label", "shape", "size", "image"];

/// Build the graph payload and the per-column bounds for later resizing
///
/// `edges` must have `from` and `to` columns and `nodes`, when given, an
/// `id` column. Without a node table, nodes are synthesized from the
/// distinct edge endpoints.
pub fn attach_scaling(
    mut edges: Table,
    nodes: Option<Table>,
    sizes: &SizeConfig,
) -> MedialResult<(GraphPayload, ScalingState)> {
    if !edges.has_column("from") || !edges.has_column("to") {
        warn!("Rejecting edge table with columns {:?}", edges.columns);
        return Err(MedialError::schema(
            "Edge table missing either 'from' or 'to' column.",
        ));
    }
    if let Some(ref nodes) = nodes {
        if !nodes.has_column("id") {
            warn!("Rejecting node table with columns {:?}", nodes.columns);
            return Err(MedialError::schema("Node table missing 'id' column."));
        }
    }

    edges.stringify_column("from");
    edges.stringify_column("to");

    let scaling = ScalingState {
        node: nodes.as_ref().map(compute_bounds),
        edge: compute_bounds(&edges),
    };

    let nodes = match nodes {
        Some(mut table) => {
            table.stringify_column("id");
            table.rows.into_iter().map(|row| node_from_row(row, sizes)).collect()
        }
        None => synthesize_nodes(&edges, sizes),
    };

    let edges = edges.rows.into_iter().map(edge_from_row).collect();

    Ok((GraphPayload { nodes, edges }, scaling))
}

/// Min/max of every numeric column
pub fn compute_bounds(table: &Table) -> ScalingBounds {
    table
        .numeric_columns()
        .into_iter()
        .filter_map(|column| {
            Bounds::from_values(table.column_values(column)).map(|b| (column.to_string(), b))
        })
        .collect()
}

fn node_from_row(mut row: Row, sizes: &SizeConfig) -> GraphNode {
    let id = row.remove("id").map(|v| value_to_string(&v)).unwrap_or_default();
    // generated fields replace same-named columns
    for field in GENERATED_NODE_FIELDS {
        row.remove(*field);
    }
    let image = match row.get(NODE_IMAGE_FIELD) {
        Some(Value::String(url)) if !url.is_empty() => Some(url.clone()),
        _ => None,
    };

    let (shape, size) = match image {
        Some(_) => (NodeShape::CircularImage, IMAGE_NODE_SIZE),
        None => (NodeShape::Dot, sizes.default_size),
    };

    GraphNode {
        label: id.clone(),
        id,
        shape,
        size,
        image,
        attributes: row,
    }
}

fn edge_from_row(mut row: Row) -> GraphEdge {
    let from = row.remove("from").map(|v| value_to_string(&v)).unwrap_or_default();
    let to = row.remove("to").map(|v| value_to_string(&v)).unwrap_or_default();
    // generated fields replace same-named columns
    row.remove("id");
    row.remove("color");

    let mut edge = GraphEdge::new(from, to);
    edge.attributes = row;
    edge
}

/// One dot per distinct endpoint, `from` column first, in order of appearance
fn synthesize_nodes(edges: &Table, sizes: &SizeConfig) -> Vec<GraphNode> {
    let mut seen = std::collections::HashSet::new();
    ["from", "to"]
        .iter()
        .flat_map(|column| edges.rows.iter().filter_map(move |row| row.get(*column)))
        .map(value_to_string)
        .filter(|id| seen.insert(id.clone()))
        .map(|id| GraphNode::dot(id, sizes.default_size))
        .collect()
}

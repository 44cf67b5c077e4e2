//! Size-by-attribute remapping

use tracing::debug;

use crate::types::{Bounds, GraphPayload, ScalingState, SizeMethod};

/// Smallest node size when sizing by an attribute
pub const MIN_NODE_SIZE: f64 = 10.0;
/// Largest node size when sizing by an attribute
pub const MAX_NODE_SIZE: f64 = 50.0;
/// Node size when no sizing method is selected
pub const DEFAULT_NODE_SIZE: f64 = 15.0;

/// Display size range for nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConfig {
    pub min_size: f64,
    pub max_size: f64,
    pub default_size: f64,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_NODE_SIZE,
            max_size: MAX_NODE_SIZE,
            default_size: DEFAULT_NODE_SIZE,
        }
    }
}

impl SizeConfig {
    /// Linearly map `value` from `bounds` onto `[min_size, max_size]`
    ///
    /// A zero-width range maps everything to `min_size`.
    pub fn remap(&self, value: f64, bounds: Bounds) -> f64 {
        if bounds.is_degenerate() {
            return self.min_size;
        }
        (value - bounds.min) / (bounds.max - bounds.min) * (self.max_size - self.min_size) + self.min_size
    }
}

/// Resize every node by the selected attribute, or reset to the default size
///
/// Nodes without a numeric value for the attribute get `min_size`. When the
/// payload has no node bounds (built from a bare edge list) sizes fall back
/// to the default.
pub fn rescale_node_sizes(
    mut payload: GraphPayload,
    scaling: &ScalingState,
    method: Option<SizeMethod>,
    sizes: &SizeConfig,
) -> GraphPayload {
    let attribute = method.map(SizeMethod::attribute);
    let bounds = attribute.and_then(|a| scaling.node_bounds(a));

    match (attribute, bounds) {
        (Some(attribute), Some(bounds)) => {
            debug!(
                "Sizing {} nodes by '{}' over [{}, {}]",
                payload.nodes.len(),
                attribute,
                bounds.min,
                bounds.max
            );
            for node in &mut payload.nodes {
                node.size = match node.attribute_f64(attribute) {
                    Some(value) => sizes.remap(value, bounds),
                    None => sizes.min_size,
                };
            }
        }
        _ => {
            for node in &mut payload.nodes {
                node.size = sizes.default_size;
            }
        }
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GraphNode, ScalingBounds};
    use serde_json::json;

    fn node(id: &str, stories: f64) -> GraphNode {
        let mut node = GraphNode::dot(id, 1.0);
        node.attributes.insert("stories".to_string(), json!(stories));
        node
    }

    fn scaling(min: f64, max: f64) -> ScalingState {
        let mut bounds = ScalingBounds::new();
        bounds.insert("stories".to_string(), Bounds { min, max });
        ScalingState {
            node: Some(bounds),
            edge: ScalingBounds::new(),
        }
    }

    #[test]
    fn test_remap_midpoint() {
        let sizes = SizeConfig {
            min_size: 10.0,
            max_size: 50.0,
            default_size: 15.0,
        };
        let bounds = Bounds { min: 0.0, max: 10.0 };
        assert_eq!(sizes.remap(5.0, bounds), 30.0);
        assert_eq!(sizes.remap(0.0, bounds), 10.0);
        assert_eq!(sizes.remap(10.0, bounds), 50.0);
    }

    #[test]
    fn test_remap_zero_width_range() {
        let sizes = SizeConfig::default();
        assert_eq!(sizes.remap(3.0, Bounds { min: 3.0, max: 3.0 }), sizes.min_size);
    }

    #[test]
    fn test_rescale_by_stories() {
        let sizes = SizeConfig::default();
        let payload = GraphPayload {
            nodes: vec![node("a", 0.0), node("b", 5.0), node("c", 10.0)],
            edges: vec![],
        };

        let payload = rescale_node_sizes(payload, &scaling(0.0, 10.0), Some(SizeMethod::Stories), &sizes);
        let sizes_out: Vec<f64> = payload.nodes.iter().map(|n| n.size).collect();

        assert_eq!(sizes_out, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_rescale_without_method_resets_to_default() {
        let sizes = SizeConfig::default();
        let payload = GraphPayload {
            nodes: vec![node("a", 0.0), node("b", 10.0)],
            edges: vec![],
        };

        let payload = rescale_node_sizes(payload, &scaling(0.0, 10.0), None, &sizes);
        assert!(payload.nodes.iter().all(|n| n.size == sizes.default_size));
    }

    #[test]
    fn test_rescale_single_node_graph() {
        let sizes = SizeConfig::default();
        let payload = GraphPayload {
            nodes: vec![node("solo", 2.0)],
            edges: vec![],
        };

        let payload = rescale_node_sizes(payload, &scaling(2.0, 2.0), Some(SizeMethod::Stories), &sizes);
        assert_eq!(payload.nodes[0].size, sizes.min_size);
        assert!(payload.nodes[0].size.is_finite());
    }

    #[test]
    fn test_rescale_missing_attribute_or_bounds() {
        let sizes = SizeConfig::default();
        let payload = GraphPayload {
            nodes: vec![GraphNode::dot("bare", 1.0), node("b", 10.0)],
            edges: vec![],
        };

        let resized = rescale_node_sizes(payload.clone(), &scaling(0.0, 10.0), Some(SizeMethod::Stories), &sizes);
        assert_eq!(resized.nodes[0].size, sizes.min_size);
        assert_eq!(resized.nodes[1].size, sizes.max_size);

        let resized = rescale_node_sizes(payload, &ScalingState::default(), Some(SizeMethod::Writers), &sizes);
        assert!(resized.nodes.iter().all(|n| n.size == sizes.default_size));
    }
}

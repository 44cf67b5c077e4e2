//! Scaling bounds and node sizing methods

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Observed range of one numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Range of a set of values, `None` when there are none
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, value| match acc {
            None => Some(Bounds { min: value, max: value }),
            Some(b) => Some(Bounds {
                min: b.min.min(value),
                max: b.max.max(value),
            }),
        })
    }

    /// Whether every observed value was the same
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

/// Column name -> observed range
pub type ScalingBounds = BTreeMap<String, Bounds>;

/// Scaling bounds for one query, nodes and edges kept apart
///
/// `node` is `None` when the graph was built from a bare edge list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScalingState {
    pub node: Option<ScalingBounds>,
    pub edge: ScalingBounds,
}

impl ScalingState {
    /// Node bounds for one attribute
    pub fn node_bounds(&self, attribute: &str) -> Option<Bounds> {
        self.node.as_ref().and_then(|b| b.get(attribute).copied())
    }
}

/// Ways the presenter can size topic nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeMethod {
    #[serde(rename = "Number of stories")]
    Stories,
    #[serde(rename = "Number of writers")]
    Writers,
}

impl SizeMethod {
    pub const ALL: [SizeMethod; 2] = [SizeMethod::Stories, SizeMethod::Writers];

    /// Label shown in the sizing dropdown
    pub fn label(self) -> &'static str {
        match self {
            SizeMethod::Stories => "Number of stories",
            SizeMethod::Writers => "Number of writers",
        }
    }

    /// Node attribute the method sizes by
    pub fn attribute(self) -> &'static str {
        match self {
            SizeMethod::Stories => crate::types::STORIES_FIELD,
            SizeMethod::Writers => crate::types::WRITERS_FIELD,
        }
    }

    /// Look a method up by its dropdown label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for SizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeMethod {
    type Err = String;

    /// Accepts the dropdown label or the bare attribute key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_label(s)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|m| m.attribute().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| format!("Unknown size method '{}'", s))
    }
}

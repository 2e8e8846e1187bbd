use super::Dataset;
use crate::error::TreeDataError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Keystone,
    Notable,
    Small,
}

/// Grouping of the positions document. Ascendancy nodes still carry one of
/// the three [`NodeKind`]s, the group only says where the record was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeGroup {
    Keystones,
    Notables,
    Ascendancies,
    Smalls,
}

impl NodeGroup {
    /// Processing order. Later groups win on duplicate ids.
    pub const ALL: &'static [NodeGroup] = &[
        NodeGroup::Keystones,
        NodeGroup::Notables,
        NodeGroup::Ascendancies,
        NodeGroup::Smalls,
    ];
}

impl Display for NodeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeGroup::Keystones => "keystones".fmt(f),
            NodeGroup::Notables => "notables".fmt(f),
            NodeGroup::Ascendancies => "ascendancies".fmt(f),
            NodeGroup::Smalls => "smalls".fmt(f),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PositionRecord {
    pub id: String,
    pub kind: NodeKind,
    pub class: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PositionsDataset {
    pub keystones: Vec<PositionRecord>,
    pub notables: Vec<PositionRecord>,
    pub ascendancies: Vec<PositionRecord>,
    pub smalls: Vec<PositionRecord>,
}

impl PositionsDataset {
    pub fn from_json(json: &str) -> Result<Self, TreeDataError> {
        serde_json::from_str(json).map_err(TreeDataError::malformed(Dataset::Positions))
    }

    pub fn group(&self, group: NodeGroup) -> &[PositionRecord] {
        match group {
            NodeGroup::Keystones => &self.keystones,
            NodeGroup::Notables => &self.notables,
            NodeGroup::Ascendancies => &self.ascendancies,
            NodeGroup::Smalls => &self.smalls,
        }
    }

    /// All records in processing order, each tagged with its group.
    pub fn flatten(&self) -> impl Iterator<Item = (NodeGroup, &PositionRecord)> {
        NodeGroup::ALL
            .iter()
            .flat_map(move |&group| self.group(group).iter().map(move |record| (group, record)))
    }

    pub fn len(&self) -> usize {
        NodeGroup::ALL
            .iter()
            .map(|&group| self.group(group).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

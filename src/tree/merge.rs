use super::{NodeMap, NodePosition, TreeData, TreeNode};
use crate::{
    data::{Datasets, DescriptionsDataset, PositionsDataset},
    error::TreeDataError,
};
use log::*;

/// Joins node positions with their descriptions by id.
#[derive(Clone, Copy, Debug)]
pub struct NodeMerger<'a> {
    positions: &'a PositionsDataset,
    descriptions: &'a DescriptionsDataset,
}

impl<'a> NodeMerger<'a> {
    pub fn new(positions: &'a PositionsDataset, descriptions: &'a DescriptionsDataset) -> Self {
        Self {
            positions,
            descriptions,
        }
    }

    /// Builds a fresh [`TreeData`]. Fails on the first position without a
    /// description; a later group overwrites an earlier node with the same id.
    pub fn merge(&self) -> Result<TreeData, TreeDataError> {
        let mut nodes = NodeMap::with_capacity(self.positions.len());
        for (group, record) in self.positions.flatten() {
            let desc = self.descriptions.get(&record.id).ok_or_else(|| {
                TreeDataError::MissingDescription {
                    id: record.id.clone(),
                    group,
                }
            })?;
            let node = TreeNode {
                id: record.id.clone(),
                kind: record.kind,
                position: NodePosition {
                    x: record.x,
                    y: record.y,
                },
                name: desc.name.clone(),
                class: record.class.clone(),
                description: desc.stats.clone(),
            };
            if nodes.insert(record.id.clone(), node).is_some() {
                debug!("Node {} redefined in {}, keeping the later one", record.id, group);
            }
        }
        info!("Merged {} tree nodes", nodes.len());
        Ok(TreeData { nodes })
    }
}

impl<'a> From<Datasets<'a>> for NodeMerger<'a> {
    fn from(data: Datasets<'a>) -> Self {
        Self::new(data.positions, data.descriptions)
    }
}

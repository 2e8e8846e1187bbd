use super::Dataset;
use crate::error::TreeDataError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DescriptionRecord {
    pub name: String,
    pub stats: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DescriptionsDataset(HashMap<String, DescriptionRecord>);

impl DescriptionsDataset {
    pub fn from_json(json: &str) -> Result<Self, TreeDataError> {
        serde_json::from_str(json).map_err(TreeDataError::malformed(Dataset::Descriptions))
    }

    pub fn get(&self, id: &str) -> Option<&DescriptionRecord> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, DescriptionRecord>> for DescriptionsDataset {
    fn from(map: HashMap<String, DescriptionRecord>) -> Self {
        Self(map)
    }
}

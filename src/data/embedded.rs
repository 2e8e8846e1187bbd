use super::{Dataset, DescriptionsDataset, PositionsDataset};
use crate::error::TreeDataError;
use lazy_static::lazy_static;
use log::*;

const POSITIONS_JSON: &str = include_str!("../../data/nodes.json");
const DESCRIPTIONS_JSON: &str = include_str!("../../data/nodes_desc.json");

// serde_json::Error isn't Clone, so each access rebuilds the error from the cached one.
lazy_static! {
    static ref POSITIONS: Result<PositionsDataset, serde_json::Error> = {
        debug!("Parsing embedded positions dataset");
        serde_json::from_str(POSITIONS_JSON)
    };
    static ref DESCRIPTIONS: Result<DescriptionsDataset, serde_json::Error> = {
        debug!("Parsing embedded descriptions dataset");
        serde_json::from_str(DESCRIPTIONS_JSON)
    };
}

fn cached<T>(
    parsed: &'static Result<T, serde_json::Error>,
    dataset: Dataset,
) -> Result<&'static T, TreeDataError> {
    parsed
        .as_ref()
        .map_err(|err| TreeDataError::from_json(dataset, err))
}

/// Both input datasets, borrowed.
#[derive(Clone, Copy, Debug)]
pub struct Datasets<'a> {
    pub positions: &'a PositionsDataset,
    pub descriptions: &'a DescriptionsDataset,
}

impl Datasets<'static> {
    /// The datasets bundled with the crate, parsed once per process.
    pub fn embedded() -> Result<Self, TreeDataError> {
        Ok(Self {
            positions: cached(&POSITIONS, Dataset::Positions)?,
            descriptions: cached(&DESCRIPTIONS, Dataset::Descriptions)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_datasets_parse() {
        let data = Datasets::embedded().unwrap();
        assert!(!data.positions.is_empty());
        assert!(!data.descriptions.is_empty());
    }

    #[test]
    fn embedded_positions_are_described() {
        let data = Datasets::embedded().unwrap();
        for (group, record) in data.positions.flatten() {
            assert!(
                data.descriptions.get(&record.id).is_some(),
                "{} node {} has no description",
                group,
                record.id
            );
        }
    }

    #[test]
    fn embedded_is_parsed_once() {
        let first = Datasets::embedded().unwrap();
        let second = Datasets::embedded().unwrap();
        assert!(std::ptr::eq(first.positions, second.positions));
        assert!(std::ptr::eq(first.descriptions, second.descriptions));
    }
}

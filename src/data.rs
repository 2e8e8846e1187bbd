use std::fmt::Display;

mod descriptions;
mod embedded;
mod positions;

pub use descriptions::{DescriptionRecord, DescriptionsDataset};
pub use embedded::Datasets;
pub use positions::{NodeGroup, NodeKind, PositionRecord, PositionsDataset};

/// Which of the two source documents a value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Positions,
    Descriptions,
}

impl Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dataset::Positions => "positions".fmt(f),
            Dataset::Descriptions => "descriptions".fmt(f),
        }
    }
}

use crate::data::NodeKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod merge;
pub use merge::NodeMerger;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TreeNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: NodePosition,
    pub name: String,
    pub class: String,
    pub description: Vec<String>,
}

pub type NodeMap = HashMap<String, TreeNode>;

/// Every node of the tree, keyed by id.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TreeData {
    pub nodes: NodeMap,
}

impl TreeData {
    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.values()
    }

    pub fn of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &TreeNode> {
        self.iter().filter(move |node| node.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: &str, kind: NodeKind) -> TreeNode {
        TreeNode {
            id: id.into(),
            kind,
            position: NodePosition { x: 10.0, y: 20.0 },
            name: "Arcane Will".into(),
            class: "Witch".into(),
            description: vec!["+10% Spell Damage".into()],
        }
    }

    #[test]
    fn serializes_with_frontend_field_names() {
        let mut data = TreeData::default();
        data.nodes.insert("K1".into(), node("K1", NodeKind::Keystone));
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": {
                    "K1": {
                        "id": "K1",
                        "type": "keystone",
                        "class": "Witch",
                        "position": {"x": 10.0, "y": 20.0},
                        "name": "Arcane Will",
                        "description": ["+10% Spell Damage"]
                    }
                }
            })
        );
    }

    #[test]
    fn integer_coordinates_are_written_as_floats() {
        let positions = crate::data::PositionsDataset::from_json(
            r#"{"keystones": [{"id": "K1", "kind": "keystone", "class": "Witch", "x": 10, "y": -20}],
                "notables": [], "ascendancies": [], "smalls": []}"#,
        )
        .unwrap();
        let descriptions = crate::data::DescriptionsDataset::from_json(
            r#"{"K1": {"name": "Arcane Will", "stats": []}}"#,
        )
        .unwrap();
        let data = NodeMerger::new(&positions, &descriptions).merge().unwrap();
        let text = serde_json::to_string(&data).unwrap();
        assert!(text.contains(r#""position":{"x":10.0,"y":-20.0}"#), "{}", text);
    }

    #[test]
    fn filter_by_kind() {
        let data = TreeData {
            nodes: vec![
                ("a".to_string(), node("a", NodeKind::Small)),
                ("b".to_string(), node("b", NodeKind::Notable)),
                ("c".to_string(), node("c", NodeKind::Small)),
            ]
            .into_iter()
            .collect(),
        };
        let mut smalls: Vec<_> = data
            .of_kind(NodeKind::Small)
            .map(|node| node.id.as_str())
            .collect();
        smalls.sort_unstable();
        assert_eq!(smalls, vec!["a", "c"]);
        assert_eq!(data.of_kind(NodeKind::Keystone).count(), 0);
        assert_eq!(data.len(), 3);
    }
}

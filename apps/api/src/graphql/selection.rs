//! Selection-set inspection for the conditional join
//!
//! The field as written in the query document is copied into a plain owned
//! tree of field names, which [`does_path_exist`] walks depth first.
//! Fragment spreads and inline fragments are not expanded, so a field
//! selected only through one of them is invisible to the walk.

use async_graphql::parser::types::{Field, Selection};

/// A requested field and the fields requested beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNode {
    /// Field name as declared in the schema (never the alias)
    pub name: String,
    pub children: Vec<SelectionNode>,
}

impl SelectionNode {
    pub fn new(name: impl Into<String>, children: Vec<SelectionNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// A field with no sub-selection
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

impl From<&Field> for SelectionNode {
    fn from(field: &Field) -> Self {
        let children = field
            .selection_set
            .node
            .items
            .iter()
            .filter_map(|selection| match &selection.node {
                Selection::Field(child) => Some(SelectionNode::from(&child.node)),
                Selection::FragmentSpread(_) | Selection::InlineFragment(_) => None,
            })
            .collect();

        Self {
            name: field.name.node.to_string(),
            children,
        }
    }
}

/// Whether `path` can be followed from `nodes` by field name.
///
/// The first segment must match one of `nodes`, each later segment a child
/// of the node matched before it. An empty path never matches.
pub fn does_path_exist(nodes: &[SelectionNode], path: &[&str]) -> bool {
    let Some((head, rest)) = path.split_first() else {
        return false;
    };

    nodes
        .iter()
        .filter(|node| node.name == *head)
        .any(|node| rest.is_empty() || does_path_exist(&node.children, rest))
}

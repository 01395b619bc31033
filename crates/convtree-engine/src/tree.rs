use crate::error::{BuildError, Warning};
use convtree_types::{Node, NodeMapping};
use std::collections::HashMap;

/// Immutable node index plus the identified root. Built once per
/// invocation, read-only afterwards, discarded after rendering.
#[derive(Debug)]
pub struct ConversationTree {
    nodes: HashMap<String, Node>,
    order: Vec<String>,
    root_id: String,
    warnings: Vec<Warning>,
}

impl ConversationTree {
    /// Index every record and locate the root with a linear scan in source
    /// order. One node per record, O(n); malformed sub-fields have already
    /// degraded to absent/empty during deserialization.
    ///
    /// A node with no parent is a root candidate. A node whose parent id is
    /// missing from the mapping is recovered as absent-parent, but only
    /// considered when no truly parentless node exists. Zero candidates is
    /// fatal. So is more than one: the choice between them would be
    /// arbitrary, and well-formed exports never produce it, so it is
    /// rejected as ambiguous input.
    pub fn build(mapping: NodeMapping) -> Result<Self, BuildError> {
        let mut nodes = HashMap::with_capacity(mapping.len());
        let mut order = Vec::with_capacity(mapping.len());

        for (id, record) in mapping.0 {
            let node = Node::from_record(id.clone(), record);
            if nodes.insert(id.clone(), node).is_none() {
                order.push(id);
            }
        }

        let warnings = check_references(&nodes, &order);

        let mut roots: Vec<&String> = order
            .iter()
            .filter(|id| nodes[*id].parent.is_none())
            .collect();
        if roots.is_empty() {
            roots = order
                .iter()
                .filter(|id| {
                    nodes[*id]
                        .parent
                        .as_ref()
                        .is_some_and(|parent| !nodes.contains_key(parent))
                })
                .collect();
        }

        let root_id = match roots.len() {
            0 => return Err(BuildError::NoRootFound),
            1 => roots[0].clone(),
            _ => {
                return Err(BuildError::AmbiguousRoot {
                    roots: roots.into_iter().cloned().collect(),
                });
            }
        };

        Ok(ConversationTree {
            nodes,
            order,
            root_id,
            warnings,
        })
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in source order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Structural anomalies found during construction, in source order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

/// Dangling parent/child references are malformed input, but only
/// warning-grade: the renderers treat them as absent-parent/leaf.
fn check_references(nodes: &HashMap<String, Node>, order: &[String]) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for id in order {
        let node = &nodes[id];

        if let Some(parent) = &node.parent {
            if !nodes.contains_key(parent) {
                warnings.push(Warning::DanglingParent {
                    node: id.clone(),
                    parent: parent.clone(),
                });
            }
        }

        for child in &node.children {
            if !nodes.contains_key(child) {
                warnings.push(Warning::DanglingChild {
                    node: id.clone(),
                    child: child.clone(),
                });
            }
        }
    }

    warnings
}

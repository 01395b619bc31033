use std::fmt;

/// Fatal conditions from tree construction. When these occur no tree exists
/// and nothing is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No node in the mapping lacks a parent.
    NoRootFound,

    /// More than one node lacks a parent. Picking one would be arbitrary,
    /// so the input is rejected as ambiguous. Ids are in source order.
    AmbiguousRoot { roots: Vec<String> },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NoRootFound => write!(f, "no root node found in mapping"),
            BuildError::AmbiguousRoot { roots } => write!(
                f,
                "ambiguous input: multiple parentless nodes ({})",
                roots.join(", ")
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Fatal conditions during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Traversal exceeded the depth ceiling.
    DepthExceeded { limit: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::DepthExceeded { limit } => {
                write!(f, "conversation deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Warning-level structural anomalies. Rendering proceeds; dangling
/// references degrade to absent-parent/leaf. The caller decides whether and
/// where to surface these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `parent` names an id that is not a key in the mapping.
    DanglingParent { node: String, parent: String },

    /// `children` contains an id that is not a key in the mapping.
    DanglingChild { node: String, child: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DanglingParent { node, parent } => {
                write!(f, "node {} references missing parent {}", node, parent)
            }
            Warning::DanglingChild { node, child } => {
                write!(f, "node {} references missing child {}", node, child)
            }
        }
    }
}

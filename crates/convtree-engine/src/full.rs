use crate::MAX_DEPTH;
use crate::error::RenderError;
use crate::tree::ConversationTree;
use crate::util::id_prefix;
use std::collections::HashSet;

/// Exhaustive depth-indented view.
///
/// Strict pre-order walk. Every node is visited and descends one level,
/// whether or not it printed anything; a node with content emits an
/// uppercased role header, its content lines indented two spaces per depth
/// level (plus two for the body), and a blank separator. No truncation.
pub fn render_full(tree: &ConversationTree) -> Result<Vec<String>, RenderError> {
    let mut renderer = FullRenderer {
        tree,
        lines: Vec::new(),
        path: HashSet::new(),
    };
    renderer.walk(tree.root_id(), 0)?;
    Ok(renderer.lines)
}

struct FullRenderer<'a> {
    tree: &'a ConversationTree,
    lines: Vec<String>,
    /// Ids on the current root-to-node path; the cycle guard.
    path: HashSet<&'a str>,
}

impl<'a> FullRenderer<'a> {
    fn walk(&mut self, id: &'a str, depth: usize) -> Result<(), RenderError> {
        if depth > MAX_DEPTH {
            return Err(RenderError::DepthExceeded { limit: MAX_DEPTH });
        }

        let tree = self.tree;
        let Some(node) = tree.get(id) else {
            return Ok(());
        };

        let indent = "  ".repeat(depth);

        if !self.path.insert(&node.id) {
            self.lines
                .push(format!("{indent}[structural cycle at {}]", id_prefix(id)));
            return Ok(());
        }

        let content = node.text();
        if !content.is_empty() {
            self.lines
                .push(format!("{indent}[{}]", node.role().as_str().to_uppercase()));
            for line in content.lines() {
                self.lines.push(format!("{indent}  {line}"));
            }
            self.lines.push(String::new());
        }

        for child in &node.children {
            self.walk(child, depth + 1)?;
        }

        self.path.remove(id);
        Ok(())
    }
}

use crate::MAX_DEPTH;
use crate::error::RenderError;
use crate::tree::ConversationTree;
use crate::util::{id_prefix, preview};
use convtree_types::{Node, Role};
use std::collections::HashSet;

/// Marker appended to the current prefix for every descent.
const BRANCH_MARKER: &str = "- ";

/// Branch-compressed view.
///
/// Linear stretches of conversation read as a chain; a genuine branch point
/// emits each child as its own chain at the same depth. System turns and
/// empty non-user turns are spliced out: the node itself is invisible and
/// its children take its place at the current prefix.
pub fn render_chain(tree: &ConversationTree, show_ids: bool) -> Result<Vec<String>, RenderError> {
    let mut renderer = ChainRenderer {
        tree,
        show_ids,
        lines: Vec::new(),
        path: HashSet::new(),
    };
    renderer.walk(tree.root_id(), "", 0)?;
    Ok(renderer.lines)
}

struct ChainRenderer<'a> {
    tree: &'a ConversationTree,
    show_ids: bool,
    lines: Vec<String>,
    /// Ids on the current root-to-node path; the cycle guard.
    path: HashSet<&'a str>,
}

impl<'a> ChainRenderer<'a> {
    fn walk(&mut self, id: &'a str, prefix: &str, depth: usize) -> Result<(), RenderError> {
        if depth > MAX_DEPTH {
            return Err(RenderError::DepthExceeded { limit: MAX_DEPTH });
        }

        let tree = self.tree;
        // Dangling child references degrade to leaves; they were already
        // reported as build warnings.
        let Some(node) = tree.get(id) else {
            return Ok(());
        };

        if !self.path.insert(&node.id) {
            self.lines
                .push(format!("{prefix}[structural cycle at {}]", id_prefix(id)));
            return Ok(());
        }

        let role = node.role();
        let content = node.text();

        // Splice rule: system turns and contentless non-user turns vanish,
        // children are processed at the same prefix.
        if role == Role::System || (content.is_empty() && role != Role::User) {
            for child in &node.children {
                self.walk(child, prefix, depth + 1)?;
            }
            self.path.remove(id);
            return Ok(());
        }

        let line = self.format_line(prefix, node, &content);
        self.lines.push(line);

        // Every descent extends the prefix by one marker. A single child
        // continues the conceptual chain; multiple children each start a
        // sibling chain at the same depth, in source order.
        let child_prefix = format!("{prefix}{BRANCH_MARKER}");
        for child in &node.children {
            self.walk(child, &child_prefix, depth + 1)?;
        }

        self.path.remove(id);
        Ok(())
    }

    fn format_line(&self, prefix: &str, node: &Node, content: &str) -> String {
        let role = node.role();
        let preview = preview(content);

        if self.show_ids {
            format!("{prefix}{role} [{}]: {preview}", id_prefix(&node.id))
        } else {
            format!("{prefix}{role}: {preview}")
        }
    }
}

//! Reconstruction and rendering engine.
//!
//! Input is the flat id-keyed node mapping of one exported conversation.
//! `ConversationTree::build` turns it into an immutable node index with an
//! identified root; `render_chain` and `render_full` walk that index into
//! printable lines. No I/O happens here: callers hand in an already parsed
//! mapping and print the lines themselves.

pub mod chain;
pub mod error;
pub mod full;
pub mod tree;
mod util;

pub use chain::render_chain;
pub use error::{BuildError, RenderError, Warning};
pub use full::render_full;
pub use tree::ConversationTree;

/// Hard ceiling on traversal depth. The cycle guard already catches loops,
/// so this only trips on absurdly deep (hand-crafted) inputs; it turns a
/// would-be stack overflow into an error.
pub const MAX_DEPTH: usize = 1024;

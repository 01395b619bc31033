pub mod node;
pub mod schema;

pub use node::{Message, Node, Role};
pub use schema::{Fragment, NodeMapping, RawConversation, RawNodeRecord};

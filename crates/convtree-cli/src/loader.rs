use anyhow::{Context, Result};
use convtree_types::RawConversation;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// An export file is either one conversation object or a whole
/// `conversations.json` array. File reading and JSON parsing live here, at
/// the driver layer; the engine only ever sees structured values.
pub enum Export {
    Single(RawConversation),
    Archive(Vec<RawConversation>),
}

pub fn load_export(path: &Path) -> Result<Export> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&data)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    match value {
        Value::Array(items) => {
            let conversations = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_json::from_value(item)
                        .with_context(|| format!("malformed conversation at index {index}"))
                })
                .collect::<Result<Vec<RawConversation>>>()?;
            Ok(Export::Archive(conversations))
        }
        other => {
            let conversation =
                serde_json::from_value(other).context("malformed conversation object")?;
            Ok(Export::Single(conversation))
        }
    }
}

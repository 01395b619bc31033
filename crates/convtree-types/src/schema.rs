use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// One conversation object from a chat export, either a standalone file or
/// one element of a `conversations.json` array.
///
/// Exports are permissive by nature: every field except `mapping` comes and
/// goes across export versions, so everything defaults to absent/empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConversation {
    #[serde(default)]
    pub title: Option<String>,

    /// Unix epoch seconds, fractional in newer exports.
    #[serde(default)]
    pub create_time: Option<f64>,

    #[serde(default)]
    pub mapping: NodeMapping,
}

/// The flat id-keyed node records of one conversation, in source order.
///
/// Exports encode this as a JSON object. The order the exporter wrote the
/// keys in is significant for root selection, so the mapping is kept as an
/// association list instead of a hash map: a front-to-back scan over it is
/// reproducible across runs and implementations.
#[derive(Debug, Clone, Default)]
pub struct NodeMapping(pub Vec<(String, RawNodeRecord)>);

impl NodeMapping {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, RawNodeRecord)> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for NodeMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeMappingVisitor;

        impl<'de> Visitor<'de> for NodeMappingVisitor {
            type Value = NodeMapping;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of node id to node record")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, record)) = map.next_entry::<String, RawNodeRecord>()? {
                    entries.push((id, record));
                }
                Ok(NodeMapping(entries))
            }
        }

        deserializer.deserialize_map(NodeMappingVisitor)
    }
}

/// One raw node record. `parent`, `children` and `message` are all optional
/// in the wild; missing sub-fields degrade to absent/empty rather than
/// failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNodeRecord {
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub children: Vec<String>,

    #[serde(default)]
    pub message: Option<RawMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub author: Option<RawAuthor>,

    #[serde(default)]
    pub content: Option<RawContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContent {
    #[serde(default)]
    pub parts: Vec<Fragment>,
}

/// One entry of `content.parts`: plain text, or a typed non-text fragment
/// such as an `image_asset_pointer` or `execution_output`.
///
/// Non-text fragments are recognized and skipped by text extraction, never
/// an error. New fragment shapes appear without notice, so anything that is
/// not a string falls through to `Asset`/`Opaque` instead of failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    Text(String),
    Asset(AssetFragment),
    Opaque(Value),
}

/// Dict-shaped fragment. Only the type tag is retained.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFragment {
    #[serde(default)]
    pub content_type: Option<String>,
}

impl Fragment {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::Asset(_) | Fragment::Opaque(_) => None,
        }
    }
}

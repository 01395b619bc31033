use convtree_types::NodeMapping;
use serde_json::{Value, json};

/// Builds raw mapping JSON shaped the way chat exports shape it.
///
/// Entries keep the order they were added in; `serde_json` is compiled with
/// `preserve_order`, so the emitted object and the parsed `NodeMapping` see
/// the same order. Assertions that depend on source order stay honest.
#[derive(Debug, Default)]
pub struct MappingFixture {
    entries: Vec<(String, Value)>,
}

impl MappingFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node with a plain-text message.
    pub fn turn(
        self,
        id: &str,
        parent: Option<&str>,
        children: &[&str],
        role: &str,
        text: &str,
    ) -> Self {
        self.node(id, parent, children, Some(role), json!([text]))
    }

    /// Node with no message payload at all.
    pub fn bare(self, id: &str, parent: Option<&str>, children: &[&str]) -> Self {
        self.push(
            id,
            json!({
                "parent": parent,
                "children": children,
            }),
        )
    }

    /// Full-control node: explicit role and raw `parts` array.
    pub fn node(
        self,
        id: &str,
        parent: Option<&str>,
        children: &[&str],
        role: Option<&str>,
        parts: Value,
    ) -> Self {
        let author = match role {
            Some(role) => json!({"role": role}),
            None => Value::Null,
        };
        self.push(
            id,
            json!({
                "parent": parent,
                "children": children,
                "message": {
                    "author": author,
                    "content": {"parts": parts},
                },
            }),
        )
    }

    /// Verbatim record value, for malformed-input cases.
    pub fn raw(mut self, id: &str, record: Value) -> Self {
        self.entries.push((id.to_string(), record));
        self
    }

    fn push(mut self, id: &str, record: Value) -> Self {
        self.entries.push((id.to_string(), record));
        self
    }

    /// The mapping as a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.entries.into_iter().collect())
    }

    /// The mapping as the engine consumes it.
    pub fn into_mapping(self) -> NodeMapping {
        serde_json::from_value(self.into_value()).expect("fixture mapping should deserialize")
    }

    /// A whole conversation object wrapping this mapping.
    pub fn into_conversation(self, title: &str) -> Value {
        json!({
            "title": title,
            "create_time": 1700000000.0,
            "mapping": self.into_value(),
        })
    }
}

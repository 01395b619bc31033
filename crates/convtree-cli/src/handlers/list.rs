use crate::loader::{Export, load_export};
use crate::types::OutputFormat;
use anyhow::Result;
use chrono::DateTime;
use convtree_types::RawConversation;
use serde_json::json;
use std::path::Path;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    let conversations = match load_export(file)? {
        Export::Single(conversation) => vec![conversation],
        Export::Archive(conversations) => conversations,
    };

    match format {
        OutputFormat::Plain => print_plain(&conversations),
        OutputFormat::Json => print_json(&conversations)?,
    }

    Ok(())
}

fn print_plain(conversations: &[RawConversation]) {
    if conversations.is_empty() {
        println!("No conversations in export");
        return;
    }

    for (index, conversation) in conversations.iter().enumerate() {
        let title = conversation.title.as_deref().unwrap_or("(untitled)");
        let created = conversation
            .create_time
            .and_then(format_epoch)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{index:>4}  {created:<10}  {:>5} nodes  {title}",
            conversation.mapping.len()
        );
    }
}

fn print_json(conversations: &[RawConversation]) -> Result<()> {
    let rows: Vec<_> = conversations
        .iter()
        .enumerate()
        .map(|(index, conversation)| {
            json!({
                "index": index,
                "title": conversation.title,
                "create_time": conversation.create_time,
                "nodes": conversation.mapping.len(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// Exports carry creation time as (fractional) epoch seconds.
fn format_epoch(secs: f64) -> Option<String> {
    let date = DateTime::from_timestamp(secs as i64, 0)?;
    Some(date.format("%Y-%m-%d").to_string())
}

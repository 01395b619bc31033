use crate::loader::{Export, load_export};
use anyhow::{Result, bail};
use convtree_engine::{ConversationTree, render_chain, render_full};
use convtree_types::RawConversation;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn handle(file: &Path, index: Option<usize>, full: bool, show_ids: bool) -> Result<()> {
    let conversation = select(load_export(file)?, index)?;
    let title = conversation
        .title
        .clone()
        .unwrap_or_else(|| "(untitled)".to_string());

    let tree = ConversationTree::build(conversation.mapping)?;

    for warning in tree.warnings() {
        let line = format!("Warning: {warning}");
        if std::io::stderr().is_terminal() {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{line}");
        }
    }

    // Render fully before printing anything: fatal conditions must not
    // leave a partial tree on stdout.
    let lines = if full {
        render_full(&tree)?
    } else {
        render_chain(&tree, show_ids)?
    };

    print_header(&title);
    for line in &lines {
        println!("{line}");
    }

    Ok(())
}

fn select(export: Export, index: Option<usize>) -> Result<RawConversation> {
    match export {
        Export::Single(conversation) => {
            if index.is_some() {
                bail!("--index requires an export array, but the file holds a single conversation");
            }
            Ok(conversation)
        }
        Export::Archive(mut conversations) => {
            if conversations.is_empty() {
                bail!("export contains no conversations");
            }
            let index = index.unwrap_or(0);
            if index >= conversations.len() {
                bail!(
                    "index {} out of range (0-{})",
                    index,
                    conversations.len() - 1
                );
            }
            Ok(conversations.swap_remove(index))
        }
    }
}

fn print_header(title: &str) {
    let heading = format!("Conversation: {title}");
    if std::io::stdout().is_terminal() {
        println!("{}", heading.bold());
    } else {
        println!("{heading}");
    }
    println!("{}", "=".repeat(60));
    println!();
}

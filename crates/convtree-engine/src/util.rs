/// How many characters of content the chain view shows per line.
pub(crate) const PREVIEW_CHARS: usize = 80;

/// How many characters of a node id the `--ids` display and cycle markers
/// show.
pub(crate) const ID_PREFIX_CHARS: usize = 8;

/// First `PREVIEW_CHARS` characters with embedded newlines collapsed to
/// spaces; `...` appended when the content is longer than the preview.
pub(crate) fn preview(content: &str) -> String {
    let mut preview: String = content
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    if content.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Leading slice of a node id for compact display. Ids are uuid-shaped
/// ASCII in practice, but never split a multi-byte character.
pub(crate) fn id_prefix(id: &str) -> &str {
    match id.char_indices().nth(ID_PREFIX_CHARS) {
        Some((byte, _)) => &id[..byte],
        None => id,
    }
}

//! Markdown content transformer.
//!
//! Pure text rewriting — no markdown parsing. Three steps, in order:
//!
//! 1. Normalize the two relative-link shapes that point into the upstream
//!    `docs/` directory (mirrored documents live one level shallower).
//! 2. Synthesize a frontmatter block when the document has none, deriving the
//!    title from the first level-1 heading or from the filename.
//! 3. Insert the sync marker and a dated synchronization notice immediately
//!    after the closing frontmatter delimiter.
//!
//! Output is tagged with [`SYNC_MARKER`]; transforming already-tagged text is
//! a no-op, so the composition is safe to re-apply.

use std::path::Path;

use chrono::NaiveDate;

/// Stable marker identifying already-transformed output.
pub const SYNC_MARKER: &str = "<!-- docsteward:synced -->";

/// Rewrite raw markdown for its new location in the docs tree.
///
/// `source` is the file's path relative to the upstream root; it is only used
/// for filename-derived titles. `today` becomes the `Last updated` stamp.
pub fn transform(content: &str, source: &Path, today: NaiveDate) -> String {
    if content.contains(SYNC_MARKER) {
        return content.to_string();
    }

    let mut text = rewrite_links(content);

    if !text.starts_with("---") {
        let title = extract_title(&text, source);
        text = format!("---\ntitle: {title}\n---\n\n{text}");
    }

    insert_notice(&text, today)
}

/// Upstream-relative `docs/` links become sibling links in the mirror.
fn rewrite_links(content: &str) -> String {
    content.replace("](./docs/", "](../").replace("](../docs/", "](../")
}

/// Title from the first level-1 heading, falling back to the filename.
fn extract_title(content: &str, source: &Path) -> String {
    content
        .lines()
        .find_map(|line| line.strip_prefix("# ").map(|rest| rest.trim().to_string()))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| title_from_filename(source))
}

/// `aws-profile-setup.md` → `Aws Profile Setup`.
fn title_from_filename(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert the marker + notice after the closing frontmatter delimiter.
///
/// The delimiter is located textually: first `---` at offset >= 3. A fenced
/// code block containing `---` ahead of the real closing delimiter will
/// misplace the notice — known risk, left as-is. Documents that open a
/// frontmatter block and never close it get the notice appended at the end.
fn insert_notice(text: &str, today: NaiveDate) -> String {
    let notice = format!(
        "{SYNC_MARKER}\n\n:::info\nThis documentation is automatically synchronized from the upstream repository.\nLast updated: {today}\n:::"
    );

    match text.get(3..).and_then(|rest| rest.find("---")) {
        Some(idx) => {
            let end = 3 + idx + 3;
            format!("{}\n\n{}{}", &text[..end], notice, &text[end..])
        }
        None => format!("{text}\n\n{notice}\n"),
    }
}

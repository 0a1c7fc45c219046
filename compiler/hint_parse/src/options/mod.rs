//! Options blocks: `<! key=value, key2="value, with comma" >`.
//!
//! Entries are separated by commas outside double quotes. Each entry is
//! `key=value` with both sides trimmed; a double-quoted value is unquoted.
//! Entries without `=` or with an empty key are skipped, which makes a
//! trailing `,` or a stray `!` harmless.

use hint_ir::Options;
use tracing::trace;

/// Parse the text of an options block into `options`, last write wins.
///
/// `block` is the full token text including `<!` and, when present, `>`.
pub fn parse_options(block: &str, options: &mut Options) {
    let body = block.strip_prefix("<!").unwrap_or(block);
    let body = body.strip_suffix('>').unwrap_or(body);

    for entry in split_entries(body) {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = unquote(value.trim());
        trace!(key, value, "option");
        options.insert(key.to_owned(), value.to_owned());
    }
}

/// Split on commas that are not inside a double-quoted value.
fn split_entries(body: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, b) in body.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                entries.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&body[start..]);
    entries
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

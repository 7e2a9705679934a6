//! Markup normalization applied to raw file content before matching.
//!
//! Content files are typically HTML fragments or templates. To avoid matching
//! inside tag soup, everything except line breaks, code and paragraph tags is
//! stripped before the content is searched. Literal newlines are first turned
//! into `<br />` markers so paragraph structure partially survives stripping.

/// Inline tags that survive normalization.
const ALLOWED_TAGS: &[&str] = &["br", "code", "p"];

/// Normalizes raw file content into searchable text.
pub fn normalize(raw: &str) -> String {
    strip_tags(&nl2br(raw), ALLOWED_TAGS)
}

/// Inserts a `<br />` marker before every line break. `\r\n` counts as one
/// break; the original line terminator is kept.
fn nl2br(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                out.push_str("<br />");
                out.push('\r');
                if chars.peek() == Some(&'\n') {
                    out.push('\n');
                    chars.next();
                }
            }
            '\n' => {
                out.push_str("<br />");
                out.push('\n');
            }
            _ => out.push(c),
        }
    }
    out
}

/// Removes every `<...>` run whose tag name is not in `allowed`. An unclosed
/// `<` swallows the remainder of the text.
fn strip_tags(text: &str, allowed: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('>') {
            Some(close) => {
                let tag = &tail[..=close];
                if is_allowed(tag, allowed) {
                    out.push_str(tag);
                }
                rest = &tail[close + 1..];
            }
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

fn is_allowed(tag: &str, allowed: &[&str]) -> bool {
    let inner = tag.trim_start_matches('<').trim_start_matches('/');
    let name: String = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    !name.is_empty() && allowed.iter().any(|a| a.eq_ignore_ascii_case(&name))
}

//! Pluggable builders for the derived strings of a result record.

use crate::content::FileRef;

/// Builds the title, URL and snippet strings of a result.
///
/// Implement this to control how results render; [`DefaultBuilders`] covers
/// the common flat-file-site layout.
pub trait ResultBuilders: Send + Sync {
    /// Derives a human-readable title from a file reference.
    fn build_title(&self, file: &FileRef) -> String;

    /// Derives the URL a result should link to.
    fn build_url(&self, file: &FileRef) -> String;

    /// Formats one match with its surrounding context for display.
    fn build_snippet(&self, term: &str, before: &str, after: &str) -> String;
}

/// Default builders for the common "content directory mirrors URL space"
/// layout.
///
/// - title: file name without extension, dashes as spaces, words
///   title-cased (`page-name.php` → `Page Name`)
/// - url: the path relative to its root with a leading slash and no
///   extension (`{root}/foo/bar/page-name.php` → `/foo/bar/page-name`)
/// - snippet: `[...] {before}<mark>{term}</mark>{after} [...]`
#[derive(Debug, Default)]
pub struct DefaultBuilders;

impl ResultBuilders for DefaultBuilders {
    fn build_title(&self, file: &FileRef) -> String {
        let name = file.file_name();
        let stem = strip_extension(name, file.extension());
        title_case(&stem.replace('-', " "))
    }

    fn build_url(&self, file: &FileRef) -> String {
        let relative = file
            .path()
            .strip_prefix(file.root())
            .unwrap_or_else(|_| file.path());
        let mut url = String::new();
        for component in relative.components() {
            url.push('/');
            url.push_str(&component.as_os_str().to_string_lossy());
        }
        strip_extension(&url, file.extension()).to_string()
    }

    fn build_snippet(&self, term: &str, before: &str, after: &str) -> String {
        format!("[...] {before}<mark>{term}</mark>{after} [...]")
    }
}

fn strip_extension<'a>(name: &'a str, extension: &str) -> &'a str {
    if extension.is_empty() {
        return name;
    }
    name.strip_suffix(extension)
        .and_then(|n| n.strip_suffix('.'))
        .unwrap_or(name)
}

/// Uppercases the first character of each whitespace-separated word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

use ignore::{DirEntry, WalkBuilder};
use std::path::Path;

/// Recursively walks `path`, yielding every entry the walker can stat.
///
/// Content directories are walked as-is: hidden files are included and no
/// gitignore semantics apply. Unreadable entries are dropped silently.
pub fn walk_dir(path: &Path) -> impl Iterator<Item = DirEntry> {
    WalkBuilder::new(path)
        .standard_filters(false)
        .follow_links(false)
        .build()
        .filter_map(Result::ok)
}

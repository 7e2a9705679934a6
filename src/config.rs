use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Engine configuration, immutable once built.
///
/// Assembled through [`SearchConfigBuilder`], whose setters follow a
/// first-write-wins latch: once an option holds a non-empty value, later
/// writes to it are silently ignored. This keeps repeated setup code from
/// accidentally reconfiguring a shared search pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Directories to search under.
    pub roots: Vec<PathBuf>,

    /// File names (not paths) to skip entirely.
    pub excludes: HashSet<String>,

    /// Words of surrounding text captured on each side of a match.
    pub context_words: usize,

    /// Snippets to build per matching file; 0 means unlimited.
    pub results_per_file: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            excludes: HashSet::new(),
            context_words: 5,
            results_per_file: 0,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

/// Builder with first-write-wins latch semantics.
///
/// An option counts as empty while it holds no value, an empty collection or
/// zero; only empty options accept a write. Setting `context_words` to 0
/// therefore does not latch, and a later non-zero value still applies.
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    roots: Vec<PathBuf>,
    excludes: HashSet<String>,
    context_words: usize,
    results_per_file: usize,
}

impl SearchConfigBuilder {
    /// Sets the search roots, unless roots were already set.
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        if self.roots.is_empty() {
            self.roots = roots.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Sets a single search root, unless roots were already set.
    pub fn root(self, root: impl Into<PathBuf>) -> Self {
        self.roots([root.into()])
    }

    /// Sets the excluded file names, unless excludes were already set.
    pub fn excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.excludes.is_empty() {
            self.excludes = excludes.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Sets the context window size, unless a non-zero size was already set.
    pub fn context_words(mut self, words: usize) -> Self {
        if self.context_words == 0 {
            self.context_words = words;
        }
        self
    }

    /// Sets the per-file snippet cap, unless a non-zero cap was already set.
    pub fn results_per_file(mut self, cap: usize) -> Self {
        if self.results_per_file == 0 {
            self.results_per_file = cap;
        }
        self
    }

    /// Finalizes the configuration, filling unset options with defaults.
    pub fn build(self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            roots: self.roots,
            excludes: self.excludes,
            context_words: if self.context_words == 0 {
                defaults.context_words
            } else {
                self.context_words
            },
            results_per_file: self.results_per_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_root_wins() {
        let config = SearchConfig::builder()
            .root("/content/a")
            .root("/content/b")
            .build();

        assert_eq!(config.roots, vec![PathBuf::from("/content/a")]);
    }

    #[test]
    fn first_excludes_win() {
        let config = SearchConfig::builder()
            .excludes(["header.php", "footer.php"])
            .excludes(["other.php"])
            .build();

        assert!(config.excludes.contains("header.php"));
        assert!(!config.excludes.contains("other.php"));
    }

    #[test]
    fn zero_does_not_latch() {
        let config = SearchConfig::builder()
            .context_words(0)
            .context_words(8)
            .build();

        assert_eq!(config.context_words, 8);
    }

    #[test]
    fn non_zero_latches() {
        let config = SearchConfig::builder()
            .context_words(3)
            .context_words(8)
            .build();

        assert_eq!(config.context_words, 3);
    }

    #[test]
    fn defaults_fill_unset_options() {
        let config = SearchConfig::builder().build();

        assert!(config.roots.is_empty());
        assert!(config.excludes.is_empty());
        assert_eq!(config.context_words, 5);
        assert_eq!(config.results_per_file, 0);
    }
}

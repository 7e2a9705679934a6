use crate::builders::{DefaultBuilders, ResultBuilders};
use crate::config::SearchConfig;
use crate::content::{ContentSource, FileRef, FsContentSource};
use crate::error::Result;
use crate::snippet::ContextExtractor;
use log::debug;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One matching file: its generated URL and title plus the snippets built
/// for each retained occurrence, in occurrence order.
///
/// `snippets` can be empty when the containment test succeeds but window
/// extraction captures nothing; such files still count as hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub url: String,
    pub title: String,
    pub snippets: Vec<String>,
}

/// The search engine: one query bound to a configuration, a content source
/// and a set of result builders.
///
/// ```no_run
/// use sitegrep::{Search, SearchConfig};
///
/// let config = SearchConfig::builder()
///     .root("/var/www/content")
///     .excludes(["header.php", "footer.php"])
///     .build();
/// let results = Search::new("designer", config)?.find();
/// # Ok::<(), sitegrep::SitegrepError>(())
/// ```
pub struct Search {
    query: String,
    config: SearchConfig,
    extractor: ContextExtractor,
    builders: Arc<dyn ResultBuilders>,
    source: Arc<dyn ContentSource>,
}

impl Search {
    /// Creates an engine with the default builders and the filesystem
    /// content source. Compiling the query pattern is the only fallible
    /// step; a missing or empty root surfaces as zero results, not as an
    /// error.
    pub fn new(query: impl Into<String>, config: SearchConfig) -> Result<Self> {
        let query = query.into();
        let extractor = ContextExtractor::new(&query, config.context_words)?;
        Ok(Self {
            query,
            config,
            extractor,
            builders: Arc::new(DefaultBuilders),
            source: Arc::new(FsContentSource),
        })
    }

    /// Replaces the default result builders.
    pub fn with_builders(mut self, builders: impl ResultBuilders + 'static) -> Self {
        self.builders = Arc::new(builders);
        self
    }

    /// Replaces the filesystem content source.
    pub fn with_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the query and returns a fresh list of results in
    /// file-enumeration order.
    ///
    /// Files named in the exclusion set are skipped before their content is
    /// read; unreadable files are skipped silently. Extraction fans out
    /// across files, and the ordered collect keeps results in enumeration
    /// order.
    pub fn find(&self) -> Vec<ResultRecord> {
        if self.query.is_empty() {
            debug!("Empty query, returning no results");
            return Vec::new();
        }

        let files: Vec<FileRef> = self
            .source
            .enumerate(&self.config.roots)
            .filter(|file| {
                if self.config.excludes.contains(file.file_name()) {
                    debug!("Skipping excluded file: {}", file.path().display());
                    return false;
                }
                true
            })
            .collect();

        files
            .par_iter()
            .map(|file| self.search_file(file))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Matches one file, returning its record when the query occurs in the
    /// normalized text.
    fn search_file(&self, file: &FileRef) -> Option<ResultRecord> {
        let text = match file.read_text() {
            Ok(text) => text,
            Err(e) => {
                debug!("Skipping unreadable file {}: {e}", file.path().display());
                return None;
            }
        };

        // cheap containment test before any window extraction
        if !self.extractor.is_match(&text) {
            return None;
        }

        let windows = self.extractor.extract(&text);
        let limit = match self.config.results_per_file {
            0 => windows.len(),
            cap => cap.min(windows.len()),
        };
        let snippets = windows
            .into_iter()
            .take(limit)
            .map(|w| self.builders.build_snippet(&w.term, &w.before, &w.after))
            .collect();

        Some(ResultRecord {
            url: self.builders.build_url(file),
            title: self.builders.build_title(file),
            snippets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Content source over an in-memory file list; only files whose backing
    /// path exists can be read, so entries double as unreadable files.
    struct StaticSource {
        files: Vec<FileRef>,
    }

    impl ContentSource for StaticSource {
        fn enumerate<'a>(
            &'a self,
            _roots: &'a [PathBuf],
        ) -> Box<dyn Iterator<Item = FileRef> + 'a> {
            Box::new(self.files.iter().cloned())
        }
    }

    #[test]
    fn empty_query_finds_nothing() {
        let search = Search::new("", SearchConfig::default()).unwrap();

        assert!(search.find().is_empty());
    }

    #[test]
    fn unreadable_files_are_skipped() {
        let source = StaticSource {
            files: vec![FileRef::new("/content", "/content/missing.txt")],
        };
        let search = Search::new("term", SearchConfig::default())
            .unwrap()
            .with_source(source);

        assert!(search.find().is_empty());
    }
}

//! Embeddable content search for flat-file and static sites.
//!
//! Walks files under one or more content roots, tests each for a
//! case-insensitive substring match and builds one result per matching file:
//! a generated URL, a generated title and context snippets around each
//! occurrence. The URL, title and snippet builders are pluggable via
//! [`ResultBuilders`]; the file enumeration is pluggable via
//! [`ContentSource`].
//!
//! ```no_run
//! use sitegrep::{Search, SearchConfig};
//!
//! let config = SearchConfig::builder()
//!     .root("/var/www/content")
//!     .context_words(5)
//!     .build();
//!
//! for result in Search::new("designer", config)?.find() {
//!     println!("{} -> {}", result.title, result.url);
//! }
//! # Ok::<(), sitegrep::SitegrepError>(())
//! ```

pub mod builders;
pub mod config;
pub mod content;
pub mod error;
mod normalize;
mod search;
pub mod snippet;
pub mod walker;

pub use builders::{DefaultBuilders, ResultBuilders};
pub use config::{SearchConfig, SearchConfigBuilder};
pub use content::{ContentSource, FileRef, FsContentSource};
pub use error::{Result, SitegrepError};
pub use search::{ResultRecord, Search};
pub use snippet::{ContextExtractor, MatchWindow};
pub use walker::walk_dir;

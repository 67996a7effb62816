pub mod error;
pub mod fetch;
pub mod matcher;
pub mod parse;
pub mod path;
pub mod scoring;

pub use error::{Result, SimilisError};
pub use fetch::FetchConfig;
pub use fetch::fetch_file;
#[cfg(feature = "fetch")]
pub use fetch::{fetch_source, fetch_url};
#[cfg(feature = "fetch")]
pub use matcher::fetch_and_match;
pub use matcher::SimilarityMatcher;
pub use parse::{Document, Element};
pub use path::node_path;
pub use scoring::{ScorePolicy, attribute_score, class_score, similarity_score};

pub mod constants;
pub mod error;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod resolve;

// Flat re-exports for the common call sites in the scraper.
pub use error::ToolkitError;
pub use matching::{best_match, is_better_swapped, levenshtein, MatchResult, StringPair};
pub use normalize::{clean, normalize_women, normalize_youth, NormalizedTeam};
pub use resolve::{resolve, resolve_at};

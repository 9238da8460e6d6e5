// String similarity primitives shared by the fixture matchers
pub mod distance;
pub mod fuzzy;
pub mod pairs;

// Re-export the main components
pub use distance::levenshtein;
pub use fuzzy::{best_match, MatchResult};
pub use pairs::{is_better_swapped, StringPair};

/// Fixed token tables used by the date resolver.
/// These constants define the closed alphabets the resolver matches against;
/// nothing outside these tables is treated as a weekday or month token.

// Two-letter weekday abbreviations, Dutch and English, with Sunday = 0.
// The Dutch and English tokens for the same weekday map to the same number.
pub const WEEKDAYS_NL: [&str; 7] = ["zo", "ma", "di", "wo", "do", "vr", "za"];
pub const WEEKDAYS_EN: [&str; 7] = ["su", "mo", "tu", "we", "th", "fr", "sa"];

// Three-letter Dutch month abbreviations, January = 1.
pub const MONTHS_NL: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Look up the weekday number (Sunday = 0) for a two-letter abbreviation.
/// Matching is case-insensitive independent of any caller-side lowercasing.
pub fn weekday_number(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    WEEKDAYS_NL
        .iter()
        .position(|t| *t == token)
        .or_else(|| WEEKDAYS_EN.iter().position(|t| *t == token))
        .map(|i| i as u32)
}

/// Look up the month number (1-12) for a three-letter Dutch abbreviation.
pub fn month_number(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    MONTHS_NL
        .iter()
        .position(|t| *t == token)
        .map(|i| i as u32 + 1)
}

// Heuristic date resolution for scraped fixture phrases
mod rules;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::constants;

/// Resolves a raw date/time phrase against the local wall clock.
///
/// The clock is read exactly once per call, so a resolution started just
/// before midnight stays internally consistent.
pub fn resolve(raw: &str) -> NaiveDate {
    resolve_at(raw, Local::now().naive_local())
}

/// Resolves a raw date/time phrase against an explicit "now".
///
/// The phrase is trimmed and lowercased once, then handed to an ordered rule
/// cascade; the first matching rule wins. Phrases no rule recognizes go
/// through a best-effort split-and-parse fallback, and total failure degrades
/// to today's date. This function never fails and always returns a valid
/// date.
pub fn resolve_at(raw: &str, now: NaiveDateTime) -> NaiveDate {
    let phrase = raw.trim().to_lowercase();

    for rule in rules::all() {
        if let Some(caps) = rule.pattern.captures(&phrase) {
            debug!("date rule '{}' matched '{}'", rule.name, phrase);
            return match (rule.apply)(&caps, now) {
                Some(date) => date,
                None => {
                    warn!(
                        "date rule '{}' could not complete '{}', falling back to today",
                        rule.name, phrase
                    );
                    now.date()
                }
            };
        }
    }

    fallback(&phrase, now)
}

/// Best-effort split-and-parse for phrases the cascade does not recognize.
/// Unusable components keep today's values, so the result is always valid.
fn fallback(phrase: &str, now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    let mut day = today.day();
    let mut month = today.month();

    // "<day> <maand>" with a Dutch three-letter month abbreviation
    let tokens: Vec<&str> = phrase.split(' ').collect();
    if tokens.len() == 2 {
        if let Some(m) = constants::month_number(tokens[1]) {
            month = m;
        }
    }
    if let Ok(d) = tokens[0].parse() {
        day = d;
    }

    // Whole-phrase literals; "niet begonnen" reaches only this check
    match phrase {
        "today" | "vandaag" | "niet begonnen" => return today,
        "morgen" | "tomorrow" => return today.succ_opt().unwrap_or(today),
        _ => {}
    }

    // "30/4" or "30.4": day and month split on a slash or dot
    let parts: Vec<&str> = phrase.split(['/', '.']).collect();
    if parts.len() >= 2 {
        if let Ok(d) = truncate_token(parts[0]).parse() {
            day = d;
        }
        if let Ok(m) = truncate_token(parts[1]).parse() {
            month = m;
        }
    }

    NaiveDate::from_ymd_opt(today.year(), month, day).unwrap_or_else(|| {
        warn!(
            "resolved components out of range (month={}, day={}), falling back to today",
            month, day
        );
        today
    })
}

// Day and month tokens carry at most two digits; trailing commas are noise.
fn truncate_token(token: &str) -> String {
    token.trim().trim_end_matches(',').chars().take(2).collect()
}

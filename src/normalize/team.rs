use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Trailing women's-team markers, possibly stacked ("FC XX Women (W) [W]").
static WOMEN_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\s)(?:(?:women|\(d\)|\(w\)|\[w\])\s*)+$").unwrap());

// Numbered youth class, "U19" / "O21" style suffix.
static YOUTH_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:^|\s)[uo](\d{1,2})\s*$").unwrap());

// Unnumbered youth markers: "Jong PSV" style prefix, "B" / reserves suffix.
static YOUTH_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:jong|jeugd|youth)\s+").unwrap());
static YOUTH_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s(?:b|reserves)\s*$").unwrap());

/// A team label with its youth designation folded into canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTeam {
    pub name: String,
    pub youth_class: Option<u32>,
}

/// Folds trailing women's-team markers (`women`, `(D)`, `(W)`, `[W]`) into
/// the single literal marker `[w]`. Names without a marker are only trimmed
/// and lowercased.
pub fn normalize_women(name: &str) -> String {
    match WOMEN_MARKERS.find(name) {
        Some(m) => {
            let stem = name[..m.start()].trim().to_lowercase();
            format!("{} [w]", stem).trim().to_string()
        }
        None => name.trim().to_lowercase(),
    }
}

/// Folds youth-team markers into canonical form.
///
/// A numbered marker (`U19`, `O21`) is stripped and re-appended as ` u<N>`
/// with the class number returned. Unnumbered markers (`jong`/`jeugd`/`youth`
/// prefix, `B`/`reserves` suffix) are stripped and replaced with ` ii`.
/// Anything else passes through trimmed and lowercased.
pub fn normalize_youth(name: &str) -> NormalizedTeam {
    if let Some(caps) = YOUTH_CLASS.captures(name) {
        // The capture is 1-2 digits, so the parse cannot overflow
        if let Ok(class) = caps[1].parse::<u32>() {
            let marker = caps.get(0).unwrap();
            let stem = name[..marker.start()].trim().to_lowercase();
            return NormalizedTeam {
                name: format!("{} u{}", stem, class).trim().to_string(),
                youth_class: Some(class),
            };
        }
    }

    if let Some(m) = YOUTH_PREFIX.find(name) {
        let stem = name[m.end()..].trim().to_lowercase();
        return NormalizedTeam {
            name: format!("{} ii", stem).trim().to_string(),
            youth_class: None,
        };
    }

    if let Some(m) = YOUTH_SUFFIX.find(name) {
        let stem = name[..m.start()].trim().to_lowercase();
        return NormalizedTeam {
            name: format!("{} ii", stem).trim().to_string(),
            youth_class: None,
        };
    }

    NormalizedTeam {
        name: name.trim().to_lowercase(),
        youth_class: None,
    }
}

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes a scraped string for comparison.
///
/// Lowercases, turns `-`, `/` and `_` into spaces, drops `.`, `,` and `'`,
/// folds accented characters to their base ASCII letter, and collapses and
/// trims whitespace. Idempotent: `clean(clean(s)) == clean(s)`.
///
/// Folding consults a small override table first for characters the generic
/// decomposition pass does not simplify (`ø` carries no combining mark), then
/// NFD-decomposes and drops all remaining combining marks.
pub fn clean(s: &str) -> String {
    let lowered = s.to_lowercase();

    let mut replaced = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match c {
            '-' | '/' | '_' => replaced.push(' '),
            '.' | ',' | '\'' => {}
            'ø' | 'ó' => replaced.push('o'),
            'è' | 'é' => replaced.push('e'),
            'í' => replaced.push('i'),
            'ç' => replaced.push('c'),
            'â' => replaced.push('a'),
            c => replaced.push(c),
        }
    }

    let folded: String = replaced.nfd().filter(|c| !is_combining_mark(*c)).collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

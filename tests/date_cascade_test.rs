use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use fixture_text::resolve_at;

fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
}

#[test]
fn test_absolute_date_beats_weekday_and_fallback() -> Result<()> {
    // "30/04 - 19:00" could also be read by the slash-split fallback;
    // the absolute rule must win and complete the year
    let now = noon(2024, 5, 1);
    assert_eq!(
        resolve_at("30/04 - 19:00", now),
        NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
    );
    Ok(())
}

#[test]
fn test_iso_timestamp_is_independent_of_now() -> Result<()> {
    for now in [noon(2024, 5, 1), noon(2031, 12, 31)] {
        assert_eq!(
            resolve_at("2024-04-30T19:00:00Z", now),
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
        );
    }
    Ok(())
}

#[test]
fn test_all_fourteen_weekday_tokens_resolve_within_a_week() -> Result<()> {
    let now = noon(2024, 5, 1); // a Wednesday
    let tokens = [
        "zo", "ma", "di", "wo", "do", "vr", "za", "su", "mo", "tu", "we", "th", "fr", "sa",
    ];

    for token in tokens {
        let resolved = resolve_at(&format!("{} 19:00", token), now);
        let ahead = (resolved - now.date()).num_days();
        assert!(
            (0..7).contains(&ahead),
            "token '{}' resolved {} days ahead",
            token,
            ahead
        );
    }

    // Dutch and English tokens for the same weekday agree
    assert_eq!(resolve_at("ma 19:00", now), resolve_at("mo 19:00", now));
    assert_eq!(resolve_at("zo 19:00", now), resolve_at("su 19:00", now));
    Ok(())
}

#[test]
fn test_weekday_rule_spans_month_boundary() -> Result<()> {
    // Friday 2024-05-31: the following Monday lands in June
    let now = noon(2024, 5, 31);
    assert_eq!(
        resolve_at("ma 19:00", now),
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    );
    Ok(())
}

#[test]
fn test_bare_time_rolls_over_midnight_boundary() -> Result<()> {
    // Late on new year's eve, a passed hour resolves to January 1st
    let now = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(23, 30, 0).unwrap());
    assert_eq!(
        resolve_at("19:00", now),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
    Ok(())
}

#[test]
fn test_literal_phrases() -> Result<()> {
    let now = noon(2024, 5, 1);
    let today = now.date();
    let tomorrow = today + Duration::days(1);

    assert_eq!(resolve_at("vandaag", now), today);
    assert_eq!(resolve_at("today", now), today);
    assert_eq!(resolve_at("niet begonnen", now), today);
    assert_eq!(resolve_at("morgen", now), tomorrow);
    assert_eq!(resolve_at("tomorrow", now), tomorrow);
    Ok(())
}

#[test]
fn test_noise_corpus_always_yields_a_valid_date() -> Result<()> {
    let now = noon(2024, 5, 1);
    let corpus = [
        "",
        "   ",
        "not a date at all",
        "uitgesteld",
        "99:99",
        "//",
        "...",
        "45/13",
        "ma",
        "19:",
        "2024-",
        "april",
        "0/0 - 00:00",
    ];

    for phrase in corpus {
        let resolved = resolve_at(phrase, now);
        // NaiveDate is valid by construction; pin the year to show nothing
        // drifted wildly off the current date
        assert_eq!(resolved.year(), 2024, "phrase '{}' left the year", phrase);
    }
    Ok(())
}

#[test]
fn test_resolution_is_deterministic_for_a_fixed_now() -> Result<()> {
    let now = noon(2024, 5, 1);
    for phrase in ["ma 19:00", "19:00", "30/04 - 19:00", "garbage"] {
        assert_eq!(resolve_at(phrase, now), resolve_at(phrase, now));
    }
    Ok(())
}

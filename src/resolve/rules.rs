use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::constants;
use crate::error::Result;

type Apply = fn(&Captures<'_>, NaiveDateTime) -> Option<NaiveDate>;

/// One clause of the date-resolution cascade.
///
/// Rules are evaluated in table order and the first whose pattern matches
/// wins. The order is load-bearing: the patterns are not mutually exclusive,
/// so reordering changes the result for ambiguous input.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub apply: Apply,
}

/// Builds the cascade in priority order. Patterns expect input that has
/// already been trimmed and lowercased.
pub(crate) fn compile() -> Result<Vec<Rule>> {
    Ok(vec![
        // "30/04 - 19:00": day/month plus time, 1-3 filler chars between
        Rule {
            name: "day-month-time",
            pattern: Regex::new(r"^(\d{1,2})/(\d{1,2}).{1,3}(\d{1,2}):(\d{2})")?,
            apply: day_month_time,
        },
        // "19:00": a bare kickoff time, today or tomorrow
        Rule {
            name: "bare-time",
            pattern: Regex::new(r"^(\d{1,2}):(\d{2})$")?,
            apply: bare_time,
        },
        // "2024-04-30T19:00:00Z": ISO-like prefix, any single separator char
        Rule {
            name: "iso-prefix",
            pattern: Regex::new(r"^(\d{4}).(\d{2}).(\d{2})")?,
            apply: iso_prefix,
        },
        // "ma 19:00": two-letter weekday plus time, optional single filler
        Rule {
            name: "weekday-time",
            pattern: Regex::new(
                r"^(zo|ma|di|wo|do|vr|za|su|mo|tu|we|th|fr|sa).?(\d{1,2}):(\d{2})",
            )?,
            apply: weekday_time,
        },
        Rule {
            name: "today-marker",
            pattern: Regex::new(r"^(vandaag|today)")?,
            apply: today_marker,
        },
        Rule {
            name: "tomorrow-marker",
            pattern: Regex::new(r"^(morgen|tomorrow)")?,
            apply: tomorrow_marker,
        },
        // "april 30 19:00": spelled-out English month name plus day and time
        Rule {
            name: "month-day-time",
            pattern: Regex::new(r"^([a-z]+) (\d{1,2}).*(\d{1,2}):(\d{2})")?,
            apply: month_day_time,
        },
    ])
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| compile().expect("built-in date rules are valid"));

pub(crate) fn all() -> &'static [Rule] {
    &RULES
}

fn day_month_time(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(now.date().year(), month, day)
}

fn bare_time(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    let hour: u32 = caps[1].parse().ok()?;
    // Rolls past midnight implicitly: an hour already passed means tomorrow
    if now.hour() < hour {
        Some(now.date())
    } else {
        now.date().succ_opt()
    }
}

fn iso_prefix(caps: &Captures<'_>, _now: NaiveDateTime) -> Option<NaiveDate> {
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn weekday_time(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    let target = constants::weekday_number(&caps[1])?;
    let current = now.date().weekday().num_days_from_sunday();
    // Sunday = 0 numbering; a token for today's weekday resolves to today
    let ahead = (target + 7 - current) % 7;
    now.date().checked_add_days(Days::new(u64::from(ahead)))
}

fn today_marker(_caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    Some(now.date())
}

fn tomorrow_marker(_caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    now.date().succ_opt()
}

fn month_day_time(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    let composed = format!("{} {} {}", &caps[1], &caps[2], now.date().year());
    NaiveDate::parse_from_str(&composed, "%B %d %Y").ok()
}

//! Deterministic parsing of shift-time range strings.
//!
//! Scheduling exports carry shift times as loosely formatted text: optional
//! one- or two-letter shift codes, optional colons, optional AM/PM markers,
//! optional whitespace around the `-` separator. [`parse_range`] turns one of
//! those strings plus a calendar date into an unambiguous start/end timestamp
//! pair, localized to the source timezone and optionally reprojected to a
//! target timezone.
//!
//! # Design Principle
//!
//! The parser is a pure function of its four inputs (no system clock, no
//! shared state). If a range cannot be recognized or a matched token does not
//! form a valid time, we return an error rather than guessing — no default
//! times are ever substituted.
//!
//! # Supported Shapes
//!
//! - 24-hour: `1900-0000`, `1900 - 0000`, `19:00-00:00`, `L 19:00 - 00:00`
//! - 12-hour: `11:00 AM - 08:00 PM`, `5:00PM - 02:00AM`, `LA 7:00 PM - 12:00 AM`
//!
//! An end time earlier than the start is treated as an overnight shift and
//! rolled over to the next calendar day, at most once.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{Result, ShiftRangeError};

// ── Timezone aliases ────────────────────────────────────────────────────────

/// Zone abbreviations used by upstream scheduling exports, mapped to the IANA
/// zones that resolve them correctly across daylight-saving transitions.
///
/// A fixed-offset reading of `BST` would pin London to UTC+0 year-round;
/// `SAST` is not an IANA identifier at all.
const ZONE_ALIASES: &[(&str, &str)] = &[
    ("BST", "Europe/London"),
    ("SAST", "Africa/Johannesburg"),
];

/// Substitute a known zone abbreviation with its IANA name, or pass through.
fn resolve_zone_alias(zone: &str) -> &str {
    ZONE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == zone)
        .map_or(zone, |(_, iana)| iana)
}

/// Resolve aliases, then parse the zone name against the IANA database.
fn parse_timezone(zone: &str) -> Result<Tz> {
    resolve_zone_alias(zone)
        .parse::<Tz>()
        .map_err(|_| ShiftRangeError::InvalidTimezone(zone.to_string()))
}

// ── Shape recognition ───────────────────────────────────────────────────────

/// One recognizable spelling of a shift-time range: the anchored pattern that
/// captures the two time tokens, and the chrono format that parses a captured
/// token once prefixed with the calendar date.
struct Shape {
    pattern: Regex,
    format: &'static str,
    uses_meridiem: bool,
}

/// Shapes are tried in order; the first full match wins. Both patterns allow
/// up to two non-digit shift-code characters and an optional space before the
/// first token. Digit classes are explicitly ASCII: a Unicode digit such as
/// `๑` may only appear in the shift-code prefix, never inside a time token.
/// The end-token pattern tolerates one extra trailing digit; tokens that
/// exercise it fail later at timestamp construction.
static SHAPES: Lazy<[Shape; 2]> = Lazy::new(|| {
    [
        // 24-hour, no meridiem: "1900-0000", "19:00 - 00:00", "LA 19:00 - 00:00"
        Shape {
            pattern: Regex::new(r"^[^0-9]?[^0-9]?\s?([0-9]+:?[0-9]+)\s?-\s?([0-9]+:?[0-9]+[0-9]+)$")
                .expect("24-hour range pattern compiles"),
            format: "%Y-%m-%d %H:%M",
            uses_meridiem: false,
        },
        // 12-hour, mandatory AM/PM on both tokens, space before the marker
        // optional: "11:00 AM - 08:00 PM", "5:00PM - 02:00AM"
        Shape {
            pattern: Regex::new(
                r"^[^0-9]?[^0-9]?\s?([0-9]+:?[0-9]+\s?[AP]M)\s?-\s?([0-9]+:?[0-9]+[0-9]+\s?[AP]M)$",
            )
            .expect("12-hour range pattern compiles"),
            format: "%Y-%m-%d %I:%M %p",
            uses_meridiem: true,
        },
    ]
});

/// The two matched time tokens, normalized and ready for timestamp
/// construction with `format`.
struct ParsedTimeSpan {
    start: String,
    end: String,
    format: &'static str,
}

/// Match the raw range against the shape table.
fn match_shape(raw_range: &str) -> Result<ParsedTimeSpan> {
    for shape in SHAPES.iter() {
        if let Some(caps) = shape.pattern.captures(raw_range) {
            let (start, end) = if shape.uses_meridiem {
                (caps[1].to_string(), caps[2].to_string())
            } else {
                (normalize_token(&caps[1]), normalize_token(&caps[2]))
            };
            return Ok(ParsedTimeSpan {
                start,
                end,
                format: shape.format,
            });
        }
    }
    Err(ShiftRangeError::UnrecognizedFormat(raw_range.to_string()))
}

/// Rewrite a colon-less four-digit token (`1900`) as `HH:MM`. Anything else is
/// used as captured. The shape patterns only capture ASCII digits and colons,
/// so byte indexing cannot split a character.
fn normalize_token(token: &str) -> String {
    if token.len() == 4 && !token.contains(':') {
        format!("{}:{}", &token[..2], &token[2..])
    } else {
        token.to_string()
    }
}

// ── Timestamp construction ──────────────────────────────────────────────────

/// Parse `date` + `token` under `format` and localize to `tz`.
///
/// Out-of-range components and local times made ambiguous or nonexistent by a
/// DST transition are rejected.
fn localize(date: &str, token: &str, format: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let text = format!("{date} {token}");
    let naive = NaiveDateTime::parse_from_str(&text, format)
        .map_err(|e| ShiftRangeError::InvalidTime(format!("'{text}': {e}")))?;
    tz.from_local_datetime(&naive)
        .single()
        .ok_or_else(|| {
            ShiftRangeError::InvalidTime(format!("'{text}' is ambiguous or nonexistent in {tz}"))
        })
}

/// Move a timestamp to the next calendar day, preserving wall-clock time
/// across DST transitions.
fn advance_one_day(dt: DateTime<Tz>) -> Result<DateTime<Tz>> {
    let tz = dt.timezone();
    let next = dt.date_naive() + chrono::Duration::days(1);
    let naive = next.and_time(dt.time());
    tz.from_local_datetime(&naive).single().ok_or_else(|| {
        ShiftRangeError::InvalidTime(format!(
            "'{naive}' is ambiguous or nonexistent in {tz} after overnight rollover"
        ))
    })
}

// ── parse_range ─────────────────────────────────────────────────────────────

/// A parsed shift-time range.
///
/// Both timestamps are rendered `YYYY-MM-DD HH:MM:SS` in the wall clock of the
/// target timezone when one was supplied, otherwise of the source timezone.
/// Seconds are always `:00` — the input carries no sub-minute precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftRange {
    /// Start of the shift.
    pub start: String,
    /// End of the shift. Never earlier than `start`.
    pub end: String,
}

/// Parse a free-form shift-time range string into a start/end timestamp pair.
///
/// # Arguments
///
/// * `date` — The shift's calendar date, `YYYY-MM-DD`
/// * `raw_range` — The shift-time string (e.g., `"1900-0000"`, `"LA 7:00 PM - 12:00 AM"`)
/// * `timezone` — The zone the times are expressed in (IANA name, or a known
///   abbreviation such as `"BST"` or `"SAST"`)
/// * `to_timezone` — Optional zone to reproject both timestamps into,
///   preserving the absolute instant
///
/// # Returns
///
/// A [`ShiftRange`] with both timestamps rendered `YYYY-MM-DD HH:MM:SS`. An
/// end time earlier than the start is rolled over to the next calendar day,
/// so `"1900-0000"` on July 22 ends at midnight entering July 23.
///
/// # Errors
///
/// Returns [`ShiftRangeError::UnrecognizedFormat`] if `raw_range` matches
/// neither supported shape, [`ShiftRangeError::InvalidTime`] if a matched
/// token does not form a valid time on `date`, or
/// [`ShiftRangeError::InvalidTimezone`] if either zone identifier is unknown.
///
/// Local times made ambiguous or nonexistent by a DST transition (the fold or
/// gap hour) are also rejected with [`ShiftRangeError::InvalidTime`] rather
/// than resolved to an arbitrary interpretation, so such shifts fail loudly
/// instead of silently landing an hour off.
///
/// # Examples
///
/// ```
/// use shift_range::parse_range;
///
/// let range = parse_range("2022-07-22", "1900-0000", "SAST", None).unwrap();
/// assert_eq!(range.start, "2022-07-22 19:00:00");
/// assert_eq!(range.end, "2022-07-23 00:00:00");
///
/// let range = parse_range("2022-07-22", "1900-0000", "BST", Some("SAST")).unwrap();
/// assert_eq!(range.start, "2022-07-22 20:00:00");
/// assert_eq!(range.end, "2022-07-23 01:00:00");
/// ```
pub fn parse_range(
    date: &str,
    raw_range: &str,
    timezone: &str,
    to_timezone: Option<&str>,
) -> Result<ShiftRange> {
    let tz = parse_timezone(timezone)?;
    let target = to_timezone.map(parse_timezone).transpose()?;

    let span = match_shape(raw_range)?;
    let start = localize(date, &span.start, span.format, tz)?;
    let mut end = localize(date, &span.end, span.format, tz)?;

    // Overnight shift: the end belongs to the next calendar day.
    if end < start {
        end = advance_one_day(end)?;
    }

    let (start, end) = match target {
        Some(to) => (start.with_timezone(&to), end.with_timezone(&to)),
        None => (start, end),
    };

    Ok(ShiftRange {
        start: render(&start),
        end: render(&end),
    })
}

/// Render a localized timestamp as `YYYY-MM-DD HH:MM:SS`.
fn render(dt: &DateTime<Tz>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────

use std::fmt::{self, Write};

use chrono::{Local, TimeZone};

const NS_PER_SEC: i64 = 1_000_000_000;

/// Render a nanosecond epoch timestamp as local calendar time plus the
/// sub-second nanosecond remainder: `"2024/01/15 09:30:00 + 000000123 ns"`.
///
/// Uses the observer's local timezone; tests should go through
/// [`format_instant_in`] with a pinned zone instead.
pub fn format_instant(ts: i64) -> String {
    format_instant_in(ts, &Local)
}

/// [`format_instant`] against an injected timezone.
///
/// The remainder is computed by subtraction after floor division, so it stays
/// in `[0, 10^9)` even for timestamps before the epoch.
pub fn format_instant_in<Tz: TimeZone>(ts: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let seconds = ts.div_euclid(NS_PER_SEC);
    let ns = ts - seconds * NS_PER_SEC;

    // Seconds this far outside chrono's representable range mean a garbage
    // timestamp from upstream; fail loudly rather than render nonsense.
    let dt = tz
        .timestamp_opt(seconds, 0)
        .single()
        .expect("timestamp seconds outside representable calendar range");

    format!("{} + {:09} ns", dt.format("%Y/%m/%d %H:%M:%S"), ns)
}

/// Render the difference `ts2 - ts1` (nanoseconds) as a compact duration:
/// `"3 days + 2:05:09 + 12345 ns"`.
///
/// The day prefix is emitted only when days is non-zero, and the hours
/// segment only when hours is non-zero; with zero hours the minutes appear
/// bare and unpadded (`"1:30 + 0 ns"` for 90 seconds).
///
/// A negative difference (`ts2 < ts1`) is undefined input; callers own the
/// ordering of their timestamps.
pub fn format_duration(ts1: i64, ts2: i64) -> String {
    let delta = ts2 - ts1;
    let mut total_sec = delta.div_euclid(NS_PER_SEC);
    let diff_ns = delta - total_sec * NS_PER_SEC;

    let days = total_sec.div_euclid(86_400);
    total_sec -= days * 86_400;
    let hours = total_sec.div_euclid(3_600);
    total_sec -= hours * 3_600;
    let minutes = total_sec.div_euclid(60);
    total_sec -= minutes * 60;
    let seconds = total_sec;

    let mut out = String::new();

    if days > 0 {
        let _ = write!(out, "{days} days + ");
    }

    if hours > 0 {
        let _ = write!(out, "{hours}:{minutes:02}");
    } else {
        let _ = write!(out, "{minutes}");
    }

    let _ = write!(out, ":{seconds:02} + {diff_ns} ns");

    out
}

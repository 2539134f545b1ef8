//! "Tonight" classification in the viewer's civil calendar.
//!
//! The window runs from 03:59:59 through 23:59:59 local time on the viewer's current
//! date, so a West Coast game running past midnight Eastern still belongs to the
//! previous night.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::warn;

/// Opening of the window, inclusive.
pub const WINDOW_OPEN: (u32, u32, u32) = (3, 59, 59);
/// Close of the window, inclusive.
pub const WINDOW_CLOSE: (u32, u32, u32) = (23, 59, 59);

pub fn is_tonight(start: DateTime<Utc>, timezone: &str) -> bool {
    is_tonight_at(start, timezone, Utc::now())
}

/// Like [`is_tonight`] with an explicit "now". Fails closed: an unknown zone or
/// a window boundary that does not exist locally yields `false`.
pub fn is_tonight_at(start: DateTime<Utc>, timezone: &str, now: DateTime<Utc>) -> bool {
    let Some(tz) = parse_zone(timezone) else {
        return false;
    };
    let today = now.with_timezone(&tz).date_naive();
    match tonight_window(today, tz) {
        Some((open, close)) => open <= start && start <= close,
        None => false,
    }
}

/// The UTC bounds of the window on `date` in `tz`.
pub fn tonight_window(date: NaiveDate, tz: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let open = local_instant(date, hms(WINDOW_OPEN)?, tz)?;
    let close = local_instant(date, hms(WINDOW_CLOSE)?, tz)?;
    Some((open, close))
}

/// The viewer's current civil date, for day headers.
pub fn local_date(now: DateTime<Utc>, timezone: &str) -> Option<NaiveDate> {
    parse_zone(timezone).map(|tz| now.with_timezone(&tz).date_naive())
}

fn parse_zone(timezone: &str) -> Option<Tz> {
    match timezone.trim().parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(e) => {
            warn!("unrecognised time zone {timezone:?}: {e}");
            None
        }
    }
}

fn hms((h, m, s): (u32, u32, u32)) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, s)
}

/// Ambiguous local times (clocks falling back) resolve to the earlier instant;
/// skipped local times (clocks springing forward) have no instant.
fn local_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

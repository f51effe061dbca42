use chrono::{DateTime, Duration, TimeZone, Utc};

/// Days per ranking window.
pub const WEEK_LEN_DAYS: i64 = 7;

/// Start of week 1, the fixed anchor all weekly buckets count from.
pub fn week_one_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 28, 0, 0, 0)
        .single()
        .expect("fixed anchor date is valid")
}

/// One ranking window covering `[start, end)`. The exclusive end is the
/// start of the next window, so timestamps with sub-second precision always
/// land in exactly one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub week_no: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Every window whose start has been reached by `now`, oldest first.
/// Empty when `now` is before the week-1 anchor. A window that has started
/// but not finished is included; its standings simply cover a partial week.
pub fn elapsed_weeks(now: DateTime<Utc>) -> Vec<WeekWindow> {
    let mut windows = Vec::new();
    let mut start = week_one_start();
    let mut week_no = 1u32;
    while start <= now {
        let end = start + Duration::days(WEEK_LEN_DAYS);
        windows.push(WeekWindow {
            week_no,
            start,
            end,
        });
        start = end;
        week_no += 1;
    }
    windows
}

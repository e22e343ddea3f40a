// Date-time parsing for task deadlines, event times and list cut-offs

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Human-readable form of the one date-time pattern users type, e.g. `2019-10-15 1800`
pub const INPUT_FORMAT_HINT: &str = "yyyy-MM-dd HHmm";

/// Format used when showing a date-time back to the user
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

/// Parse `yyyy-MM-dd HHmm` into a date-time.
///
/// The text must have exactly that layout. Field values are then resolved
/// smartly rather than strictly:
/// - a day past the end of its month (up to 31) becomes the month's last day
/// - `2400` means midnight at the start of the following day
///
/// Year 0, months outside 1-12, day 00, other hours past 23 and minutes past 59
/// are rejected, as is any surrounding whitespace.
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    if !has_input_shape(text) {
        return None;
    }
    let field = |start: usize, end: usize| text[start..end].parse::<u32>().ok();
    let year = field(0, 4)?;
    let month = field(5, 7)?;
    let day = field(8, 10)?;
    let hour = field(11, 13)?;
    let minute = field(13, 15)?;

    if year == 0 || !(1..=31).contains(&day) || minute > 59 {
        return None;
    }
    let year = i32::try_from(year).ok()?;
    let last_day = last_day_of_month(year, month)?;
    let date = NaiveDate::from_ymd_opt(year, month, day.min(last_day))?;

    match hour {
        0..=23 => date.and_hms_opt(hour, minute, 0),
        24 if minute == 0 => date.succ_opt()?.and_hms_opt(0, 0, 0),
        _ => None,
    }
}

/// `None` when `month` is not 1-12
fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(next_month_start?.pred_opt()?.day())
}

/// Render a date-time the way task listings show it (`Dec 31 2024 23:59`)
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

// Exactly `dddd-dd-dd dddd`
fn has_input_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 15 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        _ => b.is_ascii_digit(),
    })
}

use chrono::{DateTime, Local, NaiveDate};

/// US short date, e.g. `10/18/2026` or `1/5/2026`.
const US_SHORT: &str = "%-m/%-d/%Y";

const ACCEPTED: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d %b %Y"];

/// Date stamped on new transactions: today in the local timezone.
#[must_use]
pub fn today_stamp() -> String {
    date_stamp(Local::now().date_naive())
}

pub(crate) fn date_stamp(date: NaiveDate) -> String {
    date.format(US_SHORT).to_string()
}

/// Normalizes a stored date string for display.
///
/// Dates the server echoes back in ISO or RFC 3339 form are shown in the same
/// US short form used when stamping; anything unrecognized is shown verbatim.
#[must_use]
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return date_stamp(dt.date_naive());
    }
    ACCEPTED
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(date_stamp)
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamps_without_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(date_stamp(date), "1/5/2026");
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(date_stamp(date), "10/18/2026");
    }

    #[test]
    fn display_normalizes_known_formats() {
        assert_eq!(display_date("2026-10-18"), "10/18/2026");
        assert_eq!(display_date("01/05/2026"), "1/5/2026");
        assert_eq!(display_date("2026-10-18T09:30:00+02:00"), "10/18/2026");
    }

    #[test]
    fn display_keeps_unknown_text() {
        assert_eq!(display_date("someday"), "someday");
    }

    #[test]
    fn today_round_trips_through_display() {
        let today = today_stamp();
        assert_eq!(display_date(&today), today);
    }
}

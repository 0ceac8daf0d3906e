//! Archive date - the calendar day a dated entry represents

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Errors raised while turning directory names into an [`ArchiveDate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// A component is not the expected run of ASCII digits
    MalformedComponent(String),

    /// The components are numeric but do not name a real calendar day
    InvalidCalendarDate {
        /// Year directory name
        year: String,
        /// Month directory name
        month: String,
        /// Day directory name
        day: String,
    },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::MalformedComponent(name) => {
                write!(f, "malformed date component: {:?}", name)
            }
            DateError::InvalidCalendarDate { year, month, day } => {
                write!(f, "invalid calendar date: {}/{}/{}", year, month, day)
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Returns true if `name` looks like a year directory (exactly four digits)
pub fn is_year_component(name: &str) -> bool {
    name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `name` looks like a month or day directory (one or two digits)
pub fn is_month_or_day_component(name: &str) -> bool {
    (1..=2).contains(&name.len()) && name.bytes().all(|b| b.is_ascii_digit())
}

/// The calendar day of a dated entry in the archive tree
///
/// Rotation works at day granularity: one `ArchiveDate` stands for every
/// artifact created on that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchiveDate(NaiveDate);

impl ArchiveDate {
    /// Wrap an existing calendar date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from numeric parts, `None` if the day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse the three directory names of a `YYYY/MM/DD` path
    ///
    /// Each component must pass its shape check first; a well-shaped triple
    /// that is not a real day (e.g. `2023/02/30`) is an
    /// [`DateError::InvalidCalendarDate`].
    pub fn from_components(year: &str, month: &str, day: &str) -> Result<Self, DateError> {
        if !is_year_component(year) {
            return Err(DateError::MalformedComponent(year.to_string()));
        }
        for part in [month, day] {
            if !is_month_or_day_component(part) {
                return Err(DateError::MalformedComponent(part.to_string()));
            }
        }

        let invalid = || DateError::InvalidCalendarDate {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        };

        let y: i32 = year.parse().map_err(|_| invalid())?;
        let m: u32 = month.parse().map_err(|_| invalid())?;
        let d: u32 = day.parse().map_err(|_| invalid())?;

        Self::from_ymd(y, m, d).ok_or_else(invalid)
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Weekday index with Monday = 0 and Sunday = 6
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    /// True if this day is a Sunday
    pub fn is_sunday(&self) -> bool {
        self.0.weekday() == Weekday::Sun
    }

    /// True if this day is the first of its month
    pub fn is_month_start(&self) -> bool {
        self.0.day() == 1
    }

    /// Whole days from this date to `today`
    ///
    /// Negative when the entry is dated in the future.
    pub fn age_days(&self, today: NaiveDate) -> i64 {
        (today - self.0).num_days()
    }

    /// Zero-padded path components: `("2024", "03", "05")`
    pub fn path_components(&self) -> (String, String, String) {
        (
            format!("{:04}", self.0.year()),
            format!("{:02}", self.0.month()),
            format!("{:02}", self.0.day()),
        )
    }
}

impl fmt::Display for ArchiveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_padded_components() {
        let parsed = ArchiveDate::from_components("2024", "03", "05").unwrap();
        assert_eq!(parsed.as_naive(), date(2024, 3, 5));
    }

    #[test]
    fn test_parse_unpadded_components() {
        let parsed = ArchiveDate::from_components("2024", "3", "5").unwrap();
        assert_eq!(parsed.as_naive(), date(2024, 3, 5));
    }

    #[test]
    fn test_invalid_calendar_date() {
        let err = ArchiveDate::from_components("2023", "02", "30").unwrap_err();
        assert!(matches!(err, DateError::InvalidCalendarDate { .. }));

        let err = ArchiveDate::from_components("2024", "13", "01").unwrap_err();
        assert!(matches!(err, DateError::InvalidCalendarDate { .. }));

        let err = ArchiveDate::from_components("2024", "00", "10").unwrap_err();
        assert!(matches!(err, DateError::InvalidCalendarDate { .. }));
    }

    #[test]
    fn test_leap_day() {
        assert!(ArchiveDate::from_components("2024", "02", "29").is_ok());
        assert!(ArchiveDate::from_components("2023", "02", "29").is_err());
    }

    #[test]
    fn test_malformed_components() {
        assert_eq!(
            ArchiveDate::from_components("24", "03", "05"),
            Err(DateError::MalformedComponent("24".to_string()))
        );
        assert_eq!(
            ArchiveDate::from_components("2024", "march", "05"),
            Err(DateError::MalformedComponent("march".to_string()))
        );
        assert_eq!(
            ArchiveDate::from_components("2024", "03", "005"),
            Err(DateError::MalformedComponent("005".to_string()))
        );
    }

    #[test]
    fn test_component_shapes() {
        assert!(is_year_component("2024"));
        assert!(!is_year_component("202"));
        assert!(!is_year_component("20x4"));
        assert!(is_month_or_day_component("1"));
        assert!(is_month_or_day_component("12"));
        assert!(!is_month_or_day_component(""));
        assert!(!is_month_or_day_component("+1"));
    }

    #[test]
    fn test_weekday_index() {
        // 2024-03-11 is a Monday, 2024-03-17 a Sunday
        assert_eq!(ArchiveDate::new(date(2024, 3, 11)).weekday_index(), 0);
        assert_eq!(ArchiveDate::new(date(2024, 3, 17)).weekday_index(), 6);
        assert!(ArchiveDate::new(date(2024, 3, 17)).is_sunday());
        assert!(!ArchiveDate::new(date(2024, 3, 16)).is_sunday());
    }

    #[test]
    fn test_age_days() {
        let today = date(2024, 3, 15);
        assert_eq!(ArchiveDate::new(date(2024, 3, 10)).age_days(today), 5);
        assert_eq!(ArchiveDate::new(date(2024, 1, 1)).age_days(today), 74);
        assert_eq!(ArchiveDate::new(date(2024, 3, 15)).age_days(today), 0);
        assert_eq!(ArchiveDate::new(date(2024, 3, 16)).age_days(today), -1);
    }

    #[test]
    fn test_path_components_and_display() {
        let d = ArchiveDate::new(date(2024, 1, 7));
        assert_eq!(
            d.path_components(),
            ("2024".to_string(), "01".to_string(), "07".to_string())
        );
        assert_eq!(d.to_string(), "2024-01-07");
    }
}

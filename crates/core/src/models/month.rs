use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, written `YYYY-MM` on the wire and in transaction dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Latest month covered by the bundled sample data.
    pub const LATEST_SAMPLE: MonthKey = MonthKey::from_parts(2025, 11);

    /// Compile-time constructor for known-good literals.
    pub(crate) const fn from_parts(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Build a month key. `month` is 1-based; `year` must lie within the
    /// calendar range chrono can represent.
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(CoreError::Validation(format!(
                "Year {year} is outside the supported calendar range"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(CoreError::Validation(format!(
                "Month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar-previous month (January rolls back into December).
    #[must_use]
    pub fn pred(&self) -> Self {
        self.offset(-1)
    }

    /// The calendar-next month.
    #[must_use]
    pub fn succ(&self) -> Self {
        self.offset(1)
    }

    /// Move forward (or backward for negative `months`) by whole months.
    #[must_use]
    pub fn offset(&self, months: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Short chart label, e.g. `Mar 25`.
    #[must_use]
    pub fn short_label(&self) -> String {
        format!(
            "{} {:02}",
            SHORT_NAMES[(self.month - 1) as usize],
            self.year.rem_euclid(100)
        )
    }

    /// Long selector label, e.g. `March 2025`.
    #[must_use]
    pub fn long_label(&self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CoreError::Validation(format!("Invalid month '{s}': expected YYYY-MM"));

        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !digits(year) || !digits(month) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}


use chrono::{DateTime, Datelike, Utc};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A calendar month, ordered chronologically.
///
/// Months are compared through their ordinal `year * 12 + month`, which is also the
/// position used by the time slider of the map.
///
/// # Examples
///
/// ```
/// use choropleth::YearMonth;
///
/// let june = YearMonth::new(2020, 6).unwrap();
/// assert_eq!(june.ordinal(), 2020 * 12 + 6);
/// assert_eq!(YearMonth::from_ordinal(june.ordinal()), Some(june));
/// assert_eq!(june.to_string(), "2020-06");
/// assert!(YearMonth::new(2020, 13).is_none());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(time: &DateTime<Utc>) -> Self {
        Self {
            year: time.year(),
            month: time.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }

    /// Inverse of [`YearMonth::ordinal`]. December maps back to its own year.
    ///
    /// Returns `None` when the year does not fit an `i32`.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        let zero_based = ordinal.checked_sub(1)?;
        let year = i32::try_from(zero_based.div_euclid(12)).ok()?;
        let month = u32::try_from(zero_based.rem_euclid(12)).ok()? + 1;
        Some(Self { year, month })
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub struct StartEndMonth {
    pub start: YearMonth,
    pub end: YearMonth,
}

/// An inclusive range of months used for range aggregation.
///
/// A window whose start lies after its end is accepted; it simply contains no month.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    pub start: YearMonth,
    pub end: YearMonth,
}

impl TimeWindow {
    pub fn new(start: YearMonth, end: YearMonth) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

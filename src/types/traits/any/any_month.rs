use crate::types::traits::types::{StartEndMonth, TimeWindow, Year, YearMonth};

/// Anything that can stand for a span of whole months: a single [`YearMonth`],
/// a [`Year`], or an existing [`TimeWindow`].
pub trait AnyMonth {
    fn get_month_range(self) -> Option<StartEndMonth>;
}

impl AnyMonth for YearMonth {
    fn get_month_range(self) -> Option<StartEndMonth> {
        Some(StartEndMonth {
            start: self,
            end: self,
        })
    }
}

impl AnyMonth for (i32, u32) {
    fn get_month_range(self) -> Option<StartEndMonth> {
        YearMonth::new(self.0, self.1)?.get_month_range()
    }
}

impl AnyMonth for Year {
    fn get_month_range(self) -> Option<StartEndMonth> {
        Some(StartEndMonth {
            start: YearMonth::new(self.0, 1)?,
            end: YearMonth::new(self.0, 12)?,
        })
    }
}

impl AnyMonth for TimeWindow {
    fn get_month_range(self) -> Option<StartEndMonth> {
        Some(StartEndMonth {
            start: self.start,
            end: self.end,
        })
    }
}

impl TimeWindow {
    /// Builds the window running from the first month of `start` to the last month of `end`.
    ///
    /// Returns `None` if either bound does not describe a valid month.
    ///
    /// # Examples
    ///
    /// ```
    /// use choropleth::{TimeWindow, Year, YearMonth};
    ///
    /// let window = TimeWindow::spanning(Year(2016), (2022, 6)).unwrap();
    /// assert_eq!(window.start, YearMonth::new(2016, 1).unwrap());
    /// assert_eq!(window.end, YearMonth::new(2022, 6).unwrap());
    /// ```
    pub fn spanning(start: impl AnyMonth, end: impl AnyMonth) -> Option<TimeWindow> {
        Some(TimeWindow {
            start: start.get_month_range()?.start,
            end: end.get_month_range()?.end,
        })
    }
}

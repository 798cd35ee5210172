use chrono::{Duration, Local, NaiveDate};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar date the attendance view is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    date: NaiveDate,
}

impl DateCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn today() -> Self {
        Self::new(today_local())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Moves by whole days with month and year rollover. Stepping outside the
    /// representable calendar range leaves the cursor where it is.
    pub fn step(self, delta_days: i64) -> Self {
        Duration::try_days(delta_days)
            .and_then(|delta| self.date.checked_add_signed(delta))
            .map(Self::new)
            .unwrap_or(self)
    }

    /// `DD/MM/YYYY`, zero padded.
    pub fn format(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

impl Default for DateCursor {
    fn default() -> Self {
        Self::today()
    }
}

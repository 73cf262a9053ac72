//! Date-window filtering
//!
//! The sales, payments, and expenses pages all filter by a date
//! window: either a quick range computed from "today" (local time,
//! week starting Sunday) or an explicit calendar range picked by the
//! user. An active calendar selection replaces the quick filter
//! entirely.
//!
//! Windows are inclusive calendar-date ranges. "Today" is always a
//! caller-supplied [`NaiveDate`] so the math stays pure and testable;
//! use [`local_today`] at the call site.

use chrono::{Datelike, Days, Local, NaiveDate};

/// Today's date in the caller's local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn month_start(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

fn year_start(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), 1, 1).unwrap_or(d)
}

fn week_start(d: NaiveDate) -> NaiveDate {
    // Week starts Sunday.
    d - Days::new(d.weekday().num_days_from_sunday() as u64)
}

/// Quick range relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickRange {
    #[default]
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl QuickRange {
    /// Parse a UI filter key. Accepts both the page keys
    /// ("week", "month") and the dashboard keys ("this_week",
    /// "last_week", ...), hyphenated or underscored.
    pub fn parse(key: &str) -> Option<Self> {
        match key.replace('-', "_").as_str() {
            "today" => Some(QuickRange::Today),
            "yesterday" => Some(QuickRange::Yesterday),
            "week" | "this_week" => Some(QuickRange::ThisWeek),
            "last_week" => Some(QuickRange::LastWeek),
            "month" | "this_month" => Some(QuickRange::ThisMonth),
            "last_month" => Some(QuickRange::LastMonth),
            "year" | "this_year" => Some(QuickRange::ThisYear),
            "last_year" => Some(QuickRange::LastYear),
            _ => None,
        }
    }

    /// Inclusive calendar window for this range.
    pub fn window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            QuickRange::Today => (today, today),
            QuickRange::Yesterday => {
                let y = today - Days::new(1);
                (y, y)
            }
            QuickRange::ThisWeek => (week_start(today), today),
            QuickRange::LastWeek => {
                let start = week_start(today) - Days::new(7);
                (start, start + Days::new(6))
            }
            QuickRange::ThisMonth => (month_start(today), today),
            QuickRange::LastMonth => {
                let end = month_start(today) - Days::new(1);
                (month_start(end), end)
            }
            QuickRange::ThisYear => (year_start(today), today),
            QuickRange::LastYear => {
                let end = year_start(today) - Days::new(1);
                (year_start(end), end)
            }
        }
    }
}

/// The date filter a page currently applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelection {
    /// No date filtering
    #[default]
    AllTime,
    Quick(QuickRange),
    /// Explicit inclusive calendar range. A single-day selection is
    /// `start == end` ("that day only").
    Calendar { start: NaiveDate, end: NaiveDate },
}

impl DateSelection {
    /// Parse a quick-filter key; "all" and unknown keys mean no
    /// filtering. An explicit calendar pick is constructed directly
    /// with [`DateSelection::Calendar`], which overrides whatever
    /// quick key the page had; the two are mutually exclusive by
    /// construction.
    pub fn parse(key: &str) -> Self {
        QuickRange::parse(key).map_or(DateSelection::AllTime, DateSelection::Quick)
    }

    /// Inclusive bounds, or `None` for all time.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            DateSelection::AllTime => None,
            DateSelection::Quick(q) => Some(q.window(today)),
            DateSelection::Calendar { start, end } => Some((*start, *end)),
        }
    }

    /// Whether a record's local calendar date falls in the window.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.bounds(today) {
            None => true,
            Some((start, end)) => date >= start && date <= end,
        }
    }
}

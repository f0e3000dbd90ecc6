//! Building the search request sent to the upstream journey planner.
//!
//! A request is the fixed baseline of the search form overlaid with the
//! per-query fields held in [`QueryParams`].

mod form;
mod time;

pub use form::{BASELINE, FormTemplate};
pub use time::{DepartureTime, TimeError, format_date, format_time, now};

use chrono::NaiveDateTime;

/// Whether the query time is a departure or an arrival constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Departure,
    Arrival,
}

impl Direction {
    /// Value of the form's search-forward flag.
    pub fn form_flag(self) -> &'static str {
        match self {
            Direction::Departure => "1",
            Direction::Arrival => "0",
        }
    }
}

/// The variable part of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub start: String,
    pub destination: String,
    /// `DDMMYYYY`
    pub date: String,
    /// `HHMM` for the first request, `HH:MM` when paging.
    pub time: String,
    pub direction: Direction,
}

impl QueryParams {
    /// Query for the given stations at instant `t`.
    pub fn at(
        start: impl Into<String>,
        destination: impl Into<String>,
        t: &NaiveDateTime,
        direction: Direction,
    ) -> Self {
        Self {
            start: start.into(),
            destination: destination.into(),
            date: format_date(t),
            time: format_time(t),
            direction,
        }
    }

    /// The follow-up query for the next page of results.
    ///
    /// Paging always searches by departure, whatever the first query asked.
    pub fn next_page(&self, time: DepartureTime) -> Self {
        Self {
            time: time.to_string(),
            direction: Direction::Departure,
            ..self.clone()
        }
    }
}

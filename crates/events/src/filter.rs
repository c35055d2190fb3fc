//! Filter state and per-event predicate evaluation.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Named date bucket relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateRange {
    /// No date constraint.
    #[default]
    Any,
    Today,
    Tomorrow,
    /// From today through today + 7 days, inclusive.
    ThisWeek,
    /// From today through the same day next month, inclusive.
    ThisMonth,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Any => "",
            DateRange::Today => "today",
            DateRange::Tomorrow => "tomorrow",
            DateRange::ThisWeek => "this-week",
            DateRange::ThisMonth => "this-month",
        }
    }

    /// Whether `date` falls in this bucket, comparing calendar days only.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateRange::Any => true,
            DateRange::Today => date == today,
            DateRange::Tomorrow => today.succ_opt() == Some(date),
            DateRange::ThisWeek => {
                let end = today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
                date >= today && date <= end
            }
            DateRange::ThisMonth => {
                // chrono clamps to the last day of a shorter month (Jan 31 -> Feb 28/29)
                let end = today
                    .checked_add_months(Months::new(1))
                    .unwrap_or(NaiveDate::MAX);
                date >= today && date <= end
            }
        }
    }
}

impl From<String> for DateRange {
    /// Unrecognized bucket names impose no constraint.
    fn from(value: String) -> Self {
        match value.as_str() {
            "today" => DateRange::Today,
            "tomorrow" => DateRange::Tomorrow,
            "this-week" => DateRange::ThisWeek,
            "this-month" => DateRange::ThisMonth,
            _ => DateRange::Any,
        }
    }
}

impl From<&str> for DateRange {
    fn from(value: &str) -> Self {
        DateRange::from(value.to_string())
    }
}

impl From<DateRange> for String {
    fn from(value: DateRange) -> Self {
        value.as_str().to_string()
    }
}

/// Active filter state. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub location: Option<String>,
    pub date_range: DateRange,
    pub search_query: Option<String>,
}

impl EventFilters {
    /// Merge a partial update. Absent fields are kept; empty strings clear.
    pub fn merge(&self, patch: &FilterPatch) -> Self {
        Self {
            event_type: pick(&self.event_type, &patch.event_type),
            location: pick(&self.location, &patch.location),
            date_range: patch.date_range.unwrap_or(self.date_range),
            search_query: pick(&self.search_query, &patch.search_query),
        }
    }

    pub fn with_search_query(&self, query: &str) -> Self {
        Self {
            search_query: non_empty(query),
            ..self.clone()
        }
    }

    /// True when at least one constraint is set (drives the "Clear All" action).
    pub fn is_active(&self) -> bool {
        self.event_type.is_some()
            || self.location.is_some()
            || self.date_range != DateRange::Any
            || self.search_query.is_some()
    }

    pub fn matches_type(&self, event: &Event) -> bool {
        self.event_type
            .as_deref()
            .is_none_or(|ty| event.event_type.as_str() == ty)
    }

    pub fn matches_location(&self, event: &Event) -> bool {
        self.location
            .as_deref()
            .is_none_or(|loc| event.location == loc)
    }

    pub fn matches_search(&self, event: &Event) -> bool {
        self.search_query
            .as_deref()
            .is_none_or(|q| event.mentions(&q.to_lowercase()))
    }

    pub fn matches_date(&self, event: &Event, today: NaiveDate) -> bool {
        self.date_range.contains(event.date, today)
    }

    /// All four predicates must pass.
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        self.matches_type(event)
            && self.matches_location(event)
            && self.matches_search(event)
            && self.matches_date(event, today)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn pick(current: &Option<String>, update: &Option<String>) -> Option<String> {
    match update {
        Some(value) => non_empty(value),
        None => current.clone(),
    }
}

/// Partial filter update. Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl FilterPatch {
    pub fn event_type(value: impl Into<String>) -> Self {
        Self {
            event_type: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn location(value: impl Into<String>) -> Self {
        Self {
            location: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn date_range(value: DateRange) -> Self {
        Self {
            date_range: Some(value),
            ..Self::default()
        }
    }

    /// Reset type, location and date range. The search query is left alone and
    /// cleared separately through the search command.
    pub fn clear_all() -> Self {
        Self {
            event_type: Some(String::new()),
            location: Some(String::new()),
            date_range: Some(DateRange::Any),
            search_query: None,
        }
    }
}

//! Create-event form and its field-level validation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use eventboard_events::{EventType, NewEvent};

/// Minimum description length, in characters, after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventForm {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    pub location: String,
    pub host: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Type,
    Date,
    Location,
    Host,
    Description,
}

/// Per-field validation messages. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("event form has {} invalid field(s)", .errors.len())]
pub struct FormErrors {
    errors: BTreeMap<FormField, &'static str>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

impl EventForm {
    /// Check every field and build the event to add.
    ///
    /// `today` is the earliest allowed event date.
    pub fn validate(&self, today: NaiveDate) -> Result<NewEvent, FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Event title is required");
        }

        if self.event_type.is_empty() {
            errors.insert(FormField::Type, "Event type is required");
        }

        let date = if self.date.trim().is_empty() {
            errors.insert(FormField::Date, "Event date is required");
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(date) if date < today => {
                    errors.insert(FormField::Date, "Event date cannot be in the past");
                    None
                }
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert(FormField::Date, "Event date is invalid");
                    None
                }
            }
        };

        if self.location.trim().is_empty() {
            errors.insert(FormField::Location, "Event location is required");
        }

        if self.host.trim().is_empty() {
            errors.insert(FormField::Host, "Host name is required");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert(FormField::Description, "Event description is required");
        } else if description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.insert(
                FormField::Description,
                "Description must be at least 20 characters long",
            );
        }

        match date {
            Some(date) if errors.is_empty() => Ok(NewEvent {
                title: self.title.clone(),
                event_type: EventType::from(self.event_type.as_str()),
                date,
                location: self.location.clone(),
                host: self.host.clone(),
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

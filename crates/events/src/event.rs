use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use eventboard_core::EventId;

/// Kind of community event.
///
/// The seven known kinds are offered by the create form. Anything else found in
/// a dataset is kept verbatim as [`EventType::Other`] and rendered with the
/// neutral palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Fitness,
    Music,
    Sports,
    Meetup,
    Workshop,
    Social,
    Entertainment,
    Other(String),
}

impl EventType {
    /// Known event types, in the order the create form lists them.
    pub const CATALOG: [EventType; 7] = [
        EventType::Fitness,
        EventType::Music,
        EventType::Sports,
        EventType::Meetup,
        EventType::Workshop,
        EventType::Social,
        EventType::Entertainment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            EventType::Fitness => "Fitness",
            EventType::Music => "Music",
            EventType::Sports => "Sports",
            EventType::Meetup => "Meetup",
            EventType::Workshop => "Workshop",
            EventType::Social => "Social",
            EventType::Entertainment => "Entertainment",
            EventType::Other(s) => s,
        }
    }

    /// Badge colour used when listing an event of this type.
    pub fn palette(&self) -> Palette {
        match self {
            EventType::Fitness => Palette::Green,
            EventType::Music => Palette::Purple,
            EventType::Sports => Palette::Blue,
            EventType::Meetup => Palette::Yellow,
            EventType::Workshop => Palette::Indigo,
            EventType::Social => Palette::Pink,
            EventType::Entertainment => Palette::Red,
            EventType::Other(_) => Palette::Gray,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Fitness" => EventType::Fitness,
            "Music" => EventType::Music,
            "Sports" => EventType::Sports,
            "Meetup" => EventType::Meetup,
            "Workshop" => EventType::Workshop,
            "Social" => EventType::Social,
            "Entertainment" => EventType::Entertainment,
            _ => EventType::Other(value),
        }
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        EventType::from(value.to_string())
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge colour for an event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Green,
    Purple,
    Blue,
    Yellow,
    Indigo,
    Pink,
    Red,
    Gray,
}

/// A listed community event.
///
/// Records are immutable once in the store; the store only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub location: String,
    pub host: String,
    pub description: String,
}

impl Event {
    /// Case-insensitive substring match against title, description or host.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.host.to_lowercase().contains(needle)
    }
}

/// Fields of an event that is about to be added (the store assigns the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub location: String,
    pub host: String,
    pub description: String,
}

impl NewEvent {
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            event_type: self.event_type,
            date: self.date,
            location: self.location,
            host: self.host,
            description: self.description,
        }
    }
}

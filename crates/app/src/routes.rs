//! URL path routing.

use eventboard_core::EventId;

/// A view the application can show.
///
/// Event ids are kept as the raw path segment; resolving them (and deciding
/// that a bad id is simply "not found") is the store's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    EventDetail(String),
    CreateEvent,
    /// Shown once after an event is submitted.
    EventCreated(String),
    RsvpConfirmation(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["event", id] => Route::EventDetail((*id).to_string()),
            ["create"] => Route::CreateEvent,
            ["event-created", id] => Route::EventCreated((*id).to_string()),
            ["rsvp-confirmation", id] => Route::RsvpConfirmation((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn event_detail(id: EventId) -> Self {
        Route::EventDetail(id.to_string())
    }

    pub fn event_created(id: EventId) -> Self {
        Route::EventCreated(id.to_string())
    }

    pub fn rsvp_confirmation(id: EventId) -> Self {
        Route::RsvpConfirmation(id.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::EventDetail(id) => format!("/event/{id}"),
            Route::CreateEvent => "/create".to_string(),
            Route::EventCreated(id) => format!("/event-created/{id}"),
            Route::RsvpConfirmation(id) => format!("/rsvp-confirmation/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.path())
    }
}

use serde::{Deserialize, Serialize};

use eventboard_core::EventId;

use crate::event::NewEvent;
use crate::filter::FilterPatch;

/// Every state change the event store accepts.
///
/// Commands are plain data: they can be logged, serialized and replayed. The
/// transition each one causes lives in [`crate::state::BoardState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardCommand {
    SetFilters(FilterPatch),
    SetSearchQuery(String),
    SetCurrentPage(usize),
    AddRsvp(EventId),
    RemoveRsvp(EventId),
    AddEvent(NewEvent),
}

impl BoardCommand {
    /// Stable command name (e.g. "events.filters.set").
    pub fn name(&self) -> &'static str {
        match self {
            BoardCommand::SetFilters(_) => "events.filters.set",
            BoardCommand::SetSearchQuery(_) => "events.search.set",
            BoardCommand::SetCurrentPage(_) => "events.page.set",
            BoardCommand::AddRsvp(_) => "events.rsvp.added",
            BoardCommand::RemoveRsvp(_) => "events.rsvp.removed",
            BoardCommand::AddEvent(_) => "events.event.added",
        }
    }

    /// Whether this command changes the filtered list and resets the page.
    pub fn refilters(&self) -> bool {
        matches!(
            self,
            BoardCommand::SetFilters(_) | BoardCommand::SetSearchQuery(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DateRange;
    use serde_json::json;

    #[test]
    fn commands_serialize_as_tagged_actions() {
        let cmd = BoardCommand::SetFilters(FilterPatch::date_range(DateRange::ThisWeek));
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "SET_FILTERS", "payload": {"dateRange": "this-week"}})
        );

        let cmd = BoardCommand::AddRsvp(EventId::new(4));
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "ADD_RSVP", "payload": 4})
        );
    }

    #[test]
    fn commands_deserialize_from_actions() {
        let cmd: BoardCommand =
            serde_json::from_value(json!({"type": "SET_CURRENT_PAGE", "payload": 3})).unwrap();
        assert_eq!(cmd, BoardCommand::SetCurrentPage(3));

        let cmd: BoardCommand =
            serde_json::from_value(json!({"type": "REMOVE_RSVP", "payload": 9})).unwrap();
        assert_eq!(cmd, BoardCommand::RemoveRsvp(EventId::new(9)));
    }

    #[test]
    fn only_filter_and_search_refilter() {
        assert!(BoardCommand::SetSearchQuery("run".into()).refilters());
        assert!(BoardCommand::SetFilters(FilterPatch::default()).refilters());
        assert!(!BoardCommand::SetCurrentPage(2).refilters());
        assert!(!BoardCommand::AddRsvp(EventId::new(1)).refilters());
    }
}

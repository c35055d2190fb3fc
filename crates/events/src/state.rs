//! The event store snapshot and its pure transitions.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use eventboard_core::{EventId, Reducer, Snapshot};

use crate::command::BoardCommand;
use crate::event::{Event, EventType, NewEvent};
use crate::filter::EventFilters;

/// Page size of the event listing.
pub const EVENTS_PER_PAGE: usize = 12;

/// One immutable version of the event store.
///
/// `filtered` holds positions into `events`; since `events` is append-only the
/// positions stay valid and the filtered list is an ordered subset by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    events: Vec<Event>,
    filters: EventFilters,
    filtered: Vec<usize>,
    rsvped: BTreeSet<EventId>,
    current_page: usize,
    events_per_page: usize,
    version: u64,
}

impl BoardState {
    /// Build the initial snapshot from a seed list (no filters, page 1).
    pub fn new(events: Vec<Event>, today: NaiveDate) -> Self {
        let filters = EventFilters::default();
        let filtered = filter_positions(&events, &filters, today);
        Self {
            events,
            filters,
            filtered,
            rsvped: BTreeSet::new(),
            current_page: 1,
            events_per_page: EVENTS_PER_PAGE,
            version: 0,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filters(&self) -> &EventFilters {
        &self.filters
    }

    pub fn filtered_events(&self) -> impl ExactSizeIterator<Item = &Event> + '_ {
        self.filtered.iter().map(|&pos| &self.events[pos])
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn rsvped_events(&self) -> impl Iterator<Item = EventId> + '_ {
        self.rsvped.iter().copied()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn events_per_page(&self) -> usize {
        self.events_per_page
    }

    pub fn event_by_id(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Look up an event from its string form (a route parameter).
    ///
    /// Anything that does not parse as an integer id is simply not found.
    pub fn event_by_route_param(&self, raw: &str) -> Option<&Event> {
        let id = raw.parse::<EventId>().ok()?;
        self.event_by_id(id)
    }

    pub fn is_rsvped(&self, id: EventId) -> bool {
        self.rsvped.contains(&id)
    }

    /// Distinct locations, ascending.
    pub fn unique_locations(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.events.iter().map(|e| e.location.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct event types, ascending by name.
    pub fn unique_types(&self) -> Vec<EventType> {
        let set: BTreeSet<&str> = self.events.iter().map(|e| e.event_type.as_str()).collect();
        set.into_iter().map(EventType::from).collect()
    }

    /// Events on the current page. Empty when the page is out of range.
    pub fn paginated_events(&self) -> Vec<&Event> {
        let Some(start) = self
            .current_page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.events_per_page))
        else {
            return Vec::new();
        };
        self.filtered
            .iter()
            .skip(start)
            .take(self.events_per_page)
            .map(|&pos| &self.events[pos])
            .collect()
    }

    /// `ceil(filtered / per_page)`; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.events_per_page)
    }

    /// Id the next added event will receive: one past the largest id, or 1.
    ///
    /// `None` when the largest id is already `i64::MAX`.
    pub fn next_id(&self) -> Option<EventId> {
        match self.events.iter().map(|e| e.id).max() {
            Some(max) => max.checked_next(),
            None => Some(EventId::new(1)),
        }
    }

    fn refiltered(&self, events: Vec<Event>, filters: EventFilters, today: NaiveDate) -> Self {
        let filtered = filter_positions(&events, &filters, today);
        Self {
            events,
            filters,
            filtered,
            ..self.clone()
        }
    }

    /// Append `new_event`; a no-op once ids are exhausted.
    fn reduce_add_event(&self, new_event: &NewEvent, today: NaiveDate) -> Self {
        let Some(id) = self.next_id() else {
            return self.clone();
        };
        let mut events = self.events.clone();
        events.push(new_event.clone().into_event(id));
        self.refiltered(events, self.filters.clone(), today)
    }
}

fn filter_positions(events: &[Event], filters: &EventFilters, today: NaiveDate) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, e)| filters.matches(e, today))
        .map(|(pos, _)| pos)
        .collect()
}

impl Snapshot for BoardState {
    fn version(&self) -> u64 {
        self.version
    }
}

impl Reducer for BoardState {
    type Command = BoardCommand;
    /// Calendar day used as the "today" anchor for date buckets.
    type Env = NaiveDate;

    fn reduce(&self, command: &Self::Command, today: &NaiveDate) -> Self {
        let today = *today;
        let mut next = match command {
            BoardCommand::SetFilters(patch) => {
                self.refiltered(self.events.clone(), self.filters.merge(patch), today)
            }
            BoardCommand::SetSearchQuery(query) => {
                self.refiltered(self.events.clone(), self.filters.with_search_query(query), today)
            }
            BoardCommand::SetCurrentPage(page) => Self {
                current_page: *page,
                ..self.clone()
            },
            BoardCommand::AddRsvp(id) => {
                let mut next = self.clone();
                next.rsvped.insert(*id);
                next
            }
            BoardCommand::RemoveRsvp(id) => {
                let mut next = self.clone();
                next.rsvped.remove(id);
                next
            }
            BoardCommand::AddEvent(new_event) => self.reduce_add_event(new_event, today),
        };

        if command.refilters() {
            next.current_page = 1;
        }
        // +1 per applied command.
        next.version = self.version + 1;
        next
    }
}

//! The event store: owner of the current [`BoardState`] snapshot.

use eventboard_core::{DomainError, DomainResult, EventId, Snapshot, dispatch};

use crate::clock::{Clock, SystemClock};
use crate::command::BoardCommand;
use crate::event::{Event, EventType, NewEvent};
use crate::filter::FilterPatch;
use crate::seed::SeedDataset;
use crate::state::BoardState;

/// Single-writer state holder for the event listing.
///
/// Owned by the composition root and handed to views by reference; tests build
/// as many isolated stores as they like. Every mutation goes through
/// [`EventStore::dispatch`], which swaps in a freshly reduced snapshot.
#[derive(Debug)]
pub struct EventStore<C = SystemClock> {
    state: BoardState,
    clock: C,
}

impl EventStore<SystemClock> {
    pub fn new(events: Vec<Event>) -> Self {
        Self::with_clock(events, SystemClock)
    }
}

impl<C: Clock> EventStore<C> {
    pub fn with_clock(events: Vec<Event>, clock: C) -> Self {
        let state = BoardState::new(events, clock.today());
        tracing::info!(
            events = state.events().len(),
            pages = state.total_pages(),
            "event store initialized"
        );
        Self { state, clock }
    }

    pub fn from_seed(seed: SeedDataset, clock: C) -> Self {
        Self::with_clock(seed.events, clock)
    }

    /// Current snapshot.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Apply one command and return the new snapshot version.
    pub fn dispatch(&mut self, command: BoardCommand) -> u64 {
        let today = self.clock.today();
        let version = dispatch(&mut self.state, &command, &today);
        tracing::debug!(
            command = command.name(),
            version,
            filtered = self.state.filtered_count(),
            page = self.state.current_page(),
            "command applied"
        );
        version
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.dispatch(BoardCommand::SetFilters(patch));
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(BoardCommand::SetSearchQuery(query.into()));
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.dispatch(BoardCommand::SetCurrentPage(page));
    }

    pub fn add_rsvp(&mut self, id: EventId) {
        self.dispatch(BoardCommand::AddRsvp(id));
    }

    pub fn remove_rsvp(&mut self, id: EventId) {
        self.dispatch(BoardCommand::RemoveRsvp(id));
    }

    /// Append a new event and return the id it was given.
    ///
    /// Fails without touching the store when the largest id is `i64::MAX`.
    pub fn add_event(&mut self, new_event: NewEvent) -> DomainResult<EventId> {
        let Some(id) = self.state.next_id() else {
            let max = self.state.events().iter().map(|e| e.id.get()).max();
            let max = max.unwrap_or_default();
            tracing::warn!(max, "cannot assign an event id");
            return Err(DomainError::IdsExhausted(max));
        };
        self.dispatch(BoardCommand::AddEvent(new_event));
        tracing::info!(%id, "event created");
        Ok(id)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.state.event_by_id(id)
    }

    /// Look up an event from a route parameter such as `"12"`.
    pub fn event_by_route_param(&self, raw: &str) -> Option<&Event> {
        self.state.event_by_route_param(raw)
    }

    pub fn is_rsvped(&self, id: EventId) -> bool {
        self.state.is_rsvped(id)
    }

    pub fn unique_locations(&self) -> Vec<String> {
        self.state.unique_locations()
    }

    pub fn unique_types(&self) -> Vec<EventType> {
        self.state.unique_types()
    }

    pub fn paginated_events(&self) -> Vec<&Event> {
        self.state.paginated_events()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn version(&self) -> u64 {
        self.state.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::filter::DateRange;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn draft(title: &str, ty: EventType, date: NaiveDate) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            event_type: ty,
            date,
            location: "Town Square".to_string(),
            host: "Events Team".to_string(),
            description: "Something fun is happening in the square".to_string(),
        }
    }

    fn store_with(drafts: Vec<NewEvent>) -> EventStore<FixedClock> {
        let events = drafts
            .into_iter()
            .enumerate()
            .map(|(i, d)| d.into_event(EventId::new(i as i64 + 1)))
            .collect();
        EventStore::with_clock(events, FixedClock(today()))
    }

    #[test]
    fn music_filter_scenario() {
        let mut store = store_with(vec![
            draft("Jazz", EventType::Music, today()),
            draft("Soccer", EventType::Sports, today()),
            draft("Choir", EventType::Music, today()),
        ]);
        store.set_filters(FilterPatch::event_type("Music"));
        assert_eq!(store.state().filtered_count(), 2);
        assert_eq!(store.state().current_page(), 1);
        assert_eq!(store.total_pages(), 1);
    }

    #[test]
    fn add_event_returns_assigned_id() {
        let mut store = store_with(vec![draft("Jazz", EventType::Music, today())]);
        let id = store.add_event(draft("Blues", EventType::Music, today())).unwrap();
        assert_eq!(id, EventId::new(2));
        assert_eq!(store.event(id).map(|e| e.title.as_str()), Some("Blues"));
        assert_eq!(store.event_by_route_param("2").map(|e| e.id), Some(id));
    }

    #[test]
    fn add_event_after_the_largest_id_is_rejected() {
        let raw = r#"{"events": [
            {"id": 9223372036854775807, "title": "Last", "type": "Social",
             "date": "2026-10-20", "location": "Hall", "host": "H", "description": "D"}
        ]}"#;
        let seed = SeedDataset::from_json(raw).unwrap();
        let mut store = EventStore::from_seed(seed, FixedClock(today()));

        let result = store.add_event(draft("Overflow", EventType::Social, today()));
        assert_eq!(result, Err(DomainError::IdsExhausted(i64::MAX)));
        assert_eq!(store.state().events().len(), 1);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn rsvp_round_trip() {
        let mut store = store_with(vec![draft("Jazz", EventType::Music, today())]);
        let id = EventId::new(1);
        store.add_rsvp(id);
        assert!(store.is_rsvped(id));
        store.remove_rsvp(id);
        assert!(!store.is_rsvped(id));
    }

    #[test]
    fn date_buckets_follow_the_clock() {
        let tomorrow = today().succ_opt().unwrap();
        let mut store = store_with(vec![
            draft("Now", EventType::Social, today()),
            draft("Next", EventType::Social, tomorrow),
        ]);
        store.set_filters(FilterPatch::date_range(DateRange::Today));
        let titles: Vec<_> = store.paginated_events().iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, ["Now"]);
    }

    #[test]
    fn every_dispatch_bumps_version() {
        let mut store = store_with(Vec::new());
        assert_eq!(store.version(), 0);
        store.set_search_query("yoga");
        store.set_current_page(2);
        assert_eq!(store.version(), 2);
        assert_eq!(store.dispatch(BoardCommand::SetCurrentPage(1)), 3);
    }

    #[test]
    fn bundled_seed_builds_a_store() {
        let store = EventStore::from_seed(SeedDataset::bundled().unwrap(), FixedClock(today()));
        assert_eq!(store.total_pages(), 2);
        assert_eq!(store.paginated_events().len(), 12);
        assert!(store.unique_types().contains(&EventType::Music));
    }
}

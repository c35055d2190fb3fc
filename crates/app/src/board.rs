//! Application session: owns the event store and turns routes into views.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use eventboard_core::{DomainError, DomainResult, EventId};
use eventboard_events::pagination::{self, PageItem, PageSummary};
use eventboard_events::{
    Clock, Event, EventFilters, EventStore, EventType, FilterPatch, Palette, SeedError,
};

use crate::config::{AppClock, AppConfig};
use crate::display::{friendly_date, long_date};
use crate::form::{EventForm, FormErrors};
use crate::routes::Route;

/// Flash message shown after an event is created.
pub const EVENT_CREATED_MESSAGE: &str = "Event created successfully!";

/// Listing card for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub palette: Palette,
    pub date_label: String,
    pub rsvped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView<'a> {
    pub cards: Vec<EventCard<'a>>,
    pub filters: &'a EventFilters,
    pub filters_active: bool,
    pub types: Vec<EventType>,
    pub locations: Vec<String>,
    pub result_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// Present only when there is more than one page.
    pub summary: Option<PageSummary>,
    pub pages: Vec<PageItem>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetailView<'a> {
    pub event: &'a Event,
    pub palette: Palette,
    pub date_label: String,
    pub rsvped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEventView {
    pub types: Vec<EventType>,
    /// Suggestions for the location input.
    pub locations: Vec<String>,
}

/// Confirmation shown right after an event is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCreatedView<'a> {
    pub message: &'static str,
    pub event: &'a Event,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpConfirmationView<'a> {
    pub event: &'a Event,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View<'a> {
    Home(HomeView<'a>),
    EventDetail(EventDetailView<'a>),
    CreateEvent(CreateEventView),
    EventCreated(EventCreatedView<'a>),
    RsvpConfirmation(RsvpConfirmationView<'a>),
    NotFound,
}

/// Result of pressing the RSVP button on a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpOutcome {
    pub rsvped: bool,
    /// Where to go next; cancelling an RSVP stays on the page.
    pub navigate_to: Option<Route>,
}

/// Result of a successful create-event submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: EventId,
    pub navigate_to: Route,
}

/// Why a create-event submission did not add anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormErrors),

    #[error(transparent)]
    Rejected(#[from] DomainError),
}

/// The composition root's handle on application state.
#[derive(Debug)]
pub struct EventBoard<C = AppClock> {
    store: EventStore<C>,
}

impl EventBoard<AppClock> {
    pub fn from_config(config: &AppConfig) -> Result<Self, SeedError> {
        let seed = config.load_seed()?;
        Ok(Self::new(EventStore::from_seed(seed, config.clock())))
    }
}

impl<C: Clock> EventBoard<C> {
    pub fn new(store: EventStore<C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &EventStore<C> {
        &self.store
    }

    /// Direct access for filter, search and paging controls.
    pub fn store_mut(&mut self) -> &mut EventStore<C> {
        &mut self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.store.clock().today()
    }

    /// The "Clear All" action: drop every filter and the search query.
    pub fn clear_filters(&mut self) {
        self.store.set_filters(FilterPatch::clear_all());
        self.store.set_search_query("");
    }

    /// Move to `page` if it exists; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.store.total_pages() {
            return false;
        }
        self.store.set_current_page(page);
        true
    }

    pub fn previous_page(&mut self) -> bool {
        let current = self.store.state().current_page();
        pagination::has_previous(current) && self.go_to_page(current - 1)
    }

    pub fn next_page(&mut self) -> bool {
        let current = self.store.state().current_page();
        self.go_to_page(current.saturating_add(1))
    }

    pub fn open(&self, path: &str) -> View<'_> {
        self.view(&Route::parse(path))
    }

    pub fn view(&self, route: &Route) -> View<'_> {
        match route {
            Route::Home => View::Home(self.home()),
            Route::EventDetail(raw) => match self.store.event_by_route_param(raw) {
                Some(event) => View::EventDetail(EventDetailView {
                    event,
                    palette: event.event_type.palette(),
                    date_label: long_date(event.date),
                    rsvped: self.store.is_rsvped(event.id),
                }),
                None => View::NotFound,
            },
            Route::CreateEvent => View::CreateEvent(CreateEventView {
                types: EventType::CATALOG.to_vec(),
                locations: self.store.unique_locations(),
            }),
            Route::EventCreated(raw) => match self.store.event_by_route_param(raw) {
                Some(event) => View::EventCreated(EventCreatedView {
                    message: EVENT_CREATED_MESSAGE,
                    event,
                    date_label: long_date(event.date),
                }),
                None => View::NotFound,
            },
            Route::RsvpConfirmation(raw) => match self.store.event_by_route_param(raw) {
                Some(event) => View::RsvpConfirmation(RsvpConfirmationView {
                    event,
                    date_label: long_date(event.date),
                }),
                None => View::NotFound,
            },
            Route::NotFound => View::NotFound,
        }
    }

    pub fn home(&self) -> HomeView<'_> {
        let state = self.store.state();
        let today = self.today();
        let current = state.current_page();
        let total_pages = state.total_pages();

        let cards = state
            .paginated_events()
            .into_iter()
            .map(|event| EventCard {
                event,
                palette: event.event_type.palette(),
                date_label: friendly_date(event.date, today),
                rsvped: state.is_rsvped(event.id),
            })
            .collect();

        let summary = pagination::should_paginate(total_pages).then(|| {
            PageSummary::new(current, state.events_per_page(), state.filtered_count())
        });

        HomeView {
            cards,
            filters: state.filters(),
            filters_active: state.filters().is_active(),
            types: state.unique_types(),
            locations: state.unique_locations(),
            result_count: state.filtered_count(),
            current_page: current,
            total_pages,
            summary,
            pages: pagination::visible_pages(current, total_pages),
            has_previous: pagination::has_previous(current),
            has_next: pagination::has_next(current, total_pages),
        }
    }

    /// Toggle the guest's RSVP for an existing event.
    pub fn toggle_rsvp(&mut self, id: EventId) -> DomainResult<RsvpOutcome> {
        if self.store.event(id).is_none() {
            return Err(DomainError::not_found());
        }

        if self.store.is_rsvped(id) {
            self.store.remove_rsvp(id);
            tracing::info!(%id, "rsvp cancelled");
            Ok(RsvpOutcome {
                rsvped: false,
                navigate_to: None,
            })
        } else {
            self.store.add_rsvp(id);
            tracing::info!(%id, "rsvp added");
            Ok(RsvpOutcome {
                rsvped: true,
                navigate_to: Some(Route::rsvp_confirmation(id)),
            })
        }
    }

    /// Validate and add a new event, then point at its confirmation view.
    /// A failed submission leaves the store untouched.
    pub fn submit_event(&mut self, form: &EventForm) -> Result<Submission, SubmitError> {
        let new_event = form.validate(self.today()).inspect_err(|errors| {
            tracing::debug!(invalid_fields = errors.len(), "event form rejected");
        })?;
        let id = self.store.add_event(new_event)?;
        Ok(Submission {
            id,
            navigate_to: Route::event_created(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventboard_events::{FixedClock, NewEvent};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn board(count: usize) -> EventBoard<FixedClock> {
        let events = (1..=count)
            .map(|i| {
                NewEvent {
                    title: format!("Gathering {i}"),
                    event_type: if i % 2 == 0 { EventType::Music } else { EventType::Social },
                    date: today(),
                    location: if i % 3 == 0 { "Library" } else { "Park" }.to_string(),
                    host: "Neighbours".to_string(),
                    description: "A friendly community gathering".to_string(),
                }
                .into_event(EventId::new(i as i64))
            })
            .collect();
        EventBoard::new(EventStore::with_clock(events, FixedClock(today())))
    }

    #[test]
    fn home_lists_first_page_with_labels() {
        let board = board(15);
        let home = board.home();
        assert_eq!(home.cards.len(), 12);
        assert_eq!(home.cards[0].date_label, "Today");
        assert_eq!(home.cards[1].palette, Palette::Purple);
        assert_eq!(home.total_pages, 2);
        assert_eq!(home.pages, [PageItem::Page(1), PageItem::Page(2)]);
        assert_eq!(
            home.summary.map(|s| s.to_string()).as_deref(),
            Some("Showing 1 to 12 of 15 events")
        );
        assert!(!home.has_previous);
        assert!(home.has_next);
        assert!(!home.filters_active);
    }

    #[test]
    fn single_page_has_no_summary() {
        let home_board = board(3);
        let home = home_board.home();
        assert_eq!(home.summary, None);
        assert!(home.pages.is_empty());
        assert_eq!(home.types, [EventType::Music, EventType::Social]);
        assert_eq!(home.locations, ["Library", "Park"]);
    }

    #[test]
    fn paging_stays_in_bounds() {
        let mut board = board(15);
        assert!(!board.previous_page());
        assert!(board.next_page());
        assert_eq!(board.store().state().current_page(), 2);
        assert!(!board.next_page());
        assert!(!board.go_to_page(0));
        assert!(!board.go_to_page(3));
        assert!(board.previous_page());
        assert_eq!(board.store().state().current_page(), 1);
    }

    #[test]
    fn huge_stored_page_renders_an_empty_listing() {
        let mut board = board(15);
        board.store_mut().set_current_page(usize::MAX);
        let home = board.home();
        assert!(home.cards.is_empty());
        assert_eq!(home.current_page, usize::MAX);
        assert_eq!(home.summary, Some(PageSummary { first: 15, last: 15, total: 15 }));
        assert_eq!(home.pages, [PageItem::Page(1), PageItem::Gap, PageItem::Page(2)]);
        assert!(home.has_previous);
        assert!(!home.has_next);
        assert!(!board.next_page());
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut board = board(6);
        board.store_mut().set_filters(FilterPatch::event_type("Music"));
        board.store_mut().set_search_query("gathering");
        assert!(board.home().filters_active);
        assert_eq!(board.home().result_count, 3);

        board.clear_filters();
        let home = board.home();
        assert!(!home.filters_active);
        assert_eq!(home.result_count, 6);
    }

    #[test]
    fn detail_route_resolves_or_is_not_found() {
        let board = board(2);
        match board.open("/event/2") {
            View::EventDetail(detail) => {
                assert_eq!(detail.event.id, EventId::new(2));
                assert_eq!(detail.date_label, "Sunday, October 18, 2026");
                assert!(!detail.rsvped);
            }
            other => panic!("expected detail view, got {other:?}"),
        }
        assert_eq!(board.open("/event/99"), View::NotFound);
        assert_eq!(board.open("/event/two"), View::NotFound);
        assert_eq!(board.open("/rsvp-confirmation/99"), View::NotFound);
        assert_eq!(board.open("/nowhere"), View::NotFound);
    }

    #[test]
    fn create_view_offers_catalog_and_known_locations() {
        let board = board(3);
        match board.open("/create") {
            View::CreateEvent(view) => {
                assert_eq!(view.types.len(), 7);
                assert_eq!(view.types[0], EventType::Fitness);
                assert_eq!(view.locations, ["Library", "Park"]);
            }
            other => panic!("expected create view, got {other:?}"),
        }
    }

    #[test]
    fn toggle_rsvp_adds_then_cancels() {
        let mut board = board(2);
        let id = EventId::new(1);

        let outcome = board.toggle_rsvp(id).unwrap();
        assert!(outcome.rsvped);
        assert_eq!(outcome.navigate_to, Some(Route::rsvp_confirmation(id)));
        assert!(board.store().is_rsvped(id));
        assert!(matches!(board.open("/rsvp-confirmation/1"), View::RsvpConfirmation(_)));

        let outcome = board.toggle_rsvp(id).unwrap();
        assert!(!outcome.rsvped);
        assert_eq!(outcome.navigate_to, None);
        assert!(!board.store().is_rsvped(id));
    }

    #[test]
    fn toggle_rsvp_for_unknown_event_is_not_found() {
        let mut board = board(1);
        assert_eq!(board.toggle_rsvp(EventId::new(7)), Err(DomainError::NotFound));
        assert_eq!(board.store().version(), 0);
    }

    #[test]
    fn submit_event_adds_and_navigates() {
        let mut board = board(4);
        let form = EventForm {
            title: "Lantern Walk".to_string(),
            event_type: "Social".to_string(),
            date: "2026-10-30".to_string(),
            location: "Old Town".to_string(),
            host: "Heritage Society".to_string(),
            description: "An evening stroll past the oldest buildings in town.".to_string(),
        };
        let submission = board.submit_event(&form).unwrap();
        assert_eq!(submission.id, EventId::new(5));
        assert_eq!(submission.navigate_to, Route::EventCreated("5".to_string()));
        match board.view(&submission.navigate_to) {
            View::EventCreated(created) => {
                assert_eq!(created.message, EVENT_CREATED_MESSAGE);
                assert_eq!(created.event.title, "Lantern Walk");
                assert_eq!(created.date_label, "Friday, October 30, 2026");
            }
            other => panic!("expected created view, got {other:?}"),
        }
        assert_eq!(board.open("/event-created/99"), View::NotFound);
    }

    #[test]
    fn submission_is_rejected_once_ids_run_out() {
        let last = NewEvent {
            title: "Last".to_string(),
            event_type: EventType::Social,
            date: today(),
            location: "Hall".to_string(),
            host: "Neighbours".to_string(),
            description: "The final gathering of the season".to_string(),
        }
        .into_event(EventId::new(i64::MAX));
        let mut board = EventBoard::new(EventStore::with_clock(vec![last], FixedClock(today())));
        let form = EventForm {
            title: "One More".to_string(),
            event_type: "Social".to_string(),
            date: "2026-10-30".to_string(),
            location: "Hall".to_string(),
            host: "Neighbours".to_string(),
            description: "Squeezing in one more gathering.".to_string(),
        };
        assert_eq!(
            board.submit_event(&form),
            Err(SubmitError::Rejected(DomainError::IdsExhausted(i64::MAX)))
        );
        assert_eq!(board.store().state().events().len(), 1);
    }

    #[test]
    fn invalid_submission_leaves_store_untouched() {
        let mut board = board(4);
        let Err(SubmitError::Invalid(errors)) = board.submit_event(&EventForm::default()) else {
            panic!("expected form errors");
        };
        assert!(!errors.is_empty());
        assert_eq!(board.store().state().events().len(), 4);
        assert_eq!(board.store().version(), 0);
    }
}

//! `eventboard-events`: the event store.
//!
//! Owns the list of community events, the active filters, pagination and the
//! guest's RSVPs. Every mutation is a tagged [`BoardCommand`] reduced into a new
//! [`BoardState`] snapshot; derived state (the filtered list) is recomputed on
//! each change.

pub mod clock;
pub mod command;
pub mod event;
pub mod filter;
pub mod pagination;
pub mod seed;
pub mod state;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::BoardCommand;
pub use event::{Event, EventType, NewEvent, Palette};
pub use filter::{DateRange, EventFilters, FilterPatch};
pub use pagination::{PageItem, PageSummary, visible_pages};
pub use seed::{SeedDataset, SeedError};
pub use state::{BoardState, EVENTS_PER_PAGE};
pub use store::EventStore;

pub use eventboard_core::EventId;

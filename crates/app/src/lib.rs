//! `eventboard-app`
//!
//! **Responsibility:** headless application shell around the event store.
//!
//! This crate provides:
//! - Configuration from the environment
//! - Route parsing (`/`, `/event/:id`, `/create`, `/event-created/:id`,
//!   `/rsvp-confirmation/:id`)
//! - Create-event form validation
//! - View models and a plain-text renderer
//!
//! The store remains the single authority; views only read snapshots and
//! dispatch commands through [`EventBoard`].

pub mod board;
pub mod config;
pub mod display;
pub mod form;
pub mod render;
pub mod routes;

pub use board::{EventBoard, RsvpOutcome, SubmitError, Submission, View};
pub use config::{AppClock, AppConfig, ConfigError};
pub use form::{EventForm, FormErrors, FormField};
pub use routes::Route;

//! iCalendar text rendering.

mod generate;

pub use generate::{generate_calendar, generate_event};

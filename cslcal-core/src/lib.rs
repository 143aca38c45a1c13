//! Schedule-to-calendar core for cslcal.
//!
//! This crate turns a parsed league schedule into per-team iCalendar
//! documents: the input model, the match-to-event formatter, the per-team
//! grouping and document builder, and the text rendering.

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod schedule;
pub mod timezone;

pub use calendar::{TeamCalendar, build_team_calendars};
pub use config::BuildConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use event::MatchEvent;
pub use schedule::{LeagueSchedule, Match};

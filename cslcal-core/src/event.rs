//! Match-to-event formatting.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::BuildConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::schedule::Match;

/// One match as it appears in a specific team's calendar document.
///
/// Derived at generation time, never persisted on its own. A match shared
/// by two teams yields two independent instances whose UIDs differ only in
/// the team identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvent {
    pub uid: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    /// Venue, or empty when the match has none. Always emitted.
    pub location: String,
    pub description: String,
}

impl MatchEvent {
    /// Build the event for one (team, match) pair.
    pub fn build(
        league_id: &str,
        team_id: &str,
        season: i32,
        m: &Match,
        config: &BuildConfig,
    ) -> ScheduleResult<Self> {
        if m.round == 0 {
            return Err(ScheduleError::InvalidRound);
        }

        let date = NaiveDate::parse_from_str(&m.date, "%Y-%m-%d")
            .map_err(|_| ScheduleError::InvalidDate(m.date.clone()))?;
        let time = NaiveTime::parse_from_str(&m.time, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(m.time.clone()))?;

        let start = NaiveDateTime::new(date, time);
        // Fixed duration, no DST adjustment: the timezone is fixed-offset.
        let end = start + config.match_duration;

        let uid = format!(
            "{}-{}-{}-r{:02}@{}",
            league_id, season, team_id, m.round, config.uid_domain
        );

        let mut description = format!("{}{} 第{}轮", season, config.league_label, m.round);
        if let Some(note) = m.note.as_deref().filter(|n| !n.is_empty()) {
            description.push_str(&format!("（{}）", note));
        }

        Ok(MatchEvent {
            uid,
            start,
            end,
            summary: format!("{} vs {}", m.home, m.away),
            location: m.venue.clone().unwrap_or_default(),
            description,
        })
    }
}

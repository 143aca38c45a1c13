//! Per-team calendar documents.

use crate::config::BuildConfig;
use crate::error::ScheduleResult;
use crate::event::MatchEvent;
use crate::schedule::LeagueSchedule;
use crate::timezone::TimezoneDef;

/// The complete calendar produced for one team in one league-season.
///
/// Each document exclusively owns its event list; a match shared by two
/// teams produces two independent event instances.
#[derive(Debug, Clone)]
pub struct TeamCalendar {
    /// Team display name, verbatim from the match records.
    pub team: String,
    /// X-WR-CALNAME value: `<team> <season>赛程`.
    pub name: String,
    pub timezone: TimezoneDef,
    /// Events sorted by (date, time) ascending.
    pub events: Vec<MatchEvent>,
}

/// Build one calendar per team that appears as home or away in at least
/// one match, in ascending team-name order.
///
/// Fails on the first match that cannot be formatted, so a bad match
/// anywhere in the schedule yields no documents at all.
pub fn build_team_calendars(
    schedule: &LeagueSchedule,
    config: &BuildConfig,
) -> ScheduleResult<Vec<TeamCalendar>> {
    let timezone = TimezoneDef::for_tzid(&schedule.timezone);

    let mut calendars = Vec::new();
    for (team, matches) in schedule.matches_by_team() {
        let team_id = schedule.team_id(team);

        let mut events = matches
            .into_iter()
            .map(|m| MatchEvent::build(&schedule.league_id, team_id, schedule.season, m, config))
            .collect::<ScheduleResult<Vec<_>>>()?;

        // Stable sort: same-kickoff matches keep their input order.
        events.sort_by_key(|e| e.start);

        calendars.push(TeamCalendar {
            team: team.to_string(),
            name: format!("{} {}赛程", team, schedule.season),
            timezone: timezone.clone(),
            events,
        });
    }

    Ok(calendars)
}

//! League schedule input model.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::error::ScheduleResult;

fn default_timezone() -> String {
    "Asia/Shanghai".to_string()
}

/// One season's full match list for one competition.
///
/// League id and season together determine the set of output files.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueSchedule {
    pub league: String,
    #[serde(rename = "leagueId")]
    pub league_id: String,
    pub season: i32,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Team display name → stable identifier. Teams missing from the map
    /// use their display name as identifier.
    #[serde(default)]
    pub teams: HashMap<String, String>,
    pub matches: Vec<Match>,
}

/// A single scheduled game between two named teams.
#[derive(Debug, Clone, Deserialize)]
pub struct Match {
    pub round: u32,
    pub date: String,
    pub time: String,
    pub home: String,
    pub away: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl LeagueSchedule {
    pub fn from_json(content: &str) -> ScheduleResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Identifier for a team, falling back to its display name.
    pub fn team_id<'a>(&'a self, team: &'a str) -> &'a str {
        self.teams.get(team).map(String::as_str).unwrap_or(team)
    }

    /// Group matches by participating team, names verbatim from the match
    /// records. Every match lands in its home and its away team's list;
    /// within a list, matches keep their input order.
    pub fn matches_by_team(&self) -> BTreeMap<&str, Vec<&Match>> {
        let mut grouped: BTreeMap<&str, Vec<&Match>> = BTreeMap::new();

        for m in &self.matches {
            grouped.entry(m.home.as_str()).or_default().push(m);
            grouped.entry(m.away.as_str()).or_default().push(m);
        }

        grouped
    }
}

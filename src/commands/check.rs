use std::path::Path;

use anyhow::Result;
use cslcal_core::{BuildConfig, LeagueSchedule, TeamCalendar, build_team_calendars};
use owo_colors::OwoColorize;

use crate::discover;

pub fn run(data_dir: &Path) -> Result<()> {
    let files = discover::json_files(data_dir)?;

    if files.is_empty() {
        anyhow::bail!("No league files found under {}", data_dir.display());
    }

    let config = BuildConfig::default();
    let mut failed = 0;

    for path in &files {
        println!("{}", path.display());

        match build(path, &config) {
            Ok((schedule, calendars)) => {
                let events: usize = calendars.iter().map(|c| c.events.len()).sum();
                println!(
                    "  {} season {}: {} matches, {} calendars, {} events",
                    schedule.league,
                    schedule.season,
                    schedule.matches.len(),
                    calendars.len(),
                    events
                );

                for cal in &calendars {
                    println!(
                        "    {}/{}.ics ({} events)",
                        schedule.league_id,
                        cal.team,
                        cal.events.len()
                    );
                }
            }
            Err(e) => {
                println!("  {}", e.to_string().red());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} league file(s) failed", failed, files.len());
    }

    Ok(())
}

fn build(
    path: &Path,
    config: &BuildConfig,
) -> cslcal_core::ScheduleResult<(LeagueSchedule, Vec<TeamCalendar>)> {
    let schedule = LeagueSchedule::load(path)?;
    let calendars = build_team_calendars(&schedule, config)?;
    Ok((schedule, calendars))
}

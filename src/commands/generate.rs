use std::path::Path;

use anyhow::{Context, Result};
use cslcal_core::{BuildConfig, LeagueSchedule, build_team_calendars, ics};
use owo_colors::OwoColorize;

use crate::discover;

pub fn run(data_dir: &Path, out_dir: &Path) -> Result<()> {
    let files = discover::json_files(data_dir)?;

    if files.is_empty() {
        anyhow::bail!(
            "No league files found under {}.\n\
            Put one .json file per league-season there, then re-run.",
            data_dir.display()
        );
    }

    let config = BuildConfig::default();
    let mut failed = 0;

    for path in &files {
        println!("Processing {}", path.display());

        match build_league(path, &config) {
            Ok((league_id, documents)) => {
                write_league(out_dir, &league_id, &documents)?;
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

/// Build every team document for one league file. Nothing is written until
/// the whole file has built cleanly, so a bad match anywhere blocks all of
/// its league's output.
fn build_league(path: &Path, config: &BuildConfig) -> Result<(String, Vec<(String, String)>)> {
    let schedule = LeagueSchedule::load(path)
        .with_context(|| format!("Failed to read league file {}", path.display()))?;

    let calendars = build_team_calendars(&schedule, config)
        .with_context(|| format!("Failed to build calendars for {}", path.display()))?;

    let documents = calendars
        .iter()
        .map(|cal| (cal.team.clone(), ics::generate_calendar(cal, config)))
        .collect();

    Ok((schedule.league_id, documents))
}

/// Write `<out_dir>/<league_id>/<team>.ics` for every document.
/// Filesystem failures abort the whole run.
fn write_league(out_dir: &Path, league_id: &str, documents: &[(String, String)]) -> Result<()> {
    let league_dir = out_dir.join(league_id);
    std::fs::create_dir_all(&league_dir)
        .with_context(|| format!("Failed to create output directory {}", league_dir.display()))?;

    for (team, content) in documents {
        let ics_path = league_dir.join(format!("{}.ics", team));
        std::fs::write(&ics_path, content)
            .with_context(|| format!("Failed to write {}", ics_path.display()))?;
        println!("  {}", ics_path.display());
    }

    Ok(())
}

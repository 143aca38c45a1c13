//! Calendar document rendering.
//!
//! Output is CRLF-terminated, one property per line, and built wholly in
//! memory before being handed to the writer. Values are emitted verbatim:
//! input is assumed to be pre-sanitized plain text.

use crate::calendar::TeamCalendar;
use crate::config::BuildConfig;
use crate::event::MatchEvent;
use crate::timezone::TimezoneDef;

/// Render one VEVENT block.
pub fn generate_event(event: &MatchEvent, tzid: &str) -> String {
    let lines = [
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid),
        format!("DTSTART;TZID={}:{}", tzid, event.start.format("%Y%m%dT%H%M%S")),
        format!("DTEND;TZID={}:{}", tzid, event.end.format("%Y%m%dT%H%M%S")),
        format!("SUMMARY:{}", event.summary),
        format!("LOCATION:{}", event.location),
        format!("DESCRIPTION:{}", event.description),
        "STATUS:CONFIRMED".to_string(),
        "END:VEVENT".to_string(),
    ];

    let mut block = lines.join("\r\n");
    block.push_str("\r\n");
    block
}

/// Render the standard-only VTIMEZONE block.
fn generate_vtimezone(tz: &TimezoneDef) -> String {
    format!(
        "BEGIN:VTIMEZONE\r\n\
         TZID:{}\r\n\
         BEGIN:STANDARD\r\n\
         DTSTART:19700101T000000\r\n\
         TZOFFSETFROM:{offset}\r\n\
         TZOFFSETTO:{offset}\r\n\
         TZNAME:{}\r\n\
         END:STANDARD\r\n\
         END:VTIMEZONE\r\n",
        tz.tzid,
        tz.name,
        offset = tz.offset,
    )
}

/// Render the complete document for one team: header, timezone block,
/// events in sorted order, footer.
pub fn generate_calendar(calendar: &TeamCalendar, config: &BuildConfig) -> String {
    let mut out = String::new();

    out.push_str("BEGIN:VCALENDAR\r\n");
    out.push_str("VERSION:2.0\r\n");
    out.push_str(&format!("PRODID:{}\r\n", config.product_id));
    out.push_str("CALSCALE:GREGORIAN\r\n");
    out.push_str("METHOD:PUBLISH\r\n");
    out.push_str(&format!("X-WR-CALNAME:{}\r\n", calendar.name));
    out.push_str(&format!("X-WR-TIMEZONE:{}\r\n", calendar.timezone.tzid));
    out.push_str(&generate_vtimezone(&calendar.timezone));

    for event in &calendar.events {
        out.push_str(&generate_event(event, &calendar.timezone.tzid));
    }

    out.push_str("END:VCALENDAR\r\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_team_calendars;
    use crate::schedule::LeagueSchedule;
    use icalendar::parser::{read_calendar, unfold};

    fn example_league() -> LeagueSchedule {
        LeagueSchedule::from_json(
            r#"{
                "league": "中超联赛",
                "leagueId": "csl",
                "season": 2024,
                "teams": {},
                "matches": [
                    {"round": 1, "date": "2024-03-01", "time": "15:00",
                     "home": "A", "away": "B", "venue": "Stadium X"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_example_document_byte_for_byte() {
        let config = BuildConfig::default();
        let calendars = build_team_calendars(&example_league(), &config).unwrap();
        let a = calendars.iter().find(|c| c.team == "A").unwrap();

        let expected = concat!(
            "BEGIN:VCALENDAR\r\n",
            "VERSION:2.0\r\n",
            "PRODID:-//CSL Calendar//CN\r\n",
            "CALSCALE:GREGORIAN\r\n",
            "METHOD:PUBLISH\r\n",
            "X-WR-CALNAME:A 2024赛程\r\n",
            "X-WR-TIMEZONE:Asia/Shanghai\r\n",
            "BEGIN:VTIMEZONE\r\n",
            "TZID:Asia/Shanghai\r\n",
            "BEGIN:STANDARD\r\n",
            "DTSTART:19700101T000000\r\n",
            "TZOFFSETFROM:+0800\r\n",
            "TZOFFSETTO:+0800\r\n",
            "TZNAME:CST\r\n",
            "END:STANDARD\r\n",
            "END:VTIMEZONE\r\n",
            "BEGIN:VEVENT\r\n",
            "UID:csl-2024-A-r01@csl-calendar\r\n",
            "DTSTART;TZID=Asia/Shanghai:20240301T150000\r\n",
            "DTEND;TZID=Asia/Shanghai:20240301T170000\r\n",
            "SUMMARY:A vs B\r\n",
            "LOCATION:Stadium X\r\n",
            "DESCRIPTION:2024中超联赛 第1轮\r\n",
            "STATUS:CONFIRMED\r\n",
            "END:VEVENT\r\n",
            "END:VCALENDAR\r\n",
        );

        assert_eq!(generate_calendar(a, &config), expected);
    }

    #[test]
    fn test_two_documents_share_content_but_not_uid() {
        let config = BuildConfig::default();
        let calendars = build_team_calendars(&example_league(), &config).unwrap();

        assert_eq!(calendars.len(), 2);
        let a = generate_calendar(&calendars[0], &config);
        let b = generate_calendar(&calendars[1], &config);

        assert!(a.contains("UID:csl-2024-A-r01@csl-calendar"));
        assert!(b.contains("UID:csl-2024-B-r01@csl-calendar"));
        assert!(a.contains("SUMMARY:A vs B") && b.contains("SUMMARY:A vs B"));
    }

    #[test]
    fn test_crlf_throughout_including_final_line() {
        let config = BuildConfig::default();
        let calendars = build_team_calendars(&example_league(), &config).unwrap();
        let content = generate_calendar(&calendars[0], &config);

        assert!(content.ends_with("\r\n"));
        // Every linefeed is part of a CRLF pair.
        assert_eq!(content.matches('\n').count(), content.matches("\r\n").count());
    }

    #[test]
    fn test_missing_venue_still_emits_location_line() {
        let mut schedule = example_league();
        schedule.matches[0].venue = None;

        let config = BuildConfig::default();
        let calendars = build_team_calendars(&schedule, &config).unwrap();
        let content = generate_calendar(&calendars[0], &config);

        assert!(content.contains("LOCATION:\r\n"));
    }

    #[test]
    fn test_output_parses_as_valid_icalendar() {
        let config = BuildConfig::default();
        let calendars = build_team_calendars(&example_league(), &config).unwrap();
        let content = generate_calendar(&calendars[0], &config);

        let unfolded = unfold(&content);
        let parsed = read_calendar(&unfolded).expect("output should parse");

        let names: Vec<_> = parsed.components.iter().map(|c| c.name.as_ref()).collect();
        assert_eq!(names, vec!["VTIMEZONE", "VEVENT"]);

        let vevent = &parsed.components[1];
        assert_eq!(
            vevent.find_prop("UID").unwrap().val.as_ref(),
            "csl-2024-A-r01@csl-calendar"
        );
        assert_eq!(vevent.find_prop("STATUS").unwrap().val.as_ref(), "CONFIRMED");
    }

    #[test]
    fn test_balanced_begin_end_lines() {
        let config = BuildConfig::default();
        let calendars = build_team_calendars(&example_league(), &config).unwrap();
        let content = generate_calendar(&calendars[0], &config);

        let begins = content.lines().filter(|l| l.starts_with("BEGIN:")).count();
        let ends = content.lines().filter(|l| l.starts_with("END:")).count();
        assert_eq!(begins, ends);
    }
}

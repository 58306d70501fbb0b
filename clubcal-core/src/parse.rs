//! Parsing of the pipe-delimited events file.
//!
//! Each non-blank, non-comment line holds `date|time|title|category`.
//! Fields are trimmed, extra fields are ignored and lines with fewer than
//! four fields are dropped.

use tracing::warn;

use crate::event::{Category, Event};

const FIELD_SEPARATOR: char = '|';
const REQUIRED_FIELDS: usize = 4;

/// Parse the whole file, keeping file order.
pub fn parse_events(text: &str) -> Vec<Event> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

/// Parse one line. `line_number` is 1-based and only used for diagnostics.
fn parse_line(line_number: usize, line: &str) -> Option<Event> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < REQUIRED_FIELDS {
        warn!(
            line = line_number,
            fields = fields.len(),
            "Skipping malformed event line"
        );
        return None;
    }

    let time = match fields[1] {
        "" => None,
        time => Some(time.to_string()),
    };

    Some(Event {
        date: fields[0].to_string(),
        time,
        title: fields[2].to_string(),
        tag: fields[3].to_string(),
        category: Category::from_tag(fields[3]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields_positionally_and_trims_them() {
        let events = parse_events("  2024-03-15 | 18:00 |  Game Night |jeux  ");

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.date, "2024-03-15");
        assert_eq!(event.time.as_deref(), Some("18:00"));
        assert_eq!(event.title, "Game Night");
        assert_eq!(event.category, Category::Games);
    }

    #[test]
    fn blank_time_means_all_day() {
        let events = parse_events("2024-03-15|  |Open Table|jdr");
        assert_eq!(events[0].time, None);
        assert_eq!(events[0].label(), "Open Table");
    }

    #[test]
    fn skips_comments_blank_lines_and_short_lines() {
        let text = "\
# Club events
   # indented comment

2024-03-01|20:00|Draft|magic
2024-03-02|Missing fields
2024-03-03|19:00|Too short
\t
2024-03-04||Tournament|special
";
        let events = parse_events(text);

        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Draft", "Tournament"]);
    }

    #[test]
    fn ignores_fields_after_the_fourth() {
        let events = parse_events("2024-03-15|18:00|Game Night|jeux|room 2|extra");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, Category::Games);
    }

    #[test]
    fn keeps_duplicate_dates_in_file_order() {
        let events =
            parse_events("2024-03-15|18:00|Game Night|jeux\n2024-03-15|  |Open Table|jdr");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Game Night");
        assert_eq!(events[1].title, "Open Table");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let events =
            parse_events("2024-03-15|18:00|Game Night|jeux\r\n2024-03-16||Quiz|special\r\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].category, Category::Special);
    }

    #[test]
    fn strips_a_leading_byte_order_mark() {
        let events =
            parse_events("\u{feff}2024-03-15|18:00|Game Night|jeux\n2024-03-16||Quiz|special");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, "2024-03-15");
    }

    #[test]
    fn keeps_the_category_tag_as_written() {
        let events = parse_events("2024-03-15|18:00|Game Night|games");

        assert_eq!(events[0].tag, "games");
        assert_eq!(events[0].category, Category::Games);
    }

    #[test]
    fn empty_input_yields_no_events() {
        assert!(parse_events("").is_empty());
    }
}

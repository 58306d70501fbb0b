//! Terminal rendering of a month using owo_colors.

use clubcal_core::render::{DayCell, EventEntry, RenderTarget};
use owo_colors::OwoColorize;

const WEEKDAY_HEADER: [&str; 7] = ["Lu", "Ma", "Me", "Je", "Ve", "Sa", "Di"];

/// Collects a rendered month and prints it as a grid followed by an agenda.
#[derive(Default)]
pub struct TerminalTarget {
    title: String,
    weeks: Vec<Vec<(DayCell, Vec<EventEntry>)>>,
}

impl RenderTarget for TerminalTarget {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn clear_grid(&mut self) {
        self.weeks.clear();
    }

    fn begin_week(&mut self) {
        self.weeks.push(Vec::new());
    }

    fn append_day_cell(&mut self, cell: DayCell) {
        if let Some(week) = self.weeks.last_mut() {
            week.push((cell, Vec::new()));
        }
    }

    fn append_event_entry(&mut self, entry: &EventEntry) {
        if let Some((_, entries)) = self.weeks.last_mut().and_then(|w| w.last_mut()) {
            entries.push(entry.clone());
        }
    }
}

impl TerminalTarget {
    pub fn render(&self) -> String {
        let mut lines = vec![self.title.bold().to_string()];

        let header: Vec<String> = WEEKDAY_HEADER.iter().map(|d| format!("{:>3}", d)).collect();
        lines.push(header.join(" ").dimmed().to_string());

        for week in &self.weeks {
            let cells: Vec<String> = week
                .iter()
                .map(|(cell, entries)| render_cell(cell, !entries.is_empty()))
                .collect();
            lines.push(cells.join(" "));
        }

        lines.push(String::new());
        lines.extend(self.render_agenda());

        lines.join("\n")
    }

    /// One line per event, grouped under its day number.
    fn render_agenda(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let days_with_events = self
            .weeks
            .iter()
            .flatten()
            .filter(|(cell, entries)| cell.in_month && !entries.is_empty());

        for (cell, entries) in days_with_events {
            let day = cell.day.map(|d| format!("{:>3}", d)).unwrap_or_default();
            for (i, entry) in entries.iter().enumerate() {
                let prefix = if i == 0 {
                    day.bold().to_string()
                } else {
                    "   ".to_string()
                };
                let tag = format!("[{}]", entry.tag);
                lines.push(format!(
                    "{}  {} {} {}",
                    prefix,
                    entry.category.glyph(),
                    entry.label,
                    tag.dimmed()
                ));
            }
        }

        if lines.is_empty() {
            lines.push("No events this month".dimmed().to_string());
        }

        lines
    }
}

fn render_cell(cell: &DayCell, has_events: bool) -> String {
    let Some(day) = cell.day else {
        return "   ".to_string();
    };

    let text = format!("{:>3}", day);
    if !cell.in_month {
        text.dimmed().to_string()
    } else if has_events {
        text.yellow().bold().to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubcal_core::CalendarSession;
    use clubcal_core::month::MonthCursor;
    use clubcal_core::parse::parse_events;

    fn render(events: &str) -> String {
        let session =
            CalendarSession::new(parse_events(events), MonthCursor::new(2024, 1).unwrap());
        let mut target = TerminalTarget::default();
        session.render(&mut target);
        target.render()
    }

    #[test]
    fn prints_title_header_and_one_line_per_week() {
        let output = render("");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("Février 2024"));
        assert!(lines[1].contains("Lu"));
        // title + header + 5 weeks + blank + agenda
        assert_eq!(lines.len(), 9);
        assert!(lines[2].starts_with("            ")); // three empty cells
        assert!(lines[8].contains("No events this month"));
    }

    #[test]
    fn lists_events_under_their_day() {
        let output = render("2024-02-10|14:00|Draft|magic\n2024-02-10||Board games|jeux");

        assert!(output.contains("🃏 14:00 - Draft"));
        assert!(output.contains("🎲 Board games"));
        assert!(!output.contains("No events this month"));
    }

    #[test]
    fn agenda_shows_the_tag_as_written() {
        let output = render("2024-02-10||Board games|games");
        assert!(output.contains("[games]"));
    }
}

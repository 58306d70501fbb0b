//! Static HTML page output.
//!
//! The page comes from a template holding two placeholders: one for the
//! month title and one for the rows of the calendar table body. A template
//! without one of them cannot be rendered into.

use crate::render::{DayCell, EventEntry, RenderTarget, Surface};

pub const TITLE_PLACEHOLDER: &str = "{{currentMonth}}";
pub const GRID_PLACEHOLDER: &str = "{{calendarBody}}";

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<title>Calendrier</title>
<link rel="stylesheet" href="assets/calendar.css">
</head>
<body>
<h2 id="currentMonth">{{currentMonth}}</h2>
<table class="calendar">
<thead>
<tr><th>Lun</th><th>Mar</th><th>Mer</th><th>Jeu</th><th>Ven</th><th>Sam</th><th>Dim</th></tr>
</thead>
<tbody id="calendarBody">
{{calendarBody}}
</tbody>
</table>
</body>
</html>
"#;

const FILLER_OPACITY: &str = "0.3";
const ICON_HEIGHT: &str = "16px";

#[derive(Debug, Default)]
struct Cell {
    dimmed: bool,
    html: String,
}

#[derive(Debug)]
pub struct HtmlTarget {
    template: String,
    title: String,
    rows: Vec<Vec<Cell>>,
}

impl Default for HtmlTarget {
    fn default() -> Self {
        HtmlTarget::with_template(DEFAULT_TEMPLATE)
    }
}

impl HtmlTarget {
    pub fn with_template(template: impl Into<String>) -> Self {
        HtmlTarget {
            template: template.into(),
            title: String::new(),
            rows: Vec::new(),
        }
    }

    /// The `<tr>` rows of the table body.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row {
                if cell.dimmed {
                    out.push_str(&format!("<td style=\"opacity:{}\">", FILLER_OPACITY));
                } else {
                    out.push_str("<td>");
                }
                out.push_str(&cell.html);
                out.push_str("</td>");
            }
            out.push_str("</tr>\n");
        }
        out
    }

    /// The template with both placeholders filled in.
    pub fn page(&self) -> String {
        self.template
            .replace(TITLE_PLACEHOLDER, &escape_html(&self.title))
            .replace(GRID_PLACEHOLDER, self.body().trim_end())
    }
}

impl RenderTarget for HtmlTarget {
    fn missing_surface(&self) -> Option<Surface> {
        if !self.template.contains(TITLE_PLACEHOLDER) {
            Some(Surface::Title)
        } else if !self.template.contains(GRID_PLACEHOLDER) {
            Some(Surface::Grid)
        } else {
            None
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn clear_grid(&mut self) {
        self.rows.clear();
    }

    fn begin_week(&mut self) {
        self.rows.push(Vec::new());
    }

    fn append_day_cell(&mut self, cell: DayCell) {
        let html = cell
            .day
            .map(|day| format!("<span>{}</span>", day))
            .unwrap_or_default();

        if let Some(row) = self.rows.last_mut() {
            row.push(Cell {
                dimmed: !cell.in_month && cell.day.is_some(),
                html,
            });
        }
    }

    fn append_event_entry(&mut self, entry: &EventEntry) {
        let Some(cell) = self.rows.last_mut().and_then(|row| row.last_mut()) else {
            return;
        };

        let tag = escape_html(&entry.tag);
        cell.html.push_str(&format!(
            "<div class=\"event {tag}\"><img src=\"{src}\" alt=\"{tag}\" style=\"height:{height}\"><span class=\"evt\">{label}</span></div>",
            tag = tag,
            src = escape_html(&entry.icon),
            height = ICON_HEIGHT,
            label = escape_html(&entry.label),
        ));
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

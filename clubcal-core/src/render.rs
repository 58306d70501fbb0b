//! Drawing a month grid onto a render target.
//!
//! The grid and the event lookup know nothing about the output format;
//! targets (terminal, HTML, test recorders) implement [`RenderTarget`].

use std::fmt;

use tracing::{debug, warn};

use crate::event::{Category, Event, events_on};
use crate::grid::{GridCell, MonthGrid};
use crate::icons::IconSet;

/// Output areas a target must provide before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Title,
    Grid,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Title => f.write_str("title"),
            Surface::Grid => f.write_str("grid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day number to print, if any
    pub day: Option<u32>,
    pub in_month: bool,
}

/// One event shown inside a day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub icon: String,
    pub label: String,
    /// Category tag as written in the events file
    pub tag: String,
    pub category: Category,
}

impl EventEntry {
    pub fn new(event: &Event, icons: &IconSet) -> Self {
        EventEntry {
            icon: icons.icon_for(&event.category),
            label: event.label(),
            tag: event.tag.clone(),
            category: event.category.clone(),
        }
    }
}

pub trait RenderTarget {
    /// First surface this target cannot draw on, if any.
    fn missing_surface(&self) -> Option<Surface> {
        None
    }

    fn set_title(&mut self, title: &str);

    /// Drop whatever a previous render left in the grid.
    fn clear_grid(&mut self);

    fn begin_week(&mut self);

    fn append_day_cell(&mut self, cell: DayCell);

    /// Attach an entry to the most recently appended day cell.
    fn append_event_entry(&mut self, entry: &EventEntry);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { weeks: usize, events: usize },
    /// Nothing was drawn because the target lacks this surface
    Aborted(Surface),
}

/// Rebuild `target` with the title, the grid and the events of each
/// in-month day.
pub fn render_month<T: RenderTarget + ?Sized>(
    grid: &MonthGrid,
    events: &[Event],
    icons: &IconSet,
    target: &mut T,
) -> RenderOutcome {
    if let Some(surface) = target.missing_surface() {
        warn!(surface = %surface, "Render target is missing a surface, skipping render");
        return RenderOutcome::Aborted(surface);
    }

    let cursor = grid.cursor();
    target.set_title(&cursor.title());
    target.clear_grid();

    let mut shown = 0;
    for week in grid.weeks() {
        target.begin_week();

        for cell in week {
            match *cell {
                GridCell::Day(day) => {
                    target.append_day_cell(DayCell {
                        day: Some(day),
                        in_month: true,
                    });

                    let key = cursor.date_key(day);
                    for event in events_on(events, &key) {
                        target.append_event_entry(&EventEntry::new(event, icons));
                        shown += 1;
                    }
                }
                GridCell::Filler { day } => target.append_day_cell(DayCell {
                    day,
                    in_month: false,
                }),
            }
        }
    }

    debug!(
        month = %cursor.title(),
        weeks = grid.weeks().len(),
        events = shown,
        "Rendered month"
    );

    RenderOutcome::Rendered {
        weeks: grid.weeks().len(),
        events: shown,
    }
}

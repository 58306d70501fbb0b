//! A calendar session: the loaded events and the displayed month.

use tracing::warn;

use crate::event::{Event, events_on};
use crate::grid::{FillerPolicy, MonthGrid};
use crate::icons::IconSet;
use crate::month::{MonthCursor, date_key};
use crate::render::{RenderOutcome, RenderTarget, render_month};
use crate::source::{EventSource, load_events};

/// Month navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Events are loaded once; navigating only moves the cursor and re-renders.
#[derive(Debug, Clone)]
pub struct CalendarSession {
    cursor: MonthCursor,
    events: Vec<Event>,
    filler: FillerPolicy,
    icons: IconSet,
}

impl CalendarSession {
    pub fn new(events: Vec<Event>, cursor: MonthCursor) -> Self {
        CalendarSession {
            cursor,
            events,
            filler: FillerPolicy::default(),
            icons: IconSet::default(),
        }
    }

    /// Load events from `source`. A failed load gives an empty session.
    pub async fn load<S: EventSource>(source: &S, cursor: MonthCursor) -> Self {
        CalendarSession::new(load_events(source).await, cursor)
    }

    pub fn with_filler(mut self, filler: FillerPolicy) -> Self {
        self.filler = filler;
        self
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events on `day` of zero-based `month`, in file order.
    pub fn events_for_day(&self, year: i32, month: u32, day: u32) -> Vec<&Event> {
        let key = date_key(year, month, day);
        events_on(&self.events, &key).collect()
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.cursor, self.filler)
    }

    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) -> RenderOutcome {
        render_month(&self.grid(), &self.events, &self.icons, target)
    }

    /// Move one month and re-render.
    pub fn change_month<T: RenderTarget + ?Sized>(
        &mut self,
        direction: Direction,
        target: &mut T,
    ) -> RenderOutcome {
        match self.cursor.shifted(direction.offset()) {
            Ok(cursor) => self.cursor = cursor,
            Err(e) => warn!(error = %e, "Cannot move past the supported date range"),
        }
        self.render(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_events;
    use crate::render::testing::Recorder;

    fn session(year: i32, month: u32) -> CalendarSession {
        let events = parse_events(
            "2024-03-15|18:00|Game Night|jeux\n\
             2024-03-15|  |Open Table|jdr\n\
             2024-03-16|14:00|Draft|magic\n\
             2025-01-04||New Year Party|special",
        );
        CalendarSession::new(events, MonthCursor::new(year, month).unwrap())
    }

    #[test]
    fn finds_every_event_of_a_day_in_file_order() {
        let session = session(2024, 2);

        let titles: Vec<_> = session
            .events_for_day(2024, 2, 15)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Game Night", "Open Table"]);

        assert!(session.events_for_day(2024, 2, 14).is_empty());
        // The month argument is zero-based
        assert!(session.events_for_day(2024, 3, 15).is_empty());
    }

    #[test]
    fn next_month_from_december_renders_january() {
        let mut session = session(2024, 11);
        let mut target = Recorder::default();

        let outcome = session.change_month(Direction::Next, &mut target);

        assert_eq!((session.cursor().year(), session.cursor().month()), (2025, 0));
        assert_eq!(target.title.as_deref(), Some("Janvier 2025"));
        assert!(matches!(outcome, RenderOutcome::Rendered { events: 1, .. }));
        assert_eq!(target.entries_for(4)[0].label, "New Year Party");
    }

    #[test]
    fn previous_month_from_january_renders_december() {
        let mut session = session(2024, 0);
        let mut target = Recorder::default();

        session.change_month(Direction::Previous, &mut target);

        assert_eq!((session.cursor().year(), session.cursor().month()), (2023, 11));
        assert_eq!(target.title.as_deref(), Some("Décembre 2023"));
    }

    #[test]
    fn navigation_keeps_the_loaded_events() {
        let mut session = session(2024, 1);
        let mut target = Recorder::default();

        session.change_month(Direction::Next, &mut target);
        assert_eq!(target.entries_for(15).len(), 2);

        session.change_month(Direction::Next, &mut target);
        session.change_month(Direction::Previous, &mut target);
        assert_eq!(target.entries_for(16)[0].label, "14:00 - Draft");
        assert_eq!(session.events().len(), 4);
    }

    #[test]
    fn filler_policy_reaches_the_grid() {
        let session = session(2024, 1).with_filler(FillerPolicy::Adjacent);
        let mut target = Recorder::default();

        session.render(&mut target);

        let first = target.cells().next().unwrap().0;
        assert_eq!(first.day, Some(29));
        assert!(!first.in_month);
    }
}

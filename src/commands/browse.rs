use anyhow::Result;
use clubcal_core::{CalendarSession, Direction};
use dialoguer::Select;

use crate::render::TerminalTarget;

const CHOICES: [&str; 3] = ["← Previous month", "Next month →", "Quit"];

/// Re-renders on each step; events are not fetched again.
pub fn run(mut session: CalendarSession) -> Result<()> {
    let mut target = TerminalTarget::default();
    session.render(&mut target);

    loop {
        println!("{}\n", target.render());

        let choice = Select::new()
            .with_prompt("Navigate")
            .items(&CHOICES)
            .default(1)
            .interact()?;

        match choice {
            0 => session.change_month(Direction::Previous, &mut target),
            1 => session.change_month(Direction::Next, &mut target),
            _ => break,
        };

        println!();
    }

    Ok(())
}

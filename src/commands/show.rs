use std::path::PathBuf;

use anyhow::{Context, Result};
use clubcal_core::html::{DEFAULT_TEMPLATE, GRID_PLACEHOLDER, HtmlTarget, TITLE_PLACEHOLDER};
use clubcal_core::render::Surface;
use clubcal_core::{CalendarSession, RenderOutcome};
use owo_colors::OwoColorize;

use crate::render::TerminalTarget;

pub fn run(
    session: &CalendarSession,
    html: Option<PathBuf>,
    template: Option<PathBuf>,
) -> Result<()> {
    let Some(output) = html else {
        let mut target = TerminalTarget::default();
        session.render(&mut target);
        println!("{}", target.render());
        return Ok(());
    };

    let template = match template {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read HTML template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let mut target = HtmlTarget::with_template(template);
    match session.render(&mut target) {
        RenderOutcome::Rendered { events, .. } => {
            std::fs::write(&output, target.page())
                .with_context(|| format!("Could not write {}", output.display()))?;
            println!(
                "{} {} ({} {})",
                "Wrote".green(),
                output.display(),
                events,
                if events == 1 { "event" } else { "events" }
            );
        }
        RenderOutcome::Aborted(surface) => {
            let placeholder = match surface {
                Surface::Title => TITLE_PLACEHOLDER,
                Surface::Grid => GRID_PLACEHOLDER,
            };
            let message = format!("Template has no {} placeholder, nothing written", placeholder);
            println!("{}", message.red());
        }
    }

    Ok(())
}

pub mod browse;
pub mod config;
pub mod day;
pub mod show;

use anyhow::Result;
use clubcal_core::CalendarSession;
use clubcal_core::config::ClubcalConfig;
use clubcal_core::month::MonthCursor;

use crate::utils::tui::create_spinner;

/// Fetch the events once and set up a session on `cursor`.
pub async fn load_session(config: &ClubcalConfig, cursor: MonthCursor) -> Result<CalendarSession> {
    let source = config.source()?;

    let spinner = create_spinner(format!("Loading events from {}", source));
    let session = CalendarSession::load(&source, cursor).await;
    spinner.finish_and_clear();

    Ok(session
        .with_filler(config.filler)
        .with_icons(config.icons()))
}

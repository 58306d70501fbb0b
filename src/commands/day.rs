use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clubcal_core::config::ClubcalConfig;
use clubcal_core::month::MonthCursor;
use owo_colors::OwoColorize;

use super::load_session;

pub async fn run(config: &ClubcalConfig, date: &str) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", date))?;

    let cursor = MonthCursor::new(date.year(), date.month0())?;
    let session = load_session(config, cursor).await?;
    let events = session.events_for_day(date.year(), date.month0(), date.day());

    println!("{}", date.format("%a %-d %b %Y").to_string().bold());

    if events.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for event in events {
        let time = event.time.as_deref().unwrap_or("all-day");
        let tag = format!("[{}]", event.tag);
        println!(
            "  {} {:>7} {} {}",
            event.category.glyph(),
            time,
            event.title,
            tag.dimmed()
        );
    }

    Ok(())
}

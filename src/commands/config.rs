use anyhow::Result;
use clubcal_core::config::ClubcalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &ClubcalConfig) -> Result<()> {
    let config_path = ClubcalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Events:     {}", config.source()?);
    println!("  Icons:      {}", config.icons_path);
    println!(
        "  Template:   {}",
        config
            .html_template_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );

    println!();
    println!("{}", "Display".bold());
    println!("  Filler:     {}", config.filler);

    Ok(())
}

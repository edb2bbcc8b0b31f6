use anyhow::Result;

use folio_core::AppConfig;

pub fn run(config: &AppConfig, init: bool, path: bool) -> Result<()> {
    let config_path = AppConfig::config_path();

    if path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            AppConfig::default().save_to(&config_path)?;
            println!("Wrote default config to {}", config_path.display());
        }
        return Ok(());
    }

    println!("Config file: {}", config_path.display());
    println!("Log file:    {}", config.log_path().display());
    match config.content_path() {
        Some(content) => println!("Content:     {}", content.display()),
        None => println!("Content:     (built-in)"),
    }
    println!(
        "Carousel:    {}ms transition, render radius {}, {} tiers",
        config.carousel.transition_ms,
        config.carousel.render_radius,
        config.carousel.tiers.len()
    );

    Ok(())
}

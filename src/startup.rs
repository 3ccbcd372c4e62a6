use crate::api::client::AvailabilityClient;
use crate::availability::{generate_example_slots, DayOfWeek};
use crate::config::Config;
use crate::editor::SettingsEditor;
use crate::error::Error;
use chrono::Datelike;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Load a user's availability settings and log a schedule summary
pub async fn run(config: Config, user_id: &str) -> miette::Result<()> {
    let client = AvailabilityClient::new(&config)?;
    let mut editor = SettingsEditor::new(client, user_id);

    editor.load().await;
    if let Some(notice) = editor.notice() {
        warn!("{}", notice);
    }

    let settings = editor.settings();
    let today = DayOfWeek::from_weekday(chrono::Local::now().weekday());
    info!("Weekly schedule for user {}:", user_id);
    for (day, hours) in settings.business_hours.iter() {
        let marker = if day == today { "  <- today" } else { "" };
        info!("  {:<9} {}{}", day, hours.format(), marker);
    }
    info!("Driving-time buffer: {} min", settings.driving_time);

    for template in &settings.templates {
        info!("Template: {}", template.summary());
        for slot in
            generate_example_slots(template.driving_time, template.arrival_window_length, 3)
        {
            info!("  {}", slot);
        }
    }

    Ok(())
}

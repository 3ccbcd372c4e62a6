use fieldbook::error::Error;
use fieldbook::startup;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting Fieldbook availability console");

    // Load configuration
    let config = startup::load_config()?;

    let user_id = env::args()
        .nth(1)
        .ok_or_else(|| Error::Other("Usage: fieldbook <user-id>".to_string()))?;

    startup::run(config, &user_id).await
}

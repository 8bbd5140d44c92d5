//! Application state wiring configuration to the generation backend.
//!
//! `AppState` holds the loaded configuration and the single generation
//! backend instance. The backend is constructed once here and handed to
//! whichever command needs it; the chat loop moves it into the session.

use std::path::PathBuf;

use banter_infra::config::load_config;
use banter_infra::filesystem::resolve_data_dir;
use banter_infra::generate::hf::client::HfTextGenerator;
use banter_types::config::AppConfig;

/// Shared application state for CLI commands.
pub struct AppState {
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub generator: HfTextGenerator,
}

impl AppState {
    /// Initialize the application state: resolve the data directory,
    /// load configuration, and construct the generation backend.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let generator = HfTextGenerator::new(&config.generator);

        Ok(Self {
            config,
            data_dir,
            generator,
        })
    }
}

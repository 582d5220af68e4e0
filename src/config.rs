use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    pub endpoint: Option<String>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub typing_delay_ms: Option<u64>,
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            // Create default config
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".techresq").join("config.toml"))
    }

    /// News endpoint, falling back to the placeholder default
    pub fn news_endpoint(&self) -> &str {
        self.news
            .endpoint
            .as_deref()
            .unwrap_or(crate::news::DEFAULT_NEWS_URL)
    }

    /// News page size, falling back to the fixed default of 6
    pub fn news_page_size(&self) -> usize {
        self.news.page_size.unwrap_or(crate::news::DEFAULT_PAGE_SIZE)
    }

    /// Bot typing delay, falling back to the fixed 1s default
    pub fn typing_delay(&self) -> std::time::Duration {
        self.chat
            .typing_delay_ms
            .map(std::time::Duration::from_millis)
            .unwrap_or(crate::chat::TYPING_DELAY)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            news: NewsConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        NewsConfig {
            endpoint: None,
            page_size: None,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            typing_delay_ms: None,
        }
    }
}

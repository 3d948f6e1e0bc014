use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = "ai_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    pub selfplay: SelfPlaySettings,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Evaluate root candidates on the rayon pool.
    pub parallel: bool,
    /// Memoize minimax values per board. Takes precedence over `parallel`.
    pub cache: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    pub save_records: bool,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("using default AI config ({}: {})", CONFIG_PATH, e);
            Self::default()
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            parallel: false,
            cache: true,
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig::default(),
            selfplay: SelfPlaySettings {
                num_games: 100,
                save_records: false,
            },
        }
    }
}

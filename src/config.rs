use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the static recipe dataset
    #[serde(default = "default_recipes_path")]
    pub recipes_path: String,

    /// Path to the JSON file backing the favorites/ratings store
    #[serde(default = "default_storage_path")]
    pub storage_path: String,

    /// Simulated latency for the mock recognition service, in milliseconds
    #[serde(default = "default_recognition_delay_ms")]
    pub recognition_delay_ms: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_recipes_path() -> String {
    "data/recipes.json".to_string()
}

fn default_storage_path() -> String {
    "pantry-profile.json".to_string()
}

fn default_recognition_delay_ms() -> u64 {
    700
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

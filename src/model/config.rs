use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://food-app-be-sequelize-6i8s.onrender.com";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub version: u32,

    pub base_url: String,

    /// Start the list in "verified only" mode.
    #[serde(default)]
    pub verified_only: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            verified_only: false,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Where the entity collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base location of the REST server (default: "http://localhost:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection name appended to the base URL (default: "characters").
    #[serde(default = "default_resource")]
    pub resource: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_resource() -> String {
    "characters".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource: default_resource(),
        }
    }
}

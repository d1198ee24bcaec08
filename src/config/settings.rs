use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Settings loaded from an optional TOML file; every field has a default so
/// the planner runs with nothing but an API key in the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub models: ModelSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub endpoint: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never appears in the file.
    pub key_env: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Search-grounded model used for trip planning.
    pub trip: String,
    /// Maps-grounded model used for place lookups.
    pub place: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            trip: "gemini-3-flash-preview".to_string(),
            place: "gemini-2.5-flash".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub path: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api.key_env).map_err(|_| PlannerError::MissingConfig {
            field: self.api.key_env.clone(),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", &self.api.endpoint)?;
        validate_non_empty_string("api.key_env", &self.api.key_env)?;
        validate_non_empty_string("models.trip", &self.models.trip)?;
        validate_non_empty_string("models.place", &self.models.place)?;
        validate_non_empty_string("output.path", &self.output.path)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn trip_model(&self) -> &str {
        &self.models.trip
    }

    fn place_model(&self) -> &str {
        &self.models.place
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

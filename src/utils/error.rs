use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Generation service returned no text")]
    EmptyResponse,

    #[error("Could not parse a trip plan from the response")]
    PlanParse,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

impl PlannerError {
    /// Message the CLI shows to the user. Upstream and parse failures read as
    /// retryable; configuration problems point at what to fix.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::Api(_) | PlannerError::EmptyResponse => {
                "The planning service did not answer. This usually happens if the route is too \
                 remote or the request timed out. Please try again."
                    .to_string()
            }
            PlannerError::PlanParse => {
                "Failed to uncover hidden gems: the response could not be understood. Please try \
                 again."
                    .to_string()
            }
            PlannerError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            PlannerError::MissingConfig { field } => {
                format!("Missing configuration: '{}' is not set", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::Api(_) => "Check your network connection and API quota, then retry",
            PlannerError::EmptyResponse | PlannerError::PlanParse => {
                "Retry the search; a new generation usually succeeds"
            }
            PlannerError::ConfigParse(_) => "Fix the TOML syntax in the settings file",
            PlannerError::InvalidConfigValue { .. } | PlannerError::MissingConfig { .. } => {
                "Correct the configuration value and run again"
            }
            PlannerError::Serialization(_) | PlannerError::Io(_) => {
                "Check that the output directory is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

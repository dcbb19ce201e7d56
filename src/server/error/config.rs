use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The value that was rejected
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// `ENABLED_BOTS` names a bot this build does not know about.
    #[error("Unknown bot '{0}' in ENABLED_BOTS (expected bumbles or discocowboy)")]
    UnknownBot(String),
}

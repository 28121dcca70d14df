//! Start-up configuration errors.

use thiserror::Error;

/// Invalid start-up configuration, reported before the server binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set to a value that cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

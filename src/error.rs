//! Error types for serpkit
//!
//! Centralized error handling using thiserror. Every variant's `Display` is the
//! message a caller sees inside an error envelope, so wording matters here.

use thiserror::Error;

/// Rejection of a caller-supplied value before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value outside a closed vocabulary
    #[error("Invalid {kind} '{value}'. Valid {plural}: {}", comma_list(.allowed))]
    NotInSet {
        kind: &'static str,
        plural: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// Travel class that matches no alias
    #[error("Invalid travel_class '{value}'. Must be one of [{}]", quoted_list(.aliases))]
    TravelClass { value: String, aliases: Vec<&'static str> },

    /// News count outside [1, 100]
    #[error("Number of news items must be between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },

    /// Blank query string
    #[error("Query cannot be empty")]
    EmptyQuery,
}

fn comma_list(items: &[&'static str]) -> String {
    items.join(", ")
}

fn quoted_list(items: &[&'static str]) -> String {
    items.iter().map(|item| format!("'{}'", item)).collect::<Vec<_>>().join(", ")
}

/// All error types that can occur in serpkit
#[derive(Debug, Error)]
pub enum SerpkitError {
    /// Input rejected by a vocabulary or range check
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credential missing from the environment
    #[error("{env_var} not configured")]
    MissingCredential { env_var: String },

    /// Configuration file problem
    #[error("Config error: {0}")]
    Config(String),

    /// Search gateway failure
    #[error(transparent)]
    Gateway(#[from] crate::gateway::GatewayError),

    /// Flight payload did not match the expected shape
    #[error("Flight parse error: {0}")]
    FlightParse(String),

    /// Unknown tool name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Result type alias for serpkit operations
pub type Result<T> = std::result::Result<T, SerpkitError>;

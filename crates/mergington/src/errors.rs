//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre: {0}")]
    ColorEyre(String),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Failures of the membership operations on an activity.
///
/// The `Display` text of each variant is the `detail` string returned to HTTP callers,
/// so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound { activity: String },
    #[error("Student already signed up")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Student not signed up for this activity")]
    NotSignedUp { activity: String, email: String },
}

impl ActivityError {
    pub fn not_found(activity: impl Into<String>) -> Self {
        Self::NotFound {
            activity: activity.into(),
        }
    }

    /// Name of the activity the failed operation targeted.
    pub fn activity(&self) -> &str {
        match self {
            Self::NotFound { activity }
            | Self::AlreadySignedUp { activity, .. }
            | Self::NotSignedUp { activity, .. } => activity,
        }
    }
}

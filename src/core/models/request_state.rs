//! Asynchronous request lifecycle

use serde::Serialize;

/// Lifecycle of the single request a workflow may have outstanding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing sent since the last reset
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The last request completed with a response
    Succeeded(T),
    /// The last request failed with this message
    Failed(String),
}

/// Payload-free view of a [`RequestState`], for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateLabel {
    /// See [`RequestState::Idle`]
    Idle,
    /// See [`RequestState::Pending`]
    Pending,
    /// See [`RequestState::Succeeded`]
    Succeeded,
    /// See [`RequestState::Failed`]
    Failed,
}

impl<T> RequestState<T> {
    /// Whether a request is in flight
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The response of the last successful request
    #[must_use]
    pub const fn response(&self) -> Option<&T> {
        match self {
            Self::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    /// The message of the last failed request
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Drop the payload
    #[must_use]
    pub const fn label(&self) -> StateLabel {
        match self {
            Self::Idle => StateLabel::Idle,
            Self::Pending => StateLabel::Pending,
            Self::Succeeded(_) => StateLabel::Succeeded,
            Self::Failed(_) => StateLabel::Failed,
        }
    }
}

impl std::fmt::Display for StateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

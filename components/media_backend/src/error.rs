use crate::{PlayerAction, TrackField};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("no active media player")]
    NoPlayer,

    #[error("could not connect to the system bus: {0}")]
    Connection(String),

    #[error("could not list media players from dbus: {0}")]
    Enumeration(String),

    #[error("could not get player status from dbus: {0}")]
    Status(String),

    #[error("could not get track from dbus: {0}")]
    Track(String),

    #[error("track has no {0} field")]
    MissingField(TrackField),

    #[error("calling {action} failed: {reason}")]
    Action {
        action: PlayerAction,
        reason: String,
    },

    #[error("backend call timed out after {0:?}")]
    Timeout(Duration),
}

impl BackendError {
    pub fn action(action: PlayerAction, reason: impl Into<String>) -> Self {
        BackendError::Action {
            action,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        let err = BackendError::Status("org.bluez.Error.Failed".to_string());
        assert!(err.to_string().contains("player status"));
        assert!(err.to_string().contains("org.bluez.Error.Failed"));

        let err = BackendError::MissingField(TrackField::Artist);
        assert_eq!(err.to_string(), "track has no Artist field");

        let err = BackendError::action(PlayerAction::Pause, "NotConnected");
        assert_eq!(err.to_string(), "calling Pause failed: NotConnected");
    }
}

use extremote_protocol::{AckStatus, PlayControl};
use media_backend::BackendError;

/// Status put in the acknowledgement of a PlayControl command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlAck {
    /// Always acknowledge with success
    #[default]
    Success,
    /// Acknowledge with the numeric code of the requested action
    EchoAction,
}

impl ControlAck {
    pub fn status_for(&self, action: PlayControl) -> AckStatus {
        match self {
            ControlAck::Success => AckStatus::SUCCESS,
            ControlAck::EchoAction => AckStatus::from(action),
        }
    }
}

/// Text sent in place of a track field that could not be read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MetadataFallback {
    /// The description of the backend error
    #[default]
    ErrorText,
    /// A fixed string
    Literal(String),
}

impl MetadataFallback {
    pub fn text_for(&self, error: &BackendError) -> String {
        match self {
            MetadataFallback::ErrorText => error.to_string(),
            MetadataFallback::Literal(text) => text.clone(),
        }
    }
}

/// Behaviour switches of the lingo handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LingoConfig {
    pub control_ack: ControlAck,
    pub metadata_fallback: MetadataFallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_acks_with_success() {
        let config = LingoConfig::default();
        assert_eq!(
            config.control_ack.status_for(PlayControl::Next),
            AckStatus::SUCCESS
        );
    }

    #[test]
    fn echo_uses_action_code() {
        assert_eq!(
            ControlAck::EchoAction.status_for(PlayControl::Play).raw(),
            0x0A
        );
    }

    #[test]
    fn default_fallback_surfaces_error_text() {
        let error = BackendError::NoPlayer;
        assert_eq!(
            MetadataFallback::default().text_for(&error),
            "no active media player"
        );
    }

    #[test]
    fn literal_fallback_hides_error() {
        let fallback = MetadataFallback::Literal("Unknown".to_string());
        assert_eq!(
            fallback.text_for(&BackendError::Track("boom".into())),
            "Unknown"
        );
    }
}

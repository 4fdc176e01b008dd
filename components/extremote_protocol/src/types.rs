use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown play control code: {0:#04x}")]
    UnknownPlayControl(u8),
}

/// Identifier of a lingo command, echoed back in acknowledgements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(u16);

impl CommandId {
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Status byte of a generic acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AckStatus(u8);

impl AckStatus {
    pub const SUCCESS: Self = Self(0x00);
    pub const FAILED: Self = Self(0x02);

    pub fn new(status: u8) -> Self {
        Self(status)
    }

    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

impl From<PlayControl> for AckStatus {
    fn from(action: PlayControl) -> Self {
        Self(action.code())
    }
}

/// Playback state as reported to the accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn code(&self) -> u8 {
        match self {
            Self::Stopped => 0x00,
            Self::Playing => 0x01,
            Self::Paused => 0x02,
        }
    }
}

/// Action requested by a PlayControl command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayControl {
    Toggle,
    Stop,
    NextTrack,
    PrevTrack,
    StartFf,
    StartRew,
    EndFfRew,
    Next,
    Prev,
    Play,
    Pause,
    NextChapter,
    PrevChapter,
}

impl PlayControl {
    pub fn code(&self) -> u8 {
        match self {
            Self::Toggle => 0x01,
            Self::Stop => 0x02,
            Self::NextTrack => 0x03,
            Self::PrevTrack => 0x04,
            Self::StartFf => 0x05,
            Self::StartRew => 0x06,
            Self::EndFfRew => 0x07,
            Self::Next => 0x08,
            Self::Prev => 0x09,
            Self::Play => 0x0A,
            Self::Pause => 0x0B,
            Self::NextChapter => 0x0C,
            Self::PrevChapter => 0x0D,
        }
    }
}

impl TryFrom<u8> for PlayControl {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(Self::Toggle),
            0x02 => Ok(Self::Stop),
            0x03 => Ok(Self::NextTrack),
            0x04 => Ok(Self::PrevTrack),
            0x05 => Ok(Self::StartFf),
            0x06 => Ok(Self::StartRew),
            0x07 => Ok(Self::EndFfRew),
            0x08 => Ok(Self::Next),
            0x09 => Ok(Self::Prev),
            0x0A => Ok(Self::Play),
            0x0B => Ok(Self::Pause),
            0x0C => Ok(Self::NextChapter),
            0x0D => Ok(Self::PrevChapter),
            other => Err(ProtocolError::UnknownPlayControl(other)),
        }
    }
}

/// Kind of information asked for by GetIndexedPlayingTrackInfo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoType {
    Capabilities,
    PodcastName,
    ReleaseDate,
    Description,
    Lyrics,
    Genre,
    Composer,
    ArtworkCount,
    Artist,
    Album,
    Title,
}

/// Database category used by the record browsing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbCategory {
    Playlist,
    Artist,
    Album,
    Genre,
    Track,
    Composer,
    Audiobook,
    Podcast,
    NestedPlaylist,
    GeniusMixes,
    ITunesU,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    Off,
    Tracks,
    Albums,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    Off,
    One,
    All,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case(0x01, PlayControl::Toggle)]
    #[case(0x03, PlayControl::NextTrack)]
    #[case(0x0A, PlayControl::Play)]
    #[case(0x0B, PlayControl::Pause)]
    #[case(0x0D, PlayControl::PrevChapter)]
    fn play_control_codes_match_wire_values(#[case] code: u8, #[case] action: PlayControl) {
        assert_eq!(PlayControl::try_from(code), Ok(action));
        assert_eq!(action.code(), code);
    }

    #[test]
    fn rejects_unknown_play_control() {
        assert_matches!(
            PlayControl::try_from(0x42),
            Err(ProtocolError::UnknownPlayControl(0x42))
        );
    }

    #[test]
    fn echoed_action_becomes_ack_status() {
        assert_eq!(AckStatus::from(PlayControl::Pause).raw(), 0x0B);
        assert!(!AckStatus::from(PlayControl::Pause).is_success());
        assert!(AckStatus::SUCCESS.is_success());
    }

    #[test]
    fn playback_state_codes() {
        assert_eq!(PlaybackState::Stopped.code(), 0x00);
        assert_eq!(PlaybackState::Playing.code(), 0x01);
        assert_eq!(PlaybackState::Paused.code(), 0x02);
    }
}

//! # media-backend
//!
//! Access to the media player that is currently driving playback.
//!
//! The [`MediaBackend`] trait is the seam the lingo dispatcher talks to. It is
//! implemented by:
//!
//! - [`BluezBackend`]: the `org.bluez.MediaPlayer1` object of a connected
//!   Bluetooth device, reached over the D-Bus system bus
//! - [`TimeoutBackend`]: a decorator bounding every call of another backend
//! - [`stub::BackendStub`]: scripted answers for tests

mod bluez;
mod error;
mod timeout;

pub mod stub;

use async_trait::async_trait;

pub use bluez::{BluezBackend, MEDIA_PLAYER_INTERFACE};
pub use error::BackendError;
pub use timeout::{TimeoutBackend, DEFAULT_CALL_TIMEOUT};

pub type Result<T> = std::result::Result<T, BackendError>;

/// Object path of a media player exposed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerPath(String);

impl PlayerPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The active player for one request, or `None` when nothing is playing
pub type BackendHandle = Option<PlayerPath>;

/// Transport actions a player accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Play,
    Pause,
    Next,
    Previous,
}

impl PlayerAction {
    /// D-Bus method name of the action
    pub fn method(&self) -> &'static str {
        match self {
            PlayerAction::Play => "Play",
            PlayerAction::Pause => "Pause",
            PlayerAction::Next => "Next",
            PlayerAction::Previous => "Previous",
        }
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Title,
    Artist,
    Album,
}

impl TrackField {
    /// Key of the field in the player's `Track` dictionary
    pub fn key(&self) -> &'static str {
        match self {
            TrackField::Title => "Title",
            TrackField::Artist => "Artist",
            TrackField::Album => "Album",
        }
    }
}

impl std::fmt::Display for TrackField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Metadata of the playing track; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackFields {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

impl TrackFields {
    pub fn get(&self, field: TrackField) -> Option<&str> {
        match field {
            TrackField::Title => self.title.as_deref(),
            TrackField::Artist => self.artist.as_deref(),
            TrackField::Album => self.album.as_deref(),
        }
    }
}

#[async_trait]
pub trait MediaBackend: Send + Sync {
    /// Finds the player currently exposed by the backend, if any.
    async fn active_player(&self) -> Result<Option<PlayerPath>>;

    /// Raw status string of the player ("playing", "paused", ...).
    async fn status(&self, player: &PlayerPath) -> Result<String>;

    async fn track(&self, player: &PlayerPath) -> Result<TrackFields>;

    /// Issues a transport action (`Play`, `Pause`, `Next`, `Previous`).
    async fn perform(&self, player: &PlayerPath, action: PlayerAction) -> Result<()>;
}

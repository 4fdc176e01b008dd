//! Scripted backend for exercising code that depends on [`MediaBackend`].

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::BackendError;
use crate::{MediaBackend, PlayerAction, PlayerPath, Result, TrackFields};

pub struct BackendStub {
    player: Result<Option<PlayerPath>>,
    status: Result<String>,
    track: Result<TrackFields>,
    action_error: Option<String>,
    delay: Option<Duration>,
    actions: Mutex<Vec<PlayerAction>>,
}

impl BackendStub {
    /// A backend exposing the player at `path`, reporting "stopped" and an
    /// empty track.
    pub fn with_player(path: impl Into<String>) -> Self {
        Self {
            player: Ok(Some(PlayerPath::new(path))),
            status: Ok("stopped".to_string()),
            track: Ok(TrackFields::default()),
            action_error: None,
            delay: None,
            actions: Mutex::new(Vec::new()),
        }
    }

    /// A backend with no player at all.
    pub fn without_player() -> Self {
        Self {
            player: Ok(None),
            ..Self::with_player("")
        }
    }

    pub fn enumeration_fails(mut self, reason: impl Into<String>) -> Self {
        self.player = Err(BackendError::Enumeration(reason.into()));
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Ok(status.into());
        self
    }

    pub fn status_fails(mut self, reason: impl Into<String>) -> Self {
        self.status = Err(BackendError::Status(reason.into()));
        self
    }

    pub fn track(mut self, track: TrackFields) -> Self {
        self.track = Ok(track);
        self
    }

    pub fn track_fails(mut self, reason: impl Into<String>) -> Self {
        self.track = Err(BackendError::Track(reason.into()));
        self
    }

    /// Makes every transport action fail after being recorded.
    pub fn actions_fail(mut self, reason: impl Into<String>) -> Self {
        self.action_error = Some(reason.into());
        self
    }

    /// Sleeps before answering any call.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Actions issued so far, in order
    pub fn actions(&self) -> Vec<PlayerAction> {
        self.actions.lock().clone()
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl MediaBackend for BackendStub {
    async fn active_player(&self) -> Result<Option<PlayerPath>> {
        self.wait().await;
        self.player.clone()
    }

    async fn status(&self, _player: &PlayerPath) -> Result<String> {
        self.wait().await;
        self.status.clone()
    }

    async fn track(&self, _player: &PlayerPath) -> Result<TrackFields> {
        self.wait().await;
        self.track.clone()
    }

    async fn perform(&self, _player: &PlayerPath, action: PlayerAction) -> Result<()> {
        self.wait().await;
        self.actions.lock().push(action);
        match &self.action_error {
            Some(reason) => Err(BackendError::action(action, reason.clone())),
            None => Ok(()),
        }
    }
}

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use crate::error::BackendError;
use crate::{MediaBackend, PlayerAction, PlayerPath, Result, TrackFields};

/// Limit applied when none is configured
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(2);

/// Bounds every call of the wrapped backend; an expired call fails with
/// [`BackendError::Timeout`].
pub struct TimeoutBackend<B> {
    inner: B,
    limit: Duration,
}

impl<B: MediaBackend> TimeoutBackend<B> {
    pub fn new(inner: B, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    async fn bounded<T>(&self, call: impl Future<Output = Result<T>> + Send) -> Result<T> {
        timeout(self.limit, call)
            .await
            .map_err(|_| BackendError::Timeout(self.limit))?
    }
}

#[async_trait]
impl<B: MediaBackend> MediaBackend for TimeoutBackend<B> {
    async fn active_player(&self) -> Result<Option<PlayerPath>> {
        self.bounded(self.inner.active_player()).await
    }

    async fn status(&self, player: &PlayerPath) -> Result<String> {
        self.bounded(self.inner.status(player)).await
    }

    async fn track(&self, player: &PlayerPath) -> Result<TrackFields> {
        self.bounded(self.inner.track(player)).await
    }

    async fn perform(&self, player: &PlayerPath, action: PlayerAction) -> Result<()> {
        self.bounded(self.inner.perform(player, action)).await
    }
}

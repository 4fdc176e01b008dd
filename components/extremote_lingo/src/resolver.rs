use media_backend::{BackendHandle, MediaBackend};
use tracing::{debug, warn};

/// Looks up the active player for the current request.
///
/// Failing to enumerate players is not an error for the request: it is
/// logged and treated the same as no player being present.
pub async fn resolve<B: MediaBackend + ?Sized>(backend: &B) -> BackendHandle {
    match backend.active_player().await {
        Ok(player) => {
            debug!("player path: {:?}", player);
            player
        }
        Err(e) => {
            warn!("Could not resolve active player: {}", e);
            None
        }
    }
}

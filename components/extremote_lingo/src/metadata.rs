use media_backend::{BackendError, MediaBackend, PlayerPath, TrackField};
use tracing::{debug, warn};

use crate::config::MetadataFallback;

/// Reads one field of the playing track.
///
/// Every call goes to the backend on its own, so a failure only affects the
/// field asked for. When the field cannot be read the fallback text is
/// returned instead.
pub async fn fetch_field<B: MediaBackend + ?Sized>(
    backend: &B,
    player: Option<&PlayerPath>,
    field: TrackField,
    fallback: &MetadataFallback,
) -> String {
    match read_field(backend, player, field).await {
        Ok(value) => {
            debug!("got track {}: {}", field, value);
            value
        }
        Err(e) => {
            warn!("getting track {}: {}", field, e);
            fallback.text_for(&e)
        }
    }
}

async fn read_field<B: MediaBackend + ?Sized>(
    backend: &B,
    player: Option<&PlayerPath>,
    field: TrackField,
) -> Result<String, BackendError> {
    let player = player.ok_or(BackendError::NoPlayer)?;
    let track = backend.track(player).await?;
    track
        .get(field)
        .map(str::to_owned)
        .ok_or(BackendError::MissingField(field))
}

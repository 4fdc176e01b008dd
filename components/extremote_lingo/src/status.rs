use extremote_protocol::PlaybackState;
use media_backend::{BackendError, MediaBackend, PlayerAction, PlayerPath};
use tracing::{debug, warn};

/// Maps a backend status to the lingo's playback state.
///
/// Only "playing" is recognised. A status that could not be read at all is
/// reported as stopped, any other value as paused.
pub fn to_playback_state(raw: &str, fetch_error: bool) -> PlaybackState {
    if fetch_error {
        return PlaybackState::Stopped;
    }
    match raw {
        "playing" => PlaybackState::Playing,
        _ => PlaybackState::Paused,
    }
}

pub fn from_status(status: &Result<String, BackendError>) -> PlaybackState {
    match status {
        Ok(raw) => to_playback_state(raw, false),
        Err(_) => to_playback_state("", true),
    }
}

/// Reads the player status, if there is a player.
pub async fn fetch_status<B: MediaBackend + ?Sized>(
    backend: &B,
    player: Option<&PlayerPath>,
) -> Result<String, BackendError> {
    let player = player.ok_or(BackendError::NoPlayer)?;
    let status = backend.status(player).await;
    match &status {
        Ok(raw) => debug!("play status from dbus: {}", raw),
        Err(e) => warn!("getting play status from dbus: {}", e),
    }
    status
}

/// Action a toggle turns into: pause when playing, play otherwise.
pub fn resolve_toggle(status: &Result<String, BackendError>) -> PlayerAction {
    match status {
        Ok(raw) if raw == "playing" => PlayerAction::Pause,
        _ => PlayerAction::Play,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_backend::stub::BackendStub;
    use rstest::rstest;

    #[rstest]
    #[case("playing", false, PlaybackState::Playing)]
    #[case("paused", false, PlaybackState::Paused)]
    #[case("stopped", false, PlaybackState::Paused)]
    #[case("forward-seek", false, PlaybackState::Paused)]
    #[case("", false, PlaybackState::Paused)]
    #[case("playing", true, PlaybackState::Stopped)]
    #[case("paused", true, PlaybackState::Stopped)]
    fn translates_status(
        #[case] raw: &str,
        #[case] fetch_error: bool,
        #[case] expected: PlaybackState,
    ) {
        assert_eq!(to_playback_state(raw, fetch_error), expected);
    }

    #[rstest]
    #[case(Ok("playing".to_string()), PlayerAction::Pause)]
    #[case(Ok("paused".to_string()), PlayerAction::Play)]
    #[case(Ok("stopped".to_string()), PlayerAction::Play)]
    #[case(Ok("error".to_string()), PlayerAction::Play)]
    #[case(Err(BackendError::Status("NoReply".to_string())), PlayerAction::Play)]
    fn toggle_moves_towards_playing(
        #[case] status: Result<String, BackendError>,
        #[case] expected: PlayerAction,
    ) {
        assert_eq!(resolve_toggle(&status), expected);
    }

    #[tokio::test]
    async fn missing_player_reads_as_stopped() {
        let backend = BackendStub::with_player("/p").status("playing");
        let status = fetch_status(&backend, None).await;

        assert_eq!(status, Err(BackendError::NoPlayer));
        assert_eq!(from_status(&status), PlaybackState::Stopped);
    }

    #[tokio::test]
    async fn reads_status_of_player() {
        let backend = BackendStub::with_player("/p").status("playing");
        let player = PlayerPath::new("/p");
        let status = fetch_status(&backend, Some(&player)).await;

        assert_eq!(from_status(&status), PlaybackState::Playing);
    }
}

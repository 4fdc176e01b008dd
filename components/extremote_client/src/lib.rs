mod error;

use std::sync::atomic::{AtomicU16, Ordering};

use extremote_protocol::{Command, CommandId, PlayControl, Request, Response};
use nng::{Protocol, Socket};

pub use error::ClientError;

/// Talks to an extremote server over an nng request socket.
pub struct ExtRemoteClient {
    socket: Socket,
    next_id: AtomicU16,
}

impl ExtRemoteClient {
    pub fn connect(url: &str) -> Result<Self, ClientError> {
        let socket =
            Socket::new(Protocol::Req0).map_err(|e| ClientError::Connection(format!("{:?}", e)))?;

        socket
            .dial(url)
            .map_err(|e| ClientError::Connection(format!("{:?}", e)))?;

        Ok(Self {
            socket,
            next_id: AtomicU16::new(1),
        })
    }

    pub fn play_status(&self) -> Result<Response, ClientError> {
        self.request_one(Request::GetPlayStatus)
    }

    pub fn control(&self, action: PlayControl) -> Result<Option<Response>, ClientError> {
        Ok(self.request(Request::PlayControl { action })?.into_iter().next())
    }

    pub fn title(&self) -> Result<Response, ClientError> {
        self.request_one(Request::GetIndexedPlayingTrackTitle { track_index: 0 })
    }

    pub fn artist(&self) -> Result<Response, ClientError> {
        self.request_one(Request::GetIndexedPlayingTrackArtistName { track_index: 0 })
    }

    pub fn album(&self) -> Result<Response, ClientError> {
        self.request_one(Request::GetIndexedPlayingTrackAlbumName { track_index: 0 })
    }

    /// Sends `request` under a fresh command id.
    pub fn request(&self, request: Request) -> Result<Vec<Response>, ClientError> {
        let id = CommandId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.send(&Command::new(id, request))
    }

    /// Sends a command and returns the responses the server emitted for it.
    pub fn send(&self, command: &Command) -> Result<Vec<Response>, ClientError> {
        let data =
            serde_json::to_vec(command).map_err(|e| ClientError::Protocol(e.to_string()))?;

        self.socket
            .send(data.as_slice())
            .map_err(|(_, e)| ClientError::Connection(format!("{:?}", e)))?;

        let msg = self
            .socket
            .recv()
            .map_err(|e| ClientError::Connection(format!("{:?}", e)))?;

        decode_reply(&msg)
    }

    fn request_one(&self, request: Request) -> Result<Response, ClientError> {
        self.request(request)?
            .into_iter()
            .next()
            .ok_or(ClientError::NoReply)
    }
}

fn decode_reply(data: &[u8]) -> Result<Vec<Response>, ClientError> {
    serde_json::from_slice(data).map_err(|e| ClientError::Protocol(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn decodes_empty_reply() {
        assert_matches!(decode_reply(b"[]"), Ok(responses) if responses.is_empty());
    }

    #[test]
    fn decodes_single_response() {
        let json = br#"[{"kind":"num_playing_tracks","payload":{"num_tracks":10}}]"#;
        assert_matches!(
            decode_reply(json).as_deref(),
            Ok([Response::NumPlayingTracks { num_tracks: 10 }])
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_matches!(decode_reply(b"not json"), Err(ClientError::Protocol(_)));
    }
}

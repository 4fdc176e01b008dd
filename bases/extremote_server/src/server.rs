use crate::error::ServerError;
use extremote_lingo::Dispatcher;
use extremote_protocol::{Command, Response};
use media_backend::MediaBackend;
use nng::Socket;
use tracing::{debug, info, warn};

pub struct Server<B> {
    dispatcher: Dispatcher<B>,
    socket: Socket,
}

impl<B: MediaBackend> Server<B> {
    pub fn new(dispatcher: Dispatcher<B>, socket: Socket) -> Self {
        Self { dispatcher, socket }
    }

    pub async fn run(&self) -> Result<(), ServerError> {
        info!("Extended remote server starting...");

        loop {
            // Receive command
            let socket = self.socket.clone();
            let msg = tokio::task::spawn_blocking(move || socket.recv()).await??;

            // Process command
            let reply = self.handle_message(&msg).await?;

            // Send reply
            self.socket
                .send(reply.as_slice())
                .map_err(ServerError::from)?;
        }
    }

    /// Decodes one command, dispatches it and encodes the responses it
    /// produced. A command that cannot be decoded gets an empty reply.
    async fn handle_message(&self, msg: &[u8]) -> Result<Vec<u8>, ServerError> {
        let responses = match serde_json::from_slice::<Command>(msg) {
            Ok(command) => {
                debug!("Received command: {:?}", command);
                self.handle_command(command).await
            }
            Err(e) => {
                warn!("Dropping undecodable command: {}", e);
                Vec::new()
            }
        };

        Ok(serde_json::to_vec(&responses)?)
    }

    async fn handle_command(&self, command: Command) -> Vec<Response> {
        let mut responses = Vec::new();
        self.dispatcher.handle(command, &mut responses).await;
        responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use extremote_lingo::LingoConfig;
    use extremote_protocol::{Ack, AckStatus, CommandId, PlayControl, Request};
    use media_backend::stub::BackendStub;
    use media_backend::PlayerAction;

    fn server(backend: BackendStub) -> Server<BackendStub> {
        let socket = nng::Socket::new(nng::Protocol::Rep0).unwrap();
        Server::new(Dispatcher::new(backend, LingoConfig::default()), socket)
    }

    async fn round_trip(server: &Server<BackendStub>, command: Command) -> Vec<Response> {
        let msg = serde_json::to_vec(&command).unwrap();
        let reply = server.handle_message(&msg).await.unwrap();
        serde_json::from_slice(&reply).unwrap()
    }

    #[tokio::test]
    async fn test_reply_carries_single_response() {
        let server = server(BackendStub::with_player("/org/bluez/hci0/dev_01/player0"));
        let command = Command::new(CommandId::new(0x35), Request::GetNumPlayingTracks);

        let responses = round_trip(&server, command).await;
        assert_eq!(responses, vec![Response::NumPlayingTracks { num_tracks: 10 }]);
    }

    #[tokio::test]
    async fn test_silent_command_gets_empty_reply() {
        let server = server(BackendStub::with_player("/org/bluez/hci0/dev_01/player0"));
        let command = Command::new(
            CommandId::new(0x37),
            Request::SetCurrentPlayingTrack { track_index: 1 },
        );

        assert!(round_trip(&server, command).await.is_empty());
    }

    #[tokio::test]
    async fn test_control_reaches_backend() {
        let server = server(
            BackendStub::with_player("/org/bluez/hci0/dev_01/player0").status("playing"),
        );
        let command = Command::new(
            CommandId::new(0x29),
            Request::PlayControl {
                action: PlayControl::Toggle,
            },
        );

        let responses = round_trip(&server, command).await;
        assert_matches!(
            responses.as_slice(),
            [Response::Ack(Ack { status: AckStatus::SUCCESS, .. })]
        );
        assert_eq!(
            server.dispatcher.backend().actions(),
            vec![PlayerAction::Pause]
        );
    }

    #[tokio::test]
    async fn test_garbage_gets_empty_reply() {
        let server = server(BackendStub::without_player());

        let reply = server.handle_message(b"{\"id\": \"nope\"}").await.unwrap();
        assert_eq!(reply, b"[]");
    }
}

use extremote_protocol::{AckStatus, Command, CommandId, Response};
use tracing::debug;

/// Destination of the replies produced for a command
pub trait ResponseSink {
    fn send(&mut self, in_reply_to: CommandId, response: Response);
}

impl ResponseSink for Vec<Response> {
    fn send(&mut self, _in_reply_to: CommandId, response: Response) {
        self.push(response);
    }
}

/// Sends `response` as the reply to `command`.
pub fn respond<S: ResponseSink + ?Sized>(sink: &mut S, command: &Command, response: Response) {
    debug!("Responding to {}: {:?}", command.id, response);
    sink.send(command.id, response);
}

/// Sends a generic acknowledgement of `command`.
pub fn ack<S: ResponseSink + ?Sized>(sink: &mut S, command: &Command, status: AckStatus) {
    respond(sink, command, Response::ack(status, command.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use extremote_protocol::{Ack, Request};

    #[test]
    fn ack_echoes_command_id() {
        let command = Command::new(CommandId::new(0x16), Request::ResetDbSelection);
        let mut sent = Vec::new();

        ack(&mut sent, &command, AckStatus::SUCCESS);

        assert_eq!(sent.len(), 1);
        assert_matches!(
            sent[0],
            Response::Ack(Ack {
                status: AckStatus::SUCCESS,
                cmd_id,
            }) if cmd_id == CommandId::new(0x16)
        );
    }
}

use clap::Subcommand;
use color_eyre::Result;
use extremote_protocol::{Ack, PlayControl, Response};

#[derive(Subcommand)]
pub enum Commands {
    /// Show the play status reported to accessories
    Status,

    /// Show title, artist and album of the playing track
    NowPlaying,

    /// Send a play control
    Control {
        /// toggle, play, pause, next, prev, stop or a raw code such as 0x0b
        action: String,
    },

    /// Send a raw JSON command and print the reply
    Send {
        /// Command as JSON, e.g. '{"id":28,"request":{"kind":"get_play_status"}}'
        json: String,
    },
}

pub fn parse_action(action: &str) -> Result<PlayControl> {
    match action.to_lowercase().as_str() {
        "toggle" => Ok(PlayControl::Toggle),
        "play" => Ok(PlayControl::Play),
        "pause" => Ok(PlayControl::Pause),
        "next" => Ok(PlayControl::Next),
        "prev" | "previous" => Ok(PlayControl::Prev),
        "stop" => Ok(PlayControl::Stop),
        other => match parse_code(other) {
            Some(code) => Ok(PlayControl::try_from(code)?),
            None => Err(color_eyre::eyre::eyre!(
                "Invalid action '{}'. Use toggle, play, pause, next, prev, stop or a code",
                action
            )),
        },
    }
}

fn parse_code(code: &str) -> Option<u8> {
    match code.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => code.parse().ok(),
    }
}

/// One-line rendering of a response for the terminal
pub fn describe(response: &Response) -> String {
    match response {
        Response::Ack(Ack { status, cmd_id }) if status.is_success() => {
            format!("ok for command {}", cmd_id)
        }
        Response::Ack(Ack { status, cmd_id }) => {
            format!("status {:#04x} for command {}", status.raw(), cmd_id)
        }
        Response::PlayStatus {
            state,
            track_index,
            track_length_ms,
            track_position_ms,
        } => format!(
            "{:?} ({:#04x}), track {} at {}/{} ms",
            state,
            state.code(),
            track_index,
            track_position_ms,
            track_length_ms
        ),
        Response::IndexedPlayingTrackTitle { title } => format!("Title:  {}", title),
        Response::IndexedPlayingTrackArtistName { artist_name } => {
            format!("Artist: {}", artist_name)
        }
        Response::IndexedPlayingTrackAlbumName { album_name } => {
            format!("Album:  {}", album_name)
        }
        other => format!("{:?}", other),
    }
}

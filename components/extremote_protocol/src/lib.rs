//! Typed model of the extended remote lingo: inbound commands, outbound
//! responses and the string encodings their payloads use.

mod command;
mod response;
mod text;
mod types;

pub use command::{Command, Request};
pub use response::{
    Ack, ArtworkFormat, DisplayImageLimits, Response, TrackCaps, TrackInfo, TrackLongText,
};
pub use text::{fixed_width, nul_terminated, RecordName, Text, RECORD_NAME_LEN};
pub use types::{
    AckStatus, CommandId, DbCategory, InfoType, PlayControl, PlaybackState, ProtocolError,
    RepeatMode, ShuffleMode,
};

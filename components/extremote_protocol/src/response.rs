use crate::text::{RecordName, Text};
use crate::types::{AckStatus, CommandId, InfoType, PlaybackState, RepeatMode, ShuffleMode};
use serde::{Deserialize, Serialize};

/// Generic acknowledgement of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub status: AckStatus,
    pub cmd_id: CommandId,
}

/// Capabilities block of GetIndexedPlayingTrackInfo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCaps {
    pub caps: u32,
    pub track_length_ms: u32,
    pub chapter_count: u16,
}

/// Multi-packet text block (lyrics, description)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLongText {
    pub flags: u8,
    pub packet_index: u16,
    pub text: Text,
}

/// Payload of IndexedPlayingTrackInfo, shaped by the requested info type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum TrackInfo {
    Caps(TrackCaps),
    Text(Text),
    ArtworkCount,
    LongText(TrackLongText),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkFormat {
    pub format_id: u16,
    pub pixel_format: u8,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayImageLimits {
    pub max_width: u16,
    pub max_height: u16,
    pub pixel_format: u8,
}

/// Outbound messages of the lingo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "payload")]
pub enum Response {
    Ack(Ack),
    CurrentPlayingTrackChapterInfo {
        current_chapter_index: i32,
        chapter_count: i32,
    },
    CurrentPlayingTrackChapterPlayStatus {
        chapter_position_ms: u32,
        chapter_length_ms: u32,
    },
    CurrentPlayingTrackChapterName {
        chapter_name: Text,
    },
    AudiobookSpeed {
        speed: i8,
    },
    IndexedPlayingTrackInfo {
        info_type: InfoType,
        info: TrackInfo,
    },
    ArtworkFormats {
        formats: Vec<ArtworkFormat>,
    },
    NumberCategorizedDbRecords {
        record_count: i32,
    },
    CategorizedDatabaseRecord {
        record_index: u32,
        name: RecordName,
    },
    PlayStatus {
        state: PlaybackState,
        track_index: i32,
        track_length_ms: u32,
        track_position_ms: u32,
    },
    CurrentPlayingTrackIndex {
        track_index: i32,
    },
    IndexedPlayingTrackTitle {
        title: Text,
    },
    IndexedPlayingTrackArtistName {
        artist_name: Text,
    },
    IndexedPlayingTrackAlbumName {
        album_name: Text,
    },
    TrackArtworkTimes {
        times_ms: Vec<u32>,
    },
    Shuffle {
        mode: ShuffleMode,
    },
    Repeat {
        mode: RepeatMode,
    },
    MonoDisplayImageLimits(DisplayImageLimits),
    ColorDisplayImageLimits {
        limits: Vec<DisplayImageLimits>,
    },
    NumPlayingTracks {
        num_tracks: u32,
    },
}

impl Response {
    pub fn ack(status: AckStatus, cmd_id: CommandId) -> Self {
        Self::Ack(Ack { status, cmd_id })
    }
}

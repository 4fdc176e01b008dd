use crate::types::{CommandId, DbCategory, InfoType, PlayControl, RepeatMode, ShuffleMode};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A decoded extended remote command together with its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub id: CommandId,
    pub request: Request,
}

impl Command {
    pub fn new(id: CommandId, request: Request) -> Self {
        Self { id, request }
    }
}

/// Request payloads, one variant per command kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "snake_case", tag = "kind", content = "payload")]
pub enum Request {
    GetCurrentPlayingTrackChapterInfo,
    SetCurrentPlayingTrackChapter {
        chapter_index: u32,
    },
    GetCurrentPlayingTrackChapterPlayStatus {
        chapter_index: u32,
    },
    GetCurrentPlayingTrackChapterName {
        chapter_index: u32,
    },
    GetAudiobookSpeed,
    SetAudiobookSpeed {
        speed: i8,
    },
    GetIndexedPlayingTrackInfo {
        info_type: InfoType,
        track_index: u32,
        chapter_index: u16,
    },
    GetArtworkFormats,
    GetTrackArtworkData {
        track_index: u32,
        format_id: u16,
        time_offset_ms: u32,
    },
    ResetDbSelection,
    SelectDbRecord {
        category: DbCategory,
        record_index: i32,
    },
    GetNumberCategorizedDbRecords {
        category: DbCategory,
    },
    RetrieveCategorizedDatabaseRecords {
        category: DbCategory,
        offset: u32,
        count: u32,
    },
    GetPlayStatus,
    GetCurrentPlayingTrackIndex,
    GetIndexedPlayingTrackTitle {
        track_index: u32,
    },
    GetIndexedPlayingTrackArtistName {
        track_index: u32,
    },
    GetIndexedPlayingTrackAlbumName {
        track_index: u32,
    },
    SetPlayStatusChangeNotification {
        event_mask: u32,
    },
    SetPlayStatusChangeNotificationShort {
        enable: bool,
    },
    PlayCurrentSelection {
        record_index: i32,
    },
    PlayControl {
        action: PlayControl,
    },
    GetTrackArtworkTimes {
        track_index: u32,
        format_id: u16,
        artwork_index: u16,
        artwork_count: u16,
    },
    GetShuffle,
    SetShuffle {
        mode: ShuffleMode,
        restore_on_exit: bool,
    },
    GetRepeat,
    SetRepeat {
        mode: RepeatMode,
        restore_on_exit: bool,
    },
    SetDisplayImage {
        packet_index: u16,
        data: Vec<u8>,
    },
    GetMonoDisplayImageLimits,
    GetNumPlayingTracks,
    SetCurrentPlayingTrack {
        track_index: u32,
    },
    SelectSortDbRecord {
        category: DbCategory,
        record_index: i32,
        sort_order: u8,
    },
    GetColorDisplayImageLimits,
    ResetDbSelectionHierarchy {
        selection: u8,
    },
    GetDbITunesInfo {
        metadata_type: u8,
    },
    GetUidTrackInfo {
        uid: u64,
        info_mask: u32,
    },
    GetDbTrackInfo {
        start: u32,
        count: u32,
        info_mask: u32,
    },
    GetPbTrackInfo {
        start: u32,
        count: u32,
        info_mask: u32,
    },
    /// Any kind the decoder delivered that this lingo does not know about
    #[serde(other)]
    Unknown,
}

impl Serialize for Request {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Request::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Request {
    /// Unknown kinds decode as [`Request::Unknown`] whatever payload they
    /// carry; a known kind with a malformed payload is still an error.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let decoded = Request::deserialize(&value);

        match decoded {
            Ok(request) => Ok(request),
            Err(err) => {
                if let Some(fields) = value.as_object_mut() {
                    fields.remove("payload");
                }
                match Request::deserialize(&value) {
                    Ok(Request::Unknown) => Ok(Request::Unknown),
                    _ => Err(de::Error::custom(err)),
                }
            }
        }
    }
}

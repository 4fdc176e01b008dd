use extremote_protocol::{
    AckStatus, Command, DbCategory, DisplayImageLimits, InfoType, PlayControl, RecordName,
    RepeatMode, Request, Response, ShuffleMode, Text, TrackCaps, TrackInfo, TrackLongText,
};
use media_backend::{MediaBackend, PlayerAction, PlayerPath, TrackField};
use tracing::{debug, info, warn};

use crate::config::LingoConfig;
use crate::emitter::{ack, respond, ResponseSink};
use crate::metadata::fetch_field;
use crate::resolver::resolve;
use crate::status::{fetch_status, from_status, resolve_toggle};

// Placeholders reported for the playing track; the backend does not supply them.
const TRACK_LENGTH_MS: u32 = 300 * 1000;
const TRACK_POSITION_MS: u32 = 20 * 1000;
const PLAYING_TRACK_COUNT: u32 = 10;
const TRACK_CATEGORY_RECORDS: i32 = 10;

const DISPLAY_IMAGE_LIMITS: DisplayImageLimits = DisplayImageLimits {
    max_width: 640,
    max_height: 960,
    pixel_format: 0x01,
};

/// Handles extended remote commands against the active media player.
///
/// Holds no state between commands: the player is looked up again for each
/// one, and each command produces at most one response.
pub struct Dispatcher<B> {
    backend: B,
    config: LingoConfig,
}

impl<B: MediaBackend> Dispatcher<B> {
    pub fn new(backend: B, config: LingoConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn handle<S: ResponseSink + ?Sized>(&self, command: Command, sink: &mut S) {
        let player = resolve(&self.backend).await;
        let player = player.as_ref();
        debug!("Handling {:?} (player: {:?})", command.request, player);

        match &command.request {
            Request::GetCurrentPlayingTrackChapterInfo => respond(
                sink,
                &command,
                Response::CurrentPlayingTrackChapterInfo {
                    current_chapter_index: -1,
                    chapter_count: 0,
                },
            ),
            Request::GetCurrentPlayingTrackChapterPlayStatus { .. } => respond(
                sink,
                &command,
                Response::CurrentPlayingTrackChapterPlayStatus {
                    chapter_position_ms: 0,
                    chapter_length_ms: 0,
                },
            ),
            Request::GetCurrentPlayingTrackChapterName { .. } => respond(
                sink,
                &command,
                Response::CurrentPlayingTrackChapterName {
                    chapter_name: Text::new("chapter"),
                },
            ),
            Request::GetAudiobookSpeed => {
                respond(sink, &command, Response::AudiobookSpeed { speed: 0 })
            }
            Request::GetIndexedPlayingTrackInfo { info_type, .. } => respond(
                sink,
                &command,
                Response::IndexedPlayingTrackInfo {
                    info_type: *info_type,
                    info: track_info(*info_type),
                },
            ),
            Request::GetArtworkFormats => respond(
                sink,
                &command,
                Response::ArtworkFormats {
                    formats: Vec::new(),
                },
            ),
            Request::GetTrackArtworkData { .. } => ack(sink, &command, AckStatus::FAILED),
            Request::GetTrackArtworkTimes { .. } => respond(
                sink,
                &command,
                Response::TrackArtworkTimes {
                    times_ms: Vec::new(),
                },
            ),

            Request::SetCurrentPlayingTrackChapter { .. }
            | Request::SetAudiobookSpeed { .. }
            | Request::ResetDbSelection
            | Request::SelectDbRecord { .. }
            | Request::SetPlayStatusChangeNotification { .. }
            | Request::SetPlayStatusChangeNotificationShort { .. }
            | Request::PlayCurrentSelection { .. }
            | Request::SetShuffle { .. }
            | Request::SetRepeat { .. }
            | Request::SetDisplayImage { .. } => ack(sink, &command, AckStatus::SUCCESS),

            Request::GetNumberCategorizedDbRecords { category } => {
                let record_count = match category {
                    DbCategory::Track => TRACK_CATEGORY_RECORDS,
                    _ => 0,
                };
                respond(
                    sink,
                    &command,
                    Response::NumberCategorizedDbRecords { record_count },
                )
            }
            Request::RetrieveCategorizedDatabaseRecords {
                category, offset, ..
            } => respond(sink, &command, categorized_record(*category, *offset)),

            Request::GetPlayStatus => {
                let state = from_status(&fetch_status(&self.backend, player).await);
                respond(
                    sink,
                    &command,
                    Response::PlayStatus {
                        state,
                        track_index: 0,
                        track_length_ms: TRACK_LENGTH_MS,
                        track_position_ms: TRACK_POSITION_MS,
                    },
                )
            }
            Request::GetCurrentPlayingTrackIndex => {
                let track_index = if player.is_some() { 0 } else { -1 };
                respond(
                    sink,
                    &command,
                    Response::CurrentPlayingTrackIndex { track_index },
                )
            }
            Request::GetNumPlayingTracks => {
                let num_tracks = if player.is_some() {
                    PLAYING_TRACK_COUNT
                } else {
                    0
                };
                respond(sink, &command, Response::NumPlayingTracks { num_tracks })
            }
            Request::GetIndexedPlayingTrackTitle { .. } => {
                let title = self.track_field(player, TrackField::Title).await;
                respond(
                    sink,
                    &command,
                    Response::IndexedPlayingTrackTitle { title },
                )
            }
            Request::GetIndexedPlayingTrackArtistName { .. } => {
                let artist_name = self.track_field(player, TrackField::Artist).await;
                respond(
                    sink,
                    &command,
                    Response::IndexedPlayingTrackArtistName { artist_name },
                )
            }
            Request::GetIndexedPlayingTrackAlbumName { .. } => {
                let album_name = self.track_field(player, TrackField::Album).await;
                respond(
                    sink,
                    &command,
                    Response::IndexedPlayingTrackAlbumName { album_name },
                )
            }

            Request::PlayControl { action } => {
                self.play_control(&command, *action, player, sink).await
            }

            Request::GetShuffle => respond(
                sink,
                &command,
                Response::Shuffle {
                    mode: ShuffleMode::Off,
                },
            ),
            Request::GetRepeat => respond(
                sink,
                &command,
                Response::Repeat {
                    mode: RepeatMode::Off,
                },
            ),
            Request::GetMonoDisplayImageLimits => respond(
                sink,
                &command,
                Response::MonoDisplayImageLimits(DISPLAY_IMAGE_LIMITS),
            ),
            Request::GetColorDisplayImageLimits => respond(
                sink,
                &command,
                Response::ColorDisplayImageLimits {
                    limits: vec![DISPLAY_IMAGE_LIMITS],
                },
            ),

            Request::ResetDbSelectionHierarchy { selection } => {
                let status = match selection {
                    1 => AckStatus::SUCCESS,
                    _ => AckStatus::FAILED,
                };
                ack(sink, &command, status)
            }

            Request::SetCurrentPlayingTrack { .. }
            | Request::SelectSortDbRecord { .. }
            | Request::GetDbITunesInfo { .. }
            | Request::GetUidTrackInfo { .. }
            | Request::GetDbTrackInfo { .. }
            | Request::GetPbTrackInfo { .. } => {
                debug!("No reply for {:?}", command.request);
            }
            Request::Unknown => {
                debug!("Ignoring unknown command {}", command.id);
            }
        }
    }

    async fn track_field(&self, player: Option<&PlayerPath>, field: TrackField) -> Text {
        Text::new(fetch_field(&self.backend, player, field, &self.config.metadata_fallback).await)
    }

    async fn play_control<S: ResponseSink + ?Sized>(
        &self,
        command: &Command,
        action: PlayControl,
        player: Option<&PlayerPath>,
        sink: &mut S,
    ) {
        let directed = directed_action(action);

        match (player, directed) {
            (None, None) => {
                info!("No active player, dropping {:?}", action);
                return;
            }
            (None, Some(directed)) => {
                info!("No active player, skipping {}", directed);
            }
            (Some(player), Some(directed)) => self.perform(player, directed).await,
            (Some(player), None) if action == PlayControl::Toggle => {
                let status = fetch_status(&self.backend, Some(player)).await;
                let directed = resolve_toggle(&status);
                info!("current status is {:?} calling {}", status, directed);
                self.perform(player, directed).await;
            }
            (Some(_), None) => {
                debug!("{:?} has no backend counterpart", action);
            }
        }

        let status = self.config.control_ack.status_for(action);
        debug!("Responding with ack status {:#04x} for {:?}", status.raw(), action);
        ack(sink, command, status);
    }

    async fn perform(&self, player: &PlayerPath, action: PlayerAction) {
        info!("{}", action);
        if let Err(e) = self.backend.perform(player, action).await {
            warn!("calling {}: {}", action, e);
        }
    }
}

/// Backend action for the controls that map onto one directly.
fn directed_action(action: PlayControl) -> Option<PlayerAction> {
    match action {
        PlayControl::Play => Some(PlayerAction::Play),
        PlayControl::Pause => Some(PlayerAction::Pause),
        PlayControl::Next | PlayControl::NextTrack | PlayControl::NextChapter => {
            Some(PlayerAction::Next)
        }
        PlayControl::Prev | PlayControl::PrevTrack | PlayControl::PrevChapter => {
            Some(PlayerAction::Previous)
        }
        PlayControl::Toggle
        | PlayControl::Stop
        | PlayControl::StartFf
        | PlayControl::StartRew
        | PlayControl::EndFfRew => None,
    }
}

fn track_info(info_type: InfoType) -> TrackInfo {
    let text = |field: &str| {
        TrackInfo::Text(Text::new(format!("GetIndexedPlayingTrackInfo {}", field)))
    };

    match info_type {
        InfoType::Capabilities => TrackInfo::Caps(TrackCaps {
            caps: 0x0,
            track_length_ms: TRACK_LENGTH_MS,
            chapter_count: 0,
        }),
        InfoType::Artist => text("ArtistName"),
        InfoType::Album => text("Album"),
        InfoType::Genre => text("Genre"),
        InfoType::Title => text("Title"),
        InfoType::Composer => text("Composer"),
        InfoType::ArtworkCount => TrackInfo::ArtworkCount,
        InfoType::Lyrics | InfoType::Description => TrackInfo::LongText(TrackLongText {
            flags: 0x0,
            packet_index: 0,
            text: Text::empty(),
        }),
        InfoType::PodcastName | InfoType::ReleaseDate => TrackInfo::Text(Text::new("WAT")),
    }
}

fn categorized_record(category: DbCategory, offset: u32) -> Response {
    match category {
        DbCategory::Track => Response::CategorizedDatabaseRecord {
            record_index: offset,
            name: RecordName::new(format!("Track {}", offset)),
        },
        _ => Response::CategorizedDatabaseRecord {
            record_index: 0,
            name: RecordName::EMPTY,
        },
    }
}

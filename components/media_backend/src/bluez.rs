//! BlueZ AVRCP media player reached over the D-Bus system bus.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};
use zbus::fdo::ObjectManagerProxy;
use zbus::zvariant::OwnedValue;
use zbus::{dbus_proxy, CacheProperties, Connection};

use crate::error::BackendError;
use crate::{MediaBackend, PlayerAction, PlayerPath, Result, TrackFields, TrackField};

pub const BLUEZ_SERVICE: &str = "org.bluez";
pub const MEDIA_PLAYER_INTERFACE: &str = "org.bluez.MediaPlayer1";

#[dbus_proxy(interface = "org.bluez.MediaPlayer1", default_service = "org.bluez")]
trait MediaPlayer1 {
    fn play(&self) -> zbus::Result<()>;

    fn pause(&self) -> zbus::Result<()>;

    fn next(&self) -> zbus::Result<()>;

    fn previous(&self) -> zbus::Result<()>;

    #[dbus_proxy(property)]
    fn status(&self) -> zbus::Result<String>;

    #[dbus_proxy(property)]
    fn track(&self) -> zbus::Result<HashMap<String, OwnedValue>>;
}

/// Shared handle that is opened on demand and can be dropped so the next
/// caller opens a fresh one.
struct ConnectionSlot<C> {
    current: Mutex<Option<C>>,
}

impl<C: Clone> ConnectionSlot<C> {
    fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    async fn get_or_connect<F, Fut>(&self, connect: F) -> Result<C>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<C>>,
    {
        if let Some(connection) = self.current.lock().clone() {
            return Ok(connection);
        }

        let connection = connect().await?;
        *self.current.lock() = Some(connection.clone());
        Ok(connection)
    }

    fn reset(&self) {
        self.current.lock().take();
    }
}

/// Backend talking to whichever BlueZ media player is currently exported.
///
/// The bus connection is opened on first use and shared afterwards. A failed
/// player lookup drops it, so a restarted bus daemon is picked up on the next
/// request. The player itself is looked up again for every request.
pub struct BluezBackend {
    connection: ConnectionSlot<Connection>,
}

impl Default for BluezBackend {
    fn default() -> Self {
        Self {
            connection: ConnectionSlot::new(),
        }
    }
}

impl BluezBackend {
    pub fn new() -> Self {
        Self::default()
    }

    async fn connection(&self) -> Result<Connection> {
        self.connection
            .get_or_connect(|| async {
                Connection::system()
                    .await
                    .map_err(|e| BackendError::Connection(e.to_string()))
            })
            .await
    }

    async fn managed_players(&self) -> Result<Vec<PlayerPath>> {
        let connection = self.connection().await?;
        let manager = ObjectManagerProxy::builder(&connection)
            .destination(BLUEZ_SERVICE)
            .and_then(|builder| builder.path("/"))
            .map_err(|e| BackendError::Enumeration(e.to_string()))?
            .build()
            .await
            .map_err(|e| BackendError::Enumeration(e.to_string()))?;

        let objects = manager
            .get_managed_objects()
            .await
            .map_err(|e| BackendError::Enumeration(e.to_string()))?;

        Ok(objects
            .into_iter()
            .filter(|(_, interfaces)| {
                interfaces
                    .keys()
                    .any(|name| name.as_str() == MEDIA_PLAYER_INTERFACE)
            })
            .map(|(path, _)| PlayerPath::new(path.as_str()))
            .collect())
    }

    async fn player(&self, path: &PlayerPath) -> Result<MediaPlayer1Proxy<'static>> {
        let connection = self.connection().await?;
        MediaPlayer1Proxy::builder(&connection)
            .path(path.as_str().to_owned())
            .map_err(|e| BackendError::Connection(format!("invalid player path {}: {}", path, e)))?
            .cache_properties(CacheProperties::No)
            .build()
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))
    }
}

#[async_trait]
impl MediaBackend for BluezBackend {
    async fn active_player(&self) -> Result<Option<PlayerPath>> {
        let players = match self.managed_players().await {
            Ok(players) => players,
            Err(e) => {
                warn!("Dropping system bus connection: {}", e);
                self.connection.reset();
                return Err(e);
            }
        };

        let player = players.into_iter().min();
        debug!("Active media player: {:?}", player);
        Ok(player)
    }

    async fn status(&self, player: &PlayerPath) -> Result<String> {
        self.player(player)
            .await?
            .status()
            .await
            .map_err(|e| BackendError::Status(e.to_string()))
    }

    async fn track(&self, player: &PlayerPath) -> Result<TrackFields> {
        let mut track = self
            .player(player)
            .await?
            .track()
            .await
            .map_err(|e| BackendError::Track(e.to_string()))?;

        Ok(TrackFields {
            title: take_string(&mut track, TrackField::Title),
            artist: take_string(&mut track, TrackField::Artist),
            album: take_string(&mut track, TrackField::Album),
        })
    }

    async fn perform(&self, player: &PlayerPath, action: PlayerAction) -> Result<()> {
        let proxy = self.player(player).await?;
        let result = match action {
            PlayerAction::Play => proxy.play().await,
            PlayerAction::Pause => proxy.pause().await,
            PlayerAction::Next => proxy.next().await,
            PlayerAction::Previous => proxy.previous().await,
        };
        result.map_err(|e| BackendError::action(action, e.to_string()))
    }
}

fn take_string(track: &mut HashMap<String, OwnedValue>, field: TrackField) -> Option<String> {
    track
        .remove(field.key())
        .and_then(|value| String::try_from(value).ok())
}

//! Extended remote lingo handler.
//!
//! Turns decoded [`Command`](extremote_protocol::Command)s into
//! [`Response`](extremote_protocol::Response)s, asking the active media
//! player for status and metadata and forwarding transport controls to it.

mod config;
mod dispatcher;
mod emitter;
mod metadata;
mod resolver;
mod status;

pub use config::{ControlAck, LingoConfig, MetadataFallback};
pub use dispatcher::Dispatcher;
pub use emitter::{ack, respond, ResponseSink};
pub use metadata::fetch_field;
pub use resolver::resolve;
pub use status::{fetch_status, from_status, resolve_toggle, to_playback_state};

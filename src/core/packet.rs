//! # Packet Decode/Encode
//!
//! Turns validated frames into typed application messages and back.
//!
//! [`PacketCodec`] is stateless: it borrows nothing but a shared, read-only
//! [`CommandTable`] and [`SchemaRegistry`], both injected at construction, so
//! every decode/encode call is independently re-entrant and unit tests can
//! substitute fake collaborators.
//!
//! ## Degradation policy
//! Inbound frames never take the process down. A frame whose command id has
//! no table entry, or whose payload does not match its schema, still decodes
//! into a usable [`Packet`] with an empty body; the problem is surfaced as a
//! diagnostic (with the raw payload in hex for offline analysis). The only
//! hard decode failure is a malformed frame. Encode failures are always
//! returned as errors - a corrupt frame is never produced.

use crate::core::frame::{self, FrameHeader, HEADER_SIZE};
use crate::error::{ProtocolError, Result};
use crate::protocol::command::CommandTable;
use crate::protocol::registry::SchemaRegistry;
use bytes::Bytes;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// One decoded message: the frame it came from plus its resolved identity.
///
/// Constructed once per inbound or outbound frame and immutable afterwards.
/// Payload access is zero-copy (a [`Bytes`] slice of the raw frame).
#[derive(Debug, Clone)]
pub struct Packet {
    raw: Bytes,
    command_id: u16,
    name: Option<Cow<'static, str>>,
    payload: Bytes,
    body: Option<Value>,
}

impl Packet {
    /// The complete raw frame, header and trailer included.
    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The raw frame as shared bytes (cheap, zero-copy clone).
    #[inline]
    pub fn raw_bytes(&self) -> Bytes {
        self.raw.clone()
    }

    /// The command id carried in the frame header.
    #[inline]
    pub fn command_id(&self) -> u16 {
        self.command_id
    }

    /// The resolved command name, if the id was known or an override was given.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The raw payload slice of the frame.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The raw payload as shared bytes (cheap, zero-copy clone).
    #[inline]
    pub fn payload_bytes(&self) -> Bytes {
        self.payload.clone()
    }

    /// The structured body, or `None` when no schema decode succeeded.
    #[inline]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Whether a structured body was decoded.
    #[inline]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Frame codec over an injected command table and schema registry.
///
/// Both collaborators are built once at process start and shared read-only;
/// the codec itself holds no mutable state and is safe to clone across
/// threads and tasks.
#[derive(Clone)]
pub struct PacketCodec {
    table: Arc<CommandTable>,
    registry: Arc<dyn SchemaRegistry>,
}

impl PacketCodec {
    /// Create a codec over a command table and schema registry.
    pub fn new(table: Arc<CommandTable>, registry: Arc<dyn SchemaRegistry>) -> Self {
        Self { table, registry }
    }

    /// The command table this codec resolves against.
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Decode a complete frame buffer into a [`Packet`].
    ///
    /// Equivalent to [`decode_named`](Self::decode_named) without an override.
    pub fn decode(&self, buffer: &[u8]) -> Result<Packet> {
        self.decode_named(buffer, None)
    }

    /// Decode a complete frame buffer, optionally forcing the schema name.
    ///
    /// The command name is the override if given, otherwise the table's
    /// reverse lookup of the frame's command id. Unknown ids and payloads
    /// that fail their schema produce a packet with an empty body and a
    /// diagnostic; only a malformed frame is a hard error.
    pub fn decode_named(&self, buffer: &[u8], name_override: Option<&str>) -> Result<Packet> {
        let header = FrameHeader::parse(buffer)?;
        let raw = Bytes::copy_from_slice(buffer);
        let payload = raw.slice(header.payload_range());

        let name: Option<Cow<'static, str>> = match name_override {
            Some(forced) => Some(
                self.table
                    .canonical_name(forced)
                    .map(Cow::Borrowed)
                    .unwrap_or_else(|| Cow::Owned(forced.to_string())),
            ),
            None => self.table.resolve_name(header.command_id).map(Cow::Borrowed),
        };

        let body = match name.as_deref() {
            Some(name) => self.decode_body(name, &payload),
            None => {
                error!(command_id = header.command_id, "Unknown packet id");
                None
            }
        };

        Ok(Packet {
            raw,
            command_id: header.command_id,
            name,
            payload,
            body,
        })
    }

    fn decode_body(&self, name: &str, payload: &[u8]) -> Option<Value> {
        let Some(schema) = self.registry.lookup(name) else {
            warn!(command = name, "No schema registered for command");
            debug!(data = %hex::encode(payload), "Raw payload");
            return None;
        };

        match schema.decode(payload) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(command = name, error = %e, "Failed to decode payload");
                debug!(data = %hex::encode(payload), "Raw payload");
                None
            }
        }
    }

    /// Serialize a body under schema `name` and wrap it in a complete frame.
    ///
    /// The emitted command id is `command_id_override` when given, otherwise
    /// the table's id for `name`. Returns the [`Packet`] view of the produced
    /// frame - semantically equivalent to immediately decoding the bytes just
    /// written - so callers can re-inspect what went on the wire.
    pub fn encode(
        &self,
        name: &str,
        body: Value,
        command_id_override: Option<u16>,
    ) -> Result<Packet> {
        let command_id = match command_id_override {
            Some(id) => id,
            None => self
                .table
                .resolve_id(name)
                .ok_or_else(|| ProtocolError::UnknownName(name.to_string()))?,
        };

        let schema = self
            .registry
            .lookup(name)
            .ok_or_else(|| ProtocolError::UnknownName(name.to_string()))?;
        let payload = schema.encode(&body)?;

        let raw = Bytes::from(frame::build_frame(command_id, &payload)?);
        let payload = raw.slice(HEADER_SIZE..HEADER_SIZE + payload.len());

        let name = self
            .table
            .canonical_name(name)
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(name.to_string()));

        Ok(Packet {
            raw,
            command_id,
            name: Some(name),
            payload,
            body: Some(body),
        })
    }

    /// Wrap already-serialized payload bytes in a complete frame.
    ///
    /// Skips schema serialization entirely; `name` must still resolve in the
    /// command table to supply the emitted command id.
    pub fn encode_raw(&self, payload: &[u8], name: &str) -> Result<Vec<u8>> {
        let command_id = self
            .table
            .resolve_id(name)
            .ok_or_else(|| ProtocolError::UnknownName(name.to_string()))?;
        frame::build_frame(command_id, payload)
    }
}

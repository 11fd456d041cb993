//! # Gateway Protocol
//!
//! Packet framing and command-routing core for a game-server gateway
//! endpoint.
//!
//! This crate converts raw transport datagrams into typed application
//! messages and back. It owns the wire format - sentinel validation, length
//! accounting, header/trailer emission - and the command table that maps
//! message names to u16 ids. Everything else (the reliable-UDP session
//! layer, the request handlers that consume decoded bodies) stays outside.
//!
//! ## Components
//! - **Frame**: byte layout, sentinels, and bounds-checked header parsing
//! - **Codec**: stream framing over [`tokio_util::codec`]
//! - **Packet**: decode/encode against an injected table + schema registry
//! - **Command Table**: immutable name ⇄ id resolution, built once at startup
//! - **Schema Registry**: pluggable structured encode/decode per message name
//! - **Dispatcher**: command-name handler routing
//!
//! ## Wire Format
//! ```text
//! [MagicHead(4)] [CommandId(2)] [MetadataLen(2)] [PayloadLen(4)] [Metadata(M)] [Payload(N)] [MagicTail(4)]
//! ```
//!
//! ## Quick Start
//! ```rust
//! use gateway_protocol::{CommandTable, PacketCodec, SchemaSet};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # fn main() -> gateway_protocol::Result<()> {
//! // One-time startup: build the table, load the registry. A load failure
//! // here means the process must not serve traffic.
//! let table = Arc::new(CommandTable::builtin());
//! let registry = Arc::new(SchemaSet::load_builtin(&table)?);
//! let codec = PacketCodec::new(table, registry);
//!
//! let packet = codec.encode("PlayerLogoutCsReq", json!({}), None)?;
//! assert_eq!(packet.command_id(), 3);
//!
//! let echoed = codec.decode(packet.raw())?;
//! assert_eq!(echoed.name(), Some("PlayerLogoutCsReq"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Degradation Policy
//! Inbound data never takes the endpoint down: unknown command ids and
//! schema mismatches decode to a packet with an empty body plus a
//! diagnostic. Malformed frames are the one hard decode error, and encode
//! failures are always explicit - a corrupt frame is never emitted.

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

pub use crate::core::codec::FrameCodec;
pub use crate::core::frame::{validate, FrameHeader};
pub use crate::core::packet::{Packet, PacketCodec};
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::command::CommandTable;
pub use crate::protocol::dispatcher::Dispatcher;
pub use crate::protocol::registry::{MessageSchema, SchemaRegistry, SchemaSet};

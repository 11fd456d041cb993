//! # Core Protocol Components
//!
//! Low-level frame handling, stream framing, and packet decode/encode.
//!
//! This module provides the foundation for the protocol, handling frame
//! validation, header parsing, and the wire format.
//!
//! ## Components
//! - **Frame**: Binary frame format with head/tail sentinels
//! - **Codec**: Tokio codec for framing over byte streams
//! - **Packet**: Decoded messages and the table/registry-backed codec
//!
//! ## Wire Format
//! ```text
//! [MagicHead(4)] [CommandId(2)] [MetadataLen(2)] [PayloadLen(4)] [Metadata(M)] [Payload(N)] [MagicTail(4)]
//! ```
//!
//! ## Security
//! - Maximum payload size: 16MB (prevents memory exhaustion)
//! - Sentinels prevent accidental misinterpretation of foreign traffic
//! - Length claims validated before allocation

pub mod codec;
pub mod frame;
pub mod packet;

//! # Frame Wire Format
//!
//! Byte-level encoding and decoding of gateway frames.
//!
//! ## Wire Format
//! ```text
//! [MagicHead(4)] [CommandId(2)] [MetadataLen(2)] [PayloadLen(4)] [Metadata(M)] [Payload(N)] [MagicTail(4)]
//! ```
//!
//! All multi-byte fields are big-endian. The metadata block is tolerated and
//! skipped on input; this codec never emits one (metadata-length is always
//! written as 0). A frame's total length is `16 + M + N`.

use crate::config::{MAGIC_HEAD, MAGIC_TAIL};
use crate::error::{ProtocolError, Result};

/// Fixed header size in bytes: magic-head + command-id + metadata-length + payload-length.
pub const HEADER_SIZE: usize = 12;

/// Trailer size in bytes: the magic-tail sentinel.
pub const TRAILER_SIZE: usize = 4;

/// Smallest possible frame: header + trailer with empty metadata and payload.
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + TRAILER_SIZE;

/// Check whether a buffer is plausibly a frame.
///
/// True iff the buffer is at least [`MIN_FRAME_SIZE`] bytes and carries the
/// head sentinel at the start and the tail sentinel at the end. Internal
/// length consistency is NOT checked here; callers must still treat field
/// reads as subject to out-of-bounds failure.
pub fn validate(buf: &[u8]) -> bool {
    buf.len() >= MIN_FRAME_SIZE
        && buf[..4] == MAGIC_HEAD.to_be_bytes()
        && buf[buf.len() - TRAILER_SIZE..] == MAGIC_TAIL.to_be_bytes()
}

/// Decoded fixed-position header fields of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Message type identifier (meaning defined by the command table).
    pub command_id: u16,
    /// Length of the opaque metadata block (may be 0).
    pub metadata_len: u16,
    /// Length of the payload block.
    pub payload_len: u32,
}

impl FrameHeader {
    /// Parse and bounds-check the header of a complete frame buffer.
    ///
    /// Fails with [`ProtocolError::MalformedFrame`] when the buffer is too
    /// short, either sentinel mismatches, or the declared metadata/payload
    /// extents would read past the tail sentinel. These are the only hard
    /// failures on the decode path; everything else degrades to diagnostics.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < MIN_FRAME_SIZE {
            return Err(ProtocolError::MalformedFrame(format!(
                "buffer too short: {} bytes, need at least {MIN_FRAME_SIZE}",
                buf.len()
            )));
        }
        if buf[..4] != MAGIC_HEAD.to_be_bytes() {
            return Err(ProtocolError::MalformedFrame(
                "head sentinel mismatch".to_string(),
            ));
        }
        if buf[buf.len() - TRAILER_SIZE..] != MAGIC_TAIL.to_be_bytes() {
            return Err(ProtocolError::MalformedFrame(
                "tail sentinel mismatch".to_string(),
            ));
        }

        let header = Self {
            command_id: u16::from_be_bytes([buf[4], buf[5]]),
            metadata_len: u16::from_be_bytes([buf[6], buf[7]]),
            payload_len: u32::from_be_bytes([buf[8], buf[9], buf[10], buf[11]]),
        };

        // Widened arithmetic: the sum cannot overflow u64, so the extent
        // check is exact even on 32-bit hosts.
        let payload_end = HEADER_SIZE as u64 + u64::from(header.metadata_len) + u64::from(header.payload_len);
        if payload_end + TRAILER_SIZE as u64 > buf.len() as u64 {
            return Err(ProtocolError::MalformedFrame(format!(
                "payload extent [{}, {payload_end}) runs past frame bounds ({} bytes)",
                header.payload_start(),
                buf.len()
            )));
        }

        Ok(header)
    }

    /// Offset of the first payload byte within the frame.
    #[inline]
    pub fn payload_start(&self) -> usize {
        HEADER_SIZE + self.metadata_len as usize
    }

    /// Byte range of the payload within its frame.
    ///
    /// In bounds for any header returned by [`FrameHeader::parse`].
    #[inline]
    pub fn payload_range(&self) -> std::ops::Range<usize> {
        let start = self.payload_start();
        start..start + self.payload_len as usize
    }

    /// Total length of a well-formed frame carrying this header.
    #[inline]
    pub fn frame_len(&self) -> usize {
        MIN_FRAME_SIZE + self.metadata_len as usize + self.payload_len as usize
    }
}

/// Build a complete frame around an already-serialized payload.
///
/// Allocates exactly `16 + payload.len()` bytes. Metadata-length is always
/// written as 0; this codec never emits metadata.
pub fn build_frame(command_id: u16, payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > u32::MAX as usize {
        return Err(ProtocolError::OversizedFrame(payload.len()));
    }

    let mut buf = Vec::with_capacity(MIN_FRAME_SIZE + payload.len());
    buf.extend_from_slice(&MAGIC_HEAD.to_be_bytes());
    buf.extend_from_slice(&command_id.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&MAGIC_TAIL.to_be_bytes());
    Ok(buf)
}

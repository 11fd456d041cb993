//! # Stream Framing Codec
//!
//! [`tokio_util::codec`] adapter that cuts complete frames out of an ordered
//! byte stream. The session/transport layer owns delivery and ordering; this
//! codec only finds frame boundaries, enforces the payload size limit, and
//! refuses to emit anything that is not a well-formed frame.

use crate::config::{MAGIC_HEAD, MAGIC_TAIL, MAX_PAYLOAD_SIZE};
use crate::core::frame::{self, MIN_FRAME_SIZE, TRAILER_SIZE};
use crate::error::ProtocolError;
use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Frame boundary codec for byte streams.
///
/// Decoding yields one complete, sentinel-checked frame at a time as
/// [`Bytes`]; partial input returns `Ok(None)` and leaves the buffer
/// untouched. Splitting a finished frame off the read buffer is zero-copy.
#[derive(Debug, Clone)]
pub struct FrameCodec {
    max_payload_size: usize,
}

impl FrameCodec {
    /// Create a codec with a custom payload size limit.
    pub fn new(max_payload_size: usize) -> Self {
        Self { max_payload_size }
    }
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new(MAX_PAYLOAD_SIZE)
    }
}

impl Decoder for FrameCodec {
    type Item = Bytes;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Bytes>, ProtocolError> {
        if src.len() < MIN_FRAME_SIZE {
            return Ok(None);
        }

        if src[..4] != MAGIC_HEAD.to_be_bytes() {
            // A stream that lost framing cannot be resynchronized here.
            return Err(ProtocolError::MalformedFrame(
                "head sentinel mismatch".to_string(),
            ));
        }

        let metadata_len = u16::from_be_bytes([src[6], src[7]]) as usize;
        let payload_len = u32::from_be_bytes([src[8], src[9], src[10], src[11]]) as usize;

        // Validate the length claim before reserving anything.
        if payload_len > self.max_payload_size {
            return Err(ProtocolError::OversizedFrame(payload_len));
        }

        let total = MIN_FRAME_SIZE + metadata_len + payload_len;
        if src.len() < total {
            src.reserve(total - src.len());
            return Ok(None);
        }

        let frame = src.split_to(total).freeze();
        if frame[total - TRAILER_SIZE..] != MAGIC_TAIL.to_be_bytes() {
            return Err(ProtocolError::MalformedFrame(
                "tail sentinel mismatch".to_string(),
            ));
        }

        Ok(Some(frame))
    }
}

impl Encoder<Bytes> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        // Never let an unframed buffer reach the wire.
        if !frame::validate(&item) {
            return Err(ProtocolError::MalformedFrame(
                "refusing to emit buffer without frame sentinels".to_string(),
            ));
        }

        dst.reserve(item.len());
        dst.extend_from_slice(&item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::build_frame;

    #[test]
    fn decode_returns_none_until_complete() {
        let mut codec = FrameCodec::default();
        let frame = build_frame(7, &[1, 2, 3, 4]).unwrap();

        let mut buf = BytesMut::from(&frame[..frame.len() - 1]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(&frame[frame.len() - 1..]);
        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&decoded[..], &frame[..]);
        assert!(buf.is_empty());
    }

    #[test]
    fn decode_rejects_oversized_claim() {
        let mut codec = FrameCodec::new(16);
        let frame = build_frame(7, &[0u8; 32]).unwrap();

        let mut buf = BytesMut::from(&frame[..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(ProtocolError::OversizedFrame(32))
        ));
    }

    #[test]
    fn encode_refuses_unframed_bytes() {
        let mut codec = FrameCodec::default();
        let mut buf = BytesMut::new();

        let result = codec.encode(Bytes::from_static(b"not a frame"), &mut buf);
        assert!(matches!(result, Err(ProtocolError::MalformedFrame(_))));
        assert!(buf.is_empty());
    }
}

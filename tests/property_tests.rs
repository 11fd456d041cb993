//! Property-based tests using proptest
//!
//! These tests validate frame-format invariants across a wide range of
//! randomly generated inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use gateway_protocol::config::{MAGIC_HEAD, MAGIC_TAIL};
use gateway_protocol::core::frame::{build_frame, validate, FrameHeader, MIN_FRAME_SIZE};
use gateway_protocol::{CommandTable, PacketCodec, SchemaSet};
use proptest::prelude::*;
use std::sync::Arc;

fn codec() -> PacketCodec {
    let table = Arc::new(CommandTable::builtin());
    let registry = Arc::new(SchemaSet::load_builtin(&table).expect("builtin registry loads"));
    PacketCodec::new(table, registry)
}

/// A hand-built frame with an arbitrary metadata block (the builder itself
/// never emits one).
fn frame_with_metadata(command_id: u16, metadata: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MIN_FRAME_SIZE + metadata.len() + payload.len());
    buf.extend_from_slice(&MAGIC_HEAD.to_be_bytes());
    buf.extend_from_slice(&command_id.to_be_bytes());
    buf.extend_from_slice(&(metadata.len() as u16).to_be_bytes());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(metadata);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&MAGIC_TAIL.to_be_bytes());
    buf
}

// Property: any built frame parses back to its inputs
proptest! {
    #[test]
    fn prop_build_parse_roundtrip(
        command_id in any::<u16>(),
        payload in prop::collection::vec(any::<u8>(), 0..2048),
    ) {
        let frame = build_frame(command_id, &payload).expect("build should not fail");

        prop_assert_eq!(frame.len(), MIN_FRAME_SIZE + payload.len());
        prop_assert!(validate(&frame));

        let header = FrameHeader::parse(&frame).expect("parse should not fail");
        prop_assert_eq!(header.command_id, command_id);
        prop_assert_eq!(header.metadata_len, 0);
        prop_assert_eq!(header.payload_len as usize, payload.len());
        prop_assert_eq!(&frame[header.payload_range()], &payload[..]);
    }
}

// Property: frame building is deterministic
proptest! {
    #[test]
    fn prop_build_frame_deterministic(
        command_id in any::<u16>(),
        payload in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let frame1 = build_frame(command_id, &payload).unwrap();
        let frame2 = build_frame(command_id, &payload).unwrap();
        prop_assert_eq!(frame1, frame2);
    }
}

// Property: validate is exactly the length + sentinel predicate
proptest! {
    #[test]
    fn prop_validate_truth_table(buf in prop::collection::vec(any::<u8>(), 0..64)) {
        let expected = buf.len() >= MIN_FRAME_SIZE
            && buf[..4] == MAGIC_HEAD.to_be_bytes()
            && buf[buf.len() - 4..] == MAGIC_TAIL.to_be_bytes();
        prop_assert_eq!(validate(&buf), expected);
    }
}

// Property: the payload extraction never reads past the buffer, for any
// metadata/payload split
proptest! {
    #[test]
    fn prop_payload_extraction_in_bounds(
        command_id in any::<u16>(),
        metadata in prop::collection::vec(any::<u8>(), 0..64),
        payload in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let frame = frame_with_metadata(command_id, &metadata, &payload);
        let header = FrameHeader::parse(&frame).expect("parse should not fail");

        let range = header.payload_range();
        prop_assert!(range.end <= frame.len());
        prop_assert_eq!(&frame[range], &payload[..]);
    }
}

// Property: truncating a frame anywhere makes it malformed, never a panic
proptest! {
    #[test]
    fn prop_truncation_is_malformed(
        payload in prop::collection::vec(any::<u8>(), 0..128),
        cut in any::<prop::sample::Index>(),
    ) {
        let frame = build_frame(1, &payload).unwrap();
        let cut = cut.index(frame.len()); // always strictly shorter
        prop_assert!(FrameHeader::parse(&frame[..cut]).is_err());
    }
}

// Property: decode never errors on any command id, known or not
proptest! {
    #[test]
    fn prop_decode_tolerates_any_command_id(
        command_id in any::<u16>(),
        payload in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let codec = codec();
        let frame = build_frame(command_id, &payload).unwrap();

        let packet = codec.decode(&frame).expect("decode must tolerate content");
        prop_assert_eq!(packet.command_id(), command_id);
        prop_assert_eq!(packet.payload(), &payload[..]);
    }
}

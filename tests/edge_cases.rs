#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for frame parsing and packet decode/encode
//! Covers boundary conditions, sentinel corruption, length-claim abuse, and
//! the unknown-command degradation path

use gateway_protocol::config::{MAGIC_HEAD, MAGIC_TAIL};
use gateway_protocol::core::frame::{self, FrameHeader, MIN_FRAME_SIZE};
use gateway_protocol::error::ProtocolError;
use gateway_protocol::{CommandTable, MessageSchema, PacketCodec, SchemaRegistry, SchemaSet};
use serde_json::json;
use std::sync::Arc;

fn codec() -> PacketCodec {
    let table = Arc::new(CommandTable::builtin());
    let registry = Arc::new(SchemaSet::load_builtin(&table).expect("builtin registry loads"));
    PacketCodec::new(table, registry)
}

// ============================================================================
// FRAME VALIDATION EDGE CASES
// ============================================================================

#[test]
fn test_validate_empty_buffer() {
    assert!(!frame::validate(&[]));
}

#[test]
fn test_validate_fifteen_bytes_rejected() {
    let frame = frame::build_frame(1, &[]).unwrap();
    assert!(!frame::validate(&frame[..15]));
}

#[test]
fn test_validate_exact_minimum() {
    let frame = frame::build_frame(1, &[]).unwrap();
    assert_eq!(frame.len(), MIN_FRAME_SIZE);
    assert!(frame::validate(&frame));
}

#[test]
fn test_validate_ignores_interior_garbage() {
    // validate only checks length + sentinels; interior consistency is the
    // parser's job.
    let mut buf = vec![0u8; 32];
    buf[..4].copy_from_slice(&MAGIC_HEAD.to_be_bytes());
    buf[28..].copy_from_slice(&MAGIC_TAIL.to_be_bytes());
    assert!(frame::validate(&buf));

    // But the parser rejects it: payload-length claim of 0 with 12 bytes of
    // slack is fine, a claim past the trailer is not.
    buf[8..12].copy_from_slice(&100u32.to_be_bytes());
    assert!(matches!(
        FrameHeader::parse(&buf),
        Err(ProtocolError::MalformedFrame(_))
    ));
}

// ============================================================================
// PACKET DECODE EDGE CASES
// ============================================================================

#[test]
fn test_unknown_command_id_decodes_opaquely() {
    let codec = codec();
    let buf = frame::build_frame(65000, &[0xDE, 0xAD]).unwrap();

    let packet = codec.decode(&buf).expect("unknown id must not error");
    assert_eq!(packet.command_id(), 65000);
    assert_eq!(packet.name(), None);
    assert_eq!(packet.payload(), &[0xDE, 0xAD]);
    assert!(!packet.has_body());
}

#[test]
fn test_schema_mismatch_degrades_to_empty_body() {
    let codec = codec();
    // GmTalkCsReq's id with payload bytes that are not a valid body.
    let buf = frame::build_frame(10, &[0xFF; 4]).unwrap();

    let packet = codec.decode(&buf).expect("schema mismatch must not error");
    assert_eq!(packet.name(), Some("GmTalkCsReq"));
    assert!(!packet.has_body());
    assert_eq!(packet.payload(), &[0xFF; 4]);
}

#[test]
fn test_name_override_wins_over_table() {
    let codec = codec();
    let sent = codec
        .encode("GmTalkCsReq", json!({ "msg": "sync all" }), None)
        .unwrap();

    // Force a different schema: the payload no longer matches, so the body
    // is empty, but the override name is kept.
    let packet = codec
        .decode_named(sent.raw(), Some("PlayerGetTokenCsReq"))
        .unwrap();
    assert_eq!(packet.name(), Some("PlayerGetTokenCsReq"));
    assert_eq!(packet.command_id(), 10);
}

#[test]
fn test_decode_tolerates_metadata_block() {
    let codec = codec();

    // Hand-built frame for PlayerKeepAliveNotify (id 7) with metadata.
    let payload = bincode::serialize(&1700000000u64).unwrap();
    let mut buf = Vec::new();
    buf.extend_from_slice(&MAGIC_HEAD.to_be_bytes());
    buf.extend_from_slice(&7u16.to_be_bytes());
    buf.extend_from_slice(&3u16.to_be_bytes());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(&[0x01, 0x02, 0x03]); // metadata, skipped
    buf.extend_from_slice(&payload);
    buf.extend_from_slice(&MAGIC_TAIL.to_be_bytes());

    let packet = codec.decode(&buf).unwrap();
    assert_eq!(packet.name(), Some("PlayerKeepAliveNotify"));
    assert_eq!(packet.payload(), &payload[..]);
    assert_eq!(
        packet.body().unwrap(),
        &json!({ "client_timestamp_ms": 1700000000u64 })
    );
}

#[test]
fn test_truncated_buffers_are_malformed() {
    let codec = codec();

    for len in 0..MIN_FRAME_SIZE {
        let result = codec.decode(&vec![0x01; len]);
        assert!(
            matches!(result, Err(ProtocolError::MalformedFrame(_))),
            "buffer of {len} bytes must be malformed"
        );
    }
}

#[test]
fn test_corrupt_sentinels_are_malformed() {
    let codec = codec();

    let mut head_corrupt = codec
        .encode("PlayerLogoutCsReq", json!({}), None)
        .unwrap()
        .raw()
        .to_vec();
    head_corrupt[0] = 0xFF;
    assert!(matches!(
        codec.decode(&head_corrupt),
        Err(ProtocolError::MalformedFrame(_))
    ));

    let mut tail_corrupt = codec
        .encode("PlayerLogoutCsReq", json!({}), None)
        .unwrap()
        .raw()
        .to_vec();
    let last = tail_corrupt.len() - 1;
    tail_corrupt[last] = 0x00;
    assert!(matches!(
        codec.decode(&tail_corrupt),
        Err(ProtocolError::MalformedFrame(_))
    ));
}

// ============================================================================
// ENCODE EDGE CASES
// ============================================================================

#[test]
fn test_command_id_override_is_emitted() {
    let codec = codec();
    let packet = codec
        .encode("PlayerLogoutCsReq", json!({}), Some(4242))
        .unwrap();

    assert_eq!(packet.command_id(), 4242);
    assert_eq!(&packet.raw()[4..6], &4242u16.to_be_bytes());
}

#[test]
fn test_override_skips_table_but_schema_is_still_required() {
    // An explicit id skips the table lookup, but the registry must still
    // know the schema before any frame is produced.
    let codec = codec();
    let result = codec.encode("NoSuchMessage", json!({}), Some(9));
    assert!(matches!(result, Err(ProtocolError::UnknownName(_))));
}

#[test]
fn test_unknown_override_name_decodes_with_empty_body() {
    let codec = codec();
    let buf = frame::build_frame(3, &[]).unwrap();

    let packet = codec.decode_named(&buf, Some("Bogus")).unwrap();
    assert_eq!(packet.name(), Some("Bogus"));
    assert_eq!(packet.command_id(), 3);
    assert!(!packet.has_body());
}

#[test]
fn test_body_schema_mismatch_produces_no_frame() {
    let codec = codec();
    let result = codec.encode("GmTalkCsReq", json!({ "msg": [1, 2, 3] }), None);
    assert!(matches!(result, Err(ProtocolError::SchemaEncode { .. })));
}

#[test]
fn test_encode_raw_requires_table_entry() {
    let codec = codec();
    let result = codec.encode_raw(&[0x01], "NoSuchMessage");
    assert!(matches!(result, Err(ProtocolError::UnknownName(_))));
}

// ============================================================================
// DEPENDENCY INJECTION EDGE CASES
// ============================================================================

/// Registry that knows no schemas at all.
struct EmptyRegistry;

impl SchemaRegistry for EmptyRegistry {
    fn lookup(&self, _name: &str) -> Option<&dyn MessageSchema> {
        None
    }
}

#[test]
fn test_fake_registry_degrades_known_ids_to_empty_body() {
    let table = Arc::new(CommandTable::builtin());
    let codec = PacketCodec::new(table, Arc::new(EmptyRegistry));

    let buf = frame::build_frame(3, &[]).unwrap();
    let packet = codec.decode(&buf).unwrap();

    // Name still resolves via the table; only the body is missing.
    assert_eq!(packet.name(), Some("PlayerLogoutCsReq"));
    assert!(!packet.has_body());
}

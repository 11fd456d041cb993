#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Schema round-trip tests
//!
//! Every builtin schema must survive encode → decode with a deep-equal body
//! and the command table's id for its name.

use gateway_protocol::{CommandTable, PacketCodec, SchemaSet};
use serde_json::{json, Value};
use std::sync::Arc;

fn codec() -> PacketCodec {
    let table = Arc::new(CommandTable::builtin());
    let registry = Arc::new(SchemaSet::load_builtin(&table).expect("builtin registry loads"));
    PacketCodec::new(table, registry)
}

fn assert_roundtrip(codec: &PacketCodec, name: &str, body: Value) {
    let sent = codec
        .encode(name, body.clone(), None)
        .unwrap_or_else(|e| panic!("encode {name} failed: {e}"));

    let received = codec
        .decode(sent.raw())
        .unwrap_or_else(|e| panic!("decode {name} failed: {e}"));

    assert_eq!(received.name(), Some(name));
    assert_eq!(
        Some(received.command_id()),
        codec.table().resolve_id(name),
        "{name}: command id must come from the table"
    );
    assert_eq!(
        received.body(),
        Some(&body),
        "{name}: body must deep-equal the original"
    );
}

#[test]
fn test_session_flow_roundtrips() {
    let codec = codec();

    assert_roundtrip(
        &codec,
        "PlayerLoginCsReq",
        json!({
            "platform": 3,
            "device_id": "a0b1c2d3",
            "client_version": "1.0.5",
        }),
    );
    assert_roundtrip(
        &codec,
        "PlayerLoginScRsp",
        json!({
            "retcode": 0,
            "login_random": 8_244_667_310u64,
            "server_timestamp_ms": 1_717_171_717_000u64,
            "stamina": 180,
        }),
    );
    assert_roundtrip(&codec, "PlayerLogoutCsReq", json!({}));
    assert_roundtrip(&codec, "PlayerLogoutScRsp", json!({ "retcode": 0 }));
    assert_roundtrip(
        &codec,
        "PlayerGetTokenCsReq",
        json!({ "account_uid": "100032", "token": "9f8e7d" }),
    );
    assert_roundtrip(
        &codec,
        "PlayerGetTokenScRsp",
        json!({ "retcode": 0, "uid": 1337, "secret_key_seed": 11_400_714_819u64 }),
    );
    assert_roundtrip(
        &codec,
        "PlayerKeepAliveNotify",
        json!({ "client_timestamp_ms": 1_717_171_717_000u64 }),
    );
    assert_roundtrip(
        &codec,
        "PlayerKickOutScNotify",
        json!({ "kick_type": 2, "black_info": "duplicate login" }),
    );
}

#[test]
fn test_operations_flow_roundtrips() {
    let codec = codec();

    assert_roundtrip(&codec, "GmTalkCsReq", json!({ "msg": "give 1001 x10" }));
    assert_roundtrip(&codec, "GmTalkScRsp", json!({ "retcode": 0, "retmsg": "ok" }));
    assert_roundtrip(&codec, "SetNicknameCsReq", json!({ "nickname": "March" }));
    assert_roundtrip(&codec, "SetNicknameScRsp", json!({ "retcode": 0 }));
    assert_roundtrip(
        &codec,
        "SyncTimeCsReq",
        json!({ "client_timestamp_ms": 1_717_171_000_123u64 }),
    );
    assert_roundtrip(
        &codec,
        "SyncTimeScRsp",
        json!({
            "retcode": 0,
            "client_timestamp_ms": 1_717_171_000_123u64,
            "server_timestamp_ms": 1_717_171_000_456u64,
        }),
    );
    assert_roundtrip(
        &codec,
        "ServerAnnounceNotify",
        json!({ "announce_msg": "maintenance at 04:00" }),
    );
}

#[test]
fn test_default_bodies_roundtrip_for_every_builtin_schema() {
    // A defaulted (empty) body is valid under every schema.
    let codec = codec();
    let table = CommandTable::builtin();
    let registry = SchemaSet::load_builtin(&table).unwrap();

    let mut names: Vec<_> = registry.names().collect();
    names.sort_unstable();
    assert!(!names.is_empty());

    for name in names {
        let sent = codec.encode(name, json!({}), None).unwrap();
        let received = codec.decode(sent.raw()).unwrap();
        assert!(received.has_body(), "{name}: defaulted body must decode");
        assert_eq!(received.name(), Some(name));
    }
}

#[test]
fn test_logout_frame_byte_layout() {
    let codec = codec();
    let packet = codec.encode("PlayerLogoutCsReq", json!({}), None).unwrap();
    let raw = packet.raw();

    let serialized_len = packet.payload().len();
    assert_eq!(raw.len(), 16 + serialized_len);

    assert_eq!(&raw[..4], &[0x01, 0x23, 0x45, 0x67]);
    assert_eq!(&raw[4..6], &3u16.to_be_bytes()); // PlayerLogoutCsReq's table id
    assert_eq!(&raw[6..8], &[0x00, 0x00]); // metadata-length always 0
    assert_eq!(&raw[raw.len() - 4..], &[0x89, 0xAB, 0xCD, 0xEF]);
}

#[test]
fn test_encode_view_matches_decode_of_emitted_bytes() {
    let codec = codec();
    let body = json!({ "msg": "status" });

    let encoded = codec.encode("GmTalkCsReq", body, None).unwrap();
    let redecoded = codec.decode(encoded.raw()).unwrap();

    assert_eq!(encoded.command_id(), redecoded.command_id());
    assert_eq!(encoded.name(), redecoded.name());
    assert_eq!(encoded.payload(), redecoded.payload());
    assert_eq!(encoded.body(), redecoded.body());
}

//! # Message Bodies
//!
//! Structured bodies for the gateway's session-core flows. Each struct is
//! the schema for the command of the same name; the wire form is bincode,
//! the in-memory interchange form is [`serde_json::Value`] (see
//! [`registry`](super::registry)).
//!
//! Fields default individually so a partial body - including the empty one -
//! encodes cleanly.

use serde::{Deserialize, Serialize};

/// Client login request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLoginCsReq {
    pub platform: u32,
    pub device_id: String,
    pub client_version: String,
}

/// Server login response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLoginScRsp {
    pub retcode: i32,
    pub login_random: u64,
    pub server_timestamp_ms: u64,
    pub stamina: u32,
}

/// Client logout request. Carries no fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLogoutCsReq {}

/// Server logout response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLogoutScRsp {
    pub retcode: i32,
}

/// Client session-token request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerGetTokenCsReq {
    pub account_uid: String,
    pub token: String,
}

/// Server session-token response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerGetTokenScRsp {
    pub retcode: i32,
    pub uid: u32,
    pub secret_key_seed: u64,
}

/// Periodic client liveness notify.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerKeepAliveNotify {
    pub client_timestamp_ms: u64,
}

/// Server-initiated disconnect notify.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerKickOutScNotify {
    pub kick_type: u32,
    pub black_info: String,
}

/// GM console command request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GmTalkCsReq {
    pub msg: String,
}

/// GM console command response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GmTalkScRsp {
    pub retcode: i32,
    pub retmsg: String,
}

/// Nickname change request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetNicknameCsReq {
    pub nickname: String,
}

/// Nickname change response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetNicknameScRsp {
    pub retcode: i32,
}

/// Clock synchronization request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncTimeCsReq {
    pub client_timestamp_ms: u64,
}

/// Clock synchronization response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncTimeScRsp {
    pub retcode: i32,
    pub client_timestamp_ms: u64,
    pub server_timestamp_ms: u64,
}

/// Broadcast announcement notify.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerAnnounceNotify {
    pub announce_msg: String,
}

//! # Schema Registry
//!
//! Resolves message names to the schema that encodes and decodes their
//! bodies.
//!
//! The registry is a collaborator, not a singleton: the packet codec takes a
//! `dyn SchemaRegistry` so unit tests can substitute fakes. The concrete
//! [`SchemaSet`] bridges typed serde bodies to the dynamic
//! [`serde_json::Value`] interchange form, with bincode as the wire
//! encoding.
//!
//! Loading the builtin set happens exactly once at process start. A load
//! failure is returned to the caller; whether that terminates the process is
//! the bootstrap's decision, not this module's.

use crate::error::{ProtocolError, Result};
use crate::protocol::command::CommandTable;
use crate::protocol::message::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Structured encode/decode for one message name.
pub trait MessageSchema: Send + Sync {
    /// The message name this schema serves.
    fn name(&self) -> &'static str;

    /// Decode payload bytes into a structured body.
    fn decode(&self, bytes: &[u8]) -> Result<Value>;

    /// Serialize a structured body into payload bytes.
    fn encode(&self, body: &Value) -> Result<Vec<u8>>;
}

/// Read-only name-to-schema resolution.
pub trait SchemaRegistry: Send + Sync {
    /// Look up the schema for a message name.
    fn lookup(&self, name: &str) -> Option<&dyn MessageSchema>;
}

/// Schema backed by a concrete serde body type.
///
/// Decode runs bincode → `T` → [`Value`]; encode runs the inverse. The type
/// itself is never stored - the registry stays object-safe and uniform over
/// every message kind.
pub struct TypedSchema<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    /// Create a schema serving `name` with `T` as its body type.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }
}

impl<T> MessageSchema for TypedSchema<T>
where
    T: Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let typed: T = bincode::deserialize(bytes).map_err(|e| ProtocolError::SchemaDecode {
            name: self.name.to_string(),
            detail: e.to_string(),
        })?;
        serde_json::to_value(typed).map_err(|e| ProtocolError::SchemaDecode {
            name: self.name.to_string(),
            detail: e.to_string(),
        })
    }

    fn encode(&self, body: &Value) -> Result<Vec<u8>> {
        let typed: T =
            serde_json::from_value(body.clone()).map_err(|e| ProtocolError::SchemaEncode {
                name: self.name.to_string(),
                detail: e.to_string(),
            })?;
        bincode::serialize(&typed).map_err(|e| ProtocolError::SchemaEncode {
            name: self.name.to_string(),
            detail: e.to_string(),
        })
    }
}

/// Name-keyed set of schemas; the crate's concrete [`SchemaRegistry`].
#[derive(Default)]
pub struct SchemaSet {
    schemas: HashMap<&'static str, Box<dyn MessageSchema>>,
}

impl SchemaSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a typed schema under `name`.
    ///
    /// Duplicate registration is a load error.
    pub fn register<T>(&mut self, name: &'static str) -> Result<()>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        if self.schemas.contains_key(name) {
            return Err(ProtocolError::RegistryLoad(format!(
                "duplicate schema registration: {name}"
            )));
        }
        self.schemas.insert(name, Box::new(TypedSchema::<T>::new(name)));
        Ok(())
    }

    /// Verify that every registered schema has a command table entry.
    pub fn verify_against(&self, table: &CommandTable) -> Result<()> {
        for name in self.schemas.keys() {
            if table.resolve_id(name).is_none() {
                return Err(ProtocolError::RegistryLoad(format!(
                    "schema {name} has no command id in the table"
                )));
            }
        }
        Ok(())
    }

    /// Build the builtin schema set and verify it against a command table.
    ///
    /// This is the one-time startup load. On `Err` the process must not
    /// proceed to serve traffic; termination is the caller's call.
    pub fn load_builtin(table: &CommandTable) -> Result<Self> {
        let mut set = Self::new();

        set.register::<PlayerLoginCsReq>("PlayerLoginCsReq")?;
        set.register::<PlayerLoginScRsp>("PlayerLoginScRsp")?;
        set.register::<PlayerLogoutCsReq>("PlayerLogoutCsReq")?;
        set.register::<PlayerLogoutScRsp>("PlayerLogoutScRsp")?;
        set.register::<PlayerGetTokenCsReq>("PlayerGetTokenCsReq")?;
        set.register::<PlayerGetTokenScRsp>("PlayerGetTokenScRsp")?;
        set.register::<PlayerKeepAliveNotify>("PlayerKeepAliveNotify")?;
        set.register::<PlayerKickOutScNotify>("PlayerKickOutScNotify")?;
        set.register::<GmTalkCsReq>("GmTalkCsReq")?;
        set.register::<GmTalkScRsp>("GmTalkScRsp")?;
        set.register::<SetNicknameCsReq>("SetNicknameCsReq")?;
        set.register::<SetNicknameScRsp>("SetNicknameScRsp")?;
        set.register::<SyncTimeCsReq>("SyncTimeCsReq")?;
        set.register::<SyncTimeScRsp>("SyncTimeScRsp")?;
        set.register::<ServerAnnounceNotify>("ServerAnnounceNotify")?;

        set.verify_against(table)?;
        Ok(set)
    }

    /// Names of every registered schema.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaRegistry for SchemaSet {
    fn lookup(&self, name: &str) -> Option<&dyn MessageSchema> {
        self.schemas.get(name).map(|s| s.as_ref())
    }
}

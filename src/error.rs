//! # Error Types
//!
//! Error handling for the gateway wire protocol.
//!
//! This module defines all error variants that can occur while framing,
//! parsing, and routing gateway packets.
//!
//! ## Error Categories
//! - **Frame Errors**: truncated buffers, sentinel mismatches, bad extents
//! - **Command Errors**: unknown command ids or names
//! - **Schema Errors**: payload bytes that don't match a schema, bodies that
//!   can't be serialized under one
//! - **Startup Errors**: schema registry load failures, bad configuration
//!
//! A malformed frame is the only hard failure on the decode path; schema and
//! command problems on inbound data are reported as diagnostics and degrade
//! to an empty body instead of an error. Encode-side failures are always
//! returned as errors so a corrupt frame is never emitted.
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    #[error("Frame payload too large: {0} bytes")]
    OversizedFrame(usize),

    #[error("Unknown command id {0}")]
    UnknownCommand(u16),

    #[error("Unknown command name: {0}")]
    UnknownName(String),

    #[error("Schema decode failed for {name}: {detail}")]
    SchemaDecode { name: String, detail: String },

    #[error("Schema encode failed for {name}: {detail}")]
    SchemaEncode { name: String, detail: String },

    #[error("Registry load failed: {0}")]
    RegistryLoad(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Dispatch error: {0}")]
    DispatchError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

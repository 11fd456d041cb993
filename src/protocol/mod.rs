//! # Protocol Components
//!
//! Command identity, schemas, and routing above the frame layer.
//!
//! ## Components
//! - **Ids**: the fixed command enumeration (pure data)
//! - **Command**: bidirectional name ⇄ id table
//! - **Registry**: name-keyed schema resolution for message bodies
//! - **Message**: concrete serde bodies for the session-core flows
//! - **Dispatcher**: command-name handler routing for decoded packets

pub mod command;
pub mod dispatcher;
pub mod ids;
pub mod message;
pub mod registry;

use crate::core::packet::Packet;
use crate::error::{ProtocolError, Result};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type HandlerFn = dyn Fn(&Packet) -> Result<Option<Packet>> + Send + Sync + 'static;

/// Routes decoded packets to the handler registered for their command name.
///
/// Handlers stay outside this crate - callers register closures that consume
/// decoded bodies and optionally produce a response packet (notifies produce
/// none). Uses `Cow<'static, str>` keys so routing for table-resolved names
/// allocates nothing.
pub struct Dispatcher {
    handlers: Arc<RwLock<HashMap<Cow<'static, str>, Box<HandlerFn>>>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn register<F>(&self, command: &str, handler: F) -> Result<()>
    where
        F: Fn(&Packet) -> Result<Option<Packet>> + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().map_err(|_| {
            ProtocolError::DispatchError("Failed to acquire write lock on dispatcher".to_string())
        })?;

        handlers.insert(Cow::Owned(command.to_string()), Box::new(handler));
        Ok(())
    }

    pub fn dispatch(&self, packet: &Packet) -> Result<Option<Packet>> {
        let name = packet
            .name()
            .ok_or(ProtocolError::UnknownCommand(packet.command_id()))?;

        let handlers = self.handlers.read().map_err(|_| {
            ProtocolError::DispatchError("Failed to acquire read lock on dispatcher".to_string())
        })?;

        handlers
            .get(name)
            .ok_or_else(|| ProtocolError::DispatchError(format!("no handler registered for {name}")))
            .and_then(|handler| handler(packet))
    }
}

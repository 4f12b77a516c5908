// Binary messengers

use crate::channel::{ChannelError, ChannelResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Handler for raw channel messages. An empty reply means "not implemented".
pub type BinaryMessageHandler = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

/// Transport that routes raw messages to the handler bound to a channel name
pub trait BinaryMessenger: Send + Sync {
    /// Deliver `message` to `channel`. Returns `None` when nothing is bound there.
    fn send(&self, channel: &str, message: &[u8]) -> ChannelResult<Option<Vec<u8>>>;

    /// Bind `handler` to `channel`, replacing any previous one. `None` unbinds.
    fn set_message_handler(&self, channel: &str, handler: Option<BinaryMessageHandler>) -> ChannelResult<()>;
}

/// In-process messenger owned by the host.
///
/// Holds at most one handler per channel name.
#[derive(Default)]
pub struct HostMessenger {
    handlers: RwLock<HashMap<String, BinaryMessageHandler>>,
}

impl HostMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a handler is bound to `channel`
    pub fn has_handler(&self, channel: &str) -> ChannelResult<bool> {
        let handlers = self.handlers.read().map_err(|_| lock_poisoned())?;
        Ok(handlers.contains_key(channel))
    }

    /// Names of all channels with a bound handler, sorted
    pub fn channel_names(&self) -> ChannelResult<Vec<String>> {
        let handlers = self.handlers.read().map_err(|_| lock_poisoned())?;
        let mut names: Vec<String> = handlers.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

impl BinaryMessenger for HostMessenger {
    fn send(&self, channel: &str, message: &[u8]) -> ChannelResult<Option<Vec<u8>>> {
        // Clone the handler out so the table is not locked while it runs
        let handler = {
            let handlers = self.handlers.read().map_err(|_| lock_poisoned())?;
            handlers.get(channel).cloned()
        };

        match handler {
            Some(handler) => Ok(Some(handler(message))),
            None => {
                log::debug!("No handler bound to channel {}", channel);
                Ok(None)
            }
        }
    }

    fn set_message_handler(&self, channel: &str, handler: Option<BinaryMessageHandler>) -> ChannelResult<()> {
        let mut handlers = self.handlers.write().map_err(|_| lock_poisoned())?;

        match handler {
            Some(handler) => {
                if handlers.insert(channel.to_string(), handler).is_some() {
                    log::trace!("Replaced handler on channel {}", channel);
                } else {
                    log::trace!("Bound handler to channel {}", channel);
                }
            }
            None => {
                handlers.remove(channel);
                log::trace!("Unbound channel {}", channel);
            }
        }

        Ok(())
    }
}

fn lock_poisoned() -> ChannelError {
    ChannelError::Messenger("handler table lock poisoned".to_string())
}

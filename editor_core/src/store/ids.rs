//! Store-assigned entity ids.

use std::time::{SystemTime, UNIX_EPOCH};

use card_model::EntityId;

/// Mints ids of the form `<prefix>_<millis>_<serial>`.
///
/// The per-generator serial keeps ids unique even when several records are
/// created within the same millisecond.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    serial: u64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, serial: 0 }
    }

    pub fn next_id(&mut self) -> EntityId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let serial = self.serial;
        self.serial += 1;
        EntityId::new(format!("{}_{millis:x}_{serial:x}", self.prefix))
    }
}

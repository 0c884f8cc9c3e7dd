use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use log::info;

use crate::errors::RegistryResult;
use crate::models::event::RegistryEvent;
use crate::traits::event_sink::EventSink;

/// Event sink that keeps the ordered, append-only event log in memory.
///
/// Used by tests and by embedders that project events into an external
/// read model after the fact.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RegistryEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events published so far, in operation order.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn publish(&self, event: RegistryEvent) -> RegistryResult<()> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}

/// Event sink that writes each event to the log facade. The CLI uses
/// this; anything tailing the log sees the same ordered stream.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl LoggingSink {
    pub fn new() -> Self {
        LoggingSink
    }
}

#[async_trait]
impl EventSink for LoggingSink {
    async fn publish(&self, event: RegistryEvent) -> RegistryResult<()> {
        info!("event {} property {}: {:?}", event.kind(), event.property_id(), event);
        Ok(())
    }
}

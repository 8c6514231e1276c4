use std::sync::mpsc;

use crate::{EngineEvent, ProgressEvent, RunId};

/// Receives progress notifications. Implementations must not block.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}

/// Forwards progress for one run onto the engine's event channel.
pub struct ChannelProgressSink {
    run_id: RunId,
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(run_id: RunId, tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { run_id, tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: ProgressEvent) {
        // A dropped receiver only means nobody is watching any more.
        let _ = self.tx.send(EngineEvent::Progress {
            run_id: self.run_id,
            event,
        });
    }
}

pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: ProgressEvent) {}
}

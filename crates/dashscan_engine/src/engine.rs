use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dashscan_core::SearchConfig;
use engine_logging::{engine_error, engine_info};

use crate::progress::ChannelProgressSink;
use crate::{ClientSettings, EngineEvent, FetchError, HackerNewsClient, RunId, Searcher};

enum EngineCommand {
    Search { run_id: RunId, config: SearchConfig },
}

/// Runs searches on a dedicated tokio runtime thread and reports back
/// through an event channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let client = HackerNewsClient::new(settings)?;
        Ok(Self::with_searcher(Arc::new(Searcher::from_client(client))))
    }

    pub fn with_searcher(searcher: Arc<Searcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let searcher = searcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(searcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, run_id: RunId, config: SearchConfig) {
        engine_info!("Submitting run {} for user {}", run_id, config.username);
        let _ = self.cmd_tx.send(EngineCommand::Search { run_id, config });
    }

    /// Blocks for the next event. `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    searcher: &Searcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { run_id, config } => {
            let sink = ChannelProgressSink::new(run_id, event_tx.clone());
            let result = searcher.search(&config, &sink).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { run_id, result });
        }
    }
}

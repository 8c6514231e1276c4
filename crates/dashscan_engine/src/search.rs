use std::sync::Arc;

use dashscan_core::{SearchConfig, SearchResult};
use engine_logging::engine_info;

use crate::{
    BatchScanner, HackerNewsClient, ItemFetcher, ProgressEvent, ProgressSink, SearchError,
    SubmissionLister,
};

/// Entry point for one search: list a user's submissions, then scan them.
pub struct Searcher {
    lister: Arc<dyn SubmissionLister>,
    scanner: BatchScanner,
}

impl Searcher {
    pub fn new(lister: Arc<dyn SubmissionLister>, fetcher: Arc<dyn ItemFetcher>) -> Self {
        Self {
            lister,
            scanner: BatchScanner::new(fetcher),
        }
    }

    pub fn from_client(client: HackerNewsClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }

    /// Emits `Retrieving`, then `Searching` once the scan starts.
    ///
    /// A user without submissions yields `found = false` and no `Searching` event.
    pub async fn search(
        &self,
        config: &SearchConfig,
        sink: &dyn ProgressSink,
    ) -> Result<SearchResult, SearchError> {
        sink.emit(ProgressEvent::Retrieving);
        let ids = self.lister.list_submissions(&config.username).await?;
        if ids.is_empty() {
            engine_info!("User {} has no submissions", config.username);
            return Ok(SearchResult::not_found());
        }
        Ok(self.scanner.scan(&ids, config, sink).await)
    }
}

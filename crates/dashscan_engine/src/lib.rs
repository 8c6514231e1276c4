//! Dashscan engine: remote lookups, the batch scanner and run orchestration.
mod client;
mod engine;
mod progress;
mod scanner;
mod search;
mod types;

pub use client::{ClientSettings, HackerNewsClient, ItemFetcher, SubmissionLister};
pub use engine::EngineHandle;
pub use progress::{ChannelProgressSink, NullProgressSink, ProgressSink};
pub use scanner::BatchScanner;
pub use search::Searcher;
pub use types::{EngineEvent, FailureKind, FetchError, ProgressEvent, RunId, SearchError};

pub use dashscan_core::{
    Item, ItemKind, MatchMode, SearchConfig, SearchResult, SubmissionId, SubmissionMatch,
    CUTOFF_TIME, DEFAULT_CONCURRENCY_LIMIT,
};

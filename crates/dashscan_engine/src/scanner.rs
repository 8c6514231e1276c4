use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashscan_core::{
    Ineligible, MatchMode, SearchConfig, SearchResult, SubmissionId, SubmissionMatch,
};
use engine_logging::{engine_debug, engine_info};
use futures_util::future::join_all;

use crate::{FetchError, ItemFetcher, ProgressEvent, ProgressSink};

/// One-shot claim on the result of a run. Exactly one `try_claim` succeeds.
struct MatchClaim(AtomicBool);

impl MatchClaim {
    fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    fn is_claimed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn try_claim(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Why a single id produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Discarded {
    /// Another task had already claimed a match; nothing was fetched.
    AlreadyClaimed,
    Unavailable(FetchError),
    Ineligible(Ineligible),
    NoMatch,
    /// Matched, but another task claimed first.
    LostRace,
}

impl fmt::Display for Discarded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discarded::AlreadyClaimed => write!(f, "skipped, match already claimed"),
            Discarded::Unavailable(err) => write!(f, "unavailable ({err})"),
            Discarded::Ineligible(reason) => write!(f, "ineligible ({reason})"),
            Discarded::NoMatch => write!(f, "no match"),
            Discarded::LostRace => write!(f, "matched but lost the claim"),
        }
    }
}

/// Scans ids in fixed-size groups, oldest group first, stopping after the
/// first group that produces a match.
///
/// Within a group every id is fetched concurrently and the winner is
/// whichever task claims first, so with a limit above 1 the result is not
/// necessarily the smallest matching id of that group.
pub struct BatchScanner {
    fetcher: Arc<dyn ItemFetcher>,
}

impl BatchScanner {
    pub fn new(fetcher: Arc<dyn ItemFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn scan(
        &self,
        ids: &[SubmissionId],
        config: &SearchConfig,
        sink: &dyn ProgressSink,
    ) -> SearchResult {
        sink.emit(ProgressEvent::Searching);

        let claim = MatchClaim::new();
        let mode = config.match_mode();
        let group_size = config.concurrency_limit.max(1);

        for (index, group) in ids.chunks(group_size).enumerate() {
            let outcomes = join_all(
                group
                    .iter()
                    .map(|&id| self.evaluate(id, config, mode, &claim)),
            )
            .await;

            if let Some(found) = outcomes.into_iter().find_map(Result::ok) {
                engine_info!(
                    "Scan for {} matched item {} in group {}",
                    config.username,
                    found.item.id,
                    index
                );
                return SearchResult::found_at(found);
            }
        }

        engine_info!(
            "Scan for {} found no match in {} items",
            config.username,
            ids.len()
        );
        SearchResult::not_found()
    }

    async fn evaluate(
        &self,
        id: SubmissionId,
        config: &SearchConfig,
        mode: MatchMode,
        claim: &MatchClaim,
    ) -> Result<SubmissionMatch, Discarded> {
        let outcome = self.try_match(id, config, mode, claim).await;
        if let Err(reason) = &outcome {
            engine_debug!("Item {} discarded: {}", id, reason);
        }
        outcome
    }

    async fn try_match(
        &self,
        id: SubmissionId,
        config: &SearchConfig,
        mode: MatchMode,
        claim: &MatchClaim,
    ) -> Result<SubmissionMatch, Discarded> {
        if claim.is_claimed() {
            return Err(Discarded::AlreadyClaimed);
        }

        let item = self
            .fetcher
            .fetch_item(id)
            .await
            .map_err(Discarded::Unavailable)?;
        config.eligibility(&item).map_err(Discarded::Ineligible)?;

        let text = item.candidate_text();
        if !mode.is_match(text) {
            return Err(Discarded::NoMatch);
        }
        let text = text.to_string();

        if !claim.try_claim() {
            return Err(Discarded::LostRace);
        }
        Ok(SubmissionMatch { item, text })
    }
}

use std::fmt;

use crate::{Item, ItemKind, MatchMode};

/// 2022-11-30T23:59:59Z. Items posted at or after this instant are ignored.
pub const CUTOFF_TIME: i64 = 1_669_852_799;

/// Number of items fetched concurrently within one group.
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 10;

/// Parameters of a single search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub username: String,
    pub include_stories: bool,
    pub strict_mode: bool,
    pub concurrency_limit: usize,
    pub cutoff_time: i64,
}

impl SearchConfig {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            include_stories: false,
            strict_mode: false,
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            cutoff_time: CUTOFF_TIME,
        }
    }

    pub fn with_include_stories(mut self, include_stories: bool) -> Self {
        self.include_stories = include_stories;
        self
    }

    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    /// A limit of 1 serializes the scan and makes the result strictly oldest-first.
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = limit.max(1);
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        MatchMode::from_strict(self.strict_mode)
    }

    /// Checks deletion, the cutoff and the content-type filter, in that order.
    pub fn eligibility(&self, item: &Item) -> Result<(), Ineligible> {
        if item.deleted {
            return Err(Ineligible::Deleted);
        }
        if item.time >= self.cutoff_time {
            return Err(Ineligible::AfterCutoff);
        }
        match item.kind {
            ItemKind::Comment => Ok(()),
            ItemKind::Story if self.include_stories => Ok(()),
            kind => Err(Ineligible::ExcludedKind(kind)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligible {
    Deleted,
    AfterCutoff,
    ExcludedKind(ItemKind),
}

impl fmt::Display for Ineligible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ineligible::Deleted => write!(f, "deleted"),
            Ineligible::AfterCutoff => write!(f, "posted after cutoff"),
            Ineligible::ExcludedKind(kind) => write!(f, "kind {kind} excluded"),
        }
    }
}

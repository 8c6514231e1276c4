//! Dashscan core: pure domain model, pattern matching and eligibility rules.
mod config;
mod item;
mod matcher;
mod result;
mod username;

pub use config::{Ineligible, SearchConfig, CUTOFF_TIME, DEFAULT_CONCURRENCY_LIMIT};
pub use item::{Item, ItemKind, SubmissionId};
pub use matcher::{MatchMode, LOOSE_PATTERNS, STRICT_PATTERN};
pub use result::{SearchResult, SubmissionMatch};
pub use username::{validate_username, UsernameError};

use serde::Deserialize;
use std::fmt;

/// Identifier assigned by the remote platform; higher ids were posted later.
pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Story,
    Comment,
    Job,
    Poll,
    PollOpt,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Story => "story",
            ItemKind::Comment => "comment",
            ItemKind::Job => "job",
            ItemKind::Poll => "poll",
            ItemKind::PollOpt => "pollopt",
        };
        f.write_str(name)
    }
}

/// A single submission as served by `/v0/item/{id}.json`.
///
/// Unknown fields (`by`, `kids`, `parent`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: SubmissionId,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Posting time, seconds since the Unix epoch.
    pub time: i64,
    #[serde(default)]
    pub deleted: bool,
}

impl Item {
    /// Text the pattern is tested against: body, then title, then nothing.
    pub fn candidate_text(&self) -> &str {
        self.text
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }
}

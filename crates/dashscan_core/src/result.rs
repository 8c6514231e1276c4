use crate::Item;

/// The item that won the match claim and the text that satisfied the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionMatch {
    pub item: Item,
    pub text: String,
}

/// Outcome of a search. Holds at most one match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub matched: Option<SubmissionMatch>,
}

impl SearchResult {
    pub fn not_found() -> Self {
        Self { matched: None }
    }

    pub fn found_at(matched: SubmissionMatch) -> Self {
        Self {
            matched: Some(matched),
        }
    }

    pub fn found(&self) -> bool {
        self.matched.is_some()
    }

    pub fn matched_item(&self) -> Option<&Item> {
        self.matched.as_ref().map(|m| &m.item)
    }

    pub fn matched_text(&self) -> Option<&str> {
        self.matched.as_ref().map(|m| m.text.as_str())
    }
}

/// The true em dash (U+2014).
pub const STRICT_PATTERN: &str = "\u{2014}";

/// Everything loose mode accepts: a double hyphen, three look-alike dashes
/// (figure dash, en dash, horizontal bar) and the em dash itself.
pub const LOOSE_PATTERNS: [&str; 5] = ["--", "\u{2012}", "\u{2013}", "\u{2015}", STRICT_PATTERN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Loose,
    Strict,
}

impl MatchMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MatchMode::Strict
        } else {
            MatchMode::Loose
        }
    }

    /// Unanchored substring test; the empty string never matches.
    pub fn is_match(self, text: &str) -> bool {
        match self {
            MatchMode::Strict => text.contains(STRICT_PATTERN),
            MatchMode::Loose => LOOSE_PATTERNS.iter().any(|pattern| text.contains(pattern)),
        }
    }
}

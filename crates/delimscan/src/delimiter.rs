use core::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::PatternError,
    matcher::{Match, Matcher},
};

#[derive(Debug, Clone)]
enum Pattern {
    Literal(Box<str>),
    #[cfg(feature = "regex")]
    Regex(regex::Regex),
}

/// A single delimiter pattern.
///
/// Built once and read-only afterwards. Two delimiters are equal when they
/// are the same kind of pattern with the same source text, which is what
/// [`DelimiterSet::remove`](crate::DelimiterSet::remove) relies on.
///
/// ```rust
/// use delimscan::{Delimiter, Match, Matcher};
///
/// let comma = Delimiter::literal(",")?;
/// assert_eq!(comma.find("a,b"), Some(Match::new(1, 1)));
///
/// let spaces = Delimiter::regex(r"\s+")?;
/// assert_eq!(spaces.find("a  b"), Some(Match::new(1, 2)));
/// # Ok::<(), delimscan::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Delimiter {
    pattern: Pattern,
}

impl Delimiter {
    /// Matches `text` exactly.
    ///
    /// # Errors
    ///
    /// [`PatternError::Empty`] if `text` is empty.
    pub fn literal(text: impl Into<String>) -> Result<Self, PatternError> {
        let text = text.into();
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            pattern: Pattern::Literal(text.into_boxed_str()),
        })
    }

    /// Matches a regular expression.
    ///
    /// Empty matches of the expression are never reported; `find` returns
    /// the leftmost non-empty one.
    ///
    /// # Errors
    ///
    /// [`PatternError::Empty`] for an empty pattern and
    /// [`PatternError::Regex`] if the expression does not compile.
    #[cfg(feature = "regex")]
    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            pattern: Pattern::Regex(regex::Regex::new(pattern)?),
        })
    }

    /// The pattern source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.pattern {
            Pattern::Literal(text) => text,
            #[cfg(feature = "regex")]
            Pattern::Regex(re) => re.as_str(),
        }
    }

    /// Whether the pattern is matched as plain text.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self.pattern, Pattern::Literal(_))
    }
}

impl Matcher for Delimiter {
    fn find(&self, probe: &str) -> Option<Match> {
        match &self.pattern {
            Pattern::Literal(text) => probe.find(&**text).map(|start| Match::new(start, text.len())),
            #[cfg(feature = "regex")]
            Pattern::Regex(re) => re
                .find_iter(probe)
                .find(|m| !m.is_empty())
                .map(|m| Match::new(m.start(), m.len())),
        }
    }

    fn is_match(&self, probe: &str) -> bool {
        match &self.pattern {
            Pattern::Literal(text) => probe.contains(&**text),
            #[cfg(feature = "regex")]
            Pattern::Regex(_) => self.find(probe).is_some(),
        }
    }
}

impl PartialEq for Delimiter {
    fn eq(&self, other: &Self) -> bool {
        self.is_literal() == other.is_literal() && self.as_str() == other.as_str()
    }
}

impl Eq for Delimiter {}

impl Hash for Delimiter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_literal().hash(state);
        self.as_str().hash(state);
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_finds_leftmost_occurrence() {
        let d = Delimiter::literal("==").unwrap();
        assert_eq!(d.find("a==b==c"), Some(Match::new(1, 2)));
        assert_eq!(d.find("a=b"), None);
        assert!(!d.is_match("a=b"));
    }

    #[test]
    fn empty_patterns_are_rejected() {
        assert!(matches!(Delimiter::literal(""), Err(PatternError::Empty)));
        #[cfg(feature = "regex")]
        assert!(matches!(Delimiter::regex(""), Err(PatternError::Empty)));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn malformed_regex_fails_at_construction() {
        assert!(matches!(Delimiter::regex("(ab"), Err(PatternError::Regex(_))));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn regex_skips_empty_matches() {
        let d = Delimiter::regex("x*").unwrap();
        assert_eq!(d.find("abxxc"), Some(Match::new(2, 2)));
        assert_eq!(d.find("abc"), None);
    }

    #[cfg(feature = "regex")]
    #[test]
    fn offsets_are_bytes() {
        let d = Delimiter::regex(r"\s").unwrap();
        assert_eq!(d.find("é ü"), Some(Match::new(2, 1)));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn equality_is_by_kind_and_source() {
        let lit = Delimiter::literal("a").unwrap();
        let re = Delimiter::regex("a").unwrap();
        assert_ne!(lit, re);
        assert_eq!(re, Delimiter::regex("a").unwrap());
        assert_eq!(lit.to_string(), "a");
    }
}

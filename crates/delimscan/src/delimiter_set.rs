use crate::{
    delimiter::Delimiter,
    matcher::{Match, Matcher},
};

/// An ordered collection of matchers that behaves as one matcher.
///
/// A match of the set is the longest match of any member, counted in
/// characters. When several members tie on length, the one inserted first
/// wins. Insertion order is
/// read at query time, so removing and re-adding a member moves it to the
/// back of the tie-break order.
///
/// Members can be any [`Matcher`], including another `DelimiterSet` or a
/// boxed custom predicate:
///
/// ```rust
/// use delimscan::{Delimiter, DelimiterSet, Match, Matcher};
///
/// let mut ops = DelimiterSet::new();
/// ops.add(Delimiter::literal("=")?);
/// ops.add(Delimiter::literal("==")?);
///
/// assert_eq!(ops.find("a==b"), Some(Match::new(1, 2)));
/// # Ok::<(), delimscan::PatternError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet<D = Delimiter> {
    members: Vec<D>,
}

impl<D> Default for DelimiterSet<D> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<D> DelimiterSet<D> {
    /// Creates an empty set, which never matches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member; it loses ties against everything already present.
    pub fn add(&mut self, delimiter: D) {
        self.members.push(delimiter);
    }

    /// Keeps only the members for which `keep` returns `true`, preserving
    /// their order.
    pub fn retain(&mut self, keep: impl FnMut(&D) -> bool) {
        self.members.retain(keep);
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Number of members, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, D> {
        self.members.iter()
    }
}

impl<D: PartialEq> DelimiterSet<D> {
    /// Removes the first member equal to `delimiter`. Returns whether one was
    /// found.
    pub fn remove(&mut self, delimiter: &D) -> bool {
        match self.members.iter().position(|d| d == delimiter) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether a member equal to `delimiter` is present.
    #[must_use]
    pub fn contains(&self, delimiter: &D) -> bool {
        self.members.contains(delimiter)
    }
}

impl<D: Matcher> Matcher for DelimiterSet<D> {
    fn find(&self, probe: &str) -> Option<Match> {
        let mut best: Option<(usize, Match)> = None;
        for m in self.members.iter().filter_map(|d| d.find(probe)) {
            let chars = char_len(probe, m);
            // Strictly longer only: earlier members keep ties.
            if best.is_none_or(|(longest, _)| chars > longest) {
                best = Some((chars, m));
            }
        }
        best.map(|(_, m)| m)
    }

    fn is_match(&self, probe: &str) -> bool {
        self.members.iter().any(|d| d.is_match(probe))
    }
}

/// Length of `m` in characters. Ranges that do not fall on character
/// boundaries of `probe` fall back to their byte length; the scanner rejects
/// them anyway.
fn char_len(probe: &str, m: Match) -> usize {
    m.start
        .checked_add(m.len)
        .and_then(|end| probe.get(m.start..end))
        .map_or(m.len, |s| s.chars().count())
}

impl<D> FromIterator<D> for DelimiterSet<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<D> Extend<D> for DelimiterSet<D> {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<'a, D> IntoIterator for &'a DelimiterSet<D> {
    type Item = &'a D;
    type IntoIter = core::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<D> IntoIterator for DelimiterSet<D> {
    type Item = D;
    type IntoIter = std::vec::IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

use crate::bookmark::{BookmarkEntry, BookmarkFile, BookmarkNode};

/// Ceiling on matches returned for one query, across every source and root.
pub const MAX_MATCHES_LEN: usize = 10;

const TERM_SEPARATOR: char = ' ';

/// Lowercased, space-separated sub-queries; all of them must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkQuery {
    terms: Vec<String>,
}

impl BookmarkQuery {
    /// An empty query yields a single empty term, which every name contains.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            terms: raw.split(TERM_SEPARATOR).map(str::to_lowercase).collect(),
        }
    }

    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        contains_all_substrings(name, &self.terms)
    }
}

/// Case-insensitive check that `text` contains every (already lowercased) term.
#[must_use]
pub(crate) fn contains_all_substrings(text: &str, terms: &[String]) -> bool {
    let folded = text.to_lowercase();
    terms.iter().all(|term| folded.contains(term.as_str()))
}

/// Matches gathered for one query. Insertion stops at the ceiling.
#[derive(Debug, Clone)]
pub struct MatchAccumulator {
    matches: Vec<BookmarkEntry>,
    limit: usize,
}

impl Default for MatchAccumulator {
    fn default() -> Self {
        Self::with_limit(MAX_MATCHES_LEN)
    }
}

impl MatchAccumulator {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            matches: Vec::with_capacity(limit),
            limit,
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.matches.len() >= self.limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches recorded at or after position `start`.
    #[must_use]
    pub fn since(&self, start: usize) -> &[BookmarkEntry] {
        self.matches.get(start..).unwrap_or_default()
    }

    #[must_use]
    pub fn into_matches(self) -> Vec<BookmarkEntry> {
        self.matches
    }

    fn push(&mut self, entry: &BookmarkEntry) {
        if !self.is_full() {
            self.matches.push(entry.clone());
        }
    }
}

/// Depth-first walk that appends matching leaves until the accumulator fills.
pub fn search_node(node: &BookmarkNode, query: &BookmarkQuery, acc: &mut MatchAccumulator) {
    if acc.is_full() {
        return;
    }

    match node {
        BookmarkNode::Folder { children } => {
            for child in children {
                search_node(child, query, acc);
            }
        }
        BookmarkNode::Bookmark(entry) => {
            if query.matches(&entry.name) {
                acc.push(entry);
            }
        }
    }
}

/// Searches the bar, synced and other roots in that order.
pub fn search_bookmark_file(file: &BookmarkFile, query: &BookmarkQuery, acc: &mut MatchAccumulator) {
    for section in file.roots.sections() {
        search_node(section, query, acc);
    }
}

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::backtrack::{Anchoring, Executer, Haystack, LogTrace, Trace};
use crate::cache;
use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::parser::{Node, Parser};

/// A compiled pattern.
///
/// Immutable once built and cheap to clone; clones share the node list, so a
/// pattern can be handed to other threads and matched concurrently.
///
/// Matching is an exhaustive backtracking search. There is no step or depth
/// limit: ambiguous patterns such as `\w*\w*\w*x` take exponential time on
/// inputs that do not match. Repeats of a single atom check their pieces in
/// a loop; only nested repeats such as `a**` recurse once per repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    inner: Arc<Compiled>,
}

#[derive(Debug, PartialEq, Eq)]
struct Compiled {
    raw: String,
    nodes: Vec<Node>,
    flags: Flags,
}

impl Pattern {
    /// Compiles `raw` without consulting the pattern cache.
    pub fn new(raw: &str, flags: Flags) -> Result<Pattern> {
        let nodes = Parser::parse(raw, flags)?;
        if flags.contains(Flags::DEBUG) {
            tracing::debug!(pattern = raw, "compiled nodes: {:?}", nodes);
        }

        Ok(Pattern {
            inner: Arc::new(Compiled {
                raw: raw.to_owned(),
                nodes,
                flags,
            }),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.inner.raw
    }

    pub fn nodes(&self) -> &[Node] {
        &self.inner.nodes
    }

    pub fn flags(&self) -> Flags {
        self.inner.flags
    }

    /// Matches a prefix of `haystack`. Trailing input is allowed.
    pub fn r#match<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.run(haystack, Anchoring::Prefix, self.default_trace())
    }

    /// Matches the whole of `haystack`.
    pub fn fullmatch<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.run(haystack, Anchoring::Full, self.default_trace())
    }

    /// Like `r#match`, reporting every step to `trace`.
    pub fn match_traced<'h>(&self, haystack: &'h str, trace: &dyn Trace) -> Option<Match<'h>> {
        self.run(haystack, Anchoring::Prefix, Some(trace))
    }

    /// Like [`Pattern::fullmatch`], reporting every step to `trace`.
    pub fn fullmatch_traced<'h>(&self, haystack: &'h str, trace: &dyn Trace) -> Option<Match<'h>> {
        self.run(haystack, Anchoring::Full, Some(trace))
    }

    /// Finds the leftmost position where a prefix match succeeds.
    pub fn search<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        let hay = Haystack::new(haystack);
        let (start, end) = self.search_from(&hay, 0)?;
        Some(Match::new(&hay, start, end))
    }

    /// Iterates over successive non-overlapping matches.
    pub fn finditer<'h>(&self, haystack: &'h str) -> Matches<'h> {
        Matches {
            pattern: self.clone(),
            hay: Haystack::new(haystack),
            next: Some(0),
        }
    }

    pub fn findall<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        self.finditer(haystack).map(|m| m.as_str()).collect()
    }

    /// Splits `haystack` around matches, at most `maxsplit` times (0 for no
    /// limit).
    pub fn split<'h>(&self, haystack: &'h str, maxsplit: usize) -> Vec<&'h str> {
        let mut pieces = Vec::new();
        let mut last = 0;

        for m in limit(self.finditer(haystack), maxsplit) {
            pieces.push(&haystack[last..m.start()]);
            last = m.end();
        }
        pieces.push(&haystack[last..]);

        pieces
    }

    /// Replaces matches with `repl`, at most `count` times (0 for all).
    pub fn sub(&self, repl: &str, haystack: &str, count: usize) -> String {
        self.subn(repl, haystack, count).0
    }

    /// Like [`Pattern::sub`], also returning the number of replacements.
    pub fn subn(&self, repl: &str, haystack: &str, count: usize) -> (String, usize) {
        let mut replaced = String::with_capacity(haystack.len());
        let mut last = 0;
        let mut n = 0;

        for m in limit(self.finditer(haystack), count) {
            replaced.push_str(&haystack[last..m.start()]);
            replaced.push_str(repl);
            last = m.end();
            n += 1;
        }
        replaced.push_str(&haystack[last..]);

        (replaced, n)
    }

    fn default_trace(&self) -> Option<&'static dyn Trace> {
        self.flags()
            .contains(Flags::DEBUG)
            .then_some(&LogTrace as &dyn Trace)
    }

    fn run<'h>(
        &self,
        haystack: &'h str,
        anchoring: Anchoring,
        trace: Option<&dyn Trace>,
    ) -> Option<Match<'h>> {
        let hay = Haystack::new(haystack);
        let end = Executer::new(&hay, anchoring, trace).execute(self.nodes(), 0)?;
        Some(Match::new(&hay, 0, end))
    }

    // char indices of the leftmost prefix match at or after `from`
    fn search_from(&self, hay: &Haystack<'_>, from: usize) -> Option<(usize, usize)> {
        let executer = Executer::new(hay, Anchoring::Prefix, self.default_trace());
        // a leading anchor only holds at the very start of the input
        let last = match self.nodes().first() {
            Some(Node::Start) => 0,
            _ => hay.len(),
        };

        (from..=last).find_map(|start| {
            executer
                .execute(self.nodes(), start)
                .map(|end| (start, end))
        })
    }
}

fn limit<I: Iterator>(iter: I, max: usize) -> std::iter::Take<I> {
    match max {
        0 => iter.take(usize::MAX),
        n => iter.take(n),
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.flags().iter_names().map(|(name, _)| name).collect();
        if names.is_empty() {
            write!(f, "compile({:?})", self.as_str())
        } else {
            write!(f, "compile({:?}, {})", self.as_str(), names.join(" | "))
        }
    }
}

/// A successful match. Offsets are byte offsets into the searched string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'h> {
    haystack: &'h str,
    start: usize,
    end: usize,
}

impl<'h> Match<'h> {
    fn new(hay: &Haystack<'h>, start: usize, end: usize) -> Self {
        Match {
            haystack: hay.text(),
            start: hay.byte_offset(start),
            end: hay.byte_offset(end),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range()]
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Match span=({}, {}), match={:?}>",
            self.start,
            self.end,
            self.as_str()
        )
    }
}

/// Iterator over non-overlapping matches, from [`Pattern::finditer`].
pub struct Matches<'h> {
    pattern: Pattern,
    hay: Haystack<'h>,
    next: Option<usize>,
}

impl<'h> Iterator for Matches<'h> {
    type Item = Match<'h>;

    fn next(&mut self) -> Option<Match<'h>> {
        let from = self.next?;

        let Some((start, end)) = self.pattern.search_from(&self.hay, from) else {
            self.next = None;
            return None;
        };

        // an empty match moves the scan forward by one character
        self.next = if end > start {
            Some(end)
        } else if end < self.hay.len() {
            Some(end + 1)
        } else {
            None
        };

        Some(Match::new(&self.hay, start, end))
    }
}

/// Things that can be turned into a [`Pattern`]: pattern text, which goes
/// through the cache, or an already compiled pattern.
pub trait IntoPattern {
    fn into_pattern(self, flags: Flags) -> Result<Pattern>;
}

impl IntoPattern for &str {
    fn into_pattern(self, flags: Flags) -> Result<Pattern> {
        cache::compile_cached(self, flags)
    }
}

impl IntoPattern for &String {
    fn into_pattern(self, flags: Flags) -> Result<Pattern> {
        cache::compile_cached(self, flags)
    }
}

impl IntoPattern for String {
    fn into_pattern(self, flags: Flags) -> Result<Pattern> {
        cache::compile_cached(&self, flags)
    }
}

impl IntoPattern for Pattern {
    fn into_pattern(self, flags: Flags) -> Result<Pattern> {
        if !flags.is_empty() {
            return Err(Error::Usage(
                "cannot process flags argument with a compiled pattern".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl IntoPattern for &Pattern {
    fn into_pattern(self, flags: Flags) -> Result<Pattern> {
        self.clone().into_pattern(flags)
    }
}

use super::haystack::Haystack;
use super::trace::{Trace, TraceEvent};
use crate::parser::ast::{GreedyKind, Node, Repeat, RepeatKind};

/// Answers "can this node, alone, account for exactly `start..end`".
pub(crate) struct Consumer<'a, 'h> {
    hay: &'a Haystack<'h>,
    trace: Option<&'a dyn Trace>,
}

impl<'a, 'h> Consumer<'a, 'h> {
    pub fn new(hay: &'a Haystack<'h>, trace: Option<&'a dyn Trace>) -> Self {
        Consumer { hay, trace }
    }

    pub fn hay(&self) -> &'a Haystack<'h> {
        self.hay
    }

    pub fn accepts(&self, node: &Node, start: usize, end: usize, depth: usize) -> bool {
        let Some(trace) = self.trace else {
            return self.accepts_(node, start, end, depth);
        };

        trace.event(TraceEvent::Enter {
            depth,
            node,
            candidate: self.hay.slice(start, end),
        });
        let accepted = self.accepts_(node, start, end, depth);
        trace.event(TraceEvent::Exit {
            depth,
            node,
            accepted,
        });
        accepted
    }

    fn accepts_(&self, node: &Node, start: usize, end: usize, depth: usize) -> bool {
        match node {
            Node::Start | Node::End => start == end,
            Node::Literal { text, ignore_case } => {
                self.accepts_literal(text, *ignore_case, start, end)
            }
            Node::Any { dot_all } => {
                end - start == 1 && (*dot_all || self.hay.char_at(start) != '\n')
            }
            Node::Class(kind) => end - start == 1 && kind.matches(self.hay.char_at(start)),
            Node::Repeat(repeat) => self.accepts_repeat(repeat, start, end, depth + 1),
        }
    }

    fn accepts_literal(&self, text: &str, ignore_case: bool, start: usize, end: usize) -> bool {
        let candidate = self.hay.chars(start, end);
        if text.chars().count() != candidate.len() {
            return false;
        }

        if ignore_case {
            text.chars()
                .zip(candidate)
                .all(|(a, &b)| a == b || a.to_lowercase().eq(b.to_lowercase()))
        } else {
            text.chars().zip(candidate).all(|(a, &b)| a == b)
        }
    }

    fn accepts_repeat(&self, repeat: &Repeat, start: usize, end: usize, depth: usize) -> bool {
        let child = &repeat.child;
        let greedy = repeat.greedy == GreedyKind::Greedy;

        if let Some(width) = child.fixed_width().filter(|&width| width > 0) {
            return self.accepts_pieces(child, &repeat.kind, width, start, end, depth);
        }

        match repeat.kind {
            RepeatKind::ZeroOrMore if greedy => {
                self.accepts_chain(child, greedy, start, end, depth) || start == end
            }
            RepeatKind::ZeroOrMore => {
                start == end || self.accepts_chain(child, greedy, start, end, depth)
            }
            RepeatKind::OneOrMore => self.accepts_chain(child, greedy, start, end, depth),
            RepeatKind::ZeroOrOne => start == end || self.accepts(child, start, end, depth),
            RepeatKind::Exact(count) => {
                self.accepts_count(child, greedy, start, end, count, depth)
            }
            RepeatKind::Range(low, high) => {
                self.accepts_range(child, greedy, start, end, low, high, depth)
            }
        }
    }

    // a fixed-width child splits `start..end` in exactly one way, so the
    // pieces are checked in a loop instead of one call frame per repetition
    fn accepts_pieces(
        &self,
        child: &Node,
        kind: &RepeatKind,
        width: usize,
        start: usize,
        end: usize,
        depth: usize,
    ) -> bool {
        let len = end - start;
        if len % width != 0 {
            return false;
        }

        let count = len / width;
        let in_bounds = match *kind {
            RepeatKind::ZeroOrMore => true,
            RepeatKind::OneOrMore => count >= 1,
            RepeatKind::ZeroOrOne => count <= 1,
            RepeatKind::Exact(n) => count == n as usize,
            RepeatKind::Range(low, high) => low as usize <= count && count <= high as usize,
        };

        in_bounds
            && (0..count).all(|i| {
                let piece = start + i * width;
                self.accepts(child, piece, piece + width, depth)
            })
    }

    // one or more consecutive pieces, each accepted by `child`; every piece
    // but the last is non-empty
    fn accepts_chain(
        &self,
        child: &Node,
        greedy: bool,
        start: usize,
        end: usize,
        depth: usize,
    ) -> bool {
        let split = |mid| {
            self.accepts(child, start, mid, depth)
                && self.accepts_chain(child, greedy, mid, end, depth + 1)
        };

        if greedy {
            self.accepts(child, start, end, depth)
                || any_split(child, start + 1, end, start, greedy, split)
        } else {
            any_split(child, start + 1, end, start, greedy, split)
                || self.accepts(child, start, end, depth)
        }
    }

    fn accepts_count(
        &self,
        child: &Node,
        greedy: bool,
        start: usize,
        end: usize,
        count: u32,
        depth: usize,
    ) -> bool {
        match count {
            0 => start == end,
            1 => self.accepts(child, start, end, depth),
            _ => any_split(child, start, end, start, greedy, |mid| {
                self.accepts(child, start, mid, depth)
                    && self.accepts_count(child, greedy, mid, end, count - 1, depth + 1)
            }),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn accepts_range(
        &self,
        child: &Node,
        greedy: bool,
        start: usize,
        end: usize,
        low: u32,
        high: u32,
        depth: usize,
    ) -> bool {
        if start == end && low == 0 {
            return true;
        }
        if high == 0 {
            return false;
        }

        any_split(child, start, end, start, greedy, |mid| {
            self.accepts(child, start, mid, depth)
                && self.accepts_range(
                    child,
                    greedy,
                    mid,
                    end,
                    low.saturating_sub(1),
                    high - 1,
                    depth + 1,
                )
        })
    }
}

/// Tries split points `mid` in `lo..=hi` until `f(mid)` holds, longest
/// prefix first when `greedy`. `start` is where the piece ending at `mid`
/// begins; a fixed-width `node` only ever fits one split point.
pub(crate) fn any_split(
    node: &Node,
    lo: usize,
    hi: usize,
    start: usize,
    greedy: bool,
    mut f: impl FnMut(usize) -> bool,
) -> bool {
    if let Some(width) = node.fixed_width() {
        let mid = start + width;
        return lo <= mid && mid <= hi && f(mid);
    }

    if lo > hi {
        return false;
    }

    if greedy {
        (lo..=hi).rev().any(f)
    } else {
        (lo..=hi).any(f)
    }
}

use super::consume::{any_split, Consumer};
use super::haystack::Haystack;
use super::trace::Trace;
use crate::parser::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchoring {
    /// The node sequence must consume everything up to the end of input.
    Full,
    /// The node sequence only has to consume a prefix.
    Prefix,
}

pub(crate) struct Executer<'a, 'h> {
    consumer: Consumer<'a, 'h>,
    anchoring: Anchoring,
}

impl<'a, 'h> Executer<'a, 'h> {
    pub fn new(hay: &'a Haystack<'h>, anchoring: Anchoring, trace: Option<&'a dyn Trace>) -> Self {
        Executer {
            consumer: Consumer::new(hay, trace),
            anchoring,
        }
    }

    /// Matches `nodes` starting at char index `start`, returning the end of
    /// the consumed text.
    pub fn execute(&self, nodes: &[Node], start: usize) -> Option<usize> {
        self.execute_(nodes, start, self.consumer.hay().len(), 0)
    }

    fn execute_(&self, nodes: &[Node], start: usize, end: usize, depth: usize) -> Option<usize> {
        let Some((head, rest)) = nodes.split_first() else {
            return match self.anchoring {
                Anchoring::Full => (start == end).then_some(start),
                Anchoring::Prefix => Some(start),
            };
        };

        match head {
            // positional pass-through, checked against nothing
            Node::Start => return self.execute_(rest, start, end, depth + 1),
            // ends the search; nodes after it are never consulted
            Node::End => return (start == end).then_some(start),
            _ => {}
        }

        if self.anchoring == Anchoring::Full && rest.is_empty() {
            return self
                .consumer
                .accepts(head, start, end, depth + 1)
                .then_some(end);
        }

        let mut found = None;
        any_split(head, start, end, start, head.is_greedy(), |mid| {
            if !self.consumer.accepts(head, start, mid, depth + 1) {
                return false;
            }
            found = self.execute_(rest, mid, end, depth + 1);
            found.is_some()
        });

        found
    }
}

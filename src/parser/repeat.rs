use super::ast::*;
use crate::error::{Error, Result};

/// Wraps the last repeatable unit of `nodes` in a quantifier.
///
/// Trailing anchors are skipped and stay where they are. A multi-character
/// literal gives up only its last character, so `ab+` repeats just `b`.
pub(crate) fn bind(
    nodes: &mut Vec<Node>,
    kind: RepeatKind,
    greedy: GreedyKind,
    position: usize,
) -> Result<()> {
    let index = nodes
        .iter()
        .rposition(|node| !node.is_anchor())
        .ok_or(Error::NothingToRepeat { position })?;

    let split = match &mut nodes[index] {
        Node::Literal { text, ignore_case } if text.chars().count() > 1 => {
            text.pop().map(|c| Node::Literal {
                text: c.to_string(),
                ignore_case: *ignore_case,
            })
        }
        _ => None,
    };

    match split {
        Some(atom) => nodes.insert(index + 1, Node::repeat(atom, kind, greedy)),
        None => {
            let atom = nodes.remove(index);
            nodes.insert(index, Node::repeat(atom, kind, greedy));
        }
    }

    Ok(())
}

/// Reads `{m}` or `{m,n}` starting at the `{` at `open`.
///
/// Returns the bounds and the index of the closing `}`, or `None` when the
/// text is not a well-formed bound (missing digits, a second comma, any other
/// character, or no terminator).
pub(crate) fn parse_bounds(chars: &[char], open: usize) -> Option<(RepeatKind, usize)> {
    let mut low = String::new();
    let mut high: Option<String> = None;

    for (index, &c) in chars.iter().enumerate().skip(open + 1) {
        match c {
            '0'..='9' => match &mut high {
                Some(high) => high.push(c),
                None => low.push(c),
            },
            ',' if high.is_none() => high = Some(String::new()),
            '}' => {
                let low = low.parse().ok()?;
                let kind = match high {
                    Some(high) => RepeatKind::Range(low, high.parse().ok()?),
                    None => RepeatKind::Exact(low),
                };
                return Some((kind, index));
            }
            _ => return None,
        }
    }

    None
}

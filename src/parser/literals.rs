use super::ast::Node;

/// Merges runs of adjacent literals into one literal. Any other node ends a
/// run. Applying it twice gives the same result as applying it once.
pub fn coalesce(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());

    for node in nodes {
        if let Node::Literal { text: next, ignore_case } = &node {
            if next.is_empty() {
                continue;
            }
            if let Some(Node::Literal {
                text,
                ignore_case: prev,
            }) = merged.last_mut()
            {
                if *prev == *ignore_case {
                    text.push_str(next);
                    continue;
                }
            }
        }
        merged.push(node);
    }

    merged
}

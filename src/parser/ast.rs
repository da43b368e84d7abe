use std::fmt;

use crate::flags::Flags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Start,                                  // '^', '\A'
    End,                                    // '$', '\Z'
    Literal { text: String, ignore_case: bool },
    Any { dot_all: bool },                  // '.'
    Class(ClassKind),                       // '\d', '\s', '\w' and negations
    Repeat(Box<Repeat>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Digit,
    NotDigit,
    Space,
    NotSpace,
    Word,
    NotWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreedyKind {
    Greedy,
    NonGreedy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    ZeroOrMore,       // '*'
    OneOrMore,        // '+'
    ZeroOrOne,        // '?'
    Exact(u32),       // '{m}'
    Range(u32, u32),  // '{m,n}'
}

/// A quantifier around a single atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    pub child: Node,
    pub kind: RepeatKind,
    pub greedy: GreedyKind,
}

impl Node {
    pub fn literal(text: impl Into<String>, flags: Flags) -> Node {
        Node::Literal {
            text: text.into(),
            ignore_case: flags.contains(Flags::IGNORECASE),
        }
    }

    pub fn any(flags: Flags) -> Node {
        Node::Any {
            dot_all: flags.contains(Flags::DOTALL),
        }
    }

    pub fn repeat(child: Node, kind: RepeatKind, greedy: GreedyKind) -> Node {
        Node::Repeat(Box::new(Repeat {
            child,
            kind,
            greedy,
        }))
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, Node::Start | Node::End)
    }

    pub fn is_greedy(&self) -> bool {
        matches!(self, Node::Repeat(r) if r.greedy == GreedyKind::Greedy)
    }

    /// Number of characters this node always consumes, if it is fixed.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            Node::Start | Node::End => Some(0),
            Node::Literal { text, .. } => Some(text.chars().count()),
            Node::Any { .. } | Node::Class(_) => Some(1),
            Node::Repeat(_) => None,
        }
    }
}

impl ClassKind {
    pub fn matches(self, c: char) -> bool {
        match self {
            ClassKind::Digit => is_digit(c),
            ClassKind::NotDigit => !is_digit(c),
            ClassKind::Space => is_space(c),
            ClassKind::NotSpace => !is_space(c),
            ClassKind::Word => is_word(c),
            ClassKind::NotWord => !is_word(c),
        }
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// space, \t, \n, \r, \x0c, \x0b
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b')
}

pub fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Start => f.write_str("Start"),
            Node::End => f.write_str("End"),
            Node::Literal { text, .. } => write!(f, "Literal({:?})", text),
            Node::Any { .. } => f.write_str("Any"),
            Node::Class(kind) => write!(f, "{:?}", kind),
            Node::Repeat(r) => {
                let lazy = match r.greedy {
                    GreedyKind::Greedy => "",
                    GreedyKind::NonGreedy => "?",
                };
                match r.kind {
                    RepeatKind::ZeroOrMore => write!(f, "({})*{}", r.child, lazy),
                    RepeatKind::OneOrMore => write!(f, "({})+{}", r.child, lazy),
                    RepeatKind::ZeroOrOne => write!(f, "({})?{}", r.child, lazy),
                    RepeatKind::Exact(n) => write!(f, "({}){{{}}}{}", r.child, n, lazy),
                    RepeatKind::Range(m, n) => {
                        write!(f, "({}){{{},{}}}{}", r.child, m, n, lazy)
                    }
                }
            }
        }
    }
}

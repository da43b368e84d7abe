use super::ast::*;
use super::literals::coalesce;
use super::repeat;
use crate::error::{Error, Result};
use crate::flags::Flags;

// characters whose escaped form is the bare character
const ESCAPABLE_CHARS: [char; 19] = [
    '(', ')', '[', ']', '{', '}', // brackets
    '?', '*', '+', // quantifiers
    '-', '|', '^', '$', '\\', '.', '&', '~', '#', ' ',
];

pub struct Parser {
    chars: Vec<char>,
    pos: usize,
    flags: Flags,
    nodes: Vec<Node>,
}

impl Parser {
    /// Compiles `pattern` into its final node sequence.
    pub fn parse(pattern: &str, flags: Flags) -> Result<Vec<Node>> {
        Ok(coalesce(Parser::tokenize(pattern, flags)?))
    }

    /// Tokenizes `pattern` and binds its quantifiers, without merging literals.
    pub fn tokenize(pattern: &str, flags: Flags) -> Result<Vec<Node>> {
        let mut parser = Parser {
            chars: pattern.chars().collect(),
            pos: 0,
            flags,
            nodes: Vec::new(),
        };

        while let Some(&c) = parser.chars.get(parser.pos) {
            match c {
                '\\' => {
                    let node = parser.parse_escape()?;
                    parser.nodes.push(node);
                }
                '*' => parser.parse_repeat(RepeatKind::ZeroOrMore)?,
                '+' => parser.parse_repeat(RepeatKind::OneOrMore)?,
                '?' => parser.parse_repeat(RepeatKind::ZeroOrOne)?,
                '{' => parser.parse_brace()?,
                '^' => parser.push_symbol(Node::Start),
                '$' => parser.push_symbol(Node::End),
                '.' => parser.push_symbol(Node::any(flags)),
                c => parser.push_symbol(Node::literal(c, flags)),
            }
        }

        Ok(parser.nodes)
    }

    fn push_symbol(&mut self, node: Node) {
        self.pos += 1;
        self.nodes.push(node);
    }

    fn parse_escape(&mut self) -> Result<Node> {
        let position = self.pos;
        self.pos += 1; // consume '\\'

        let c = *self
            .chars
            .get(self.pos)
            .ok_or(Error::BadEscape { position })?;
        self.pos += 1;

        let node = match c {
            '0' => self.parse_octal(),
            'x' | 'X' => self.parse_hex(position)?,
            'A' | '^' => Node::Start,
            'Z' | '$' => Node::End,
            '.' => Node::any(self.flags),
            'd' => Node::Class(ClassKind::Digit),
            'D' => Node::Class(ClassKind::NotDigit),
            's' => Node::Class(ClassKind::Space),
            'S' => Node::Class(ClassKind::NotSpace),
            'w' => Node::Class(ClassKind::Word),
            'W' => Node::Class(ClassKind::NotWord),
            'f' => Node::literal('\x0c', self.flags),
            'n' => Node::literal('\n', self.flags),
            'r' => Node::literal('\r', self.flags),
            't' => Node::literal('\t', self.flags),
            'v' => Node::literal('\x0b', self.flags),
            c if ESCAPABLE_CHARS.contains(&c) => Node::literal(c, self.flags),
            c => Node::literal(format!("\\{}", c), self.flags),
        };

        Ok(node)
    }

    // '\0' followed by exactly two octal digits, or a bare NUL
    fn parse_octal(&mut self) -> Node {
        let digits = self.peek_digits(8);
        let c = match digits {
            Some(value) => {
                self.pos += 2;
                char::from(value)
            }
            None => '\0',
        };
        Node::literal(c, self.flags)
    }

    fn parse_hex(&mut self, position: usize) -> Result<Node> {
        let value = self
            .peek_digits(16)
            .ok_or(Error::InvalidHexEscape { position })?;
        self.pos += 2;
        Ok(Node::literal(char::from(value), self.flags))
    }

    fn peek_digits(&self, radix: u32) -> Option<u8> {
        let hi = self.chars.get(self.pos)?.to_digit(radix)?;
        let lo = self.chars.get(self.pos + 1)?.to_digit(radix)?;
        u8::try_from(hi * radix + lo).ok()
    }

    fn parse_repeat(&mut self, kind: RepeatKind) -> Result<()> {
        let position = self.pos;
        self.pos += 1; // consume '*', '+' or '?'

        let greedy = self.parse_greedy();
        repeat::bind(&mut self.nodes, kind, greedy, position)
    }

    fn parse_brace(&mut self) -> Result<()> {
        let position = self.pos;

        match repeat::parse_bounds(&self.chars, position) {
            Some((kind, close)) => {
                self.pos = close + 1;
                let greedy = self.parse_greedy();
                repeat::bind(&mut self.nodes, kind, greedy, position)
            }
            None => {
                // malformed bounds degrade to a literal brace
                self.push_symbol(Node::literal('{', self.flags));
                Ok(())
            }
        }
    }

    fn parse_greedy(&mut self) -> GreedyKind {
        match self.chars.get(self.pos) {
            Some('?') => {
                self.pos += 1;
                GreedyKind::NonGreedy
            }
            _ => GreedyKind::Greedy,
        }
    }
}

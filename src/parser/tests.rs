use super::ast::*;
use super::*;
use crate::error::Error;
use crate::flags::Flags;

fn run(pattern: &str) -> Result<Vec<Node>, Error> {
    Parser::parse(pattern, Flags::empty())
}

fn lit(text: &str) -> Node {
    Node::literal(text, Flags::empty())
}

fn greedy(child: Node, kind: RepeatKind) -> Node {
    Node::repeat(child, kind, GreedyKind::Greedy)
}

fn lazy(child: Node, kind: RepeatKind) -> Node {
    Node::repeat(child, kind, GreedyKind::NonGreedy)
}

#[cfg(test)]
mod basic_match {
    use super::*;

    #[test]
    fn match_char() {
        assert_eq!(run("abc"), Ok(vec![lit("abc")]));
    }

    #[test]
    fn match_any() {
        assert_eq!(
            run("a.c"),
            Ok(vec![lit("a"), Node::Any { dot_all: false }, lit("c")])
        );
    }

    #[test]
    fn match_anchors() {
        assert_eq!(run("^ab$"), Ok(vec![Node::Start, lit("ab"), Node::End]));
    }

    #[test]
    fn empty_pattern() {
        assert_eq!(run(""), Ok(vec![]));
    }

    #[test]
    fn flags_reach_nodes() {
        let nodes = Parser::parse("a.", Flags::IGNORECASE | Flags::DOTALL).unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Literal {
                    text: "a".to_owned(),
                    ignore_case: true
                },
                Node::Any { dot_all: true },
            ]
        );
    }
}

#[cfg(test)]
mod escape {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        digit = { r"\d", Node::Class(ClassKind::Digit) },
        not_digit = { r"\D", Node::Class(ClassKind::NotDigit) },
        space = { r"\s", Node::Class(ClassKind::Space) },
        not_space = { r"\S", Node::Class(ClassKind::NotSpace) },
        word = { r"\w", Node::Class(ClassKind::Word) },
        not_word = { r"\W", Node::Class(ClassKind::NotWord) },
        start = { r"\A", Node::Start },
        end = { r"\Z", Node::End },
        caret = { r"\^", Node::Start },
        dollar = { r"\$", Node::End },
        dot = { r"\.", Node::Any { dot_all: false } },
        form_feed = { r"\f", lit("\x0c") },
        newline = { r"\n", lit("\n") },
        carriage_return = { r"\r", lit("\r") },
        tab = { r"\t", lit("\t") },
        vertical_tab = { r"\v", lit("\x0b") },
        plus = { r"\+", lit("+") },
        brace = { r"\{", lit("{") },
        backslash = { r"\\", lit("\\") },
        space_char = { r"\ ", lit(" ") },
        unknown = { r"\q", lit("\\q") },
        hex_lower = { r"\x41", lit("A") },
        hex_upper = { r"\X7a", lit("z") },
        octal = { r"\012", lit("\n") },
        bare_nul = { r"\0", lit("\0") },
    )]
    fn single_escape(pattern: &str, expected: Node) {
        assert_eq!(run(pattern), Ok(vec![expected]));
    }

    #[test]
    fn octal_needs_two_digits() {
        assert_eq!(run(r"\07"), Ok(vec![lit("\x007")]));
        assert_eq!(run(r"\08"), Ok(vec![lit("\x008")]));
        assert_eq!(run(r"\0a"), Ok(vec![lit("\x00a")]));
    }

    #[test]
    fn dangling_backslash() {
        assert_eq!(run("\\"), Err(Error::BadEscape { position: 0 }));
        assert_eq!(run("ab\\"), Err(Error::BadEscape { position: 2 }));
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(run(r"\x4"), Err(Error::InvalidHexEscape { position: 0 }));
        assert_eq!(run(r"a\xg1"), Err(Error::InvalidHexEscape { position: 1 }));
        assert_eq!(run(r"\X"), Err(Error::InvalidHexEscape { position: 0 }));
    }

    #[test]
    fn escapes_merge_with_literals() {
        assert_eq!(run(r"a\+c"), Ok(vec![lit("a+c")]));
        assert_eq!(run(r"a\x41"), Ok(vec![lit("aA")]));
    }
}

#[cfg(test)]
mod greedy {
    use super::*;

    #[test]
    fn star() {
        assert_eq!(
            run("ab*c"),
            Ok(vec![
                lit("a"),
                greedy(lit("b"), RepeatKind::ZeroOrMore),
                lit("c"),
            ])
        );
    }

    #[test]
    fn plus() {
        assert_eq!(
            run("ab+"),
            Ok(vec![lit("a"), greedy(lit("b"), RepeatKind::OneOrMore)])
        );
    }

    #[test]
    fn option() {
        assert_eq!(
            run(r"\d?"),
            Ok(vec![greedy(
                Node::Class(ClassKind::Digit),
                RepeatKind::ZeroOrOne
            )])
        );
    }

    #[test]
    fn repeat() {
        assert_eq!(
            run("1{2,3}"),
            Ok(vec![greedy(lit("1"), RepeatKind::Range(2, 3))])
        );
        assert_eq!(
            run("abc{10}"),
            Ok(vec![lit("ab"), greedy(lit("c"), RepeatKind::Exact(10))])
        );
    }

    #[test]
    fn unknown_escape_gives_up_last_char() {
        assert_eq!(
            run(r"\q+"),
            Ok(vec![lit("\\"), greedy(lit("q"), RepeatKind::OneOrMore)])
        );
    }

    #[test]
    fn trailing_anchor_is_skipped() {
        assert_eq!(
            run("a$*"),
            Ok(vec![greedy(lit("a"), RepeatKind::ZeroOrMore), Node::End])
        );
    }

    #[test]
    fn repeat_of_repeat() {
        assert_eq!(
            run("a**"),
            Ok(vec![greedy(
                greedy(lit("a"), RepeatKind::ZeroOrMore),
                RepeatKind::ZeroOrMore
            )])
        );
    }
}

#[cfg(test)]
mod non_greedy {
    use super::*;

    #[test]
    fn star() {
        assert_eq!(run("a*?"), Ok(vec![lazy(lit("a"), RepeatKind::ZeroOrMore)]));
    }

    #[test]
    fn plus() {
        assert_eq!(run(".+?"), Ok(vec![lazy(Node::any(Flags::empty()), RepeatKind::OneOrMore)]));
    }

    #[test]
    fn option() {
        assert_eq!(run("a??"), Ok(vec![lazy(lit("a"), RepeatKind::ZeroOrOne)]));
    }

    #[test]
    fn repeat() {
        assert_eq!(
            run("a{2,5}?b"),
            Ok(vec![lazy(lit("a"), RepeatKind::Range(2, 5)), lit("b")])
        );
        assert_eq!(run("a{4}?"), Ok(vec![lazy(lit("a"), RepeatKind::Exact(4))]));
    }
}

#[cfg(test)]
mod braces {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        missing_low = { "a{,3}" },
        missing_high = { "a{3,}" },
        empty = { "a{}" },
        two_commas = { "a{1,2,3}" },
        letter = { "a{x}" },
        unterminated = { "a{12" },
        lone = { "{" },
        overflow = { "a{99999999999}" },
    )]
    fn malformed_is_literal(pattern: &str) {
        assert_eq!(run(pattern), Ok(vec![lit(pattern)]));
    }

    #[test]
    fn literal_brace_then_quantifier() {
        assert_eq!(
            run("{+"),
            Ok(vec![greedy(lit("{"), RepeatKind::OneOrMore)])
        );
    }
}

#[cfg(test)]
mod errors {
    use super::*;

    #[test]
    fn nothing_to_repeat() {
        assert_eq!(run("+"), Err(Error::NothingToRepeat { position: 0 }));
        assert_eq!(run("*?"), Err(Error::NothingToRepeat { position: 0 }));
        assert_eq!(run("^?"), Err(Error::NothingToRepeat { position: 1 }));
        assert_eq!(run("^$+"), Err(Error::NothingToRepeat { position: 2 }));
        assert_eq!(run("{2}"), Err(Error::NothingToRepeat { position: 0 }));
    }
}

#[cfg(test)]
mod coalescing {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tokenize_keeps_literals_apart() {
        assert_eq!(
            Parser::tokenize("ab", Flags::empty()),
            Ok(vec![lit("a"), lit("b")])
        );
    }

    #[test]
    fn non_literals_split_runs() {
        let nodes = vec![lit("a"), lit("b"), Node::End, lit("c"), lit("")];
        assert_eq!(coalesce(nodes), vec![lit("ab"), Node::End, lit("c")]);
    }

    fn node_strategy() -> impl Strategy<Value = Node> {
        prop_oneof![
            "[a-c]{0,3}".prop_map(|text| lit(&text)),
            Just(Node::Start),
            Just(Node::End),
            Just(Node::Class(ClassKind::Word)),
            "[a-c]".prop_map(|text| greedy(lit(&text), RepeatKind::OneOrMore)),
        ]
    }

    proptest! {
        #[test]
        fn coalesce_is_idempotent(nodes in prop::collection::vec(node_strategy(), 0..12)) {
            let once = coalesce(nodes);
            prop_assert_eq!(coalesce(once.clone()), once);
        }

        #[test]
        fn parse_is_deterministic(pattern in "[abc.+*?{},0-9^$\\\\]{0,12}") {
            prop_assert_eq!(run(&pattern), run(&pattern));
        }
    }
}

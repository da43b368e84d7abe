mod backtrack;
mod cache;
mod error;
mod escape;
mod flags;
mod functions;
mod parser;
mod pattern;

pub use backtrack::{LogTrace, Trace, TraceEvent};
pub use cache::{compile, purge, PatternCache, MAX_CACHE};
pub use error::{Error, Result};
pub use escape::escape;
pub use flags::Flags;
pub use functions::{findall, finditer, fullmatch, r#match, search, split, sub, subn};
pub use parser::ast::{ClassKind, GreedyKind, Node, Repeat, RepeatKind};
pub use parser::{coalesce, Parser};
pub use pattern::{IntoPattern, Match, Matches, Pattern};

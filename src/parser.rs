// syntax (like BNF)
//
// root       = item *
// item       = atom ( quantifier '?' ? ) ?
// quantifier = '*' | '+' | '?' | '{' number ( ',' number ) ? '}'
// atom       = '^' | '$' | '.' | '\' escape | char
// escape     = '0' octal octal | ( 'x' | 'X' ) hex hex
//            | 'A' | 'Z' | 'd' | 'D' | 's' | 'S' | 'w' | 'W'
//            | 'f' | 'n' | 'r' | 't' | 'v' | char
//
// A quantifier repeats one atom: the last non-anchor node, or the last
// character of a literal run. A malformed '{...}' is a literal '{'.

pub mod ast;
mod literals;
mod parser;
mod repeat;

pub use ast::Node;
pub use literals::coalesce;
pub use parser::Parser;

#[cfg(test)]
mod tests;

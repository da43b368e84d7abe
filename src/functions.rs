//! One-shot helpers that compile through the pattern cache and run a single
//! operation.

use crate::cache::compile;
use crate::error::Result;
use crate::flags::Flags;
use crate::pattern::{IntoPattern, Match, Matches};

pub fn r#match<'h, P: IntoPattern>(
    pattern: P,
    haystack: &'h str,
    flags: Flags,
) -> Result<Option<Match<'h>>> {
    Ok(compile(pattern, flags)?.r#match(haystack))
}

pub fn fullmatch<'h, P: IntoPattern>(
    pattern: P,
    haystack: &'h str,
    flags: Flags,
) -> Result<Option<Match<'h>>> {
    Ok(compile(pattern, flags)?.fullmatch(haystack))
}

pub fn search<'h, P: IntoPattern>(
    pattern: P,
    haystack: &'h str,
    flags: Flags,
) -> Result<Option<Match<'h>>> {
    Ok(compile(pattern, flags)?.search(haystack))
}

pub fn split<'h, P: IntoPattern>(
    pattern: P,
    haystack: &'h str,
    maxsplit: usize,
    flags: Flags,
) -> Result<Vec<&'h str>> {
    Ok(compile(pattern, flags)?.split(haystack, maxsplit))
}

pub fn findall<'h, P: IntoPattern>(
    pattern: P,
    haystack: &'h str,
    flags: Flags,
) -> Result<Vec<&'h str>> {
    Ok(compile(pattern, flags)?.findall(haystack))
}

pub fn finditer<'h, P: IntoPattern>(
    pattern: P,
    haystack: &'h str,
    flags: Flags,
) -> Result<Matches<'h>> {
    Ok(compile(pattern, flags)?.finditer(haystack))
}

pub fn sub<P: IntoPattern>(
    pattern: P,
    repl: &str,
    haystack: &str,
    count: usize,
    flags: Flags,
) -> Result<String> {
    Ok(compile(pattern, flags)?.sub(repl, haystack, count))
}

pub fn subn<P: IntoPattern>(
    pattern: P,
    repl: &str,
    haystack: &str,
    count: usize,
    flags: Flags,
) -> Result<(String, usize)> {
    Ok(compile(pattern, flags)?.subn(repl, haystack, count))
}

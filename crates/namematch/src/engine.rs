// Engine entry points
//
// Decode once, dispatch on the mode, assemble confirmed runs into public
// byte spans. Stateless: each call builds and drops its own scratch.

use crate::matchers::{camel, exact, glob, subword};
use crate::mode::MatchMode;
use crate::regions::{self, ByteMap, Run};

/// Compute the highlight regions for `pattern` against `name` under `mode`.
///
/// `None` means the name does not match at all. `Some(vec![])` means it
/// matches but no sub-span is distinguished, as for an all-wildcard or
/// empty pattern. Otherwise each `(start, length)` pair is a byte span
/// into `name`, and the list is sorted, non-overlapping, non-touching and
/// free of zero-length entries, so it can drive text highlighting
/// directly.
///
/// Spans always fall on char boundaries of `name`, so slicing `name` with
/// them cannot panic.
pub fn compute_matching_regions(
    pattern: &str,
    name: &str,
    mode: MatchMode,
) -> Option<Vec<(usize, usize)>> {
    let pat: Vec<char> = pattern.chars().collect();
    let name_chars: Vec<char> = name.chars().collect();

    let runs: Vec<Run> = match mode {
        MatchMode::Exact => exact::match_exact(&pat, &name_chars)?,
        MatchMode::Prefix => exact::match_prefix(&pat, &name_chars)?,
        MatchMode::Substring => exact::match_substring(&pat, &name_chars)?,
        MatchMode::Pattern => glob::match_glob(&pat, &name_chars)?,
        MatchMode::CamelCase => camel::match_camel(&pat, &name_chars)?,
        MatchMode::Subword => subword::match_subword(&pat, &name_chars)?,
    };

    let map = ByteMap::new(name);
    Some(regions::assemble(&runs, &map))
}

/// True when `pattern` matches `name` under `mode`. Same decision as
/// `compute_matching_regions`, without keeping the spans.
pub fn is_match(pattern: &str, name: &str, mode: MatchMode) -> bool {
    compute_matching_regions(pattern, name, mode).is_some()
}

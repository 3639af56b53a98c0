// namematch: name-matching engine for code completion and search
//
// Decides whether a short query matches a candidate identifier and which
// spans of the identifier a UI should highlight. Six modes: exact, prefix,
// substring, wildcard pattern, camel-case and subword, all case-insensitive
// and Unicode-clean.

#[cfg(test)]
mod test;

mod charcmp;
mod engine;
mod matchers;
mod mode;
mod regions;
mod segment;

pub use engine::{compute_matching_regions, is_match};
pub use mode::MatchMode;

// Exact, prefix and substring matching
//
// The plain modes: one confirmed run or nothing.

use crate::charcmp::{find_ci, matches_at};
use crate::regions::Run;

/// Whole-name equality. The run covers the entire name.
pub fn match_exact(pat: &[char], name: &[char]) -> Option<Vec<Run>> {
    if pat.len() != name.len() {
        return None;
    }
    match_prefix(pat, name)
}

/// Prefix match. The run covers exactly the matched prefix.
pub fn match_prefix(pat: &[char], name: &[char]) -> Option<Vec<Run>> {
    matches_at(name, pat, 0).then(|| vec![Run::new(0, pat.len())])
}

/// Leftmost occurrence anywhere in the name.
pub fn match_substring(pat: &[char], name: &[char]) -> Option<Vec<Run>> {
    let at = find_ci(name, pat, 0)?;
    Some(vec![Run::new(at, at + pat.len())])
}

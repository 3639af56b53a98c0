// Camel-case matching
//
// Every pattern char must land on a hump-initial char at or after the
// cursor. Once anchored, a verbatim run consumes pattern and name chars
// one-for-one, crossing hump boundaries freely, until they disagree. The
// consumed prefix stays confirmed; the pending pattern char re-anchors
// strictly after the break. Forward-only, no backtracking into earlier
// runs.

use crate::charcmp::eq_ignore_case;
use crate::regions::Run;
use crate::segment::hump_starts;

pub fn match_camel(pat: &[char], name: &[char]) -> Option<Vec<Run>> {
    if pat.is_empty() {
        return Some(Vec::new());
    }
    let starts = hump_starts(name);
    let mut runs = Vec::new();
    let mut pi = 0;
    let mut cursor = 0;

    while pi < pat.len() {
        let anchor = starts
            .iter()
            .copied()
            .find(|&h| h >= cursor && eq_ignore_case(pat[pi], name[h]))?;

        let mut ni = anchor;
        while pi < pat.len() && ni < name.len() && eq_ignore_case(pat[pi], name[ni]) {
            pi += 1;
            ni += 1;
        }
        runs.push(Run::new(anchor, ni));
        cursor = ni + 1;
    }
    Some(runs)
}

// Subword matching
//
// The pattern is carved into fragments by the search itself: every
// fragment must sit at the start of some hump and match a prefix of it,
// and humps are consumed strictly left to right with skips allowed. The
// search is greedy (leftmost hump, longest fragment first) and repairs
// wrong guesses through an explicit choice stack: shorten the latest
// fragment, then slide it to a later hump, then drop it and rework the
// fragment before it.

use crate::charcmp::eq_ignore_case;
use crate::regions::Run;
use crate::segment::hump_starts;

/// One accepted fragment: `pat[pi..pi + len]` placed at hump `hump`.
#[derive(Debug, Clone, Copy)]
struct Choice {
    pi: usize,
    hump: usize,
    len: usize,
}

/// Longest prefix of `pat[pi..]` matching at the start of hump `h`,
/// capped by the hump length.
fn fragment_len(pat: &[char], name: &[char], starts: &[usize], pi: usize, h: usize) -> usize {
    let start = starts[h];
    let end = starts.get(h + 1).copied().unwrap_or(name.len());
    let cap = (end - start).min(pat.len() - pi);
    (0..cap)
        .take_while(|&k| eq_ignore_case(pat[pi + k], name[start + k]))
        .count()
}

/// Leftmost hump at or after `from` where `pat[pi..]` can start a
/// fragment, taken at its longest.
fn place(pat: &[char], name: &[char], starts: &[usize], pi: usize, from: usize) -> Option<Choice> {
    (from..starts.len()).find_map(|h| {
        let len = fragment_len(pat, name, starts, pi, h);
        (len > 0).then_some(Choice { pi, hump: h, len })
    })
}

pub fn match_subword(pat: &[char], name: &[char]) -> Option<Vec<Run>> {
    if pat.is_empty() {
        return Some(Vec::new());
    }
    let starts = hump_starts(name);

    let mut stack: Vec<Choice> = Vec::new();
    let mut next = place(pat, name, &starts, 0, 0);
    loop {
        match next {
            Some(choice) => {
                let consumed = choice.pi + choice.len;
                stack.push(choice);
                if consumed == pat.len() {
                    let runs = stack
                        .iter()
                        .map(|c| Run::new(starts[c.hump], starts[c.hump] + c.len))
                        .collect();
                    return Some(runs);
                }
                next = place(pat, name, &starts, consumed, choice.hump + 1);
            }
            None => {
                // Unwind one choice. A fragment of length 1 has nothing
                // left to give up and moves to the next hump instead.
                let top = stack.pop()?;
                if top.len > 1 {
                    let shorter = Choice { len: top.len - 1, ..top };
                    stack.push(shorter);
                    next = place(pat, name, &starts, top.pi + shorter.len, shorter.hump + 1);
                } else {
                    next = place(pat, name, &starts, top.pi, top.hump + 1);
                }
            }
        }
    }
}

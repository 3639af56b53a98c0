// Wildcard pattern matching (`*` and `?`)
//
// The pattern is parsed once into literal tokens separated by wildcard
// gaps. Literals are then placed left to right: anchored at an exact
// position when the gap before them is `?`-only, searched for their
// leftmost occurrence when the gap holds a `*`. When a later token cannot
// be placed, the most recent searched token is retried one position
// further on (classic multi-star backtracking, kept iterative). Wildcard
// consumption is never highlighted; only literal placements become runs.

use crate::charcmp::{find_ci, matches_at};
use crate::regions::Run;

/// Wildcard run between two literals: `fixed` chars consumed by `?`, and
/// whether a `*` makes the gap stretchable.
#[derive(Debug, Clone, Copy, Default)]
struct Gap {
    fixed: usize,
    floating: bool,
}

/// Literal token, a char range into the pattern.
#[derive(Debug, Clone, Copy)]
struct Literal {
    start: usize,
    end: usize,
}

impl Literal {
    #[inline]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Parsed pattern. Literal `i` sits between `gaps[i]` and `gaps[i + 1]`,
/// so `gaps.len() == literals.len() + 1` always holds.
struct GlobPattern {
    gaps: Vec<Gap>,
    literals: Vec<Literal>,
}

fn parse(pat: &[char]) -> GlobPattern {
    let mut gaps = Vec::new();
    let mut literals = Vec::new();
    let mut gap = Gap::default();
    let mut i = 0;
    while i < pat.len() {
        match pat[i] {
            '*' => {
                gap.floating = true;
                i += 1;
            }
            '?' => {
                gap.fixed += 1;
                i += 1;
            }
            _ => {
                let start = i;
                while i < pat.len() && pat[i] != '*' && pat[i] != '?' {
                    i += 1;
                }
                gaps.push(gap);
                gap = Gap::default();
                literals.push(Literal { start, end: i });
            }
        }
    }
    gaps.push(gap);
    GlobPattern { gaps, literals }
}

pub fn match_glob(pat: &[char], name: &[char]) -> Option<Vec<Run>> {
    let glob = parse(pat);
    let lits = &glob.literals;

    // All-wildcard pattern: only the length is checked, nothing is
    // highlighted.
    if lits.is_empty() {
        let gap = glob.gaps[0];
        let admitted = if gap.floating {
            name.len() >= gap.fixed
        } else {
            name.len() == gap.fixed
        };
        return admitted.then(Vec::new);
    }

    let tail = glob.gaps[lits.len()];
    // The last literal of a `?`-only tail has no freedom: the name length
    // pins it.
    let end_pinned = |i: usize| i + 1 == lits.len() && !tail.floating;

    // placements[i]: char index in the name where literal i currently sits
    let mut placements = vec![0usize; lits.len()];
    let mut i = 0;
    // Set by backtracking: the retried literal searches from here instead
    // of from its minimum position.
    let mut resume: Option<usize> = None;

    loop {
        let mut failed = false;
        while i < lits.len() {
            let lit = lits[i];
            let needle = &pat[lit.start..lit.end];
            let gap = glob.gaps[i];
            let min = if i == 0 {
                gap.fixed
            } else {
                placements[i - 1] + lits[i - 1].len() + gap.fixed
            };

            let restart = resume.take();
            let placed = if !gap.floating {
                // Anchored exactly at `min`.
                matches_at(name, needle, min).then_some(min)
            } else if end_pinned(i) {
                name.len()
                    .checked_sub(tail.fixed + lit.len())
                    .filter(|&at| at >= min && matches_at(name, needle, at))
            } else {
                find_ci(name, needle, restart.unwrap_or(min))
            };

            match placed {
                Some(at) => {
                    placements[i] = at;
                    i += 1;
                }
                None => {
                    failed = true;
                    break;
                }
            }
        }

        if !failed {
            let last = lits.len() - 1;
            let end = placements[last] + lits[last].len();
            let fits = if tail.floating {
                end + tail.fixed <= name.len()
            } else {
                end + tail.fixed == name.len()
            };
            if fits {
                break;
            }
        }

        // Backtrack: the nearest earlier searched literal moves one
        // position further on. Anchored and end-pinned literals offer no
        // alternatives and are skipped.
        let mut j = i;
        loop {
            if j == 0 {
                return None;
            }
            j -= 1;
            if glob.gaps[j].floating && !end_pinned(j) {
                break;
            }
        }
        resume = Some(placements[j] + 1);
        i = j;
    }

    let runs = lits
        .iter()
        .zip(&placements)
        .map(|(lit, &at)| Run::new(at, at + lit.len()))
        .collect();
    Some(runs)
}

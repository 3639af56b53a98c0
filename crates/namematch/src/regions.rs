// Region assembly
//
// Matchers confirm runs of chars; this module turns them into the public
// span list: zero-length runs dropped, touching runs merged, char indices
// mapped to byte offsets.

/// Half-open run `[start, end)` of confirmed chars, in char coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Run { start, end }
    }
}

/// Char index to byte offset map. ASCII text needs no table.
pub enum ByteMap {
    Ascii,
    Map(Vec<usize>),
}

impl ByteMap {
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return ByteMap::Ascii;
        }
        // one offset per char plus the end sentinel
        let mut map: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        map.push(text.len());
        ByteMap::Map(map)
    }

    #[inline(always)]
    pub fn get(&self, ci: usize) -> usize {
        match self {
            ByteMap::Ascii => ci,
            ByteMap::Map(map) => map[ci],
        }
    }
}

/// Normalize ordered `runs` into `(byte_start, byte_len)` spans.
///
/// Never fails: an empty result is the "matches, nothing to highlight"
/// answer, not an error.
pub fn assemble(runs: &[Run], map: &ByteMap) -> Vec<(usize, usize)> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for &run in runs {
        if run.end <= run.start {
            continue;
        }
        match merged.last_mut() {
            Some(last) if run.start <= last.end => last.end = last.end.max(run.end),
            _ => merged.push(run),
        }
    }
    merged
        .iter()
        .map(|r| {
            let start = map.get(r.start);
            (start, map.get(r.end) - start)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_drops_empty_and_merges_touching() {
        let runs = [Run::new(0, 3), Run::new(3, 3), Run::new(3, 5), Run::new(7, 8)];
        assert_eq!(
            assemble(&runs, &ByteMap::Ascii),
            vec![(0, 5), (7, 1)]
        );
    }

    #[test]
    fn test_assemble_empty_input() {
        assert_eq!(assemble(&[], &ByteMap::Ascii), Vec::<(usize, usize)>::new());
        assert_eq!(
            assemble(&[Run::new(2, 2)], &ByteMap::Ascii),
            Vec::<(usize, usize)>::new()
        );
    }

    #[test]
    fn test_byte_map_non_ascii() {
        // "Öffnung": 'Ö' is two bytes, the rest one each
        let map = ByteMap::new("Öffnung");
        assert_eq!(map.get(0), 0);
        assert_eq!(map.get(1), 2);
        assert_eq!(map.get(7), 8);
        assert_eq!(assemble(&[Run::new(0, 3)], &map), vec![(0, 4)]);
        assert_eq!(assemble(&[Run::new(1, 3)], &map), vec![(2, 2)]);
    }

    #[test]
    fn test_byte_map_ascii_is_identity() {
        let map = ByteMap::new("plain");
        assert_eq!(map.get(0), 0);
        assert_eq!(map.get(5), 5);
    }
}

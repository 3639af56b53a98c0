// Case-insensitive char comparison and search
//
// Simple per-char case mapping only: two chars are equal when they are
// identical or their full lowercase or uppercase images coincide. There is
// no locale folding, so a char without a case pairing never equals an ASCII
// letter of the other case ('ö' matches 'Ö' but not 'O').

/// Case-insensitive equality for one char pair.
#[inline(always)]
pub fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

/// Check `needle` against `name[at..]`, anchored at `at`.
pub fn matches_at(name: &[char], needle: &[char], at: usize) -> bool {
    if at + needle.len() > name.len() {
        return false;
    }
    needle.iter().zip(&name[at..]).all(|(&p, &n)| eq_ignore_case(p, n))
}

/// Leftmost index at or after `from` where `needle` matches, or None.
/// Plain scan over identifier-sized inputs.
pub fn find_ci(name: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= name.len()).then_some(from);
    }
    if name.len() < needle.len() {
        return None;
    }
    (from..=name.len() - needle.len()).find(|&i| matches_at(name, needle, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case('a', 'A'));
        assert!(eq_ignore_case('A', 'a'));
        assert!(eq_ignore_case('z', 'z'));
        assert!(eq_ignore_case('1', '1'));
        assert!(eq_ignore_case('_', '_'));
        assert!(eq_ignore_case('ö', 'Ö'));
        assert!(!eq_ignore_case('a', 'b'));
        assert!(!eq_ignore_case('ö', 'O'));
        assert!(!eq_ignore_case('ß', 's'));
        assert!(!eq_ignore_case('1', '2'));
    }

    #[test]
    fn test_matches_at() {
        let name = chars("ArrayList");
        assert!(matches_at(&name, &chars("array"), 0));
        assert!(matches_at(&name, &chars("LIST"), 5));
        assert!(!matches_at(&name, &chars("list"), 4));
        assert!(!matches_at(&name, &chars("Listing"), 5));
        assert!(matches_at(&name, &[], 9));
        assert!(!matches_at(&name, &[], 10));
    }

    #[test]
    fn test_find_ci() {
        let name = chars("ArrayListList");
        assert_eq!(find_ci(&name, &chars("list"), 0), Some(5));
        assert_eq!(find_ci(&name, &chars("list"), 6), Some(9));
        assert_eq!(find_ci(&name, &chars("list"), 10), None);
        assert_eq!(find_ci(&name, &chars("x"), 0), None);
        assert_eq!(find_ci(&name, &[], 4), Some(4));
    }
}

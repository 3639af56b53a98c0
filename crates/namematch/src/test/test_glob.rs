// Tests for wildcard pattern matching
use crate::*;
use pretty_assertions::assert_eq;

fn glob(pattern: &str, name: &str) -> Option<Vec<(usize, usize)>> {
    compute_matching_regions(pattern, name, MatchMode::Pattern)
}

#[test]
fn test_star_bridges_separator() {
    assert_eq!(glob("class*path", "class_path"), Some(vec![(0, 5), (6, 4)]));
    assert_eq!(glob("class*path", "classify_the_path"), Some(vec![(0, 5), (13, 4)]));
}

#[test]
fn test_star_consuming_nothing_merges_neighbours() {
    assert_eq!(glob("class*path", "classpath"), Some(vec![(0, 9)]));
    assert_eq!(glob("a*b*c", "abc"), Some(vec![(0, 3)]));
}

#[test]
fn test_all_wildcard_patterns_highlight_nothing() {
    assert_eq!(glob("*", "anything"), Some(vec![]));
    assert_eq!(glob("*", ""), Some(vec![]));
    assert_eq!(glob("**", "anything"), Some(vec![]));
    assert_eq!(glob("*?*", "anything"), Some(vec![]));
    assert_eq!(glob("", ""), Some(vec![]));
    assert_eq!(glob("", "anything"), None);
}

#[test]
fn test_question_marks_demand_exact_width() {
    assert_eq!(glob("?????", "test"), None);
    assert_eq!(glob("????", "test"), Some(vec![]));
    assert_eq!(glob("???", "test"), None);
    assert_eq!(glob("?*", ""), None);
    assert_eq!(glob("?*", "x"), Some(vec![]));
}

#[test]
fn test_question_marks_are_not_highlighted() {
    assert_eq!(glob("t?st", "test"), Some(vec![(0, 1), (2, 2)]));
    assert_eq!(glob("?est", "test"), Some(vec![(1, 3)]));
    assert_eq!(glob("tes?", "test"), Some(vec![(0, 3)]));
}

#[test]
fn test_pattern_is_anchored_at_both_ends() {
    assert_eq!(glob("class*", "class_path"), Some(vec![(0, 5)]));
    assert_eq!(glob("path*", "class_path"), None);
    assert_eq!(glob("*path", "class_path"), Some(vec![(6, 4)]));
    assert_eq!(glob("*class", "class_path"), None);
    assert_eq!(glob("lass*pat", "class_path"), None);
}

#[test]
fn test_literal_only_pattern_is_whole_name_equality() {
    assert_eq!(glob("test", "test"), Some(vec![(0, 4)]));
    assert_eq!(glob("test", "testx"), None);
    assert_eq!(glob("test", "tes"), None);
}

#[test]
fn test_glob_is_case_insensitive() {
    assert_eq!(glob("CLASS*PATH", "class_path"), Some(vec![(0, 5), (6, 4)]));
    assert_eq!(glob("T?ST", "test"), Some(vec![(0, 1), (2, 2)]));
}

#[test]
fn test_searched_literal_retries_later_occurrences() {
    // "a" first lands on index 0, but the anchored "b" after it only fits
    // when "a" moves on to index 3
    assert_eq!(glob("*a?b", "axbayb"), Some(vec![(3, 1), (5, 1)]));
    assert_eq!(glob("*a?b", "axbxb"), None);
}

#[test]
fn test_end_pinned_literal_placement() {
    assert_eq!(glob("*ab", "abab"), Some(vec![(2, 2)]));
    assert_eq!(glob("*ab?", "abab"), None);
    assert_eq!(glob("*aab*ab", "aabab"), Some(vec![(0, 5)]));
}

#[test]
fn test_star_spans_multiple_chars() {
    assert_eq!(glob("get*listener", "getMouseWheelListener"), Some(vec![(0, 3), (13, 8)]));
    assert_eq!(glob("a*z", "abcdefz"), Some(vec![(0, 1), (6, 1)]));
}

#[test]
fn test_glob_multibyte_names() {
    assert_eq!(glob("ö*", "öffnen"), Some(vec![(0, 2)]));
    assert_eq!(glob("*Ö", "futterö"), Some(vec![(6, 2)]));
    assert_eq!(glob("?ffnen", "öffnen"), Some(vec![(2, 5)]));
}

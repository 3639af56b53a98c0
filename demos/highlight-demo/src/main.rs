// namematch highlight examples
//
// This file demonstrates the matching engine mode by mode:
//   1. Plain modes: exact, prefix, substring
//   2. Pattern:     `*` and `?` wildcards
//   3. CamelCase:   acronyms against word initials
//   4. Subword:     lowercase fragments at word boundaries
//
// Matched spans are printed in brackets, the way an IDE would bold them.

use namematch::{MatchMode, compute_matching_regions};

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

/// Wrap every matched span of `name` in brackets. Spans are byte offsets,
/// so plain slicing is safe.
fn bracketed(name: &str, spans: &[(usize, usize)]) -> String {
    let mut out = String::with_capacity(name.len() + spans.len() * 2);
    let mut cursor = 0;
    for &(start, len) in spans {
        out.push_str(&name[cursor..start]);
        out.push('[');
        out.push_str(&name[start..start + len]);
        out.push(']');
        cursor = start + len;
    }
    out.push_str(&name[cursor..]);
    out
}

fn show(pattern: &str, name: &str, mode: MatchMode) {
    match compute_matching_regions(pattern, name, mode) {
        Some(spans) => println!("  {:<12} ~ {:<24} -> {}", pattern, name, bracketed(name, &spans)),
        None => println!("  {:<12} ~ {:<24} -> (no match)", pattern, name),
    }
}

// ---------------------------------------------------------------------------
// Main: run all modes
// ---------------------------------------------------------------------------

fn main() {
    demo_plain();
    demo_pattern();
    demo_camel();
    demo_subword();
}

/// Exact, prefix and substring: one contiguous span or nothing
fn demo_plain() {
    println!("=== Plain modes ===");
    show("arraylist", "ArrayList", MatchMode::Exact); // [ArrayList]
    show("Fiel", "field", MatchMode::Prefix); // [fiel]d
    show("list", "ArrayListList", MatchMode::Substring); // Array[List]List
    show("list", "HashMap", MatchMode::Substring); // (no match)
    println!();
}

/// Wildcards: `*` stretches, `?` consumes exactly one char, neither is
/// ever highlighted
fn demo_pattern() {
    println!("=== Pattern mode ===");
    show("class*path", "class_path", MatchMode::Pattern); // [class]_[path]
    show("t?st", "test", MatchMode::Pattern); // [t]e[st]
    show("?????", "test", MatchMode::Pattern); // (no match)
    show("*", "anything", MatchMode::Pattern); // anything
    println!();
}

/// Acronyms land on word initials; longer runs stay verbatim
fn demo_camel() {
    println!("=== CamelCase mode ===");
    show("NPE", "NullPointerException", MatchMode::CamelCase); // [N]ull[P]ointer[E]xception
    show("NuPoEx", "NullPointerException", MatchMode::CamelCase); // [Nu]ll[Po]inter[Ex]ception
    show("RE", "RuntimeException", MatchMode::CamelCase); // [R]untime[E]xception
    show("cp", "class_path", MatchMode::CamelCase); // [c]lass_[p]ath
    println!();
}

/// Lowercase fragments anchored at word boundaries, humps skippable
fn demo_subword() {
    println!("=== Subword mode ===");
    show("addlist", "addListListener", MatchMode::Subword); // [addList]Listener
    show("addstr", "addListString", MatchMode::Subword); // [add]List[Str]ing
    show("addlisten", "addListString", MatchMode::Subword); // (no match)
    println!();
}

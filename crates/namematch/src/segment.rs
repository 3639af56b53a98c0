// Hump segmentation
//
// Splits a name into word-like chunks ("humps") at case transitions, digit
// runs and separators. Camel-case and subword matching anchor only at hump
// starts; the other modes never segment.
//
// A hump boundary falls before name[i] when:
//   1. name[i] is a separator (any non-alphanumeric char)
//   2. name[i - 1] is a separator
//   3. lowercase is followed by uppercase ("ArrayList" -> Array, List)
//   4. the last capital of a capital run is followed by lowercase
//      ("HTMLParser" -> HTML, Parser; "Document" stays whole)
//   5. a letter meets a digit or a digit meets a letter
//      ("UTF16" -> UTF, 16)

/// Ordered hump start indices for `name`. Index 0 is always a start for a
/// non-empty name; humps are contiguous and cover the whole name.
pub fn hump_starts(name: &[char]) -> Vec<usize> {
    let mut starts = Vec::new();
    for i in 0..name.len() {
        if i == 0 || is_hump_start(name, i) {
            starts.push(i);
        }
    }
    starts
}

/// True when a hump boundary falls immediately before `name[i]`, for i > 0.
fn is_hump_start(name: &[char], i: usize) -> bool {
    let prev = name[i - 1];
    let curr = name[i];
    if !curr.is_alphanumeric() || !prev.is_alphanumeric() {
        return true;
    }
    if prev.is_lowercase() && curr.is_uppercase() {
        return true;
    }
    if prev.is_uppercase()
        && curr.is_uppercase()
        && matches!(name.get(i + 1), Some(c) if c.is_lowercase())
    {
        return true;
    }
    (prev.is_numeric() && curr.is_alphabetic()) || (prev.is_alphabetic() && curr.is_numeric())
}

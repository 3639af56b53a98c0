// Matcher implementations, one module per family
//
// Every matcher takes decoded `&[char]` slices and either rejects the name
// (None) or returns the confirmed runs in char coordinates, ordered left to
// right. Run cleanup and byte mapping happen afterwards in regions.rs.

pub mod camel;
pub mod exact;
pub mod glob;
pub mod subword;

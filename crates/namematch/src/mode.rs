// Match mode selection
//
// One closed enum, one matcher per variant. Dispatch lives in engine.rs as
// an exhaustive match, so adding a mode without wiring a matcher will not
// compile.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a pattern string is interpreted against a candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchMode {
    /// The pattern must equal the whole name, case-insensitively.
    Exact,
    /// The pattern must be a case-insensitive prefix of the name.
    Prefix,
    /// The pattern must occur contiguously somewhere in the name; the
    /// leftmost occurrence is reported.
    Substring,
    /// Wildcard pattern: `*` matches any run of chars, `?` exactly one.
    Pattern,
    /// Camel-case pattern matched against word starts, as in `NPE` or
    /// `NuPoEx` against `NullPointerException`.
    CamelCase,
    /// Lowercase fragments matched at word boundaries, as in `addlist`
    /// against `addListListener`.
    Subword,
}

impl MatchMode {
    /// Canonical lowercase name, the spelling `from_str` accepts.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Prefix => "prefix",
            MatchMode::Substring => "substring",
            MatchMode::Pattern => "pattern",
            MatchMode::CamelCase => "camelcase",
            MatchMode::Subword => "subword",
        }
    }

    /// All modes, in declaration order.
    pub const ALL: [MatchMode; 6] = [
        MatchMode::Exact,
        MatchMode::Prefix,
        MatchMode::Substring,
        MatchMode::Pattern,
        MatchMode::CamelCase,
        MatchMode::Subword,
    ];
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchMode::Exact),
            "prefix" => Ok(MatchMode::Prefix),
            "substring" => Ok(MatchMode::Substring),
            "pattern" => Ok(MatchMode::Pattern),
            "camelcase" => Ok(MatchMode::CamelCase),
            "subword" => Ok(MatchMode::Subword),
            _ => Err(format!("unknown match mode '{}'", s)),
        }
    }
}

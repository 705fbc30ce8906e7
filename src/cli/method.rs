//! Method flags accepted on the command line

use strsim::jaro_winkler;

/// Minimum similarity before an unknown flag gets a "did you mean" hint
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A tour construction method selected by a `-name` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Greedy,
}

impl Method {
    pub const ALL: [Method; 1] = [Method::Greedy];

    /// Flag as written on the command line, also used as the output label
    pub fn flag(&self) -> &'static str {
        match self {
            Method::Greedy => "-greedy",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Method> {
        Self::ALL.into_iter().find(|m| m.flag() == flag)
    }
}

/// Closest known flag to an unrecognized one, if any is close enough
pub fn suggest_method(flag: &str) -> Option<&'static str> {
    let input = flag.to_lowercase();
    Method::ALL
        .iter()
        .map(|m| (m.flag(), jaro_winkler(&input, m.flag())))
        .filter(|&(_, score)| score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(flag, _)| flag)
}

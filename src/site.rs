//! Site identity: the key under which severity scores are looked up.

use std::fmt;

/// Identity of a candidate mutation: a genomic position, an intra-site
/// offset (nonzero for intronic/splice-region sites), and the alternate
/// allele. Two sites are the same mutation iff all three fields match.
///
/// The derived `Ord` is lexicographic over (position, offset, alt), which
/// is the order sorted containers of sites rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Site {
    pub position: i64,
    pub offset: i32,
    pub alt: String,
}

impl Site {
    pub fn new(position: i64, offset: i32, alt: impl Into<String>) -> Self {
        Site {
            position,
            offset,
            alt: alt.into(),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}>{}", self.position, self.offset, self.alt)
    }
}

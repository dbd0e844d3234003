use std::fmt;

/// Index of a token inside a [`Dict`](super::Dict)
///
/// Valid indices are non-negative and densely assigned in insertion order.
/// The only negative value ever produced is [`Idx::MISSING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Idx(i32);

impl Idx {
    /// Sentinel paired with a failed token lookup, never a real index
    pub const MISSING: Idx = Idx(-1);

    pub const fn new(value: i32) -> Self {
        Idx(value)
    }

    /// Raw 32-bit value of the index
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// True for any index a dictionary could have assigned
    pub const fn is_valid(self) -> bool {
        self.0 >= 0
    }
}

impl From<i32> for Idx {
    fn from(value: i32) -> Self {
        Idx(value)
    }
}

impl From<Idx> for i32 {
    fn from(idx: Idx) -> Self {
        idx.0
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

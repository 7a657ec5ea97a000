//! Term handles, function symbols and the data stored behind a handle.

use crate::interner::Name;
use std::fmt;

/// Handle to a maximally shared term.
///
/// # Layout
/// 32-bit index split into shard (4 bits) + local index (28 bits), the same
/// split as `Name`. Two handles are equal iff they denote the same term.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Term(u32);

impl Term {
    /// Maximum local index per shard (2^28 - 1).
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Number of shards in a `TermPool`.
    pub const NUM_SHARDS: usize = 16;

    #[inline]
    pub(crate) const fn from_shard_local(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Term((shard << 28) | local)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    pub(crate) const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// Raw 32-bit representation.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({}:{})", self.shard(), self.local())
    }
}

/// Function symbol: a name together with an arity.
///
/// Symbols are plain values. Two symbols are equal iff their interned names
/// and their arities are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Symbol {
    name: Name,
    arity: u32,
}

impl Symbol {
    #[inline]
    pub const fn new(name: Name, arity: u32) -> Self {
        Symbol { name, arity }
    }

    #[inline]
    pub const fn name(self) -> Name {
        self.name
    }

    #[inline]
    pub const fn arity(self) -> usize {
        self.arity as usize
    }
}

/// Contents of a term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TermData {
    /// Function application `f(t1, ..., tn)`; constants have no arguments.
    Appl { symbol: Symbol, args: Box<[Term]> },
    /// Machine integer.
    Int(u64),
    /// List `[t1, ..., tn]`.
    List(Box<[Term]>),
}

impl TermData {
    /// Direct children in left-to-right order. Integers have none.
    pub fn children(&self) -> &[Term] {
        match self {
            TermData::Appl { args, .. } | TermData::List(args) => args,
            TermData::Int(_) => &[],
        }
    }
}

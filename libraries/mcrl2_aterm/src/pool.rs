//! Sharded, hash-consing term pool.
//!
//! Follows the same layout as `StringInterner`: sixteen shards, each
//! guarded by a `RwLock`, with a read-locked fast path for terms that
//! already exist.

use crate::interner::{InternError, StringInterner};
use crate::term::{Symbol, Term, TermData};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

/// Error when creating a term fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermInternError {
    /// A term shard exceeded its 28-bit local index space.
    ShardOverflow { shard_idx: usize },
    /// A symbol was applied to the wrong number of arguments.
    ArityMismatch {
        symbol: &'static str,
        expected: usize,
        found: usize,
    },
    /// A symbol arity does not fit in 32 bits.
    ArityOverflow { arity: usize },
    /// Interning the symbol name failed.
    Strings(InternError),
}

impl fmt::Display for TermInternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermInternError::ShardOverflow { shard_idx } => {
                write!(f, "term pool shard {shard_idx} exceeded capacity")
            }
            TermInternError::ArityMismatch {
                symbol,
                expected,
                found,
            } => write!(
                f,
                "symbol `{symbol}` has arity {expected} but was applied to {found} arguments"
            ),
            TermInternError::ArityOverflow { arity } => {
                write!(f, "arity {arity} does not fit in a function symbol")
            }
            TermInternError::Strings(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for TermInternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TermInternError::Strings(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InternError> for TermInternError {
    fn from(e: InternError) -> Self {
        TermInternError::Strings(e)
    }
}

struct TermShard {
    /// Deduplication table: term contents to local index.
    map: FxHashMap<TermData, u32>,
    /// Term contents, indexed by local index.
    terms: Vec<TermData>,
}

impl TermShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            terms: Vec::with_capacity(256),
        }
    }
}

/// Hash-consing term store.
///
/// Every distinct `TermData` is stored once; `make` returns the existing
/// handle when the same symbol is applied to the same arguments again.
///
/// # Thread Safety
/// Creation, lookup and rebuilding may be called concurrently from any
/// thread. Handles are plain indices and are `Send + Sync`.
pub struct TermPool {
    strings: StringInterner,
    shards: [RwLock<TermShard>; Term::NUM_SHARDS],
}

impl TermPool {
    pub fn new() -> Self {
        Self {
            strings: StringInterner::new(),
            shards: std::array::from_fn(|_| RwLock::new(TermShard::new())),
        }
    }

    #[inline]
    fn shard_for(data: &TermData) -> usize {
        let mut hasher = rustc_hash::FxHasher::default();
        data.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash_usize = hasher.finish() as usize;
        hash_usize % Term::NUM_SHARDS
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard_idx is bounded by NUM_SHARDS (16)"
    )]
    fn try_intern(&self, data: TermData) -> Result<Term, TermInternError> {
        let shard_idx = Self::shard_for(&data);
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(&data) {
                return Ok(Term::from_shard_local(shard_idx as u32, local));
            }
        }

        let mut guard = shard.write();

        // Another writer may have inserted the same term in the meantime.
        if let Some(&local) = guard.map.get(&data) {
            return Ok(Term::from_shard_local(shard_idx as u32, local));
        }

        let local = u32::try_from(guard.terms.len())
            .ok()
            .filter(|&local| local <= Term::MAX_LOCAL)
            .ok_or(TermInternError::ShardOverflow { shard_idx })?;

        guard.terms.push(data.clone());
        guard.map.insert(data, local);

        Ok(Term::from_shard_local(shard_idx as u32, local))
    }

    /// Create (or look up) the function symbol `name` of the given arity.
    pub fn try_function_symbol(&self, name: &str, arity: usize) -> Result<Symbol, TermInternError> {
        let arity_u32 = u32::try_from(arity).map_err(|_| TermInternError::ArityOverflow { arity })?;
        Ok(Symbol::new(self.strings.try_intern(name)?, arity_u32))
    }

    /// Create (or look up) the function symbol `name` of the given arity.
    ///
    /// # Panics
    /// Panics if the arity does not fit in 32 bits or the string interner overflows.
    pub fn function_symbol(&self, name: &str, arity: usize) -> Symbol {
        self.try_function_symbol(name, arity)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Apply `symbol` to `args`.
    ///
    /// Returns the existing handle if this application was created before.
    pub fn try_make(&self, symbol: Symbol, args: &[Term]) -> Result<Term, TermInternError> {
        if symbol.arity() != args.len() {
            return Err(TermInternError::ArityMismatch {
                symbol: self.name(symbol),
                expected: symbol.arity(),
                found: args.len(),
            });
        }
        self.try_intern(TermData::Appl {
            symbol,
            args: args.into(),
        })
    }

    /// Apply `symbol` to `args`.
    ///
    /// # Panics
    /// Panics on an arity mismatch or shard overflow. Use `try_make` for
    /// fallible construction.
    pub fn make(&self, symbol: Symbol, args: &[Term]) -> Term {
        self.try_make(symbol, args).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create an integer term.
    pub fn make_int(&self, value: u64) -> Term {
        self.try_intern(TermData::Int(value))
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a list term.
    pub fn make_list(&self, elements: &[Term]) -> Term {
        self.try_intern(TermData::List(elements.into()))
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Canonical identifier atom for `s`: a constant whose symbol name is `s`.
    pub fn identifier(&self, s: &str) -> Term {
        let symbol = self.function_symbol(s, 0);
        self.make(symbol, &[])
    }

    /// Look up the contents of a term.
    ///
    /// # Panics
    /// Panics if `term` was not created by this pool.
    pub fn lookup(&self, term: Term) -> TermData {
        let guard = self.shards[term.shard()].read();
        guard.terms[term.local()].clone()
    }

    /// Head symbol of an application, `None` for integers and lists.
    pub fn head(&self, term: Term) -> Option<Symbol> {
        let guard = self.shards[term.shard()].read();
        match &guard.terms[term.local()] {
            TermData::Appl { symbol, .. } => Some(*symbol),
            TermData::Int(_) | TermData::List(_) => None,
        }
    }

    /// Direct children in left-to-right order.
    pub fn children(&self, term: Term) -> Box<[Term]> {
        let guard = self.shards[term.shard()].read();
        guard.terms[term.local()].children().into()
    }

    /// The `index`-th child, if any.
    pub fn arg(&self, term: Term, index: usize) -> Option<Term> {
        let guard = self.shards[term.shard()].read();
        guard.terms[term.local()].children().get(index).copied()
    }

    /// Value of an integer term.
    pub fn int_value(&self, term: Term) -> Option<u64> {
        let guard = self.shards[term.shard()].read();
        match guard.terms[term.local()] {
            TermData::Int(value) => Some(value),
            TermData::Appl { .. } | TermData::List(_) => None,
        }
    }

    /// Name of a function symbol.
    pub fn name(&self, symbol: Symbol) -> &'static str {
        self.strings.lookup(symbol.name())
    }

    /// Replace the children of `term` by `args`.
    ///
    /// If `args` equals the current children the original handle is returned
    /// without touching the dedup table.
    pub fn rebuild(&self, term: Term, args: &[Term]) -> Result<Term, TermInternError> {
        match self.lookup(term) {
            TermData::Appl { args: old, .. } | TermData::List(old) if *old == *args => Ok(term),
            TermData::Appl { symbol, .. } => self.try_make(symbol, args),
            TermData::List(_) => self.try_intern(TermData::List(args.into())),
            TermData::Int(_) if args.is_empty() => Ok(term),
            TermData::Int(_) => Err(TermInternError::ArityMismatch {
                symbol: "<int>",
                expected: 0,
                found: args.len(),
            }),
        }
    }

    /// Number of distinct terms in the pool.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().terms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write_term(&self, term: Term, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lookup(term) {
            TermData::Int(value) => write!(f, "{value}"),
            TermData::Appl { symbol, args } => {
                f.write_str(self.name(symbol))?;
                if !args.is_empty() {
                    self.write_args(&args, f, '(', ')')?;
                }
                Ok(())
            }
            TermData::List(elements) => self.write_args(&elements, f, '[', ']'),
        }
    }

    fn write_args(
        &self,
        args: &[Term],
        f: &mut fmt::Formatter<'_>,
        open: char,
        close: char,
    ) -> fmt::Result {
        write!(f, "{open}")?;
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            self.write_term(*arg, f)?;
        }
        write!(f, "{close}")
    }
}

impl Default for TermPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TermPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermPool")
            .field("terms", &self.len())
            .field("strings", &self.strings.len())
            .finish()
    }
}

static POOL: LazyLock<TermPool> = LazyLock::new(TermPool::new);

/// The process-wide term pool.
///
/// Created on first use and never dropped.
pub fn pool() -> &'static TermPool {
    &POOL
}

// Convenience accessors on the process-wide pool.
impl Term {
    pub fn data(self) -> TermData {
        pool().lookup(self)
    }

    pub fn head(self) -> Option<Symbol> {
        pool().head(self)
    }

    pub fn children(self) -> Box<[Term]> {
        pool().children(self)
    }

    pub fn arg(self, index: usize) -> Option<Term> {
        pool().arg(self, index)
    }

    /// Whether this term is an application of a symbol called `name` with `arity` arguments.
    pub fn has_head(self, name: &str, arity: usize) -> bool {
        self.head()
            .is_some_and(|symbol| symbol.arity() == arity && pool().name(symbol) == name)
    }
}

/// ATerm textual notation: `f(a,b)`, `[a,b]`, `42`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pool().write_term(*self, f)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

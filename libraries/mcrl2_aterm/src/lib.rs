//! Maximally shared terms.
//!
//! This crate provides the term store the rest of the mCRL2 libraries are
//! built on:
//! - `Name`: interned strings used as function symbol names
//! - `Symbol`: a function symbol, i.e. a name together with an arity
//! - `Term`: a 32-bit handle to a hash-consed term
//! - `TermPool`: the sharded store that hands out `Term` handles
//!
//! # Maximal Sharing
//!
//! Two calls to [`TermPool::make`] with the same symbol and the same
//! arguments return the same handle. Structural equality of terms therefore
//! coincides with handle equality, which is O(1).
//!
//! # Lifetime
//!
//! Terms are never freed. The process-wide pool returned by [`pool`] lives
//! until the process exits, so a handle stays valid for as long as anybody
//! can hold it.

mod interner;
mod pool;
mod term;

pub use interner::{InternError, Name, StringInterner};
pub use pool::{pool, TermInternError, TermPool};
pub use term::{Symbol, Term, TermData};

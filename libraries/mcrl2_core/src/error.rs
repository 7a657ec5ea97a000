//! Errors raised by canonical constant construction and by traversals.

use mcrl2_aterm::{Term, TermInternError};

/// Boxed error produced by user-supplied constructors and update functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The constructor of a canonical constant failed.
    ///
    /// The slot stays uninitialised; the next observer retries.
    #[error("construction of canonical constant `{decl}` failed: {source}")]
    Construction {
        decl: &'static str,
        #[source]
        source: BoxError,
    },

    /// An update function failed on a position of `family`.
    #[error("update of {family} `{term}` failed: {source}")]
    Update {
        family: &'static str,
        term: Term,
        #[source]
        source: BoxError,
    },

    /// A traversal met a term that is not a known shape of `family`.
    ///
    /// This is a programming error: the term was put in a position its
    /// type does not allow.
    #[error("`{term}` is not a recognised {family}")]
    Shape { family: &'static str, term: Term },

    /// The term store refused to build a term.
    #[error(transparent)]
    Store(#[from] TermInternError),
}

impl Error {
    /// The term at which a traversal failed, if any.
    pub fn term(&self) -> Option<Term> {
        match self {
            Error::Update { term, .. } | Error::Shape { term, .. } => Some(*term),
            Error::Construction { .. } | Error::Store(_) => None,
        }
    }
}

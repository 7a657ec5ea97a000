//! Identifier atoms.

use crate::TermValue;
use mcrl2_aterm::{pool, Term, TermData};

crate::term_newtype! {
    /// An identifier: the atomic, string-like leaf of the term language.
    ///
    /// Represented as a constant whose symbol name is the identifier text, so
    /// two identifiers with the same text are the same term.
    pub struct IdentifierString;
}

impl IdentifierString {
    pub fn new(s: &str) -> Self {
        IdentifierString(pool().identifier(s))
    }

    /// Text of the identifier.
    pub fn as_str(self) -> &'static str {
        match pool().head(self.0) {
            Some(symbol) => pool().name(symbol),
            None => "",
        }
    }

    /// Checked conversion from a term.
    pub fn from_term(term: Term) -> Option<Self> {
        is_identifier_string(term).then(|| Self::from_term_unchecked(term))
    }
}

/// Whether `term` is an identifier atom.
pub fn is_identifier_string(term: Term) -> bool {
    matches!(pool().lookup(term), TermData::Appl { args, .. } if args.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_shared() {
        let a = IdentifierString::new("abc");
        let b = IdentifierString::new("abc");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "abc");
        assert_eq!(a.to_string(), "abc");
        assert_eq!(a.term(), pool().identifier("abc"));
    }

    #[test]
    fn recognises_identifier_terms() {
        let id = pool().identifier("x");
        let list = pool().make_list(&[id]);
        assert!(is_identifier_string(id));
        assert!(!is_identifier_string(list));
        assert!(!is_identifier_string(pool().make_int(1)));
        assert_eq!(IdentifierString::from_term(list), None);
        assert_eq!(IdentifierString::from_term(id).map(IdentifierString::as_str), Some("x"));
    }
}

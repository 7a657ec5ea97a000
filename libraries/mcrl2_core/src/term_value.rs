//! Typed views on terms.

use mcrl2_aterm::Term;
use std::fmt;
use std::hash::Hash;

/// A value that is a term of some family.
///
/// Implementors are immutable, maximally shared and compared by handle.
/// Traversals rebuild them functionally instead of mutating them; see
/// [`crate::builder::Apply`].
pub trait TermValue: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    fn term(self) -> Term;

    /// Wrap `term` without checking that it belongs to the family.
    fn from_term_unchecked(term: Term) -> Self;
}

impl TermValue for Term {
    #[inline]
    fn term(self) -> Term {
        self
    }

    #[inline]
    fn from_term_unchecked(term: Term) -> Self {
        term
    }
}

/// Declare a `Copy` newtype over `Term` that implements [`TermValue`].
///
/// ```text
/// term_newtype! {
///     /// A sort expression.
///     pub struct SortExpression;
/// }
/// ```
#[macro_export]
macro_rules! term_newtype {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name($crate::__private::Term);

        impl $crate::TermValue for $name {
            #[inline]
            fn term(self) -> $crate::__private::Term {
                self.0
            }

            #[inline]
            fn from_term_unchecked(term: $crate::__private::Term) -> Self {
                $name(term)
            }
        }

        impl ::std::convert::From<$name> for $crate::__private::Term {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

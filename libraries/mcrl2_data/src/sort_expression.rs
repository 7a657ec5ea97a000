//! Sort expressions.
//!
//! Three shapes are supported:
//! - basic sorts `SortId(name)`, e.g. `Bool` or a user-declared `S`
//! - function sorts `SortArrow([d1, ..., dn], c)` for `d1 # ... # dn -> c`
//! - container sorts `SortCons(kind, e)` for `List(e)`, `Set(e)` and `Bag(e)`

use crate::symbols;
use mcrl2_aterm::{pool, Term};
use mcrl2_core::{term_newtype, Error, IdentifierString, SingletonExpression, TermValue};

term_newtype! {
    /// A sort expression.
    pub struct SortExpression;
}

/// Family name used in errors about sort expressions.
pub(crate) const SORT_EXPRESSION: &str = "sort expression";

/// The kind of a container sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    List,
    Set,
    Bag,
}

impl ContainerKind {
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::List => "List",
            ContainerKind::Set => "Set",
            ContainerKind::Bag => "Bag",
        }
    }

    fn from_identifier(id: IdentifierString) -> Option<Self> {
        match id.as_str() {
            "List" => Some(ContainerKind::List),
            "Set" => Some(ContainerKind::Set),
            "Bag" => Some(ContainerKind::Bag),
            _ => None,
        }
    }
}

/// A sort expression taken apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortKind {
    Basic(IdentifierString),
    Function {
        domain: Vec<SortExpression>,
        codomain: SortExpression,
    },
    Container {
        kind: ContainerKind,
        element: SortExpression,
    },
}

pub fn basic_sort(name: IdentifierString) -> SortExpression {
    SortExpression(pool().make(symbols::SortId::instance(), &[name.term()]))
}

pub fn function_sort(domain: &[SortExpression], codomain: SortExpression) -> SortExpression {
    let domain: Vec<Term> = domain.iter().map(|s| s.term()).collect();
    let domain = pool().make_list(&domain);
    SortExpression(pool().make(symbols::SortArrow::instance(), &[domain, codomain.term()]))
}

pub fn container_sort(kind: ContainerKind, element: SortExpression) -> SortExpression {
    let kind = IdentifierString::new(kind.name());
    SortExpression(pool().make(symbols::SortCons::instance(), &[kind.term(), element.term()]))
}

pub fn is_basic_sort(term: Term) -> bool {
    symbols::has_head::<symbols::SortId>(term)
}

pub fn is_function_sort(term: Term) -> bool {
    symbols::has_head::<symbols::SortArrow>(term)
}

pub fn is_container_sort(term: Term) -> bool {
    symbols::has_head::<symbols::SortCons>(term)
}

pub fn is_sort_expression(term: Term) -> bool {
    is_basic_sort(term) || is_function_sort(term) || is_container_sort(term)
}

impl SortExpression {
    /// Checked conversion from a term.
    pub fn from_term(term: Term) -> Option<Self> {
        is_sort_expression(term).then_some(SortExpression(term))
    }

    /// Take the sort apart, or fail with a shape error.
    pub fn kind(self) -> Result<SortKind, Error> {
        let children = pool().children(self.0);
        if is_basic_sort(self.0) {
            if let Some(name) = IdentifierString::from_term(children[0]) {
                return Ok(SortKind::Basic(name));
            }
        } else if is_function_sort(self.0) {
            return Ok(SortKind::Function {
                domain: pool()
                    .children(children[0])
                    .iter()
                    .map(|&t| SortExpression(t))
                    .collect(),
                codomain: SortExpression(children[1]),
            });
        } else if is_container_sort(self.0) {
            let kind = IdentifierString::from_term(children[0]).and_then(ContainerKind::from_identifier);
            if let Some(kind) = kind {
                return Ok(SortKind::Container {
                    kind,
                    element: SortExpression(children[1]),
                });
            }
        }
        Err(Error::Shape {
            family: SORT_EXPRESSION,
            term: self.0,
        })
    }

    /// Name of a basic sort.
    pub fn name(self) -> Option<IdentifierString> {
        match self.kind() {
            Ok(SortKind::Basic(name)) => Some(name),
            _ => None,
        }
    }

    /// Target sort of a function sort; a non-function sort is its own target.
    pub fn target_sort(self) -> SortExpression {
        match self.kind() {
            Ok(SortKind::Function { codomain, .. }) => codomain,
            _ => self,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sort(name: &str) -> SortExpression {
        basic_sort(IdentifierString::new(name))
    }

    #[test]
    fn basic_sorts_are_shared() {
        assert_eq!(sort("S"), sort("S"));
        assert_ne!(sort("S"), sort("T"));
        assert_eq!(sort("S").name().map(IdentifierString::as_str), Some("S"));
        assert_eq!(sort("S").to_string(), "SortId(S)");
    }

    #[test]
    fn function_sort_parts() {
        let f = function_sort(&[sort("A"), sort("B")], sort("C"));
        assert!(is_function_sort(f.term()));
        assert!(!is_basic_sort(f.term()));
        assert_eq!(
            f.kind().unwrap(),
            SortKind::Function {
                domain: vec![sort("A"), sort("B")],
                codomain: sort("C"),
            }
        );
        assert_eq!(f.target_sort(), sort("C"));
        assert_eq!(sort("C").target_sort(), sort("C"));
    }

    #[test]
    fn container_sort_parts() {
        let l = container_sort(ContainerKind::List, sort("A"));
        assert!(is_container_sort(l.term()));
        assert_eq!(
            l.kind().unwrap(),
            SortKind::Container {
                kind: ContainerKind::List,
                element: sort("A"),
            }
        );
        assert_ne!(l, container_sort(ContainerKind::Set, sort("A")));
    }

    #[test]
    fn non_sorts_are_rejected() {
        let id = pool().identifier("A");
        assert!(!is_sort_expression(id));
        assert_eq!(SortExpression::from_term(id), None);

        let bogus = SortExpression::from_term_unchecked(id);
        assert!(matches!(bogus.kind(), Err(Error::Shape { family: "sort expression", .. })));
    }
}

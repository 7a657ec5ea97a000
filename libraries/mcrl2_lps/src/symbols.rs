//! Head symbols of linear process terms.

use mcrl2_aterm::{pool, Symbol, Term};
use mcrl2_core::{singleton_expression, SingletonExpression};

singleton_expression! {
    pub(crate) struct ActId: Symbol = pool().function_symbol("ActId", 2);
}

singleton_expression! {
    pub(crate) struct Action: Symbol = pool().function_symbol("Action", 2);
}

singleton_expression! {
    pub(crate) struct LinearProcessInit: Symbol = pool().function_symbol("LinearProcessInit", 1);
}

pub(crate) fn has_head<D>(term: Term) -> bool
where
    D: SingletonExpression<Expression = Symbol>,
{
    pool().head(term) == Some(D::instance())
}

pub(crate) fn to_list<T: mcrl2_core::TermValue>(values: &[T]) -> Term {
    let terms: Vec<Term> = values.iter().map(|v| v.term()).collect();
    pool().make_list(&terms)
}

pub(crate) fn from_list<T: mcrl2_core::TermValue>(list: Term) -> Vec<T> {
    pool().children(list).iter().map(|&t| T::from_term_unchecked(t)).collect()
}

//! Head symbols of the data language.
//!
//! Every head is a canonical constant, so recognisers compare symbols by
//! value instead of looking at names.

use mcrl2_aterm::{pool, Name, Symbol, Term};
use mcrl2_core::{singleton_expression, SingletonExpression};

singleton_expression! {
    pub(crate) struct SortId: Symbol = pool().function_symbol("SortId", 1);
}

singleton_expression! {
    pub(crate) struct SortArrow: Symbol = pool().function_symbol("SortArrow", 2);
}

singleton_expression! {
    pub(crate) struct SortCons: Symbol = pool().function_symbol("SortCons", 2);
}

singleton_expression! {
    pub(crate) struct DataVarId: Symbol = pool().function_symbol("DataVarId", 2);
}

singleton_expression! {
    pub(crate) struct OpId: Symbol = pool().function_symbol("OpId", 2);
}

singleton_expression! {
    /// Applications have one symbol per arity; they share this name.
    pub(crate) struct DataAppl: Name = pool().function_symbol("DataAppl", 0).name();
}

singleton_expression! {
    pub(crate) struct Binder: Symbol = pool().function_symbol("Binder", 3);
}

singleton_expression! {
    pub(crate) struct Whr: Symbol = pool().function_symbol("Whr", 2);
}

singleton_expression! {
    pub(crate) struct DataVarIdInit: Symbol = pool().function_symbol("DataVarIdInit", 2);
}

singleton_expression! {
    pub(crate) struct DataEqn: Symbol = pool().function_symbol("DataEqn", 4);
}

/// Whether the head symbol of `term` is the canonical symbol declared by `D`.
pub(crate) fn has_head<D>(term: Term) -> bool
where
    D: SingletonExpression<Expression = Symbol>,
{
    pool().head(term) == Some(D::instance())
}

/// Application symbol for a head applied to `arity` arguments.
pub(crate) fn data_appl(arity: usize) -> Symbol {
    pool().function_symbol("DataAppl", arity + 1)
}

pub(crate) fn is_data_appl(term: Term) -> bool {
    pool()
        .head(term)
        .is_some_and(|symbol| symbol.name() == DataAppl::instance() && symbol.arity() >= 1)
}

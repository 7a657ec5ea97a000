//! Natural numbers: `@c0` or `@cNat(p)` for a positive `p`.

use crate::data_expression::{application, function_symbol, is_application_of, DataExpression, FunctionSymbol};
use crate::sort_expression::{basic_sort, function_sort, SortExpression};
use crate::sort_pos;
use mcrl2_core::{singleton_expression, singleton_identifier, SingletonExpression};

singleton_identifier! {
    pub struct NatName = "Nat";
}

singleton_expression! {
    pub struct NatSort: SortExpression = basic_sort(NatName::instance());
}

/// The sort `Nat`.
pub fn nat() -> SortExpression {
    NatSort::instance()
}

singleton_identifier! {
    pub struct C0Name = "@c0";
}

singleton_expression! {
    pub struct C0: FunctionSymbol = function_symbol(C0Name::instance(), nat());
}

singleton_identifier! {
    pub struct CNatName = "@cNat";
}

singleton_expression! {
    pub struct CNat: FunctionSymbol = function_symbol(
        CNatName::instance(),
        function_sort(&[sort_pos::pos()], nat()),
    );
}

pub fn c0() -> DataExpression {
    C0::instance().into()
}

pub fn cnat(p: DataExpression) -> DataExpression {
    application(CNat::instance(), &[p])
}

pub fn is_c0_function_symbol(e: DataExpression) -> bool {
    e == c0()
}

pub fn is_cnat_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(CNat::instance())
}

pub fn is_cnat_application(e: DataExpression) -> bool {
    is_application_of(e, CNat::instance())
}

//! Positive numbers in binary constructor form.
//!
//! `1` is `@c1` and `2p + b` is `@cDub(b, p)`, so `6` is
//! `@cDub(false, @cDub(true, @c1))`.

use crate::data_expression::{application, function_symbol, is_application_of, DataExpression, FunctionSymbol};
use crate::sort_bool;
use crate::sort_expression::{basic_sort, function_sort, SortExpression};
use mcrl2_core::{singleton_expression, singleton_identifier, SingletonExpression};

singleton_identifier! {
    pub struct PosName = "Pos";
}

singleton_expression! {
    pub struct PosSort: SortExpression = basic_sort(PosName::instance());
}

/// The sort `Pos`.
pub fn pos() -> SortExpression {
    PosSort::instance()
}

singleton_identifier! {
    pub struct C1Name = "@c1";
}

singleton_expression! {
    pub struct C1: FunctionSymbol = function_symbol(C1Name::instance(), pos());
}

singleton_identifier! {
    pub struct CDubName = "@cDub";
}

singleton_expression! {
    pub struct CDub: FunctionSymbol = function_symbol(
        CDubName::instance(),
        function_sort(&[sort_bool::bool_(), pos()], pos()),
    );
}

pub fn c1() -> DataExpression {
    C1::instance().into()
}

/// `2 * p + b`.
pub fn cdub(b: DataExpression, p: DataExpression) -> DataExpression {
    application(CDub::instance(), &[b, p])
}

pub fn is_c1_function_symbol(e: DataExpression) -> bool {
    e == c1()
}

pub fn is_cdub_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(CDub::instance())
}

pub fn is_cdub_application(e: DataExpression) -> bool {
    is_application_of(e, CDub::instance())
}

//! The booleans.

use crate::data_expression::{application, function_symbol, is_application_of, DataExpression, FunctionSymbol};
use crate::sort_expression::{basic_sort, function_sort, SortExpression};
use mcrl2_core::{singleton_expression, singleton_identifier, SingletonExpression};

singleton_identifier! {
    pub struct BoolName = "Bool";
}

singleton_expression! {
    pub struct BoolSort: SortExpression = basic_sort(BoolName::instance());
}

/// The sort `Bool`.
pub fn bool_() -> SortExpression {
    BoolSort::instance()
}

fn unary() -> SortExpression {
    function_sort(&[bool_()], bool_())
}

fn binary() -> SortExpression {
    function_sort(&[bool_(), bool_()], bool_())
}

singleton_identifier! {
    pub struct TrueName = "true";
}

singleton_expression! {
    pub struct True: FunctionSymbol = function_symbol(TrueName::instance(), bool_());
}

singleton_identifier! {
    pub struct FalseName = "false";
}

singleton_expression! {
    pub struct False: FunctionSymbol = function_symbol(FalseName::instance(), bool_());
}

singleton_identifier! {
    pub struct NotName = "!";
}

singleton_expression! {
    pub struct Not: FunctionSymbol = function_symbol(NotName::instance(), unary());
}

singleton_identifier! {
    pub struct AndName = "&&";
}

singleton_expression! {
    pub struct And: FunctionSymbol = function_symbol(AndName::instance(), binary());
}

singleton_identifier! {
    pub struct OrName = "||";
}

singleton_expression! {
    pub struct Or: FunctionSymbol = function_symbol(OrName::instance(), binary());
}

singleton_identifier! {
    pub struct ImpliesName = "=>";
}

singleton_expression! {
    pub struct Implies: FunctionSymbol = function_symbol(ImpliesName::instance(), binary());
}

pub fn true_() -> DataExpression {
    True::instance().into()
}

pub fn false_() -> DataExpression {
    False::instance().into()
}

/// `true` or `false`.
pub fn boolean(value: bool) -> DataExpression {
    if value {
        true_()
    } else {
        false_()
    }
}

pub fn not(e: DataExpression) -> DataExpression {
    application(Not::instance(), &[e])
}

pub fn and(a: DataExpression, b: DataExpression) -> DataExpression {
    application(And::instance(), &[a, b])
}

pub fn or(a: DataExpression, b: DataExpression) -> DataExpression {
    application(Or::instance(), &[a, b])
}

pub fn implies(a: DataExpression, b: DataExpression) -> DataExpression {
    application(Implies::instance(), &[a, b])
}

pub fn is_true_function_symbol(e: DataExpression) -> bool {
    e == true_()
}

pub fn is_false_function_symbol(e: DataExpression) -> bool {
    e == false_()
}

pub fn is_not_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(Not::instance())
}

pub fn is_not_application(e: DataExpression) -> bool {
    is_application_of(e, Not::instance())
}

pub fn is_and_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(And::instance())
}

pub fn is_and_application(e: DataExpression) -> bool {
    is_application_of(e, And::instance())
}

pub fn is_or_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(Or::instance())
}

pub fn is_or_application(e: DataExpression) -> bool {
    is_application_of(e, Or::instance())
}

pub fn is_implies_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(Implies::instance())
}

pub fn is_implies_application(e: DataExpression) -> bool {
    is_application_of(e, Implies::instance())
}

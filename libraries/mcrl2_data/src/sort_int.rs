//! Integers and their arithmetic.
//!
//! `@cInt(n)` embeds a natural number and `@cNeg(p)` is `-p`. Binary minus
//! and unary negation are both written `-`; they are told apart by sort.

use crate::data_expression::{application, function_symbol, is_application_of, DataExpression, FunctionSymbol};
use crate::sort_expression::{basic_sort, function_sort, SortExpression};
use crate::{sort_nat, sort_pos};
use mcrl2_core::{singleton_expression, singleton_identifier, SingletonExpression};

singleton_identifier! {
    pub struct IntName = "Int";
}

singleton_expression! {
    pub struct IntSort: SortExpression = basic_sort(IntName::instance());
}

/// The sort `Int`.
pub fn int() -> SortExpression {
    IntSort::instance()
}

fn int_int_int() -> SortExpression {
    function_sort(&[int(), int()], int())
}

singleton_identifier! {
    pub struct CIntName = "@cInt";
}

singleton_expression! {
    pub struct CInt: FunctionSymbol = function_symbol(
        CIntName::instance(),
        function_sort(&[sort_nat::nat()], int()),
    );
}

singleton_identifier! {
    pub struct CNegName = "@cNeg";
}

singleton_expression! {
    pub struct CNeg: FunctionSymbol = function_symbol(
        CNegName::instance(),
        function_sort(&[sort_pos::pos()], int()),
    );
}

singleton_identifier! {
    pub struct MinusName = "-";
}

singleton_expression! {
    /// Binary minus on integers.
    pub struct Minus: FunctionSymbol = function_symbol(MinusName::instance(), int_int_int());
}

singleton_identifier! {
    pub struct NegateName = "-";
}

singleton_expression! {
    /// Unary negation on integers.
    pub struct Negate: FunctionSymbol = function_symbol(
        NegateName::instance(),
        function_sort(&[int()], int()),
    );
}

singleton_identifier! {
    pub struct PlusName = "+";
}

singleton_expression! {
    pub struct Plus: FunctionSymbol = function_symbol(PlusName::instance(), int_int_int());
}

singleton_identifier! {
    pub struct TimesName = "*";
}

singleton_expression! {
    pub struct Times: FunctionSymbol = function_symbol(TimesName::instance(), int_int_int());
}

pub fn cint(n: DataExpression) -> DataExpression {
    application(CInt::instance(), &[n])
}

pub fn cneg(p: DataExpression) -> DataExpression {
    application(CNeg::instance(), &[p])
}

pub fn minus(a: DataExpression, b: DataExpression) -> DataExpression {
    application(Minus::instance(), &[a, b])
}

pub fn negate(a: DataExpression) -> DataExpression {
    application(Negate::instance(), &[a])
}

pub fn plus(a: DataExpression, b: DataExpression) -> DataExpression {
    application(Plus::instance(), &[a, b])
}

pub fn times(a: DataExpression, b: DataExpression) -> DataExpression {
    application(Times::instance(), &[a, b])
}

pub fn is_cint_application(e: DataExpression) -> bool {
    is_application_of(e, CInt::instance())
}

pub fn is_cneg_application(e: DataExpression) -> bool {
    is_application_of(e, CNeg::instance())
}

pub fn is_minus_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(Minus::instance())
}

pub fn is_minus_application(e: DataExpression) -> bool {
    is_application_of(e, Minus::instance())
}

pub fn is_negate_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(Negate::instance())
}

pub fn is_negate_application(e: DataExpression) -> bool {
    is_application_of(e, Negate::instance())
}

pub fn is_plus_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(Plus::instance())
}

pub fn is_plus_application(e: DataExpression) -> bool {
    is_application_of(e, Plus::instance())
}

pub fn is_times_function_symbol(e: DataExpression) -> bool {
    e == DataExpression::from(Times::instance())
}

pub fn is_times_application(e: DataExpression) -> bool {
    is_application_of(e, Times::instance())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use super::*;
    use crate::data_expression::variable;
    use crate::number;
    use mcrl2_core::IdentifierString;

    fn i() -> DataExpression {
        variable(IdentifierString::new("i"), int()).into()
    }

    #[test]
    fn minus_application_is_not_negate() {
        let e = minus(i(), number::int_("5"));
        assert!(is_minus_application(e));
        assert!(!is_negate_application(e));
        assert!(!is_plus_application(e));
    }

    #[test]
    fn negate_application_is_not_minus() {
        let e = negate(i());
        assert!(is_negate_application(e));
        assert!(!is_minus_application(e));
    }

    #[test]
    fn minus_and_negate_share_a_name() {
        assert_eq!(MinusName::instance(), NegateName::instance());
        assert_ne!(Minus::instance(), Negate::instance());
        assert!(is_minus_function_symbol(DataExpression::from(Minus::instance())));
        assert!(!is_negate_function_symbol(DataExpression::from(Minus::instance())));
    }

    #[test]
    fn applications_have_target_sort() {
        assert_eq!(minus(i(), i()).sort().unwrap(), int());
        assert_eq!(negate(i()).sort().unwrap(), int());
    }
}

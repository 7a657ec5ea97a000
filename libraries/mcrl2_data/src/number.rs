//! Number literals in user notation.
//!
//! A literal is an operator whose name is its decimal text, e.g.
//! `OpId(5, SortId(Pos))`. They are turned into constructor form by
//! [`crate::translate_user_notation`].

use crate::data_expression::{function_symbol, is_function_symbol, DataExpression, FunctionSymbol};
use crate::sort_expression::SortExpression;
use crate::{sort_int, sort_nat, sort_pos};
use mcrl2_core::{IdentifierString, TermValue};

/// The literal `text` of sort `sort`.
pub fn number(sort: SortExpression, text: &str) -> DataExpression {
    function_symbol(IdentifierString::new(text), sort).into()
}

pub fn pos(text: &str) -> DataExpression {
    number(sort_pos::pos(), text)
}

pub fn nat(text: &str) -> DataExpression {
    number(sort_nat::nat(), text)
}

pub fn int_(text: &str) -> DataExpression {
    number(sort_int::int(), text)
}

/// Whether `text` is an optionally negated, non-empty string of decimal digits.
pub fn is_numeric_string(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `e` is a number literal of sort `Pos`, `Nat` or `Int`.
pub fn is_number(e: DataExpression) -> bool {
    if !is_function_symbol(e.term()) {
        return false;
    }
    let f = FunctionSymbol::from_term_unchecked(e.term());
    let sort = f.sort();
    is_numeric_string(f.name().as_str())
        && (sort == sort_pos::pos() || sort == sort_nat::nat() || sort == sort_int::int())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_are_numbers() {
        assert!(is_number(pos("5")));
        assert!(is_number(nat("0")));
        assert!(is_number(int_("-12")));
        assert!(!is_number(sort_pos::c1()));
        assert!(!is_number(number(sort_int::int(), "-")));
    }

    #[test]
    fn numeric_strings() {
        assert!(is_numeric_string("0"));
        assert!(is_numeric_string("-007"));
        assert!(!is_numeric_string(""));
        assert!(!is_numeric_string("-"));
        assert!(!is_numeric_string("1e3"));
    }
}

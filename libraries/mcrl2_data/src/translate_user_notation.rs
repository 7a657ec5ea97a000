//! Translation of user notation into internal constructor form.
//!
//! Number literals are written in decimal by users and stored in binary
//! constructor form internally:
//!
//! | Literal     | Constructor form                 |
//! |-------------|----------------------------------|
//! | `1: Pos`    | `@c1`                            |
//! | `6: Pos`    | `@cDub(false, @cDub(true, @c1))` |
//! | `0: Nat`    | `@c0`                            |
//! | `6: Nat`    | `@cNat(6: Pos)`                  |
//! | `6: Int`    | `@cInt(6: Nat)`                  |
//! | `-6: Int`   | `@cNeg(6: Pos)`                  |

use crate::data_expression::{DataExpression, FunctionSymbol};
use crate::families::DataExpressions;
use crate::number::is_number;
use crate::{sort_bool, sort_int, sort_nat, sort_pos};
use mcrl2_core::{make_update_apply_builder, Apply, Error, TermValue, Update};

/// A literal that has no value in its sort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNotationError {
    #[error("`{text}` is not a positive number")]
    NotPositive { text: String },
    #[error("`{text}` is not a natural number")]
    Negative { text: String },
}

/// Replace every number literal in `x` by its constructor form.
#[tracing::instrument(level = "debug", skip_all)]
pub fn translate_user_notation<T: Apply<DataExpressions>>(x: T) -> Result<T, Error> {
    make_update_apply_builder::<DataExpressions, _>(translate_expression).apply(x)
}

/// Replace every number literal in `x` by its constructor form, in place.
#[tracing::instrument(level = "debug", skip_all)]
pub fn translate_user_notation_in_place<T: Update<DataExpressions>>(x: &mut T) -> Result<(), Error> {
    make_update_apply_builder::<DataExpressions, _>(translate_expression).update(x)
}

/// Translate one position. Everything but a number literal is returned as is.
pub fn translate_expression(e: DataExpression) -> Result<DataExpression, UserNotationError> {
    if !is_number(e) {
        return Ok(e);
    }
    let f = FunctionSymbol::from_term_unchecked(e.term());
    let text = f.name().as_str();
    let sort = f.sort();
    if sort == sort_pos::pos() {
        positive(text)
    } else if sort == sort_nat::nat() {
        natural(text)
    } else {
        integer(text)
    }
}

fn positive(text: &str) -> Result<DataExpression, UserNotationError> {
    let bits = if text.starts_with('-') {
        Vec::new()
    } else {
        decimal_to_binary(text)
    };
    match bits.split_first() {
        Some((_, rest)) => Ok(pos_from_bits(rest)),
        None => Err(UserNotationError::NotPositive { text: text.to_owned() }),
    }
}

fn natural(text: &str) -> Result<DataExpression, UserNotationError> {
    if text.starts_with('-') {
        return Err(UserNotationError::Negative { text: text.to_owned() });
    }
    Ok(nat_from_bits(&decimal_to_binary(text)))
}

fn integer(text: &str) -> Result<DataExpression, UserNotationError> {
    match text.strip_prefix('-') {
        Some(digits) => match decimal_to_binary(digits).split_first() {
            Some((_, rest)) => Ok(sort_int::cneg(pos_from_bits(rest))),
            None => Ok(sort_int::cint(sort_nat::c0())),
        },
        None => Ok(sort_int::cint(nat_from_bits(&decimal_to_binary(text)))),
    }
}

/// `bits` are the binary digits after the leading one, most significant first.
fn pos_from_bits(bits: &[bool]) -> DataExpression {
    bits.iter().fold(sort_pos::c1(), |p, &b| sort_pos::cdub(sort_bool::boolean(b), p))
}

fn nat_from_bits(bits: &[bool]) -> DataExpression {
    match bits.split_first() {
        Some((_, rest)) => sort_nat::cnat(pos_from_bits(rest)),
        None => sort_nat::c0(),
    }
}

/// Binary digits of a decimal string, most significant first, without
/// leading zeros. Zero has no digits.
///
/// Works on the digit string, so literals of any length are accepted.
fn decimal_to_binary(text: &str) -> Vec<bool> {
    let mut digits: Vec<u8> = text
        .bytes()
        .map(|b| b - b'0')
        .skip_while(|&d| d == 0)
        .collect();
    let mut bits = Vec::new();
    while !digits.is_empty() {
        let mut remainder = 0;
        for d in &mut digits {
            let current = remainder * 10 + *d;
            *d = current / 2;
            remainder = current % 2;
        }
        bits.push(remainder == 1);
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);
    }
    bits.reverse();
    bits
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

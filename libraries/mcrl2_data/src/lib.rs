//! Data expressions, sort expressions and the standard data types of mCRL2.
//!
//! All values here are [`mcrl2_aterm::Term`]s behind typed newtypes. Head
//! symbols, standard sorts and standard operators are canonical constants
//! (see [`mcrl2_core::construction`]), so recognisers such as
//! [`sort_int::is_minus_application`] are handle comparisons.
//!
//! The [`DataExpressions`] and [`SortExpressions`] families lift update
//! functions through every data-level term; [`translate_user_notation`] and
//! [`normalize_sorts`] are built on them.

mod data_expression;
mod data_specification;
mod families;
mod normalize_sorts;
pub mod number;
mod sort_expression;
mod symbols;
mod translate_user_notation;

pub mod sort_bool;
pub mod sort_int;
pub mod sort_nat;
pub mod sort_pos;

pub use data_expression::{
    abstraction, application, assignment, function_symbol, is_abstraction, is_application,
    is_assignment, is_data_expression, is_function_symbol, is_variable, is_where_clause, variable,
    where_clause, Assignment, BinderKind, DataExpression, DataExpressionKind, FunctionSymbol,
    Variable,
};
pub use data_specification::{
    data_equation, is_data_equation, unconditional_equation, DataEquation, DataSpecification,
    SortAlias, SortAliasMap,
};
pub use families::{DataExpressions, SortExpressions};
pub use normalize_sorts::{normalize_sorts, normalize_sorts_in_place, NormalizeSortsError};
pub use sort_expression::{
    basic_sort, container_sort, function_sort, is_basic_sort, is_container_sort, is_function_sort,
    is_sort_expression, ContainerKind, SortExpression, SortKind,
};
pub use translate_user_notation::{
    translate_expression, translate_user_notation, translate_user_notation_in_place,
    UserNotationError,
};

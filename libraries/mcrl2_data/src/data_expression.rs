//! Data expressions.
//!
//! | Shape        | Term                                  |
//! |--------------|---------------------------------------|
//! | variable     | `DataVarId(name, sort)`               |
//! | operator     | `OpId(name, sort)`                    |
//! | application  | `DataAppl(head, a1, ..., an)`, n >= 1 |
//! | abstraction  | `Binder(kind, [v1, ..., vn], body)`   |
//! | where clause | `Whr(body, [x1 = e1, ..., xn = en])`  |
//!
//! Assignments `DataVarIdInit(x, e)` only occur inside where clauses and
//! process updates; they are not data expressions themselves.

use crate::sort_bool;
use crate::sort_expression::{function_sort, SortExpression};
use crate::symbols;
use mcrl2_aterm::{pool, Term};
use mcrl2_core::{term_newtype, Error, IdentifierString, SingletonExpression, TermValue};

term_newtype! {
    /// A data expression.
    pub struct DataExpression;
}

term_newtype! {
    /// A data variable `DataVarId(name, sort)`.
    pub struct Variable;
}

term_newtype! {
    /// An operator `OpId(name, sort)`. Number literals in user notation
    /// are operators whose name is the decimal text.
    pub struct FunctionSymbol;
}

term_newtype! {
    /// `x = e` as it appears in where clauses and process updates.
    pub struct Assignment;
}

/// Family name used in errors about data expressions.
pub(crate) const DATA_EXPRESSION: &str = "data expression";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinderKind {
    Lambda,
    Forall,
    Exists,
}

impl BinderKind {
    pub fn name(self) -> &'static str {
        match self {
            BinderKind::Lambda => "lambda",
            BinderKind::Forall => "forall",
            BinderKind::Exists => "exists",
        }
    }

    fn from_identifier(id: IdentifierString) -> Option<Self> {
        match id.as_str() {
            "lambda" => Some(BinderKind::Lambda),
            "forall" => Some(BinderKind::Forall),
            "exists" => Some(BinderKind::Exists),
            _ => None,
        }
    }
}

/// A data expression taken apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataExpressionKind {
    Variable(Variable),
    FunctionSymbol(FunctionSymbol),
    Application {
        head: DataExpression,
        arguments: Vec<DataExpression>,
    },
    Abstraction {
        binder: BinderKind,
        variables: Vec<Variable>,
        body: DataExpression,
    },
    Where {
        body: DataExpression,
        assignments: Vec<Assignment>,
    },
}

pub fn variable(name: IdentifierString, sort: SortExpression) -> Variable {
    Variable(pool().make(symbols::DataVarId::instance(), &[name.term(), sort.term()]))
}

pub fn function_symbol(name: IdentifierString, sort: SortExpression) -> FunctionSymbol {
    FunctionSymbol(pool().make(symbols::OpId::instance(), &[name.term(), sort.term()]))
}

/// `head(arguments)`. Without arguments this is `head` itself.
pub fn application(head: impl Into<DataExpression>, arguments: &[DataExpression]) -> DataExpression {
    let head = head.into();
    if arguments.is_empty() {
        return head;
    }
    let mut args = Vec::with_capacity(arguments.len() + 1);
    args.push(head.0);
    args.extend(arguments.iter().map(|a| a.0));
    DataExpression(pool().make(symbols::data_appl(arguments.len()), &args))
}

pub fn abstraction(binder: BinderKind, variables: &[Variable], body: DataExpression) -> DataExpression {
    let kind = IdentifierString::new(binder.name());
    let variables = terms_to_list(variables);
    DataExpression(pool().make(symbols::Binder::instance(), &[kind.term(), variables, body.0]))
}

pub fn where_clause(body: DataExpression, assignments: &[Assignment]) -> DataExpression {
    let assignments = terms_to_list(assignments);
    DataExpression(pool().make(symbols::Whr::instance(), &[body.0, assignments]))
}

pub fn assignment(lhs: Variable, rhs: DataExpression) -> Assignment {
    Assignment(pool().make(symbols::DataVarIdInit::instance(), &[lhs.0, rhs.0]))
}

pub(crate) fn terms_to_list<T: TermValue>(values: &[T]) -> Term {
    let terms: Vec<Term> = values.iter().map(|v| v.term()).collect();
    pool().make_list(&terms)
}

pub(crate) fn list_to_values<T: TermValue>(list: Term) -> Vec<T> {
    pool().children(list).iter().map(|&t| T::from_term_unchecked(t)).collect()
}

pub fn is_variable(term: Term) -> bool {
    symbols::has_head::<symbols::DataVarId>(term)
}

pub fn is_function_symbol(term: Term) -> bool {
    symbols::has_head::<symbols::OpId>(term)
}

pub fn is_application(term: Term) -> bool {
    symbols::is_data_appl(term)
}

pub fn is_abstraction(term: Term) -> bool {
    symbols::has_head::<symbols::Binder>(term)
}

pub fn is_where_clause(term: Term) -> bool {
    symbols::has_head::<symbols::Whr>(term)
}

pub fn is_assignment(term: Term) -> bool {
    symbols::has_head::<symbols::DataVarIdInit>(term)
}

/// Whether `e` is an application whose head is `f`.
pub(crate) fn is_application_of(e: DataExpression, f: FunctionSymbol) -> bool {
    is_application(e.0) && pool().arg(e.0, 0) == Some(f.0)
}

pub fn is_data_expression(term: Term) -> bool {
    is_variable(term)
        || is_function_symbol(term)
        || is_application(term)
        || is_abstraction(term)
        || is_where_clause(term)
}

impl DataExpression {
    /// Checked conversion from a term.
    pub fn from_term(term: Term) -> Option<Self> {
        is_data_expression(term).then_some(DataExpression(term))
    }

    /// Take the expression apart, or fail with a shape error.
    pub fn kind(self) -> Result<DataExpressionKind, Error> {
        let term = self.0;
        if is_variable(term) {
            return Ok(DataExpressionKind::Variable(Variable(term)));
        }
        if is_function_symbol(term) {
            return Ok(DataExpressionKind::FunctionSymbol(FunctionSymbol(term)));
        }
        let children = pool().children(term);
        if is_application(term) {
            return Ok(DataExpressionKind::Application {
                head: DataExpression(children[0]),
                arguments: children[1..].iter().map(|&t| DataExpression(t)).collect(),
            });
        }
        if is_abstraction(term) {
            let binder = IdentifierString::from_term(children[0]).and_then(BinderKind::from_identifier);
            if let Some(binder) = binder {
                return Ok(DataExpressionKind::Abstraction {
                    binder,
                    variables: list_to_values(children[1]),
                    body: DataExpression(children[2]),
                });
            }
        } else if is_where_clause(term) {
            return Ok(DataExpressionKind::Where {
                body: DataExpression(children[0]),
                assignments: list_to_values(children[1]),
            });
        }
        Err(self.shape_error())
    }

    /// The sort of this expression.
    ///
    /// Applications take the target sort of their head; quantifiers are
    /// boolean; a lambda has the function sort from its variables to its body.
    pub fn sort(self) -> Result<SortExpression, Error> {
        match self.kind()? {
            DataExpressionKind::Variable(v) => Ok(v.sort()),
            DataExpressionKind::FunctionSymbol(f) => Ok(f.sort()),
            DataExpressionKind::Application { head, .. } => Ok(head.sort()?.target_sort()),
            DataExpressionKind::Abstraction {
                binder: BinderKind::Lambda,
                variables,
                body,
            } => {
                let domain: Vec<SortExpression> = variables.iter().map(|v| v.sort()).collect();
                Ok(function_sort(&domain, body.sort()?))
            }
            DataExpressionKind::Abstraction { .. } => Ok(sort_bool::bool_()),
            DataExpressionKind::Where { body, .. } => body.sort(),
        }
    }

    pub(crate) fn shape_error(self) -> Error {
        Error::Shape {
            family: DATA_EXPRESSION,
            term: self.0,
        }
    }
}

impl Variable {
    pub fn from_term(term: Term) -> Option<Self> {
        is_variable(term).then_some(Variable(term))
    }

    pub fn name(self) -> IdentifierString {
        IdentifierString::from_term_unchecked(pool().children(self.0)[0])
    }

    pub fn sort(self) -> SortExpression {
        SortExpression::from_term_unchecked(pool().children(self.0)[1])
    }
}

impl FunctionSymbol {
    pub fn from_term(term: Term) -> Option<Self> {
        is_function_symbol(term).then_some(FunctionSymbol(term))
    }

    pub fn name(self) -> IdentifierString {
        IdentifierString::from_term_unchecked(pool().children(self.0)[0])
    }

    pub fn sort(self) -> SortExpression {
        SortExpression::from_term_unchecked(pool().children(self.0)[1])
    }
}

impl Assignment {
    pub fn from_term(term: Term) -> Option<Self> {
        is_assignment(term).then_some(Assignment(term))
    }

    pub fn lhs(self) -> Variable {
        Variable(pool().children(self.0)[0])
    }

    pub fn rhs(self) -> DataExpression {
        DataExpression(pool().children(self.0)[1])
    }
}

impl From<Variable> for DataExpression {
    fn from(v: Variable) -> Self {
        DataExpression(v.0)
    }
}

impl From<FunctionSymbol> for DataExpression {
    fn from(f: FunctionSymbol) -> Self {
        DataExpression(f.0)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

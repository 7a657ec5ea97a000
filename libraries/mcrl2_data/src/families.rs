//! Traversal of data-level terms for the data and sort expression families.
//!
//! Binding occurrences (variables of abstractions and equations, left-hand
//! sides of assignments) are not data expression positions. They do carry
//! sorts, so sort traversals do descend into them.

use crate::data_expression::{
    is_abstraction, is_application, is_assignment, is_function_symbol, is_variable, is_where_clause,
    Assignment, DataExpression, FunctionSymbol, Variable, DATA_EXPRESSION,
};
use crate::data_specification::{is_data_equation, DataEquation, DataSpecification};
use crate::sort_expression::{
    is_basic_sort, is_container_sort, is_function_sort, SortExpression, SORT_EXPRESSION,
};
use mcrl2_aterm::{pool, Term};
use mcrl2_core::builder::{apply_list, apply_terms};
use mcrl2_core::{Apply, Builder, Error, Family, TermValue, Update};

/// Positions holding a [`DataExpression`].
#[derive(Copy, Clone, Debug)]
pub struct DataExpressions;

impl Family for DataExpressions {
    type Node = DataExpression;
    const NAME: &'static str = DATA_EXPRESSION;
}

/// Positions holding a [`SortExpression`].
#[derive(Copy, Clone, Debug)]
pub struct SortExpressions;

impl Family for SortExpressions {
    type Node = SortExpression;
    const NAME: &'static str = SORT_EXPRESSION;
}

fn rebuild<T: TermValue>(term: Term, args: &[Term]) -> Result<T, Error> {
    Ok(T::from_term_unchecked(pool().rebuild(term, args)?))
}

fn apply_child<G, T, B>(term: Term, builder: &mut B) -> Result<Term, Error>
where
    G: Family,
    T: Apply<G>,
    B: Builder<G>,
{
    Ok(T::from_term_unchecked(term).apply_with(builder)?.term())
}

/// Fails with a shape error unless `term` was recognised as a `family`.
fn expect_shape(term: Term, recognised: fn(Term) -> bool, family: &'static str) -> Result<(), Error> {
    if recognised(term) {
        Ok(())
    } else {
        Err(Error::Shape { family, term })
    }
}

// Data expressions

impl Apply<DataExpressions> for DataExpression {
    fn apply_with<B: Builder<DataExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        type G = DataExpressions;
        let term = self.term();
        let rebuilt = if is_variable(term) || is_function_symbol(term) {
            self
        } else if is_application(term) {
            let args = apply_terms::<G, DataExpression, B>(&pool().children(term), builder)?;
            rebuild(term, &args)?
        } else if is_abstraction(term) {
            let c = pool().children(term);
            let body = apply_child::<G, DataExpression, B>(c[2], builder)?;
            rebuild(term, &[c[0], c[1], body])?
        } else if is_where_clause(term) {
            let c = pool().children(term);
            let body = apply_child::<G, DataExpression, B>(c[0], builder)?;
            let assignments = apply_list::<G, Assignment, B>(c[1], builder)?;
            rebuild(term, &[body, assignments])?
        } else {
            return Err(self.shape_error());
        };
        builder.visit(rebuilt)
    }
}

impl Apply<DataExpressions> for Assignment {
    fn apply_with<B: Builder<DataExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_assignment, "assignment")?;
        let c = pool().children(self.term());
        let rhs = apply_child::<DataExpressions, DataExpression, B>(c[1], builder)?;
        rebuild(self.term(), &[c[0], rhs])
    }
}

impl Apply<DataExpressions> for DataEquation {
    fn apply_with<B: Builder<DataExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_data_equation, "data equation")?;
        let c = pool().children(self.term());
        let rest = apply_terms::<DataExpressions, DataExpression, B>(&c[1..], builder)?;
        rebuild(self.term(), &[c[0], rest[0], rest[1], rest[2]])
    }
}

impl Update<DataExpressions> for DataSpecification {
    fn update_with<B: Builder<DataExpressions>>(&mut self, builder: &mut B) -> Result<(), Error> {
        Update::<DataExpressions>::update_with(&mut self.equations, builder)
    }
}

// Sort expressions

impl Apply<SortExpressions> for SortExpression {
    fn apply_with<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        type G = SortExpressions;
        let term = self.term();
        let rebuilt = if is_basic_sort(term) {
            self
        } else if is_function_sort(term) {
            let c = pool().children(term);
            let domain = apply_list::<G, SortExpression, B>(c[0], builder)?;
            let codomain = apply_child::<G, SortExpression, B>(c[1], builder)?;
            rebuild(term, &[domain, codomain])?
        } else if is_container_sort(term) {
            let c = pool().children(term);
            let element = apply_child::<G, SortExpression, B>(c[1], builder)?;
            rebuild(term, &[c[0], element])?
        } else {
            return Err(Error::Shape {
                family: SORT_EXPRESSION,
                term,
            });
        };
        builder.visit(rebuilt)
    }
}

impl Apply<SortExpressions> for Variable {
    fn apply_with<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_variable, "variable")?;
        let sort = self.sort().apply_with(builder)?;
        rebuild(self.term(), &[self.name().term(), sort.term()])
    }
}

impl Apply<SortExpressions> for FunctionSymbol {
    fn apply_with<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_function_symbol, "operator")?;
        let sort = self.sort().apply_with(builder)?;
        rebuild(self.term(), &[self.name().term(), sort.term()])
    }
}

impl Apply<SortExpressions> for DataExpression {
    fn apply_with<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        type G = SortExpressions;
        let term = self.term();
        if is_variable(term) {
            apply_child::<G, Variable, B>(term, builder).map(DataExpression::from_term_unchecked)
        } else if is_function_symbol(term) {
            apply_child::<G, FunctionSymbol, B>(term, builder).map(DataExpression::from_term_unchecked)
        } else if is_application(term) {
            let args = apply_terms::<G, DataExpression, B>(&pool().children(term), builder)?;
            rebuild(term, &args)
        } else if is_abstraction(term) {
            let c = pool().children(term);
            let variables = apply_list::<G, Variable, B>(c[1], builder)?;
            let body = apply_child::<G, DataExpression, B>(c[2], builder)?;
            rebuild(term, &[c[0], variables, body])
        } else if is_where_clause(term) {
            let c = pool().children(term);
            let body = apply_child::<G, DataExpression, B>(c[0], builder)?;
            let assignments = apply_list::<G, Assignment, B>(c[1], builder)?;
            rebuild(term, &[body, assignments])
        } else {
            Err(self.shape_error())
        }
    }
}

impl Apply<SortExpressions> for Assignment {
    fn apply_with<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_assignment, "assignment")?;
        let lhs = self.lhs().apply_with(builder)?;
        let rhs = apply_child::<SortExpressions, DataExpression, B>(self.rhs().term(), builder)?;
        rebuild(self.term(), &[lhs.term(), rhs])
    }
}

impl Apply<SortExpressions> for DataEquation {
    fn apply_with<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_data_equation, "data equation")?;
        let c = pool().children(self.term());
        let variables = apply_list::<SortExpressions, Variable, B>(c[0], builder)?;
        let rest = apply_terms::<SortExpressions, DataExpression, B>(&c[1..], builder)?;
        rebuild(self.term(), &[variables, rest[0], rest[1], rest[2]])
    }
}

impl Update<SortExpressions> for DataSpecification {
    /// Alias names are binding occurrences and keep their sort; every other
    /// field, alias references included, is a sort position.
    fn update_with<B: Builder<SortExpressions>>(&mut self, builder: &mut B) -> Result<(), Error> {
        self.sorts.update_with(builder)?;
        for alias in &mut self.aliases {
            alias.reference = alias.reference.apply_with(builder)?;
        }
        self.constructors.update_with(builder)?;
        self.mappings.update_with(builder)?;
        Update::<SortExpressions>::update_with(&mut self.equations, builder)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;

//! Data specifications.

use crate::data_expression::{list_to_values, terms_to_list, DataExpression, FunctionSymbol, Variable};
use crate::sort_bool;
use crate::sort_expression::SortExpression;
use crate::symbols;
use mcrl2_aterm::{pool, Term};
use mcrl2_core::{term_newtype, SingletonExpression, TermValue};
use rustc_hash::FxHashMap;

term_newtype! {
    /// A rewrite rule `vars . cond -> lhs = rhs`, stored as
    /// `DataEqn([vars], cond, lhs, rhs)`.
    pub struct DataEquation;
}

pub fn data_equation(
    variables: &[Variable],
    condition: DataExpression,
    lhs: DataExpression,
    rhs: DataExpression,
) -> DataEquation {
    let variables = terms_to_list(variables);
    DataEquation(pool().make(
        symbols::DataEqn::instance(),
        &[variables, condition.term(), lhs.term(), rhs.term()],
    ))
}

/// An equation with condition `true`.
pub fn unconditional_equation(variables: &[Variable], lhs: DataExpression, rhs: DataExpression) -> DataEquation {
    data_equation(variables, sort_bool::true_(), lhs, rhs)
}

pub fn is_data_equation(term: Term) -> bool {
    symbols::has_head::<symbols::DataEqn>(term)
}

impl DataEquation {
    pub fn from_term(term: Term) -> Option<Self> {
        is_data_equation(term).then_some(DataEquation(term))
    }

    pub fn variables(self) -> Vec<Variable> {
        list_to_values(self.child(0))
    }

    pub fn condition(self) -> DataExpression {
        DataExpression::from_term_unchecked(self.child(1))
    }

    pub fn lhs(self) -> DataExpression {
        DataExpression::from_term_unchecked(self.child(2))
    }

    pub fn rhs(self) -> DataExpression {
        DataExpression::from_term_unchecked(self.child(3))
    }

    fn child(self, index: usize) -> Term {
        pool().children(self.0)[index]
    }
}

/// `sort name = reference;`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortAlias {
    pub name: SortExpression,
    pub reference: SortExpression,
}

/// Alias names mapped to the sorts they stand for.
pub type SortAliasMap = FxHashMap<SortExpression, SortExpression>;

/// Declarations of sorts, operators and equations.
///
/// Owning compound: fields are reassigned in place by
/// [`mcrl2_core::UpdateApplyBuilder::update`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSpecification {
    pub sorts: Vec<SortExpression>,
    pub aliases: Vec<SortAlias>,
    pub constructors: Vec<FunctionSymbol>,
    pub mappings: Vec<FunctionSymbol>,
    pub equations: Vec<DataEquation>,
}

impl DataSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sort(&mut self, sort: SortExpression) {
        if !self.sorts.contains(&sort) {
            self.sorts.push(sort);
        }
    }

    pub fn add_alias(&mut self, name: SortExpression, reference: SortExpression) {
        self.aliases.push(SortAlias { name, reference });
    }

    pub fn add_constructor(&mut self, f: FunctionSymbol) {
        self.constructors.push(f);
    }

    pub fn add_mapping(&mut self, f: FunctionSymbol) {
        self.mappings.push(f);
    }

    pub fn add_equation(&mut self, equation: DataEquation) {
        self.equations.push(equation);
    }

    /// Map from alias names to their definitions.
    ///
    /// A name declared twice keeps its last definition.
    pub fn sort_alias_map(&self) -> SortAliasMap {
        self.aliases
            .iter()
            .map(|alias| (alias.name, alias.reference))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
            && self.aliases.is_empty()
            && self.constructors.is_empty()
            && self.mappings.is_empty()
            && self.equations.is_empty()
    }
}

//! Linear processes and their initial states.

use crate::summand::{ActionSummand, DeadlockSummand};
use crate::symbols;
use mcrl2_aterm::{pool, Term};
use mcrl2_core::{term_newtype, SingletonExpression};
use mcrl2_data::{DataExpression, Variable};

/// `P(process_parameters) = sum of summands`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearProcess {
    pub process_parameters: Vec<Variable>,
    pub deadlock_summands: Vec<DeadlockSummand>,
    pub action_summands: Vec<ActionSummand>,
}

impl LinearProcess {
    pub fn summand_count(&self) -> usize {
        self.deadlock_summands.len() + self.action_summands.len()
    }
}

term_newtype! {
    /// Initial state `P(e1, ..., en)`, one expression per process parameter.
    pub struct ProcessInitializer;
}

pub fn process_initializer(expressions: &[DataExpression]) -> ProcessInitializer {
    let expressions = symbols::to_list(expressions);
    ProcessInitializer(pool().make(symbols::LinearProcessInit::instance(), &[expressions]))
}

pub fn is_process_initializer(term: Term) -> bool {
    symbols::has_head::<symbols::LinearProcessInit>(term)
}

impl ProcessInitializer {
    pub fn from_term(term: Term) -> Option<Self> {
        is_process_initializer(term).then_some(ProcessInitializer(term))
    }

    pub fn expressions(self) -> Vec<DataExpression> {
        symbols::from_list(pool().children(self.0)[0])
    }
}

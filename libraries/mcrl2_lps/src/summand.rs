//! Summands of a linear process.

use crate::action::MultiAction;
use mcrl2_data::{Assignment, DataExpression, Variable};

/// `sum vars . condition -> multi_action . P(assignments)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSummand {
    pub summation_variables: Vec<Variable>,
    pub condition: DataExpression,
    pub multi_action: MultiAction,
    pub assignments: Vec<Assignment>,
}

/// `sum vars . condition -> delta @ time`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeadlockSummand {
    pub summation_variables: Vec<Variable>,
    pub condition: DataExpression,
    pub time: Option<DataExpression>,
}

impl ActionSummand {
    pub fn is_tau(&self) -> bool {
        self.multi_action.is_tau()
    }

    pub fn has_time(&self) -> bool {
        self.multi_action.time.is_some()
    }
}

impl DeadlockSummand {
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }
}

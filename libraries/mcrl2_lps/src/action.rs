//! Actions and multi-actions.

use crate::symbols;
use mcrl2_aterm::{pool, Term};
use mcrl2_core::{term_newtype, IdentifierString, SingletonExpression, TermValue};
use mcrl2_data::{DataExpression, SortExpression};

term_newtype! {
    /// Declaration `act name: s1 # ... # sn`, stored as `ActId(name, [sorts])`.
    pub struct ActionLabel;
}

term_newtype! {
    /// `label(arguments)`, stored as `Action(label, [arguments])`.
    pub struct Action;
}

pub fn action_label(name: IdentifierString, sorts: &[SortExpression]) -> ActionLabel {
    let sorts = symbols::to_list(sorts);
    ActionLabel(pool().make(symbols::ActId::instance(), &[name.term(), sorts]))
}

pub fn action(label: ActionLabel, arguments: &[DataExpression]) -> Action {
    let arguments = symbols::to_list(arguments);
    Action(pool().make(symbols::Action::instance(), &[label.0, arguments]))
}

pub fn is_action_label(term: Term) -> bool {
    symbols::has_head::<symbols::ActId>(term)
}

pub fn is_action(term: Term) -> bool {
    symbols::has_head::<symbols::Action>(term)
}

impl ActionLabel {
    pub fn from_term(term: Term) -> Option<Self> {
        is_action_label(term).then_some(ActionLabel(term))
    }

    pub fn name(self) -> IdentifierString {
        IdentifierString::from_term_unchecked(pool().children(self.0)[0])
    }

    pub fn sorts(self) -> Vec<SortExpression> {
        symbols::from_list(pool().children(self.0)[1])
    }
}

impl Action {
    pub fn from_term(term: Term) -> Option<Self> {
        is_action(term).then_some(Action(term))
    }

    pub fn label(self) -> ActionLabel {
        ActionLabel(pool().children(self.0)[0])
    }

    pub fn arguments(self) -> Vec<DataExpression> {
        symbols::from_list(pool().children(self.0)[1])
    }
}

/// Actions that happen together, optionally at a given time.
///
/// The empty multi-action is `tau`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiAction {
    pub actions: Vec<Action>,
    pub time: Option<DataExpression>,
}

impl MultiAction {
    pub fn new(actions: Vec<Action>) -> Self {
        MultiAction { actions, time: None }
    }

    pub fn tau() -> Self {
        Self::default()
    }

    pub fn is_tau(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn at(mut self, time: DataExpression) -> Self {
        self.time = Some(time);
        self
    }
}

//! Data and sort positions of linear process specifications.
//!
//! Data positions are conditions, action arguments, times, right-hand sides
//! of assignments and the expressions of the initial state. Process
//! parameters, summation variables, global variables and left-hand sides of
//! assignments are binding occurrences; they are visited for their sorts
//! only. The data specification is not part of either traversal.

use crate::action::{is_action, is_action_label, Action, ActionLabel, MultiAction};
use crate::linear_process::{is_process_initializer, LinearProcess, ProcessInitializer};
use crate::specification::Specification;
use crate::summand::{ActionSummand, DeadlockSummand};
use mcrl2_aterm::{pool, Term};
use mcrl2_core::builder::apply_list;
use mcrl2_core::{Apply, Builder, Error, Family, TermValue, Update};
use mcrl2_data::{DataExpression, DataExpressions, SortExpression, SortExpressions, Variable};

fn rebuild<T: TermValue>(term: Term, args: &[Term]) -> Result<T, Error> {
    Ok(T::from_term_unchecked(pool().rebuild(term, args)?))
}

fn apply_expression<G, B>(e: DataExpression, builder: &mut B) -> Result<DataExpression, Error>
where
    G: Family,
    DataExpression: Apply<G>,
    B: Builder<G>,
{
    Apply::<G>::apply_with(e, builder)
}

fn expect_shape(term: Term, recognised: fn(Term) -> bool, family: &'static str) -> Result<(), Error> {
    if recognised(term) {
        Ok(())
    } else {
        Err(Error::Shape { family, term })
    }
}

impl Apply<SortExpressions> for ActionLabel {
    fn apply_with<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_action_label, "action label")?;
        let c = pool().children(self.term());
        let sorts = apply_list::<SortExpressions, SortExpression, B>(c[1], builder)?;
        rebuild(self.term(), &[c[0], sorts])
    }
}

impl<G> Apply<G> for Action
where
    G: Family,
    DataExpression: Apply<G>,
    ActionLabel: LabelSorts<G>,
{
    fn apply_with<B: Builder<G>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_action, "action")?;
        let c = pool().children(self.term());
        let label = LabelSorts::<G>::label_sorts(ActionLabel::from_term_unchecked(c[0]), builder)?;
        let arguments = apply_list::<G, DataExpression, B>(c[1], builder)?;
        rebuild(self.term(), &[label.term(), arguments])
    }
}

/// Sorts of an action label are sort positions but never data positions.
pub trait LabelSorts<G: Family>: Sized {
    fn label_sorts<B: Builder<G>>(self, builder: &mut B) -> Result<Self, Error>;
}

impl LabelSorts<DataExpressions> for ActionLabel {
    fn label_sorts<B: Builder<DataExpressions>>(self, _builder: &mut B) -> Result<Self, Error> {
        Ok(self)
    }
}

impl LabelSorts<SortExpressions> for ActionLabel {
    fn label_sorts<B: Builder<SortExpressions>>(self, builder: &mut B) -> Result<Self, Error> {
        self.apply_with(builder)
    }
}

impl<G> Apply<G> for ProcessInitializer
where
    G: Family,
    DataExpression: Apply<G>,
{
    fn apply_with<B: Builder<G>>(self, builder: &mut B) -> Result<Self, Error> {
        expect_shape(self.term(), is_process_initializer, "process initializer")?;
        let c = pool().children(self.term());
        let expressions = apply_list::<G, DataExpression, B>(c[0], builder)?;
        rebuild(self.term(), &[expressions])
    }
}

impl<G> Update<G> for MultiAction
where
    G: Family,
    Action: Apply<G>,
    DataExpression: Apply<G>,
{
    fn update_with<B: Builder<G>>(&mut self, builder: &mut B) -> Result<(), Error> {
        Update::<G>::update_with(&mut self.actions, builder)?;
        Update::<G>::update_with(&mut self.time, builder)
    }
}

// Data expressions

impl Update<DataExpressions> for ActionSummand {
    fn update_with<B: Builder<DataExpressions>>(&mut self, builder: &mut B) -> Result<(), Error> {
        type G = DataExpressions;
        self.condition = apply_expression::<G, B>(self.condition, builder)?;
        Update::<G>::update_with(&mut self.multi_action, builder)?;
        Update::<G>::update_with(&mut self.assignments, builder)
    }
}

impl Update<DataExpressions> for DeadlockSummand {
    fn update_with<B: Builder<DataExpressions>>(&mut self, builder: &mut B) -> Result<(), Error> {
        type G = DataExpressions;
        self.condition = apply_expression::<G, B>(self.condition, builder)?;
        Update::<G>::update_with(&mut self.time, builder)
    }
}

// Sort expressions

impl Update<SortExpressions> for ActionSummand {
    fn update_with<B: Builder<SortExpressions>>(&mut self, builder: &mut B) -> Result<(), Error> {
        type G = SortExpressions;
        Update::<G>::update_with(&mut self.summation_variables, builder)?;
        self.condition = apply_expression::<G, B>(self.condition, builder)?;
        Update::<G>::update_with(&mut self.multi_action, builder)?;
        Update::<G>::update_with(&mut self.assignments, builder)
    }
}

impl Update<SortExpressions> for DeadlockSummand {
    fn update_with<B: Builder<SortExpressions>>(&mut self, builder: &mut B) -> Result<(), Error> {
        type G = SortExpressions;
        Update::<G>::update_with(&mut self.summation_variables, builder)?;
        self.condition = apply_expression::<G, B>(self.condition, builder)?;
        Update::<G>::update_with(&mut self.time, builder)
    }
}

/// Process parameters are visited when `Variable` positions belong to `G`.
pub trait ParameterSorts<G: Family> {
    fn update_parameters<B: Builder<G>>(&mut self, builder: &mut B) -> Result<(), Error>;
}

impl ParameterSorts<DataExpressions> for Vec<Variable> {
    fn update_parameters<B: Builder<DataExpressions>>(&mut self, _builder: &mut B) -> Result<(), Error> {
        Ok(())
    }
}

impl ParameterSorts<SortExpressions> for Vec<Variable> {
    fn update_parameters<B: Builder<SortExpressions>>(&mut self, builder: &mut B) -> Result<(), Error> {
        self.update_with(builder)
    }
}

impl<G> Update<G> for LinearProcess
where
    G: Family,
    Vec<Variable>: ParameterSorts<G>,
    DeadlockSummand: Update<G>,
    ActionSummand: Update<G>,
{
    fn update_with<B: Builder<G>>(&mut self, builder: &mut B) -> Result<(), Error> {
        ParameterSorts::<G>::update_parameters(&mut self.process_parameters, builder)?;
        for summand in &mut self.deadlock_summands {
            Update::<G>::update_with(summand, builder)?;
        }
        for summand in &mut self.action_summands {
            Update::<G>::update_with(summand, builder)?;
        }
        Ok(())
    }
}

impl<G> Update<G> for Specification
where
    G: Family,
    ActionLabel: LabelSorts<G>,
    Vec<Variable>: ParameterSorts<G>,
    LinearProcess: Update<G>,
    ProcessInitializer: Apply<G>,
{
    fn update_with<B: Builder<G>>(&mut self, builder: &mut B) -> Result<(), Error> {
        for label in &mut self.action_labels {
            *label = LabelSorts::<G>::label_sorts(*label, builder)?;
        }
        ParameterSorts::<G>::update_parameters(&mut self.global_variables, builder)?;
        Update::<G>::update_with(&mut self.process, builder)?;
        self.initial_process = Apply::<G>::apply_with(self.initial_process, builder)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use super::*;
    use crate::action::{action, action_label};
    use mcrl2_core::{make_update_apply_builder, IdentifierString};
    use mcrl2_data::{assignment, basic_sort, number, sort_int, sort_nat, variable};
    use pretty_assertions::assert_eq;
    use std::convert::Infallible;

    fn id(s: &str) -> IdentifierString {
        IdentifierString::new(s)
    }

    fn int_to_nat(s: SortExpression) -> Result<SortExpression, Infallible> {
        Ok(if s == sort_int::int() { sort_nat::nat() } else { s })
    }

    #[test]
    fn label_sorts_are_sort_positions() {
        let label = action_label(id("a"), &[sort_int::int(), basic_sort(id("D"))]);
        let mut builder = make_update_apply_builder::<SortExpressions, _>(int_to_nat);

        let result = builder.apply(label).unwrap();

        assert_eq!(result.name(), id("a"));
        assert_eq!(result.sorts(), vec![sort_nat::nat(), basic_sort(id("D"))]);
    }

    #[test]
    fn action_labels_are_not_data_positions() {
        let label = action_label(id("a"), &[sort_int::int()]);
        let a = action(label, &[number::int_("5")]);
        let mut seen = Vec::new();
        let mut builder = make_update_apply_builder::<DataExpressions, _>(|e: DataExpression| {
            seen.push(e);
            Ok::<_, Infallible>(e)
        });
        assert_eq!(builder.apply(a).unwrap(), a);
        drop(builder);

        assert_eq!(seen, vec![number::int_("5")]);
    }

    #[test]
    fn summation_variables_are_sort_positions_only() {
        let x = variable(id("x"), sort_int::int());
        let mut summand = DeadlockSummand {
            summation_variables: vec![x],
            condition: x.into(),
            time: None,
        };

        let mut data = make_update_apply_builder::<DataExpressions, _>(Ok::<DataExpression, Infallible>);
        data.update(&mut summand).unwrap();
        assert_eq!(data.visits(), 1);

        let mut sorts = make_update_apply_builder::<SortExpressions, _>(int_to_nat);
        sorts.update(&mut summand).unwrap();
        let y = variable(id("x"), sort_nat::nat());
        assert_eq!(summand.summation_variables, vec![y]);
        assert_eq!(summand.condition, DataExpression::from(y));
    }

    #[test]
    fn assignment_left_hand_sides_keep_their_name() {
        let x = variable(id("x"), sort_int::int());
        let mut summand = ActionSummand {
            summation_variables: Vec::new(),
            condition: mcrl2_data::sort_bool::true_(),
            multi_action: MultiAction::tau(),
            assignments: vec![assignment(x, number::int_("5"))],
        };
        let mut builder = make_update_apply_builder::<DataExpressions, _>(|e: DataExpression| {
            Ok::<_, Infallible>(if e == number::int_("5") { DataExpression::from(x) } else { e })
        });

        builder.update(&mut summand).unwrap();

        assert_eq!(summand.assignments, vec![assignment(x, DataExpression::from(x))]);
    }

    #[test]
    fn malformed_labels_and_assignments_are_reported() {
        let bogus_label = ActionLabel::from_term_unchecked(sort_int::int().term());
        let a = action(bogus_label, &[]);
        let mut sorts = make_update_apply_builder::<SortExpressions, _>(int_to_nat);
        let err = sorts.apply(a).unwrap_err();
        assert!(matches!(err, Error::Shape { family: "action label", .. }));
        assert_eq!(err.term(), Some(bogus_label.term()));

        let bogus = mcrl2_data::Assignment::from_term_unchecked(sort_int::int().term());
        let mut summand = ActionSummand {
            summation_variables: Vec::new(),
            condition: mcrl2_data::sort_bool::true_(),
            multi_action: MultiAction::tau(),
            assignments: vec![bogus],
        };
        let mut data = make_update_apply_builder::<DataExpressions, _>(Ok::<DataExpression, Infallible>);
        let err = data.update(&mut summand).unwrap_err();
        assert!(matches!(err, Error::Shape { family: "assignment", .. }));
        assert_eq!(summand.assignments, vec![bogus]);
    }
}

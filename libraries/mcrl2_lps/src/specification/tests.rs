use super::*;
use crate::action::{action, action_label, MultiAction};
use crate::linear_process::process_initializer;
use crate::summand::{ActionSummand, DeadlockSummand};
use mcrl2_core::{make_update_apply_builder, IdentifierString, TermValue};
use mcrl2_data::{
    assignment, basic_sort, number, sort_bool, sort_int, sort_nat, sort_pos, variable, DataExpression,
    DataExpressions, SortExpression, SortExpressions,
};
use pretty_assertions::assert_eq;
use std::convert::Infallible;

fn id(s: &str) -> IdentifierString {
    IdentifierString::new(s)
}

fn i() -> Variable {
    variable(id("i"), sort_int::int())
}

fn five_to_six(e: DataExpression) -> Result<DataExpression, Infallible> {
    Ok(if e == number::int_("5") { number::int_("6") } else { e })
}

/// One process parameter `i: Int` and two summands:
///
/// ```text
/// sum n: Int . i - 5 -> a(i) . P(i = 5 + 5)
/// true -> delta @ i
/// ```
fn specification() -> Specification {
    let label = action_label(id("a"), &[sort_int::int()]);
    let n = variable(id("n"), sort_int::int());
    let summand = ActionSummand {
        summation_variables: vec![n],
        condition: sort_int::minus(i().into(), number::int_("5")),
        multi_action: MultiAction::new(vec![action(label, &[i().into()])]),
        assignments: vec![assignment(i(), sort_int::plus(number::int_("5"), number::int_("5")))],
    };
    let deadlock = DeadlockSummand {
        summation_variables: Vec::new(),
        condition: sort_bool::true_(),
        time: Some(i().into()),
    };
    Specification {
        data: DataSpecification::new(),
        action_labels: vec![label],
        global_variables: Vec::new(),
        process: LinearProcess {
            process_parameters: vec![i()],
            deadlock_summands: vec![deadlock],
            action_summands: vec![summand],
        },
        initial_process: process_initializer(&[number::int_("0")]),
    }
}

#[test]
fn identity_leaves_every_handle_in_place() {
    let mut spec = specification();
    let before = spec.clone();
    let mut builder = make_update_apply_builder::<DataExpressions, _>(Ok::<DataExpression, Infallible>);

    builder.update(&mut spec).unwrap();

    assert_eq!(spec, before);
    assert_eq!(
        spec.process.action_summands[0].condition.term(),
        before.process.action_summands[0].condition.term()
    );
    assert_eq!(spec.initial_process.term(), before.initial_process.term());
}

#[test]
fn rewrite_reaches_conditions_and_updates() {
    let mut spec = specification();
    let before = spec.clone();
    let mut builder = make_update_apply_builder::<DataExpressions, _>(five_to_six);

    builder.update(&mut spec).unwrap();

    let summand = &spec.process.action_summands[0];
    assert_eq!(summand.condition, sort_int::minus(i().into(), number::int_("6")));
    assert_eq!(
        summand.assignments,
        vec![assignment(i(), sort_int::plus(number::int_("6"), number::int_("6")))]
    );
    assert!(sort_int::is_minus_application(summand.condition));
    assert!(sort_int::is_plus_application(summand.assignments[0].rhs()));

    // unrelated parts keep their handles
    assert_eq!(summand.multi_action, before.process.action_summands[0].multi_action);
    assert_eq!(summand.summation_variables, before.process.action_summands[0].summation_variables);
    assert_eq!(spec.process.deadlock_summands, before.process.deadlock_summands);
    assert_eq!(spec.process.process_parameters, before.process.process_parameters);
    assert_eq!(spec.initial_process, before.initial_process);
    assert_eq!(spec.action_labels, before.action_labels);
}

#[test]
fn process_parameters_are_not_data_positions() {
    let mut spec = specification();
    let mut seen = Vec::new();
    let mut builder = make_update_apply_builder::<DataExpressions, _>(|e: DataExpression| {
        seen.push(e);
        Ok::<_, Infallible>(e)
    });
    builder.update(&mut spec).unwrap();
    drop(builder);

    // the condition, the action argument and the deadlock time
    let i: DataExpression = i().into();
    assert_eq!(seen.iter().filter(|&&e| e == i).count(), 3);
}

#[test]
fn empty_specification_is_unchanged() {
    let mut spec = Specification {
        data: DataSpecification::new(),
        action_labels: Vec::new(),
        global_variables: Vec::new(),
        process: LinearProcess::default(),
        initial_process: process_initializer(&[]),
    };
    let before = spec.clone();
    let mut builder = make_update_apply_builder::<DataExpressions, _>(five_to_six);

    builder.update(&mut spec).unwrap();

    assert_eq!(spec, before);
    assert_eq!(builder.visits(), 0);
}

#[test]
fn translate_user_notation_rewrites_literals() {
    let mut spec = specification();
    spec.translate_user_notation().unwrap();

    let five = sort_int::cint(sort_nat::cnat(sort_pos::cdub(
        sort_bool::true_(),
        sort_pos::cdub(sort_bool::false_(), sort_pos::c1()),
    )));
    let summand = &spec.process.action_summands[0];
    assert_eq!(summand.condition, sort_int::minus(i().into(), five));
    assert_eq!(
        spec.initial_process.expressions(),
        vec![sort_int::cint(sort_nat::c0())]
    );
}

#[test]
fn normalize_sorts_uses_the_data_aliases() {
    let index = basic_sort(id("Index"));
    let k = variable(id("k"), index);
    let mut spec = specification();
    spec.data.add_alias(index, sort_int::int());
    spec.global_variables.push(k);
    spec.action_labels.push(action_label(id("b"), &[index]));

    spec.normalize_sorts().unwrap();

    assert_eq!(spec.global_variables, vec![variable(id("k"), sort_int::int())]);
    assert_eq!(spec.action_labels[1].sorts(), vec![sort_int::int()]);
    // the aliases themselves are kept
    assert_eq!(spec.data.sort_alias_map().get(&index), Some(&sort_int::int()));
}

#[test]
fn sort_rewrite_reaches_parameters_and_labels() {
    let mut spec = specification();
    let mut builder = make_update_apply_builder::<SortExpressions, _>(|s: SortExpression| {
        Ok::<_, Infallible>(if s == sort_int::int() { sort_nat::nat() } else { s })
    });

    builder.update(&mut spec).unwrap();

    let j = variable(id("i"), sort_nat::nat());
    assert_eq!(spec.process.process_parameters, vec![j]);
    assert_eq!(spec.action_labels[0].sorts(), vec![sort_nat::nat()]);
    assert_eq!(spec.process.deadlock_summands[0].time, Some(DataExpression::from(j)));
}

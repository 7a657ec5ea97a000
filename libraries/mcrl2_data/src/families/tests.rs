use super::*;
use crate::data_expression::{abstraction, assignment, variable, where_clause, BinderKind};
use crate::data_specification::{unconditional_equation, SortAlias};
use crate::sort_expression::{basic_sort, container_sort, function_sort, ContainerKind};
use crate::{number, sort_int, sort_nat};
use mcrl2_core::{make_update_apply_builder, IdentifierString, SingletonExpression};
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

#[test]
fn identity_returns_the_same_handle() {
    let e = where_clause(
        sort_int::minus(i().into(), number::int_("5")),
        &[assignment(i(), number::int_("1"))],
    );
    let mut builder = make_update_apply_builder::<DataExpressions, _>(Ok::<DataExpression, Infallible>);

    assert_eq!(builder.apply(e).unwrap(), e);
    // minus, i, 5, the application, 1 and the where clause
    assert_eq!(builder.visits(), 6);
}

#[test]
fn rewrite_reaches_every_data_position() {
    let e = sort_int::plus(number::int_("5"), number::int_("5"));
    let mut builder = make_update_apply_builder::<DataExpressions, _>(five_to_six);

    let result = builder.apply(e).unwrap();

    assert_eq!(result, sort_int::plus(number::int_("6"), number::int_("6")));
}

#[test]
fn binding_occurrences_are_not_visited() {
    let body = sort_int::negate(i().into());
    let e = abstraction(BinderKind::Forall, &[i()], body);
    let mut seen = Vec::new();
    let mut builder = make_update_apply_builder::<DataExpressions, _>(|e: DataExpression| {
        seen.push(e);
        Ok::<_, Infallible>(e)
    });
    builder.apply(e).unwrap();
    drop(builder);

    // the bound `i` is seen once, as the argument of negate
    let i: DataExpression = i().into();
    assert_eq!(seen.iter().filter(|&&x| x == i).count(), 1);
    assert_eq!(seen.last(), Some(&e));
}

#[test]
fn assignments_rewrite_only_their_right_hand_side() {
    let a = assignment(i(), number::int_("5"));
    let mut builder = make_update_apply_builder::<DataExpressions, _>(five_to_six);

    assert_eq!(builder.apply(a).unwrap(), assignment(i(), number::int_("6")));
    assert_eq!(builder.visits(), 1);
}

#[test]
fn equations_rewrite_condition_and_both_sides() {
    let lhs = sort_int::minus(i().into(), number::int_("5"));
    let eq = unconditional_equation(&[i()], lhs, number::int_("5"));
    let mut builder = make_update_apply_builder::<DataExpressions, _>(five_to_six);

    let result = builder.apply(eq).unwrap();

    assert_eq!(result.variables(), vec![i()]);
    assert_eq!(result.lhs(), sort_int::minus(i().into(), number::int_("6")));
    assert_eq!(result.rhs(), number::int_("6"));
    assert_eq!(result.condition(), eq.condition());
}

#[test]
fn sort_traversal_visits_sorts_post_order() {
    let s = function_sort(
        &[container_sort(ContainerKind::List, sort_nat::nat())],
        basic_sort(id("B")),
    );
    let mut seen = Vec::new();
    let mut builder = make_update_apply_builder::<SortExpressions, _>(|s: SortExpression| {
        seen.push(s.to_string());
        Ok::<_, Infallible>(s)
    });
    assert_eq!(builder.apply(s).unwrap(), s);
    drop(builder);

    assert_eq!(
        seen,
        vec![
            "SortId(Nat)".to_owned(),
            "SortCons(List,SortId(Nat))".to_owned(),
            "SortId(B)".to_owned(),
            "SortArrow([SortCons(List,SortId(Nat))],SortId(B))".to_owned(),
        ]
    );
}

#[test]
fn sort_traversal_descends_into_expressions() {
    let rename = |s: SortExpression| {
        Ok::<_, Infallible>(if s == sort_int::int() { basic_sort(id("Z")) } else { s })
    };
    let z = basic_sort(id("Z"));
    let e = abstraction(BinderKind::Lambda, &[i()], i().into());
    let mut builder = make_update_apply_builder::<SortExpressions, _>(rename);

    let result = builder.apply(e).unwrap();

    let j = variable(id("i"), z);
    assert_eq!(result, abstraction(BinderKind::Lambda, &[j], j.into()));
}

#[test]
fn sort_traversal_rewrites_operator_sorts() {
    let rename = |s: SortExpression| {
        Ok::<_, Infallible>(if s == sort_int::int() { basic_sort(id("Z")) } else { s })
    };
    let mut builder = make_update_apply_builder::<SortExpressions, _>(rename);
    let negate = builder.apply(sort_int::Negate::instance()).unwrap();

    let z = basic_sort(id("Z"));
    assert_eq!(negate.name(), id("-"));
    assert_eq!(negate.sort(), function_sort(&[z], z));
}

#[test]
fn data_specification_updates_equations_in_place() {
    let mut data = DataSpecification::new();
    data.add_sort(sort_int::int());
    data.add_mapping(sort_int::Minus::instance());
    data.add_equation(unconditional_equation(&[], number::int_("5"), number::int_("5")));
    let before = data.clone();

    let mut builder = make_update_apply_builder::<DataExpressions, _>(five_to_six);
    builder.update(&mut data).unwrap();

    assert_eq!(data.mappings, before.mappings);
    assert_eq!(
        data.equations,
        vec![unconditional_equation(&[], number::int_("6"), number::int_("6"))]
    );
}

#[test]
fn unknown_shapes_are_reported() {
    let bogus = DataExpression::from_term_unchecked(sort_int::int().term());
    let e = sort_int::negate(bogus);
    let mut builder = make_update_apply_builder::<DataExpressions, _>(Ok::<DataExpression, Infallible>);

    let err = builder.apply(e).unwrap_err();
    assert!(matches!(err, Error::Shape { family: "data expression", .. }));
    assert_eq!(err.term(), Some(bogus.term()));
}

#[test]
fn malformed_assignments_are_reported() {
    let bogus = Assignment::from_term_unchecked(sort_int::int().term());
    let e = where_clause(number::int_("5"), &[bogus]);
    assert!(DataExpression::from_term(e.term()).is_some());

    let mut data = make_update_apply_builder::<DataExpressions, _>(Ok::<DataExpression, Infallible>);
    let err = data.apply(e).unwrap_err();
    assert!(matches!(err, Error::Shape { family: "assignment", .. }));
    assert_eq!(err.term(), Some(bogus.term()));

    let mut sorts = make_update_apply_builder::<SortExpressions, _>(Ok::<SortExpression, Infallible>);
    let err = sorts.apply(e).unwrap_err();
    assert!(matches!(err, Error::Shape { family: "assignment", .. }));
    assert_eq!(err.term(), Some(bogus.term()));
}

#[test]
fn malformed_bound_variables_are_reported() {
    let bogus = Variable::from_term_unchecked(sort_int::int().term());
    let e = abstraction(BinderKind::Lambda, &[bogus], i().into());
    let mut builder = make_update_apply_builder::<SortExpressions, _>(Ok::<SortExpression, Infallible>);

    let err = builder.apply(e).unwrap_err();
    assert!(matches!(err, Error::Shape { family: "variable", .. }));
    assert_eq!(err.term(), Some(bogus.term()));
}

#[test]
fn malformed_equations_are_reported() {
    let bogus = DataEquation::from_term_unchecked(number::int_("5").term());
    let mut data = DataSpecification::new();
    data.add_equation(bogus);
    let mut builder = make_update_apply_builder::<DataExpressions, _>(Ok::<DataExpression, Infallible>);

    let err = builder.update(&mut data).unwrap_err();
    assert!(matches!(err, Error::Shape { family: "data equation", .. }));
    assert_eq!(data.equations, vec![bogus]);
}

#[test]
fn sort_updates_reach_declared_sorts_and_alias_references() {
    let z = basic_sort(id("Z"));
    let ints = basic_sort(id("Ints"));
    let rename = |s: SortExpression| {
        Ok::<_, Infallible>(if s == sort_int::int() || s == ints { z } else { s })
    };
    let mut data = DataSpecification::new();
    data.add_sort(sort_int::int());
    data.add_alias(ints, container_sort(ContainerKind::List, sort_int::int()));

    let mut builder = make_update_apply_builder::<SortExpressions, _>(rename);
    builder.update(&mut data).unwrap();

    assert_eq!(data.sorts, vec![z]);
    assert_eq!(
        data.aliases,
        vec![SortAlias {
            name: ints,
            reference: container_sort(ContainerKind::List, z),
        }]
    );
}

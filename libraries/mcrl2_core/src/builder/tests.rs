use super::*;
use pretty_assertions::assert_eq;
use std::convert::Infallible;

crate::term_newtype! {
    /// Arithmetic over integer literals: `lit(n)`, `add(a, b)`, `neg(a)`.
    struct Expr;
}

crate::term_newtype! {
    /// `assign(x, e)`: a term that contains expressions but is not one.
    struct Stmt;
}

struct Exprs;

impl Family for Exprs {
    type Node = Expr;
    const NAME: &'static str = "expression";
}

fn lit(n: u64) -> Expr {
    let symbol = pool().function_symbol("lit", 1);
    Expr(pool().make(symbol, &[pool().make_int(n)]))
}

fn add(a: Expr, b: Expr) -> Expr {
    let symbol = pool().function_symbol("add", 2);
    Expr(pool().make(symbol, &[a.0, b.0]))
}

fn neg(a: Expr) -> Expr {
    let symbol = pool().function_symbol("neg", 1);
    Expr(pool().make(symbol, &[a.0]))
}

fn assign(x: &str, e: Expr) -> Stmt {
    let symbol = pool().function_symbol("assign", 2);
    Stmt(pool().make(symbol, &[pool().identifier(x), e.0]))
}

impl Apply<Exprs> for Expr {
    fn apply_with<B: Builder<Exprs>>(self, builder: &mut B) -> Result<Self, Error> {
        let term = self.term();
        let rebuilt = if term.has_head("lit", 1) {
            self
        } else if term.has_head("add", 2) || term.has_head("neg", 1) {
            let args = apply_terms::<Exprs, Expr, B>(&term.children(), builder)?;
            Expr(pool().rebuild(term, &args)?)
        } else {
            return Err(Error::Shape {
                family: Exprs::NAME,
                term,
            });
        };
        builder.visit(rebuilt)
    }
}

impl Apply<Exprs> for Stmt {
    fn apply_with<B: Builder<Exprs>>(self, builder: &mut B) -> Result<Self, Error> {
        let term = self.term();
        let children = term.children();
        let value = Expr(children[1]).apply_with(builder)?;
        Ok(Stmt(pool().rebuild(term, &[children[0], value.0])?))
    }
}

/// Owning compound with term-valued fields.
struct Program {
    name: &'static str,
    body: Vec<Stmt>,
    result: Option<Expr>,
}

impl Update<Exprs> for Program {
    fn update_with<B: Builder<Exprs>>(&mut self, builder: &mut B) -> Result<(), Error> {
        self.body.update_with(builder)?;
        self.result.update_with(builder)
    }
}

fn five_to_six(x: Expr) -> Result<Expr, Infallible> {
    Ok(if x == lit(5) { lit(6) } else { x })
}

#[test]
fn identity_preserves_handles() {
    let x = add(lit(1), neg(lit(2)));
    let mut builder = make_update_apply_builder::<Exprs, _>(Ok::<Expr, Infallible>);

    assert_eq!(builder.apply(x).unwrap(), x);
    assert_eq!(builder.visits(), 4);
}

#[test]
fn visits_in_post_order() {
    let x = add(lit(1), neg(lit(2)));
    let mut seen = Vec::new();
    let mut builder = make_update_apply_builder::<Exprs, _>(|e: Expr| {
        seen.push(e.to_string());
        Ok::<_, Infallible>(e)
    });
    builder.apply(x).unwrap();
    drop(builder);

    assert_eq!(
        seen,
        vec![
            "lit(1)".to_owned(),
            "lit(2)".to_owned(),
            "neg(lit(2))".to_owned(),
            "add(lit(1),neg(lit(2)))".to_owned(),
        ]
    );
}

#[test]
fn parents_see_rewritten_children() {
    let x = neg(lit(5));
    let mut parents = Vec::new();
    let mut builder = make_update_apply_builder::<Exprs, _>(|e: Expr| {
        if e.term().has_head("neg", 1) {
            parents.push(e);
        }
        five_to_six(e)
    });
    let result = builder.apply(x).unwrap();
    drop(builder);

    assert_eq!(result, neg(lit(6)));
    assert_eq!(parents, vec![neg(lit(6))]);
}

#[test]
fn rewrite_keeps_unrelated_subterms() {
    let untouched = neg(lit(1));
    let x = add(add(lit(5), lit(5)), untouched);
    let mut builder = make_update_apply_builder::<Exprs, _>(five_to_six);

    let result = builder.apply(x).unwrap();

    assert_eq!(result, add(add(lit(6), lit(6)), untouched));
    assert_eq!(Expr(result.term().children()[1]), untouched);
}

#[test]
fn non_family_positions_are_skipped() {
    let stmt = assign("five", lit(5));
    let mut builder = make_update_apply_builder::<Exprs, _>(five_to_six);

    assert_eq!(builder.apply(stmt).unwrap(), assign("five", lit(6)));
    assert_eq!(builder.visits(), 1);
}

#[test]
fn update_rewrites_owning_compound() {
    let mut program = Program {
        name: "main",
        body: vec![assign("x", lit(5)), assign("y", neg(lit(3)))],
        result: Some(add(lit(5), lit(1))),
    };
    let mut builder = make_update_apply_builder::<Exprs, _>(five_to_six);

    builder.update(&mut program).unwrap();

    assert_eq!(program.name, "main");
    assert_eq!(program.body, vec![assign("x", lit(6)), assign("y", neg(lit(3)))]);
    assert_eq!(program.result, Some(add(lit(6), lit(1))));
}

#[test]
fn empty_compound_is_unchanged() {
    let mut program = Program {
        name: "empty",
        body: Vec::new(),
        result: None,
    };
    let mut builder = make_update_apply_builder::<Exprs, _>(five_to_six);

    builder.update(&mut program).unwrap();

    assert!(program.body.is_empty());
    assert_eq!(program.result, None);
    assert_eq!(builder.visits(), 0);
}

#[test]
fn update_error_aborts_traversal() {
    let x = add(lit(3), lit(4));
    let mut builder = make_update_apply_builder::<Exprs, _>(|e: Expr| {
        if e == lit(3) {
            Err(format!("cannot rewrite {e}"))
        } else {
            Ok(e)
        }
    });

    let err = builder.apply(x).unwrap_err();

    assert_eq!(err.term(), Some(lit(3).term()));
    assert_eq!(builder.visits(), 1);
    match err {
        Error::Update { family, source, .. } => {
            assert_eq!(family, "expression");
            assert_eq!(source.to_string(), "cannot rewrite lit(3)");
        }
        other => panic!("expected an update error, got {other:?}"),
    }
}

#[test]
fn unknown_shape_is_reported() {
    let bogus = Expr(pool().identifier("bogus"));
    let x = add(lit(1), bogus);
    let mut builder = make_update_apply_builder::<Exprs, _>(Ok::<Expr, Infallible>);

    let err = builder.apply(x).unwrap_err();

    assert!(matches!(err, Error::Shape { family: "expression", .. }));
    assert_eq!(err.term(), Some(bogus.term()));
    assert_eq!(err.to_string(), "`bogus` is not a recognised expression");
}

#[test]
fn apply_list_shares_unchanged_lists() {
    let list = pool().make_list(&[lit(1).0, lit(2).0]);
    let mut builder = make_update_apply_builder::<Exprs, _>(five_to_six);

    let result = apply_list::<Exprs, Expr, _>(list, &mut builder).unwrap();
    assert_eq!(result, list);

    let list = pool().make_list(&[lit(5).0]);
    let result = apply_list::<Exprs, Expr, _>(list, &mut builder).unwrap();
    assert_eq!(result, pool().make_list(&[lit(6).0]));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn build(shape: &[u8]) -> (Expr, usize) {
        let mut stack: Vec<Expr> = Vec::new();
        let mut nodes = 0;
        for &op in shape {
            match (op % 3, stack.len()) {
                (1, n) if n >= 1 => {
                    let a = stack.pop().unwrap();
                    stack.push(neg(a));
                }
                (2, n) if n >= 2 => {
                    let b = stack.pop().unwrap();
                    let a = stack.pop().unwrap();
                    stack.push(add(a, b));
                }
                _ => stack.push(lit(u64::from(op % 7))),
            }
            nodes += 1;
        }
        while stack.len() > 1 {
            let b = stack.pop().unwrap();
            let a = stack.pop().unwrap();
            stack.push(add(a, b));
            nodes += 1;
        }
        match stack.pop() {
            Some(e) => (e, nodes),
            None => (lit(0), 1),
        }
    }

    proptest! {
        #[test]
        fn identity_is_a_fixed_point(shape in proptest::collection::vec(any::<u8>(), 0..40)) {
            let (x, nodes) = build(&shape);
            let mut builder = make_update_apply_builder::<Exprs, _>(Ok::<Expr, Infallible>);
            prop_assert_eq!(builder.apply(x).unwrap(), x);
            prop_assert_eq!(builder.visits(), nodes);
        }

        #[test]
        fn rewriting_is_deterministic(shape in proptest::collection::vec(any::<u8>(), 0..40)) {
            let (x, _) = build(&shape);
            let first = make_update_apply_builder::<Exprs, _>(five_to_six).apply(x).unwrap();
            let second = make_update_apply_builder::<Exprs, _>(five_to_six).apply(x).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

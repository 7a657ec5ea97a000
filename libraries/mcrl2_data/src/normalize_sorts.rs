//! Replacing sort aliases by their definitions.

use crate::data_specification::SortAliasMap;
use crate::families::SortExpressions;
use crate::sort_expression::SortExpression;
use mcrl2_core::{Apply, Builder, Error, Family, TermValue, Update};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeSortsError {
    #[error("sort alias `{alias}` is defined in terms of itself")]
    CyclicAlias { alias: String },
}

/// Builder that resolves aliases to a fixed point.
///
/// A resolved definition is itself normalised before it is used, and the
/// result is cached per alias.
struct Normaliser<'a> {
    aliases: &'a SortAliasMap,
    resolved: FxHashMap<SortExpression, SortExpression>,
    pending: FxHashSet<SortExpression>,
    visits: usize,
}

impl<'a> Normaliser<'a> {
    fn new(aliases: &'a SortAliasMap) -> Self {
        Normaliser {
            aliases,
            resolved: FxHashMap::default(),
            pending: FxHashSet::default(),
            visits: 0,
        }
    }
}

impl Builder<SortExpressions> for Normaliser<'_> {
    fn visit(&mut self, sort: SortExpression) -> Result<SortExpression, Error> {
        self.visits += 1;
        let Some(&reference) = self.aliases.get(&sort) else {
            return Ok(sort);
        };
        if let Some(&normal) = self.resolved.get(&sort) {
            return Ok(normal);
        }
        if !self.pending.insert(sort) {
            return Err(Error::Update {
                family: SortExpressions::NAME,
                term: sort.term(),
                source: Box::new(NormalizeSortsError::CyclicAlias {
                    alias: sort.to_string(),
                }),
            });
        }
        let normal = reference.apply_with(self);
        self.pending.remove(&sort);
        let normal = normal?;
        self.resolved.insert(sort, normal);
        Ok(normal)
    }
}

/// Replace every alias in `x` by the sort it stands for.
#[tracing::instrument(level = "debug", skip_all, fields(aliases = aliases.len()))]
pub fn normalize_sorts<T: Apply<SortExpressions>>(x: T, aliases: &SortAliasMap) -> Result<T, Error> {
    let mut normaliser = Normaliser::new(aliases);
    let result = x.apply_with(&mut normaliser);
    tracing::trace!(visits = normaliser.visits, "normalize sorts");
    result
}

/// Replace every alias in `x` by the sort it stands for, in place.
#[tracing::instrument(level = "debug", skip_all, fields(aliases = aliases.len()))]
pub fn normalize_sorts_in_place<T: Update<SortExpressions>>(x: &mut T, aliases: &SortAliasMap) -> Result<(), Error> {
    let mut normaliser = Normaliser::new(aliases);
    let result = x.update_with(&mut normaliser);
    tracing::trace!(visits = normaliser.visits, "normalize sorts");
    result
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use super::*;
    use crate::data_expression::{variable, DataExpression};
    use crate::data_specification::DataSpecification;
    use crate::sort_expression::{basic_sort, container_sort, function_sort, ContainerKind};
    use crate::{sort_bool, sort_nat};
    use mcrl2_core::IdentifierString;
    use pretty_assertions::assert_eq;

    fn sort(name: &str) -> SortExpression {
        basic_sort(IdentifierString::new(name))
    }

    #[test]
    fn aliases_are_resolved_inside_sorts() {
        let mut data = DataSpecification::new();
        data.add_alias(sort("Index"), sort_nat::nat());
        let aliases = data.sort_alias_map();

        let s = function_sort(&[sort("Index"), sort_bool::bool_()], sort("Index"));
        let expected = function_sort(&[sort_nat::nat(), sort_bool::bool_()], sort_nat::nat());
        assert_eq!(normalize_sorts(s, &aliases).unwrap(), expected);
    }

    #[test]
    fn chains_resolve_to_a_fixed_point() {
        let mut data = DataSpecification::new();
        data.add_alias(sort("A"), container_sort(ContainerKind::List, sort("B")));
        data.add_alias(sort("B"), sort("C"));
        data.add_alias(sort("C"), sort_nat::nat());
        let aliases = data.sort_alias_map();

        let expected = container_sort(ContainerKind::List, sort_nat::nat());
        assert_eq!(normalize_sorts(sort("A"), &aliases).unwrap(), expected);
    }

    #[test]
    fn sorts_without_aliases_keep_their_handle() {
        let aliases = SortAliasMap::default();
        let s = function_sort(&[sort("X")], sort("Y"));
        assert_eq!(normalize_sorts(s, &aliases).unwrap(), s);
    }

    #[test]
    fn variables_in_expressions_are_normalised() {
        let mut data = DataSpecification::new();
        data.add_alias(sort("Index"), sort_nat::nat());
        let aliases = data.sort_alias_map();

        let x: DataExpression = variable(IdentifierString::new("x"), sort("Index")).into();
        let expected: DataExpression = variable(IdentifierString::new("x"), sort_nat::nat()).into();
        assert_eq!(normalize_sorts(x, &aliases).unwrap(), expected);
    }

    #[test]
    fn cyclic_aliases_are_reported() {
        let mut data = DataSpecification::new();
        data.add_alias(sort("A"), container_sort(ContainerKind::Set, sort("B")));
        data.add_alias(sort("B"), sort("A"));
        let aliases = data.sort_alias_map();

        let err = normalize_sorts(sort("A"), &aliases).unwrap_err();
        match err {
            Error::Update { family, term, source } => {
                assert_eq!(family, "sort expression");
                assert_eq!(term, sort("A").term());
                assert_eq!(source.to_string(), "sort alias `SortId(A)` is defined in terms of itself");
            }
            other => panic!("expected an update error, got {other:?}"),
        }
    }
}

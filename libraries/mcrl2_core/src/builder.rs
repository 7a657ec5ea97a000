//! Lifting update functions from one family to the values that contain it.
//!
//! # Design
//!
//! A *family* `G` (data expressions, sort expressions, ...) is a marker type
//! implementing [`Family`]. Every type that can contain `G` positions says
//! how to walk them:
//!
//! - term values implement [`Apply<G>`] and are rebuilt functionally,
//!   returning the original handle when nothing below them changed;
//! - owning compounds (records with term-valued fields) implement
//!   [`Update<G>`] and have their fields reassigned in place.
//!
//! A type implements one of the two, so `UpdateApplyBuilder::apply` and
//! `UpdateApplyBuilder::update` are selected by the type of the argument at
//! compile time.
//!
//! Walks visit children left to right in field order. At a `G` position the
//! children are rebuilt first and [`Builder::visit`] is called on the
//! rebuilt node afterwards, so a visit always sees transformed subterms.
//!
//! # Example
//!
//! ```text
//! let mut builder = make_update_apply_builder::<DataExpressions, _>(|x| {
//!     Ok::<_, Infallible>(if x == five { six } else { x })
//! });
//! builder.update(&mut specification)?;
//! let rewritten = builder.apply(condition)?;
//! ```

use crate::error::{BoxError, Error};
use crate::term_value::TermValue;
use mcrl2_aterm::{pool, Term};
use std::marker::PhantomData;

/// A family of terms that an update function can be applied to.
pub trait Family: 'static {
    type Node: TermValue;

    /// Human-readable name used in errors.
    const NAME: &'static str;
}

/// Receives every position of family `G`, children first.
pub trait Builder<G: Family> {
    fn visit(&mut self, node: G::Node) -> Result<G::Node, Error>;
}

/// Functional traversal of a term value.
pub trait Apply<G: Family>: TermValue {
    /// Rebuild `self` with `builder` applied to every `G` position.
    ///
    /// Must return `self` unchanged (same handle) when no position changed.
    fn apply_with<B: Builder<G>>(self, builder: &mut B) -> Result<Self, Error>;
}

/// In-place traversal of an owning compound.
///
/// On error the value is left in a well-typed but unspecified state.
pub trait Update<G: Family> {
    fn update_with<B: Builder<G>>(&mut self, builder: &mut B) -> Result<(), Error>;
}

impl<G: Family, T: Apply<G>> Update<G> for Vec<T> {
    fn update_with<B: Builder<G>>(&mut self, builder: &mut B) -> Result<(), Error> {
        for item in self.iter_mut() {
            *item = item.apply_with(builder)?;
        }
        Ok(())
    }
}

impl<G: Family, T: Apply<G>> Update<G> for Option<T> {
    fn update_with<B: Builder<G>>(&mut self, builder: &mut B) -> Result<(), Error> {
        if let Some(item) = self {
            *item = item.apply_with(builder)?;
        }
        Ok(())
    }
}

/// Builder that applies `function` at every position of family `G`.
pub struct UpdateApplyBuilder<G, F> {
    function: F,
    visits: usize,
    _family: PhantomData<fn() -> G>,
}

/// Lift `function` to every value that contains positions of family `G`.
pub fn make_update_apply_builder<G: Family, F>(function: F) -> UpdateApplyBuilder<G, F> {
    UpdateApplyBuilder {
        function,
        visits: 0,
        _family: PhantomData,
    }
}

impl<G, F> UpdateApplyBuilder<G, F> {
    /// Number of `G` positions visited so far.
    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn into_function(self) -> F {
        self.function
    }
}

impl<G, F, E> Builder<G> for UpdateApplyBuilder<G, F>
where
    G: Family,
    F: FnMut(G::Node) -> Result<G::Node, E>,
    E: Into<BoxError>,
{
    fn visit(&mut self, node: G::Node) -> Result<G::Node, Error> {
        self.visits += 1;
        (self.function)(node).map_err(|e| Error::Update {
            family: G::NAME,
            term: node.term(),
            source: e.into(),
        })
    }
}

impl<G, F> UpdateApplyBuilder<G, F>
where
    G: Family,
    Self: Builder<G>,
{
    /// Return `x` with the function applied at every `G` position.
    pub fn apply<T: Apply<G>>(&mut self, x: T) -> Result<T, Error> {
        let before = self.visits;
        let result = x.apply_with(self);
        tracing::trace!(family = G::NAME, visits = self.visits - before, "apply");
        result
    }

    /// Apply the function at every `G` position of `x`, in place.
    pub fn update<T: Update<G>>(&mut self, x: &mut T) -> Result<(), Error> {
        let before = self.visits;
        let result = x.update_with(self);
        tracing::trace!(family = G::NAME, visits = self.visits - before, "update");
        result
    }
}

/// Apply `builder` to every element of the list term `list`, viewing each
/// element as a `T`.
///
/// Returns `list` itself when no element changed.
pub fn apply_list<G, T, B>(list: Term, builder: &mut B) -> Result<Term, Error>
where
    G: Family,
    T: Apply<G>,
    B: Builder<G>,
{
    let elements = pool().children(list);
    let rebuilt = apply_terms::<G, T, B>(&elements, builder)?;
    Ok(pool().rebuild(list, &rebuilt)?)
}

/// Apply `builder` to each term of `terms`, viewing each as a `T`.
pub fn apply_terms<G, T, B>(terms: &[Term], builder: &mut B) -> Result<Vec<Term>, Error>
where
    G: Family,
    T: Apply<G>,
    B: Builder<G>,
{
    terms
        .iter()
        .map(|&term| Ok(T::from_term_unchecked(term).apply_with(builder)?.term()))
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;

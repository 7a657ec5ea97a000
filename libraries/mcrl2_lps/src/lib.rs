//! Linear process specifications.
//!
//! A linear process is a set of summands over process parameters. Terms
//! ([`ActionLabel`], [`Action`], [`ProcessInitializer`]) are shared values;
//! the process, its summands and the [`Specification`] are owning records
//! whose data and sort positions are rewritten in place through
//! [`mcrl2_core::UpdateApplyBuilder::update`].

mod action;
mod linear_process;
mod specification;
mod summand;
mod symbols;
mod traverse;

pub use action::{action, action_label, is_action, is_action_label, Action, ActionLabel, MultiAction};
pub use linear_process::{is_process_initializer, process_initializer, LinearProcess, ProcessInitializer};
pub use specification::Specification;
pub use summand::{ActionSummand, DeadlockSummand};
pub use traverse::{LabelSorts, ParameterSorts};

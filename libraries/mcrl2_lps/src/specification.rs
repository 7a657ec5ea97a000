//! Linear process specifications.

use crate::action::ActionLabel;
use crate::linear_process::{LinearProcess, ProcessInitializer};
use mcrl2_core::Error;
use mcrl2_data::{DataSpecification, Variable};

/// A linear process together with everything it refers to.
///
/// Owning compound. Updates reassign its fields in place; the data
/// specification is not traversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Specification {
    pub data: DataSpecification,
    pub action_labels: Vec<ActionLabel>,
    pub global_variables: Vec<Variable>,
    pub process: LinearProcess,
    pub initial_process: ProcessInitializer,
}

impl Specification {
    /// Translate number literals into constructor form in the process and
    /// its initial state.
    ///
    /// The data specification is left alone; translate it separately with
    /// [`mcrl2_data::translate_user_notation_in_place`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn translate_user_notation(&mut self) -> Result<(), Error> {
        mcrl2_data::translate_user_notation_in_place(self)
    }

    /// Replace sort aliases declared in `self.data` by their definitions.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn normalize_sorts(&mut self) -> Result<(), Error> {
        let aliases = self.data.sort_alias_map();
        mcrl2_data::normalize_sorts_in_place(self, &aliases)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;

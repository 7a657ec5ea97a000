//! Core infrastructure shared by the mCRL2 libraries.
//!
//! - [`construction`]: canonical constants, constructed once per declaration
//! - [`IdentifierString`]: identifier atoms of the term language
//! - [`TermValue`]: typed views on terms of one family
//! - [`builder`]: lifting an update function on one family to every value
//!   that contains it
//!
//! # Canonical Constants
//!
//! Sorts, operator symbols and their names are declared with
//! [`singleton_expression!`] and [`singleton_identifier!`]. Each declaration
//! owns one process-wide slot; the first call to `instance()` builds the term,
//! later calls return the cached handle. Since terms are maximally shared,
//! comparing against a canonical constant is a handle comparison.

pub mod builder;
pub mod construction;
mod error;
mod identifier_string;
mod term_value;

pub use builder::{make_update_apply_builder, Apply, Builder, Family, Update, UpdateApplyBuilder};
pub use construction::{Singleton, SingletonExpression, SingletonIdentifier, SingletonState};
pub use error::{BoxError, Error};
pub use identifier_string::{is_identifier_string, IdentifierString};
pub use term_value::TermValue;

#[doc(hidden)]
pub mod __private {
    pub use mcrl2_aterm::Term;
}

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=mcrl2_core=debug` to see canonical constants being
/// constructed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host application takes precedence.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

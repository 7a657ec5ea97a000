//! Canonical constants.
//!
//! A canonical constant is a term that is built once, by a recipe that
//! belongs to one declaration, and reused everywhere afterwards. Each
//! declaration is a type implementing [`SingletonExpression`]; its slot is a
//! `static` [`Singleton`] private to that type, so two declarations never
//! share a slot even if their recipes produce the same term.
//!
//! # Example
//!
//! ```text
//! singleton_identifier! {
//!     /// Name of the sort of booleans.
//!     pub struct BoolName = "Bool";
//! }
//!
//! singleton_expression! {
//!     /// The sort of booleans.
//!     pub struct BoolSort: SortExpression = basic_sort(BoolName::instance());
//! }
//!
//! assert_eq!(BoolSort::instance(), BoolSort::instance());
//! ```
//!
//! # Failure Policy
//!
//! A recipe may fail. The failure is returned to the observer that triggered
//! the construction and the slot is left uninitialised, so the next observer
//! runs the recipe again. A failed construction is never cached. A recipe
//! that panics leaves the slot uninitialised in the same way.

use crate::error::{BoxError, Error};
use crate::identifier_string::IdentifierString;
use parking_lot::Mutex;
use std::mem;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

/// Lifecycle of a [`Singleton`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SingletonState {
    Uninitialised,
    Initialising,
    Ready,
}

impl SingletonState {
    const fn to_u8(self) -> u8 {
        match self {
            SingletonState::Uninitialised => 0,
            SingletonState::Initialising => 1,
            SingletonState::Ready => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => SingletonState::Initialising,
            2 => SingletonState::Ready,
            _ => SingletonState::Uninitialised,
        }
    }
}

/// Process-wide slot holding one canonical constant.
///
/// Reads after publication go through `OnceLock::get` and take no lock.
/// Construction is serialised by a mutex and re-checked under it, so the
/// recipe runs at most once per successful initialisation.
pub struct Singleton<T> {
    name: &'static str,
    value: OnceLock<T>,
    guard: Mutex<()>,
    state: AtomicU8,
}

impl<T: Clone> Singleton<T> {
    /// Create an empty slot. `name` identifies the declaration in errors and logs.
    pub const fn new(name: &'static str) -> Self {
        Singleton {
            name,
            value: OnceLock::new(),
            guard: parking_lot::const_mutex(()),
            state: AtomicU8::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> SingletonState {
        SingletonState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// The cached value, if the slot is ready.
    pub fn get(&self) -> Option<T> {
        self.value.get().cloned()
    }

    /// Return the cached value, running `init` first if the slot is empty.
    ///
    /// Concurrent callers on an empty slot block until the winner has either
    /// published the value or failed.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<T, Error>
    where
        F: FnOnce() -> Result<T, BoxError>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }

        let _guard = self.guard.lock();

        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }

        self.set_state(SingletonState::Initialising);
        let reset = ResetOnUnwind(&self.state);
        let result = init();
        mem::forget(reset);
        match result {
            Ok(value) => {
                tracing::debug!(decl = self.name, "canonical constant initialised");
                let published = self.value.get_or_init(|| value).clone();
                self.set_state(SingletonState::Ready);
                Ok(published)
            }
            Err(source) => {
                tracing::debug!(decl = self.name, error = %source, "canonical constant construction failed");
                self.set_state(SingletonState::Uninitialised);
                Err(Error::Construction {
                    decl: self.name,
                    source,
                })
            }
        }
    }

    fn set_state(&self, state: SingletonState) {
        self.state.store(state.to_u8(), Ordering::Release);
    }
}

/// Puts a slot back to uninitialised if its recipe panics.
struct ResetOnUnwind<'a>(&'a AtomicU8);

impl Drop for ResetOnUnwind<'_> {
    fn drop(&mut self) {
        self.0
            .store(SingletonState::Uninitialised.to_u8(), Ordering::Release);
    }
}

/// Declaration of a canonical constant.
///
/// Use [`crate::singleton_expression!`] rather than implementing this by hand;
/// the macro gives every declaration its own static slot.
pub trait SingletonExpression: 'static {
    type Expression: Clone + Send + Sync + 'static;

    /// The slot owned by this declaration.
    fn slot() -> &'static Singleton<Self::Expression>;

    /// Build the constant. Called at most once per successful initialisation.
    fn initialise() -> Result<Self::Expression, BoxError>;

    /// The canonical value, constructing it on first use.
    fn try_instance() -> Result<Self::Expression, Error> {
        Self::slot().get_or_try_init(Self::initialise)
    }

    /// The canonical value, constructing it on first use.
    ///
    /// # Panics
    /// Panics if construction fails. Use `try_instance` to handle that case.
    fn instance() -> Self::Expression {
        Self::try_instance().unwrap_or_else(|e| panic!("{}", e))
    }
}

/// A canonical constant that is an identifier.
pub trait SingletonIdentifier: SingletonExpression<Expression = IdentifierString> {
    /// Text of the identifier.
    fn text() -> &'static str {
        Self::instance().as_str()
    }
}

/// Declare a canonical constant.
///
/// The right-hand side is evaluated on first observation only. Prefix it
/// with `fallible` to supply a `Result<_, BoxError>` instead of a value.
///
/// ```text
/// singleton_expression! {
///     /// Binary minus on integers.
///     pub struct Minus: FunctionSymbol = function_symbol(MinusName::instance(), int_int_int());
/// }
/// ```
#[macro_export]
macro_rules! singleton_expression {
    ($(#[$meta:meta])* $vis:vis struct $name:ident : $ty:ty = fallible $init:expr;) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::SingletonExpression for $name {
            type Expression = $ty;

            fn slot() -> &'static $crate::Singleton<$ty> {
                static SLOT: $crate::Singleton<$ty> = $crate::Singleton::new(stringify!($name));
                &SLOT
            }

            fn initialise() -> ::std::result::Result<$ty, $crate::BoxError> {
                $init
            }
        }
    };
    ($(#[$meta:meta])* $vis:vis struct $name:ident : $ty:ty = $init:expr;) => {
        $crate::singleton_expression! {
            $(#[$meta])*
            $vis struct $name: $ty = fallible ::std::result::Result::Ok($init);
        }
    };
}

/// Declare a canonical identifier.
///
/// ```text
/// singleton_identifier! {
///     pub struct MinusName = "-";
/// }
/// ```
#[macro_export]
macro_rules! singleton_identifier {
    ($(#[$meta:meta])* $vis:vis struct $name:ident = $text:expr;) => {
        $crate::singleton_expression! {
            $(#[$meta])*
            $vis struct $name: $crate::IdentifierString = $crate::IdentifierString::new($text);
        }

        impl $crate::SingletonIdentifier for $name {}
    };
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;

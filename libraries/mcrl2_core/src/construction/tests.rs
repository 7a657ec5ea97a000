use super::*;
use crate::TermValue;
use mcrl2_aterm::{pool, Term};
use std::sync::atomic::AtomicUsize;
use std::sync::Barrier;
use std::time::Duration;

crate::singleton_identifier! {
    struct Zero = "0";
}

crate::singleton_identifier! {
    /// Same text as `Zero`, different declaration.
    struct OtherZero = "0";
}

#[test]
fn identifier_constant_matches_store() {
    let first = Zero::instance();
    let second = Zero::instance();

    assert_eq!(first, second);
    assert_eq!(first.term(), pool().identifier("0"));
    assert_eq!(Zero::text(), "0");
    assert_eq!(Zero::slot().state(), SingletonState::Ready);
}

#[test]
fn declarations_own_separate_slots() {
    assert_eq!(Zero::instance(), OtherZero::instance());
    assert!(!std::ptr::eq(
        Zero::slot() as *const Singleton<IdentifierString>,
        OtherZero::slot() as *const Singleton<IdentifierString>,
    ));
    assert_eq!(Zero::slot().name(), "Zero");
    assert_eq!(OtherZero::slot().name(), "OtherZero");
}

static COUNTED_CALLS: AtomicUsize = AtomicUsize::new(0);

crate::singleton_expression! {
    struct Counted: Term = {
        COUNTED_CALLS.fetch_add(1, Ordering::SeqCst);
        let f = pool().function_symbol("counted", 1);
        pool().make(f, &[pool().make_int(1)])
    };
}

#[test]
fn recipe_runs_once() {
    let handles: Vec<Term> = (0..5).map(|_| Counted::instance()).collect();
    assert!(handles.iter().all(|&h| h == handles[0]));
    assert_eq!(COUNTED_CALLS.load(Ordering::SeqCst), 1);
}

crate::singleton_identifier! {
    struct NeverObserved = "never";
}

#[test]
fn unobserved_slot_is_uninitialised() {
    assert_eq!(NeverObserved::slot().state(), SingletonState::Uninitialised);
    assert_eq!(NeverObserved::slot().get(), None);
}

static FLAKY_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

crate::singleton_expression! {
    struct Flaky: IdentifierString = fallible {
        if FLAKY_ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
            Err("store not ready".into())
        } else {
            Ok(IdentifierString::new("flaky"))
        }
    };
}

#[test]
fn failed_construction_is_retried() {
    match Flaky::try_instance() {
        Err(Error::Construction { decl, source }) => {
            assert_eq!(decl, "Flaky");
            assert_eq!(source.to_string(), "store not ready");
        }
        other => panic!("expected a construction error, got {other:?}"),
    }
    assert_eq!(Flaky::slot().state(), SingletonState::Uninitialised);

    let value = Flaky::try_instance().unwrap();
    assert_eq!(value.as_str(), "flaky");
    assert_eq!(Flaky::slot().state(), SingletonState::Ready);
    assert_eq!(Flaky::instance(), value);
    assert_eq!(FLAKY_ATTEMPTS.load(Ordering::SeqCst), 2);
}

static SLOW_CALLS: AtomicUsize = AtomicUsize::new(0);

crate::singleton_expression! {
    struct Slow: Term = {
        SLOW_CALLS.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        pool().identifier("slow")
    };
}

#[test]
fn concurrent_first_observations_share_one_construction() {
    const OBSERVERS: usize = 8;
    let barrier = Barrier::new(OBSERVERS);

    let handles: Vec<Term> = std::thread::scope(|s| {
        let workers: Vec<_> = (0..OBSERVERS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    Slow::instance()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert!(handles.iter().all(|&h| h == handles[0]));
    assert_eq!(handles[0], pool().identifier("slow"));
    assert_eq!(SLOW_CALLS.load(Ordering::SeqCst), 1);
}

static PANICKY_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

crate::singleton_expression! {
    struct Panicky: IdentifierString = {
        if PANICKY_ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("recipe panicked");
        }
        IdentifierString::new("panicky")
    };
}

#[test]
fn panicking_recipe_leaves_slot_uninitialised() {
    let outcome = std::panic::catch_unwind(Panicky::try_instance);
    assert!(outcome.is_err());
    assert_eq!(Panicky::slot().state(), SingletonState::Uninitialised);
    assert_eq!(Panicky::slot().get(), None);

    assert_eq!(Panicky::instance().as_str(), "panicky");
    assert_eq!(Panicky::slot().state(), SingletonState::Ready);
    assert_eq!(PANICKY_ATTEMPTS.load(Ordering::SeqCst), 2);
}

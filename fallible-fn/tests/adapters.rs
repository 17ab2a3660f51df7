use fallible_fn::*;
use std::error::Error;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("lookup {token} failed")]
struct LookupError {
    token: u64,
}

fn lookup(key: &str) -> Result<u64, LookupError> {
    match key {
        "alpha" => Ok(1),
        "beta" => Ok(2),
        _ => Err(LookupError { token: 0xdead }),
    }
}

#[test]
fn supply_returns_42() {
    let answer = wrap::supplier(|| Ok::<_, io::Error>(42));
    assert_eq!(answer.supply(), 42);
}

#[test]
fn supply_failure_keeps_message() {
    let disk = wrap::supplier(|| -> Result<u64, &'static str> { Err("disk unavailable") });
    let fault = PropagatedFault::catch(|| disk.supply()).unwrap_err();
    assert_eq!(fault.source().unwrap().to_string(), "disk unavailable");
}

#[test]
fn positive_predicate() {
    let positive = wrap::predicate(|x: i32| {
        if x < 0 {
            Err(format!("{x} is negative"))
        } else {
            Ok(x > 0)
        }
    });

    assert!(positive.test(5));
    assert!(!positive.test(0));
    let fault = PropagatedFault::catch(|| positive.test(-5)).unwrap_err();
    assert_eq!(fault.contract(), Contract::Test);
    assert_eq!(fault.cause().to_string(), "-5 is negative");
}

#[test]
fn cause_is_the_original_value() {
    let resolve = wrap::function(lookup);
    assert_eq!(resolve.apply("alpha"), 1);

    let fault = PropagatedFault::catch(|| resolve.apply("gamma")).unwrap_err();
    assert_eq!(
        fault.downcast_cause_ref::<LookupError>(),
        Some(&LookupError { token: 0xdead })
    );
    let cause = fault.into_cause().downcast::<LookupError>().unwrap();
    assert_eq!(cause.token, 0xdead);
}

#[test]
fn direct_and_wrapped_calls_agree() {
    let wrapped = wrap::function(lookup);
    for key in ["alpha", "beta"] {
        assert_eq!(lookup.apply(key), wrapped.apply(key));
        assert_eq!(lookup.try_apply(key).unwrap(), wrapped.apply(key));
    }

    let direct = PropagatedFault::catch(|| lookup.apply("nope")).unwrap_err();
    let through = PropagatedFault::catch(|| wrapped.apply("nope")).unwrap_err();
    assert_eq!(direct.cause().to_string(), through.cause().to_string());
    assert_eq!(direct.contract(), through.contract());
}

#[test]
fn repeated_calls_are_independent() {
    let calls = AtomicUsize::new(0);
    let flaky = wrap::operator(|n: u32| {
        calls.fetch_add(1, Ordering::Relaxed);
        if n == 0 { Err("zero") } else { Ok(n - 1) }
    });

    assert_eq!(flaky.transform(3), 2);
    assert_eq!(flaky.transform(3), 2);
    for _ in 0..2 {
        let fault = PropagatedFault::catch(|| flaky.transform(0)).unwrap_err();
        assert_eq!(fault.cause().to_string(), "zero");
    }
    assert_eq!(calls.load(Ordering::Relaxed), 4);
}

#[test]
fn consumers_only_see_the_plain_contract() {
    fn total(keys: &[&'static str], resolve: &impl Apply<&'static str, u64>) -> u64 {
        keys.iter().map(|key| resolve.apply(*key)).sum()
    }

    let resolve = wrap::function(lookup);
    assert_eq!(total(&["alpha", "beta", "beta"], &resolve), 5);

    let fault = PropagatedFault::catch(|| total(&["alpha", "zeta"], &resolve)).unwrap_err();
    assert!(fault.downcast_cause_ref::<LookupError>().is_some());
}

#[test]
fn adapted_values_cross_threads() {
    let resolve = wrap::function(lookup);
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = ["alpha", "beta", "missing"]
            .into_iter()
            .map(|key| {
                let resolve = &resolve;
                scope.spawn(move || PropagatedFault::catch(|| resolve.apply(key)).ok())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, [Some(1), Some(2), None]);
}

#[test]
fn uncaught_fault_reaches_join_as_payload() {
    let handle = thread::spawn(|| {
        let config = wrap::supplier(|| -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::NotFound, "config.toml"))
        });
        config.supply()
    });

    let payload = handle.join().unwrap_err();
    let fault = payload.downcast::<PropagatedFault>().unwrap();
    let cause = fault.downcast_cause_ref::<io::Error>().unwrap();
    assert_eq!(cause.kind(), io::ErrorKind::NotFound);
}

#[test]
fn anyhow_errors_are_failures() {
    let load = wrap::supplier(|| -> anyhow::Result<u8> {
        Err(anyhow::anyhow!("backend offline").context("loading profile"))
    });
    let fault = PropagatedFault::catch(|| load.supply()).unwrap_err();
    let report = fault.report().to_string();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": loading profile"));
    assert_eq!(lines[1], "  caused by: backend offline");
}

#[test]
fn eyre_reports_are_failures() {
    let check = wrap::predicate(|flag: &str| -> eyre::Result<bool> {
        match flag {
            "on" => Ok(true),
            "off" => Ok(false),
            other => Err(eyre::eyre!("unknown flag {other}")),
        }
    });
    assert!(check.test("on"));
    let fault = PropagatedFault::catch(|| check.test("maybe")).unwrap_err();
    assert_eq!(fault.cause().to_string(), "unknown flag maybe");
}

#[test]
fn plain_implementors_need_no_fallible_side() {
    struct Double;

    impl Apply<u8, u8> for Double {
        fn apply(&self, input: u8) -> u8 {
            input.wrapping_mul(2)
        }
    }

    fn run_twice(op: &impl Apply<u8, u8>, input: u8) -> u8 {
        op.apply(op.apply(input))
    }

    assert_eq!(run_twice(&Double, 3), 12);
    assert_eq!(run_twice(&wrap::function(|n: u8| n.checked_add(1).ok_or("overflow")), 3), 5);
}

//! Dispatch behaviour of a single logger: gating, substitution, target
//! membership, forced emission and failure isolation.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use fanout_log::gate::AtomicLevelGate;
use fanout_log::logger::{LogArgs, LogContext, Logger};
use fanout_log::model::{Level, LogEvent};
use fanout_log::target::{Target, TargetError, TargetFailure};
use serde_json::{json, Value};

mod common;

use common::{as_target, gated_logger, FailingTarget, PanickingTarget, RecordingTarget};

const LEVELS: [Level; 5] = [Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR, Level::FATAL];

#[test]
fn test_levels_below_gate_reach_no_target() {
    for gate in LEVELS {
        let (logger, _) = gated_logger("gate", gate);
        let target = RecordingTarget::new("all", Level::ALL);
        logger.add_target(as_target(&target));

        for level in LEVELS.into_iter().filter(|l| *l < gate) {
            logger.log(level, "below {0}", LogArgs::params([level.to_string()]));
        }
        logger.debug("debug", LogArgs::new());

        let expected = usize::from(Level::DEBUG >= gate);
        assert_eq!(target.count(), expected, "gate {gate}");
    }
}

#[test]
fn test_level_named_methods_map_to_levels() {
    let (logger, _) = gated_logger("named", Level::ALL);
    let target = RecordingTarget::new("all", Level::ALL);
    logger.add_target(as_target(&target));

    logger.debug("d", LogArgs::new());
    logger.info("i", LogArgs::new());
    logger.warn("w", LogArgs::new());
    logger.error("e", LogArgs::new());
    logger.fatal("f", LogArgs::new());

    let levels: Vec<Level> = target.events().iter().map(|e| e.level).collect();
    assert_eq!(levels, LEVELS);
}

#[test]
fn test_target_levels_filter_independently() {
    let (logger, _) = gated_logger("db", Level::ALL);
    let t1 = RecordingTarget::new("t1", Level::DEBUG);
    let t2 = RecordingTarget::new("t2", Level::ERROR);
    logger.add_target(as_target(&t1));
    logger.add_target(as_target(&t2));

    logger.warn("warn", LogArgs::new());
    assert_eq!(t1.messages(), ["warn"]);
    assert!(t2.messages().is_empty());

    logger.error("error", LogArgs::new());
    logger.fatal("fatal", LogArgs::new());
    assert_eq!(t1.messages(), ["warn", "error", "fatal"]);
    assert_eq!(t2.messages(), ["error", "fatal"]);
}

#[test]
fn test_target_stricter_than_gate() {
    let (logger, _) = gated_logger("db", Level::INFO);
    let strict = RecordingTarget::new("strict", Level::WARN);
    logger.add_target(as_target(&strict));

    logger.info("info", LogArgs::new());
    logger.warn("warn", LogArgs::new());

    assert_eq!(strict.messages(), ["warn"]);
}

#[test]
fn test_substitution_examples() {
    let (logger, _) = gated_logger("fmt", Level::ALL);
    let target = RecordingTarget::new("all", Level::ALL);
    logger.add_target(as_target(&target));

    logger.info("{0} and {1}", LogArgs::params(["A", "B"]));
    logger.info("{0} and {1}", LogArgs::params([Value::Null, json!("B")]));
    logger.info("{1} {0}", LogArgs::params(["x", "y"]));
    logger.info("{0} of {2}", LogArgs::params(["one"]));
    logger.info("{0} {0}", LogArgs::params([json!({"disk": "sda"})]));

    assert_eq!(
        target.messages(),
        [
            "A and B",
            "null and B",
            "y x",
            "one of {2}",
            "{\"disk\":\"sda\"} {\"disk\":\"sda\"}",
        ]
    );
}

#[test]
fn test_cause_reaches_targets() {
    let (logger, _) = gated_logger("io", Level::ALL);
    let target = RecordingTarget::new("all", Level::ALL);
    logger.add_target(as_target(&target));

    let cause = std::io::Error::other("connection reset");
    logger.error("peer {0} dropped", LogArgs::params(["10.0.0.7"]).with_cause(cause));
    logger.error("no cause", LogArgs::new());

    let events = target.events();
    assert_eq!(events[0].message, "peer 10.0.0.7 dropped");
    assert_eq!(events[0].category, "io");
    assert_eq!(events[0].cause.as_deref(), Some("connection reset"));
    assert_eq!(events[1].cause, None);
}

#[test]
fn test_duplicate_add_and_absent_remove() {
    let (logger, _) = gated_logger("set", Level::ALL);
    let a = RecordingTarget::new("a", Level::ALL);
    let b = RecordingTarget::new("b", Level::ALL);

    logger.add_target(as_target(&a));
    logger.add_target(as_target(&a));
    assert_eq!(logger.targets().len(), 1);

    logger.remove_target(&as_target(&b));
    assert_eq!(logger.targets().len(), 1);

    logger.info("once", LogArgs::new());
    assert_eq!(a.messages(), ["once"]);
}

#[test]
fn test_equal_but_distinct_targets_are_both_kept() {
    let (logger, _) = gated_logger("set", Level::ALL);
    let first = RecordingTarget::new("same-name", Level::ALL);
    let second = RecordingTarget::new("same-name", Level::ALL);

    logger.add_target(as_target(&first));
    logger.add_target(as_target(&second));

    assert_eq!(logger.targets().len(), 2);
}

#[test]
fn test_has_target_tracks_membership() {
    let (logger, _) = gated_logger("set", Level::ALL);
    let a = RecordingTarget::new("a", Level::ALL);
    let b = RecordingTarget::new("b", Level::ALL);
    assert!(!logger.has_target());

    logger.add_target(as_target(&a));
    logger.add_target(as_target(&b));
    assert!(logger.has_target());

    logger.remove_target(&as_target(&a));
    assert!(logger.has_target());
    logger.remove_target(&as_target(&b));
    assert!(!logger.has_target());
}

#[test]
fn test_forced_dispatch_ignores_every_level() {
    let (logger, _) = gated_logger("audit", Level::NONE);
    let t1 = RecordingTarget::new("t1", Level::DEBUG);
    let t2 = RecordingTarget::new("t2", Level::FATAL);
    logger.add_target(as_target(&t1));
    logger.add_target(as_target(&t2));

    logger.info("suppressed", LogArgs::new());
    logger.log_forced(Level::DEBUG, "banner {0}", LogArgs::params(["v1"]));
    logger.dispatch(Level::ALL, "raw", LogArgs::new(), false);

    assert_eq!(t1.messages(), ["banner v1", "raw"]);
    assert_eq!(t2.messages(), ["banner v1", "raw"]);
}

#[test]
fn test_forced_dispatch_without_targets_is_a_no_op() {
    let (logger, reporter) = gated_logger("empty", Level::ALL);
    logger.log_forced(Level::FATAL, "nobody listens", LogArgs::new());
    assert!(reporter.failures().is_empty());
}

#[test]
fn test_failing_target_does_not_stop_delivery() {
    let (logger, reporter) = gated_logger("isolation", Level::ALL);
    let failing = Arc::new(FailingTarget::default());
    let after = RecordingTarget::new("after", Level::ALL);
    logger.add_target(as_target(&failing));
    logger.add_target(as_target(&after));

    logger.error("first", LogArgs::new());
    logger.error("second", LogArgs::new());

    assert_eq!(failing.attempts.load(Ordering::SeqCst), 2);
    assert_eq!(after.messages(), ["first", "second"]);

    let failures = reporter.failures();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].0, "failing");
    assert!(failures[0].1.contains("disk full"));
}

#[test]
fn test_panicking_target_is_isolated() {
    let (logger, reporter) = gated_logger("isolation", Level::ALL);
    let after = RecordingTarget::new("after", Level::ALL);
    logger.add_target(Arc::new(PanickingTarget));
    logger.add_target(as_target(&after));

    logger.fatal("still delivered", LogArgs::new());

    assert_eq!(after.messages(), ["still delivered"]);
    let failures = reporter.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "panicking");
    assert!(failures[0].1.contains("sink exploded"));
}

#[test]
fn test_panicking_reporter_does_not_reach_caller() {
    fn broken_reporter(_failure: &TargetFailure<'_>) {
        panic!("reporter broke");
    }

    let context = LogContext::default().with_reporter(Arc::new(broken_reporter));
    let logger = Logger::new("isolation", context);
    let after = RecordingTarget::new("after", Level::ALL);
    logger.add_target(Arc::new(FailingTarget::default()));
    logger.add_target(as_target(&after));

    logger.error("survives", LogArgs::new());

    assert_eq!(after.messages(), ["survives"]);
}

#[test]
fn test_gate_change_applies_to_later_calls() {
    let gate = Arc::new(AtomicLevelGate::new(Level::ERROR));
    let logger = Logger::new("hot", LogContext::new(gate.clone()));
    let target = RecordingTarget::new("all", Level::ALL);
    logger.add_target(as_target(&target));

    logger.info("before", LogArgs::new());
    gate.set_target_level(Level::INFO);
    logger.info("after", LogArgs::new());

    assert_eq!(target.messages(), ["after"]);
}

#[test]
fn test_target_can_reconfigure_its_logger() {
    struct SelfExtending {
        logger: std::sync::Mutex<Option<Arc<Logger>>>,
    }

    impl Target for SelfExtending {
        fn name(&self) -> &str {
            "self-extending"
        }

        fn level(&self) -> Level {
            Level::ALL
        }

        fn log_event(&self, _event: &LogEvent) -> Result<(), TargetError> {
            if let Some(logger) = self.logger.lock().unwrap().take() {
                let extra: Arc<dyn Target> = RecordingTarget::new("extra", Level::ALL);
                logger.add_target(extra);
            }
            Ok(())
        }
    }

    let (logger, _) = gated_logger("reentrant", Level::ALL);
    let logger = Arc::new(logger);
    let target = Arc::new(SelfExtending {
        logger: std::sync::Mutex::new(Some(logger.clone())),
    });
    logger.add_target(target.clone());

    logger.info("reconfigure", LogArgs::new());

    assert_eq!(logger.targets().len(), 2);
}

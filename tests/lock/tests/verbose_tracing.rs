//! Lock tests: the verbosity flag controls per-expansion tracing events.
//!
//! A collecting layer records the `event` field of every tracing event
//! emitted while a solve runs under a scoped subscriber.

use std::sync::{Arc, Mutex};

use cubestar_search::search::AStarSolver;
use cubestar_kernel::carrier::moves::MoveV1;
use lock_tests::{mv, reparenting_scramble, scrambled_world};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct EventNames(Arc<Mutex<Vec<String>>>);

impl EventNames {
    fn count(&self, name: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|n| *n == name).count()
    }
}

struct EventField(Option<String>);

impl Visit for EventField {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for EventNames {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventField(None);
        event.record(&mut visitor);
        if let Some(name) = visitor.0 {
            self.0.lock().unwrap().push(name);
        }
    }
}

struct Totals {
    expansions: u64,
    reparents: u64,
}

fn solve_cube_with_events(
    size: u32,
    scramble: &[MoveV1],
    verbose: bool,
    heuristic: &str,
) -> (EventNames, Totals) {
    let names = EventNames::default();
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(names.clone());

    let totals = tracing::subscriber::with_default(subscriber, || {
        let world = scrambled_world(size, scramble);
        let mut solver = AStarSolver::new(world, heuristic, verbose).unwrap();
        let result = solver.solve_to_solved().unwrap();
        assert!(result.is_goal_reached());
        Totals {
            expansions: result.graph.metadata.total_expansions,
            reparents: result.graph.metadata.total_reparents,
        }
    });
    (names, totals)
}

fn solve_with_events(verbose: bool, heuristic: &str) -> (EventNames, u64) {
    let (names, totals) =
        solve_cube_with_events(3, &[mv('X', 0, 1), mv('Y', 2, 1)], verbose, heuristic);
    (names, totals.expansions)
}

#[test]
fn verbose_solve_logs_one_event_per_expansion() {
    let (names, expansions) = solve_with_events(true, "manhattan");
    assert!(expansions > 0);
    assert_eq!(names.count("expand") as u64, expansions);
    assert_eq!(names.count("solve_start"), 1);
    assert_eq!(names.count("solve_end"), 1);
}

#[test]
fn verbose_solve_logs_one_event_per_reparent() {
    let (names, totals) = solve_cube_with_events(2, &reparenting_scramble(), true, "manhattan");
    assert!(totals.reparents > 0);
    assert_eq!(names.count("reparent") as u64, totals.reparents);
    assert_eq!(names.count("expand") as u64, totals.expansions);
}

#[test]
fn quiet_solve_logs_only_start_and_end() {
    let (names, _) = solve_with_events(false, "manhattan");
    assert_eq!(names.count("expand"), 0);
    assert_eq!(names.count("reparent"), 0);
    assert_eq!(names.count("solve_start"), 1);
    assert_eq!(names.count("solve_end"), 1);
}

#[test]
fn reference_only_heuristic_warns_at_construction() {
    let (names, _) = solve_with_events(false, "euclidean");
    assert_eq!(names.count("heuristic_reference_only"), 1);
}

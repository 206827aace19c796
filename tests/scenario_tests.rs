#![cfg(all(feature = "file", feature = "template", feature = "random", feature = "serde"))]
//! End-to-end chains across the wrappers and the adapters.

use std::any::Any;
use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::{fixture, rstest};
use serde_json::json;
use stepwise::effect::{JsonOutcome, ResultState, file, random, template};
use stepwise::typeclass::{Composable, Maybe, Monad, Outcome, unwrap};
use stepwise::{ConstructionError, Error};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn workspace() -> TempDir {
    init_tracing();
    tempfile::tempdir().unwrap()
}

// =============================================================================
// Core scenarios
// =============================================================================

#[rstest]
fn unit_then_bind_adds_one() {
    let result = Monad::unit(1).flat_map(|a| Monad::unit(a + 1));
    assert_eq!(unwrap(result), 2);
}

#[derive(Debug, Clone, PartialEq)]
struct Tally {
    outcome: i32,
    ok: bool,
}

impl Outcome for Tally {
    fn success(&self) -> Option<bool> {
        Some(self.ok)
    }
}

#[rstest]
fn maybe_three_step_chain_stops_after_zero() {
    let applied = Cell::new(0);
    let add_natural_number = |tally: Tally, amount: i32| {
        applied.set(applied.get() + 1);
        if amount > 0 {
            Maybe::unit(Tally {
                outcome: tally.outcome + amount,
                ok: true,
            })
        } else {
            Maybe::unit(Tally {
                outcome: tally.outcome,
                ok: false,
            })
        }
    };

    let result = Maybe::unit(Tally { outcome: 1, ok: true })
        .flat_map_with(add_natural_number, 1)
        .flat_map_with(add_natural_number, 0)
        .flat_map_with(add_natural_number, 1);

    assert_eq!(result.into_inner().outcome, 2);
    assert_eq!(applied.get(), 2);
}

#[rstest]
fn reflective_bind_names_the_offending_function() {
    fn stringify(value: i32) -> Box<dyn Any> {
        Box::new(format!("{}", value + 1))
    }

    let error = Monad::unit(5).try_flat_map(stringify).unwrap_err();

    assert!(error.to_string().contains("stringify"));
    assert!(error.to_string().contains("did not return type"));
}

// =============================================================================
// File chains
// =============================================================================

struct CountingReader(Rc<Cell<usize>>);

impl Read for CountingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        self.0.set(self.0.get() + 1);
        Ok(0)
    }
}

#[rstest]
fn failed_state_never_reaches_read_primitive() {
    init_tracing();
    let reads = Rc::new(Cell::new(0));
    let state = ResultState::new(
        Some(CountingReader(Rc::clone(&reads))),
        Some("simulated failure".to_string()),
        Some(false),
    );

    let result = unwrap(Monad::unit(state).flat_map(file::read_to_string));

    assert_eq!(reads.get(), 0);
    assert_eq!(result.success(), Some(false));
    assert_eq!(result.error_message(), Some("simulated failure"));
}

#[rstest]
fn open_then_read_returns_contents(workspace: TempDir) {
    let path = workspace.path().join("visitor.txt");
    fs::write(&path, "Another visitor!").unwrap();

    let result = Monad::unit(ResultState::<()>::empty())
        .flat_map(|state| file::open_read(state, &path))
        .flat_map(file::read_to_string)
        .into_inner();

    assert!(result.is_ok());
    assert_eq!(result.into_payload().as_deref(), Some("Another visitor!"));
}

#[rstest]
fn missing_file_failure_survives_the_chain(workspace: TempDir) {
    let path = workspace.path().join("absent.txt");

    let result = Monad::unit(ResultState::<()>::empty())
        .flat_map(|state| file::open_read(state, &path))
        .flat_map(file::read_to_string)
        .into_inner();

    assert_eq!(result.success(), Some(false));
    assert!(result.error_message().unwrap().contains("absent.txt"));
}

// =============================================================================
// Templates
// =============================================================================

#[rstest]
fn template_chain_renders_from_disk(workspace: TempDir) {
    let path = workspace.path().join("sample.txt.j2");
    fs::write(&path, "Happy {{ holiday }}, {{ to }}! From {{ from }}").unwrap();
    let data = HashMap::from([("holiday", "Birthday"), ("to", "Mum"), ("from", "Gus")]);

    let rendered = template::render_from_file(Monad::unit(ResultState::<()>::empty()), &path, &data);

    assert_eq!(rendered.as_deref(), Some("Happy Birthday, Mum! From Gus"));
}

#[rstest]
fn template_chain_returns_none_on_upstream_failure(workspace: TempDir) {
    let path = workspace.path().join("sample.txt.j2");
    fs::write(&path, "{{ x }}").unwrap();

    let upstream = Monad::unit(ResultState::<()>::failed("unit test"));
    let rendered = template::render_from_file(upstream, &path, &json!({"x": 1}));

    assert_eq!(rendered, None);
}

// =============================================================================
// Random numbers
// =============================================================================

#[rstest]
#[case(3, 3, 9)]
#[case(7, -2, -14)]
fn multiply_random_with_pinned_value(#[case] pinned: i64, #[case] factor: i64, #[case] expected: i64) {
    let mut rng = StdRng::seed_from_u64(11);
    let product = random::multiply_random(Monad::unit(ResultState::ok(pinned)), &mut rng, factor);
    assert_eq!(product, Some(expected));
}

#[rstest]
fn multiply_random_draws_when_nothing_is_pinned() {
    let mut rng = StdRng::seed_from_u64(11);
    let product = random::multiply_random(Monad::unit(ResultState::empty()), &mut rng, 2).unwrap();
    assert!((0..=200).contains(&product));
    assert_eq!(product % 2, 0);
}

// =============================================================================
// Loosely typed records
// =============================================================================

#[rstest]
fn maybe_over_json_records_fails_fast_without_indicator() {
    let error = Maybe::<JsonOutcome>::try_unit(json!({"total": 1})).unwrap_err();
    assert!(matches!(
        error,
        Error::Construction(ConstructionError::MissingSuccessIndicator { .. })
    ));
}

#[rstest]
fn maybe_over_json_records_halts_on_false() {
    let bump = |record: JsonOutcome| {
        let total = record.get("total").and_then(serde_json::Value::as_i64).unwrap_or(0);
        let next = json!({"total": total + 1, "success": total + 1 < 3});
        Maybe::<JsonOutcome>::try_unit(next).unwrap()
    };

    let result = Maybe::<JsonOutcome>::try_unit(json!({"total": 0, "success": true})).unwrap()
        >> bump
        >> bump
        >> bump
        >> bump
        >> bump;

    assert!(result.is_halted());
    assert_eq!(result.into_inner().get("total"), Some(&json!(3)));
}

#[rstest]
fn result_state_from_json_rejects_wrong_types() {
    let bad_success = ResultState::<String>::try_from(json!({"success": "this should fail."}));
    let bad_message = ResultState::<String>::try_from(json!({"error_message": 5, "success": null}));

    assert!(matches!(bad_success, Err(ConstructionError::InvalidField { field: "success", .. })));
    assert!(matches!(
        bad_message,
        Err(ConstructionError::InvalidField { field: "error_message", .. })
    ));
}

//! Random number adapters.
//!
//! A non-deterministic step hidden behind the adapter contract: when the
//! incoming state already carries a value, that value is used instead of a
//! draw. Callers (and tests) can therefore pin the "random" number and
//! prove what a function does with it.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stepwise::effect::{ResultState, random};
//! use stepwise::typeclass::Monad;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // The supplied 3 stands in for the draw.
//! let product = random::multiply_random(Monad::new(ResultState::ok(3)), &mut rng, 3);
//! assert_eq!(product, Some(9));
//! ```

use rand::Rng;

use super::guard::guard;
use super::result_state::ResultState;
use crate::typeclass::{Composable, Monad};

/// Inclusive bounds used by [`multiply_random`].
pub const DEFAULT_RANGE: (i64, i64) = (0, 100);

/// Yields the supplied payload, or a uniform draw from `lower..=upper`
/// when the state carries none.
///
/// An empty range (`lower > upper`) is recorded as a failure.
pub fn random_integer<R: Rng>(
    state: ResultState<i64>,
    rng: &mut R,
    lower: i64,
    upper: i64,
) -> Monad<ResultState<i64>> {
    guard(|state: ResultState<i64>| {
        if let Some(supplied) = state.into_payload() {
            return Monad::unit(ResultState::ok(supplied));
        }
        if lower > upper {
            tracing::warn!(lower, upper, "empty range");
            return Monad::unit(ResultState::failed(format!("empty range {lower}..={upper}")));
        }
        let drawn = rng.gen_range(lower..=upper);
        tracing::debug!(drawn, lower, upper, "drew random integer");
        Monad::unit(ResultState::ok(drawn))
    })(state)
}

/// Multiplies a random integer in [`DEFAULT_RANGE`] by `factor`.
///
/// Returns `None` when the draw failed or the product overflows.
pub fn multiply_random<R: Rng>(monad: Monad<ResultState<i64>>, rng: &mut R, factor: i64) -> Option<i64> {
    let (lower, upper) = DEFAULT_RANGE;
    let state = monad
        .flat_map(|state| random_integer(state, rng, lower, upper))
        .into_inner();
    if !state.is_ok() {
        return None;
    }
    state.into_payload()?.checked_mul(factor)
}

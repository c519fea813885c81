// src/algorithms/fermat.rs
//
// Fermat primality test: a^(n-1) = 1 (mod n) for every prime n and every
// witness a coprime to n. Composite "Fermat liars" (notably Carmichael
// numbers) can pass every round; that false-positive risk is inherent.

use log::debug;

use crate::algorithms::{validate_candidate, CandidateError, WITNESS_ROUNDS};
use crate::core::random_source::RandomSource;
use crate::integer_math::mod_exp::ModExp;

/// Runs 5 independent random-witness Fermat rounds against `n`.
///
/// Witnesses are drawn uniformly from [2, n-2]. Returns false on the first
/// witness with a^(n-1) != 1 (mod n), true if every round passes.
///
/// # Arguments
/// * `n` - The candidate; must be odd and > 4
/// * `rng` - Witness source owned by the caller for this run
pub fn fermat_test(n: u64, rng: &mut RandomSource) -> Result<bool, CandidateError> {
    validate_candidate(n)?;

    for _ in 0..WITNESS_ROUNDS {
        let witness = rng.next_range(2, n - 1);
        if ModExp::pow_mod(witness, n - 1, n) != 1 {
            debug!("Fermat: witness {} proves {} composite", witness, n);
            return Ok(false);
        }
    }

    Ok(true)
}

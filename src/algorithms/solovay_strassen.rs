// src/algorithms/solovay_strassen.rs
//
// Solovay-Strassen primality test: for prime n and witness a coprime to n,
// Euler's criterion gives a^((n-1)/2) = (a/n) (mod n), where (a/n) is the
// Jacobi symbol. Composite "Euler liars" can pass; at most half of the
// witnesses lie for any odd composite, so five rounds bound the false-positive
// probability by 2^-5 per run.

use log::debug;

use crate::algorithms::{validate_candidate, CandidateError, WITNESS_ROUNDS};
use crate::core::random_source::RandomSource;
use crate::integer_math::jacobi::Jacobi;
use crate::integer_math::mod_exp::ModExp;

/// Runs 5 independent random-witness Euler-criterion rounds against `n`.
///
/// Per round, with witness a drawn uniformly from [2, n-2]:
/// 1. r = a^((n-1)/2) mod n must be 1 or n-1 (a square root of unity);
/// 2. r must equal the Jacobi symbol (a/n), with -1 represented as n-1.
///
/// A Jacobi symbol of 0 means a shares a factor with n and always rejects,
/// since r was already confirmed to be 1 or n-1.
pub fn solovay_strassen_test(n: u64, rng: &mut RandomSource) -> Result<bool, CandidateError> {
    validate_candidate(n)?;

    for _ in 0..WITNESS_ROUNDS {
        let witness = rng.next_range(2, n - 1);
        let remainder = ModExp::pow_mod(witness, (n - 1) / 2, n);

        if remainder != 1 && remainder != n - 1 {
            debug!(
                "Solovay-Strassen: witness {} gives non-unit square root {} mod {}",
                witness, remainder, n
            );
            return Ok(false);
        }

        let symbol = Jacobi::symbol(witness, n)?;
        let expected = if symbol == -1 { n - 1 } else { symbol as u64 };
        if remainder != expected {
            debug!(
                "Solovay-Strassen: witness {} disagrees with Jacobi symbol {} for {}",
                witness, symbol, n
            );
            return Ok(false);
        }
    }

    Ok(true)
}

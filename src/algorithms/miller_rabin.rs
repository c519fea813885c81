// src/algorithms/miller_rabin.rs
//
// Miller-Rabin strong probable-prime test against the fixed witness set
// {3, 5, 7, 11}. No randomness: the verdict for a given candidate never
// changes between runs. Every prime passes; composites passing all four
// witnesses exist only above a bound far beyond the small-candidate range
// this suite targets, and no special-casing of that bound is done.

use log::debug;

use crate::algorithms::{validate_candidate, CandidateError};
use crate::integer_math::mod_exp::ModExp;

/// Fixed witness set probed in order.
pub const WITNESSES: [u64; 4] = [3, 5, 7, 11];

/// Strong probable-prime check of `n` against {3, 5, 7, 11}.
///
/// Decomposes n - 1 = d * 2^s with d odd, then for each witness a checks
/// that a^d mod n is 1 or n-1, or that some squaring a^(d*2^r) with r < s
/// reaches n-1. A witness where the chain exhausts proves n composite.
/// Witnesses with a mod n == 0 collapse to zero and carry no information,
/// so they are skipped; this keeps members of the witness set themselves
/// (5, 7, 11) correctly classified as prime.
pub fn miller_rabin_test(n: u64) -> Result<bool, CandidateError> {
    validate_candidate(n)?;

    let mut d = n - 1;
    let mut s = 0u32;
    while d & 1 == 0 {
        d >>= 1;
        s += 1;
    }

    for &witness in &WITNESSES {
        if witness % n == 0 {
            continue;
        }

        let mut x = ModExp::pow_mod(witness, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }

        let mut is_composite = true;
        for _ in 1..s {
            x = ModExp::pow_mod(x, 2, n);
            if x == n - 1 {
                is_composite = false;
                break;
            }
        }

        if is_composite {
            debug!("Miller-Rabin: witness {} proves {} composite", witness, n);
            return Ok(false);
        }
    }

    Ok(true)
}

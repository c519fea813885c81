// src/algorithms/mod.rs
//
// Probabilistic primality testing: three witness-based tests sharing the
// modular-exponentiation core, run individually or as a labeled suite.

pub mod fermat;
pub mod miller_rabin;
pub mod solovay_strassen;

use std::fmt;

use log::info;

use crate::core::random_source::RandomSource;
use crate::integer_math::jacobi::JacobiError;

/// Number of independent random witness rounds per randomized test.
pub const WITNESS_ROUNDS: u32 = 5;

/// A candidate the tests cannot accept: the witness range [2, n-2] must be
/// non-empty and the decomposition / reciprocity logic assumes oddness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateError {
    TooSmall(u64),
    Even(u64),
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateError::TooSmall(n) => {
                write!(f, "candidate {} is too small: the witness range [2, n-2] requires n > 4", n)
            }
            CandidateError::Even(n) => {
                write!(f, "candidate {} is even and therefore trivially composite", n)
            }
        }
    }
}

impl std::error::Error for CandidateError {}

impl From<JacobiError> for CandidateError {
    fn from(err: JacobiError) -> Self {
        match err {
            JacobiError::ZeroModulus => CandidateError::TooSmall(0),
            JacobiError::EvenModulus(n) => CandidateError::Even(n),
        }
    }
}

/// Rejects candidates the witness machinery is undefined for, before any
/// arithmetic runs.
pub fn validate_candidate(n: u64) -> Result<(), CandidateError> {
    if n & 1 == 0 {
        return Err(CandidateError::Even(n));
    }
    if n <= 4 {
        return Err(CandidateError::TooSmall(n));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalityAlgorithm {
    Fermat,
    SolovayStrassen,
    MillerRabin,
}

impl PrimalityAlgorithm {
    /// Suite order is fixed: Fermat, then Solovay-Strassen, then Miller-Rabin.
    pub const ALL: [PrimalityAlgorithm; 3] = [
        PrimalityAlgorithm::Fermat,
        PrimalityAlgorithm::SolovayStrassen,
        PrimalityAlgorithm::MillerRabin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimalityAlgorithm::Fermat => "Fermat",
            PrimalityAlgorithm::SolovayStrassen => "Solovay-Strassen",
            PrimalityAlgorithm::MillerRabin => "Miller-Rabin",
        }
    }

    pub fn criterion(&self) -> &'static str {
        match self {
            PrimalityAlgorithm::Fermat => "a^(n-1) = 1 (mod n) for random witnesses a",
            PrimalityAlgorithm::SolovayStrassen => {
                "a^((n-1)/2) matches the Jacobi symbol (a/n) for random witnesses a"
            }
            PrimalityAlgorithm::MillerRabin => {
                "strong probable prime to the fixed witness set {3, 5, 7, 11}"
            }
        }
    }

    pub fn is_randomized(&self) -> bool {
        !matches!(self, PrimalityAlgorithm::MillerRabin)
    }
}

/// Runs a single test against the candidate.
///
/// The random source feeds witness draws for the randomized tests and is
/// ignored by Miller-Rabin, which uses a fixed witness set.
///
/// # Examples
/// ```
/// use primality::algorithms::{test_with, PrimalityAlgorithm};
/// use primality::core::random_source::RandomSource;
///
/// let mut rng = RandomSource::from_seed(1);
/// let verdict = test_with(233, PrimalityAlgorithm::MillerRabin, &mut rng).unwrap();
/// assert!(verdict);
/// ```
pub fn test_with(
    n: u64,
    algorithm: PrimalityAlgorithm,
    rng: &mut RandomSource,
) -> Result<bool, CandidateError> {
    match algorithm {
        PrimalityAlgorithm::Fermat => fermat::fermat_test(n, rng),
        PrimalityAlgorithm::SolovayStrassen => {
            solovay_strassen::solovay_strassen_test(n, rng)
        }
        PrimalityAlgorithm::MillerRabin => miller_rabin::miller_rabin_test(n),
    }
}

/// Runs the whole suite against the candidate, each test with its own
/// entropy-seeded random source, and returns the labeled verdicts in the
/// fixed suite order.
pub fn run_all(n: u64) -> Result<Vec<(PrimalityAlgorithm, bool)>, CandidateError> {
    validate_candidate(n)?;

    info!("========================================");
    info!("PRIMALITY TEST SUITE");
    info!("========================================");
    info!("Candidate: {}", n);

    let mut verdicts = Vec::with_capacity(PrimalityAlgorithm::ALL.len());
    for algorithm in PrimalityAlgorithm::ALL {
        let mut rng = RandomSource::new();
        let verdict = test_with(n, algorithm, &mut rng)?;
        info!("{}: probably prime = {}", algorithm.name(), verdict);
        verdicts.push((algorithm, verdict));
    }

    Ok(verdicts)
}

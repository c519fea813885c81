// src/integer_math/jacobi.rs

use std::fmt;

/// Precondition violation for the Jacobi symbol: the lower argument must be
/// an odd positive integer. Reported as an error rather than the silent 0 a
/// caller could mistake for a legitimate zero symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JacobiError {
    ZeroModulus,
    EvenModulus(u64),
}

impl fmt::Display for JacobiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JacobiError::ZeroModulus => write!(f, "Jacobi symbol is undefined for n = 0"),
            JacobiError::EvenModulus(n) => {
                write!(f, "Jacobi symbol requires odd n, but n = {} is even", n)
            }
        }
    }
}

impl std::error::Error for JacobiError {}

pub struct Jacobi;

impl Jacobi {
    /// Computes the Jacobi symbol (a/n) for odd positive n.
    ///
    /// Iterative quadratic-reciprocity reduction: strip factors of two from
    /// the numerator (flipping the sign when n mod 8 is 3 or 5), swap the
    /// arguments (flipping the sign when both are 3 mod 4), and reduce. The
    /// result is in {-1, 0, 1}; it is 0 exactly when gcd(a, n) > 1.
    ///
    /// # Examples
    /// ```
    /// use primality::integer_math::jacobi::Jacobi;
    ///
    /// assert_eq!(Jacobi::symbol(2, 7), Ok(1));
    /// assert_eq!(Jacobi::symbol(3, 7), Ok(-1));
    /// ```
    pub fn symbol(a: u64, n: u64) -> Result<i32, JacobiError> {
        if n == 0 {
            return Err(JacobiError::ZeroModulus);
        }
        if n & 1 == 0 {
            return Err(JacobiError::EvenModulus(n));
        }

        let mut a = a % n;
        let mut n = n;
        if a == 0 {
            return Ok(if n == 1 { 1 } else { 0 });
        }

        let mut symbol = 1;
        while a != 0 {
            while a & 1 == 0 {
                a >>= 1;
                if n & 7 == 3 || n & 7 == 5 {
                    symbol = -symbol;
                }
            }

            std::mem::swap(&mut a, &mut n);
            if a & 3 == 3 && n & 3 == 3 {
                symbol = -symbol;
            }
            a %= n;
        }

        // a reached 0 with n > 1 only when the original arguments shared a factor
        Ok(if n == 1 { symbol } else { 0 })
    }
}
